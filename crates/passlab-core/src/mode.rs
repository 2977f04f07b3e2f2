//! Public/admin view selection.

use serde::{Deserialize, Serialize};

/// Which component tree renders against the content store.
///
/// A two-state switch toggled by a single user action. The choice is not
/// persisted across reloads, and leaving [`ViewMode::Admin`] drops any
/// unsaved edit drafts held by the admin surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// The public marketing site.
    #[default]
    Public,
    /// The admin editing surface.
    Admin,
}

impl ViewMode {
    /// The other mode. Toggling has no guard conditions.
    pub fn toggled(self) -> Self {
        match self {
            Self::Public => Self::Admin,
            Self::Admin => Self::Public,
        }
    }

    /// Whether the admin surface is showing.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_public() {
        assert_eq!(ViewMode::default(), ViewMode::Public);
        assert!(!ViewMode::default().is_admin());
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ViewMode::Public.toggled(), ViewMode::Admin);
        assert_eq!(ViewMode::Admin.toggled(), ViewMode::Public);
        assert_eq!(ViewMode::Public.toggled().toggled(), ViewMode::Public);
    }
}
