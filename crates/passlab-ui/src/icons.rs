//! Inline SVG icon set.
//!
//! Icons are a closed enumeration with an explicit string-key mapping;
//! content data refers to icons by key and unrecognized keys render nothing.

use leptos::prelude::*;

/// The display icons the site uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Telephone handset.
    Phone,
    /// Map location pin.
    MapPin,
    /// Chat bubble.
    MessageSquare,
    /// Shield with a check mark.
    ShieldCheck,
    /// Open book.
    BookOpen,
    /// Dashboard panels.
    LayoutDashboard,
    /// Mobile phone.
    Smartphone,
    /// Plus sign.
    Plus,
    /// Pencil.
    Edit,
    /// Trash can.
    Trash,
    /// Floppy save.
    Save,
    /// Close cross.
    Close,
    /// Hamburger menu.
    Menu,
    /// Leave-the-surface arrow.
    LogOut,
    /// Right chevron.
    ChevronRight,
    /// Cog wheel.
    Settings,
    /// Document with text lines.
    FileText,
    /// Medal.
    Award,
    /// Clock face.
    Clock,
}

impl IconKind {
    /// Map a string key to an icon.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "phone" => Some(Self::Phone),
            "map-pin" => Some(Self::MapPin),
            "message-square" => Some(Self::MessageSquare),
            "shield-check" => Some(Self::ShieldCheck),
            "book-open" => Some(Self::BookOpen),
            "layout-dashboard" => Some(Self::LayoutDashboard),
            "smartphone" => Some(Self::Smartphone),
            "plus" => Some(Self::Plus),
            "edit" => Some(Self::Edit),
            "trash" => Some(Self::Trash),
            "save" => Some(Self::Save),
            "close" => Some(Self::Close),
            "menu" => Some(Self::Menu),
            "log-out" => Some(Self::LogOut),
            "chevron-right" => Some(Self::ChevronRight),
            "settings" => Some(Self::Settings),
            "file-text" => Some(Self::FileText),
            "award" => Some(Self::Award),
            "clock" => Some(Self::Clock),
            _ => None,
        }
    }

    /// The string key for this icon.
    pub fn key(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::MapPin => "map-pin",
            Self::MessageSquare => "message-square",
            Self::ShieldCheck => "shield-check",
            Self::BookOpen => "book-open",
            Self::LayoutDashboard => "layout-dashboard",
            Self::Smartphone => "smartphone",
            Self::Plus => "plus",
            Self::Edit => "edit",
            Self::Trash => "trash",
            Self::Save => "save",
            Self::Close => "close",
            Self::Menu => "menu",
            Self::LogOut => "log-out",
            Self::ChevronRight => "chevron-right",
            Self::Settings => "settings",
            Self::FileText => "file-text",
            Self::Award => "award",
            Self::Clock => "clock",
        }
    }

    fn shape(self) -> AnyView {
        match self {
            Self::Phone => view! {
              <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z" />
            }
            .into_any(),
            Self::MapPin => view! {
              <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z" />
              <circle cx="12" cy="10" r="3" />
            }
            .into_any(),
            Self::MessageSquare => view! {
              <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
            }
            .into_any(),
            Self::ShieldCheck => view! {
              <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.68 0C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.5 3.8 17 5 19 5a1 1 0 0 1 1 1z" />
              <path d="m9 12 2 2 4-4" />
            }
            .into_any(),
            Self::BookOpen => view! {
              <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
              <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
            }
            .into_any(),
            Self::LayoutDashboard => view! {
              <rect x="3" y="3" width="7" height="9" rx="1" />
              <rect x="14" y="3" width="7" height="5" rx="1" />
              <rect x="14" y="12" width="7" height="9" rx="1" />
              <rect x="3" y="16" width="7" height="5" rx="1" />
            }
            .into_any(),
            Self::Smartphone => view! {
              <rect x="5" y="2" width="14" height="20" rx="2" />
              <path d="M12 18h.01" />
            }
            .into_any(),
            Self::Plus => view! {
              <path d="M5 12h14" />
              <path d="M12 5v14" />
            }
            .into_any(),
            Self::Edit => view! {
              <path d="M17 3a2.83 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5z" />
            }
            .into_any(),
            Self::Trash => view! {
              <path d="M3 6h18" />
              <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" />
              <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" />
            }
            .into_any(),
            Self::Save => view! {
              <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z" />
              <path d="M17 21v-8H7v8" />
              <path d="M7 3v5h8" />
            }
            .into_any(),
            Self::Close => view! {
              <path d="M18 6 6 18" />
              <path d="m6 6 12 12" />
            }
            .into_any(),
            Self::Menu => view! {
              <path d="M4 6h16" />
              <path d="M4 12h16" />
              <path d="M4 18h16" />
            }
            .into_any(),
            Self::LogOut => view! {
              <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
              <path d="m16 17 5-5-5-5" />
              <path d="M21 12H9" />
            }
            .into_any(),
            Self::ChevronRight => view! { <path d="m9 18 6-6-6-6" /> }.into_any(),
            Self::Settings => view! {
              <circle cx="12" cy="12" r="3" />
              <path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33h.01a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82v.01a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z" />
            }
            .into_any(),
            Self::FileText => view! {
              <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" />
              <path d="M14 2v5h5" />
              <path d="M16 13H8" />
              <path d="M16 17H8" />
            }
            .into_any(),
            Self::Award => view! {
              <circle cx="12" cy="8" r="6" />
              <path d="M15.48 12.89 17 22l-5-3-5 3 1.52-9.11" />
            }
            .into_any(),
            Self::Clock => view! {
              <circle cx="12" cy="12" r="10" />
              <path d="M12 6v6l4 2" />
            }
            .into_any(),
        }
    }
}

/// Inline SVG icon.
#[component]
pub fn Icon(
    /// Which icon to draw.
    kind: IconKind,
    /// Square size in pixels.
    #[prop(default = 16)]
    size: u32,
) -> impl IntoView {
    view! {
      <svg
        class="pl-icon"
        width=size
        height=size
        viewBox="0 0 24 24"
        fill="none"
        stroke="currentColor"
        stroke-width="2"
        stroke-linecap="round"
        stroke-linejoin="round"
        aria-hidden="true"
      >
        {kind.shape()}
      </svg>
    }
}

/// Icon selected by string key, as used by content data.
///
/// Unrecognized keys render nothing rather than failing.
#[component]
pub fn NamedIcon(
    /// Icon key, e.g. `"shield-check"`.
    name: String,
    /// Square size in pixels.
    #[prop(default = 16)]
    size: u32,
) -> impl IntoView {
    IconKind::from_key(&name).map(|kind| view! { <Icon kind=kind size=size /> })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known() {
        assert_eq!(
            IconKind::from_key("shield-check"),
            Some(IconKind::ShieldCheck)
        );
        assert_eq!(IconKind::from_key("phone"), Some(IconKind::Phone));
        assert_eq!(
            IconKind::from_key("layout-dashboard"),
            Some(IconKind::LayoutDashboard)
        );
    }

    #[test]
    fn test_from_key_unknown_renders_nothing() {
        assert_eq!(IconKind::from_key("sparkles"), None);
        assert_eq!(IconKind::from_key(""), None);
        assert_eq!(IconKind::from_key("ShieldCheck"), None);
    }

    #[test]
    fn test_key_round_trip() {
        for kind in [
            IconKind::Phone,
            IconKind::MapPin,
            IconKind::MessageSquare,
            IconKind::ShieldCheck,
            IconKind::BookOpen,
            IconKind::LayoutDashboard,
            IconKind::Smartphone,
            IconKind::Plus,
            IconKind::Edit,
            IconKind::Trash,
            IconKind::Save,
            IconKind::Close,
            IconKind::Menu,
            IconKind::LogOut,
            IconKind::ChevronRight,
            IconKind::Settings,
            IconKind::FileText,
            IconKind::Award,
            IconKind::Clock,
        ] {
            assert_eq!(IconKind::from_key(kind.key()), Some(kind));
        }
    }
}
