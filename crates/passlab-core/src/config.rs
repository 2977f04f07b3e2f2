//! Site configuration singleton.

use serde::{Deserialize, Serialize};

/// Publicly displayed site metadata.
///
/// Exactly one instance exists at a time. Saving replaces the whole record;
/// there is no field-level patching and no history of prior values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Hero headline.
    pub hero_title: String,

    /// Hero subheading.
    pub hero_subtitle: String,

    /// Brand color, applied as the page accent.
    pub primary_color: String,

    /// Contact phone number.
    pub contact_phone: String,

    /// Physical address of the academy.
    pub address: String,

    /// External chat-link URL. Stored and exposed as-is, never validated.
    pub chat_url: String,
}

impl Default for SiteConfig {
    /// The fixed initial values the site starts from on every launch.
    fn default() -> Self {
        Self {
            hero_title: "Your pass is decided by the depth of your focus".to_string(),
            hero_subtitle: "Experience an unmatched pass rate at the Pass Lab immersion study hall."
                .to_string(),
            primary_color: "#B71C1C".to_string(),
            contact_phone: "02-123-4567".to_string(),
            address: "4F Pass Lab Building, 123 Noryangjin-ro, Seoul".to_string(),
            chat_url: "https://pf.kakao.com/_example".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_values() {
        let config = SiteConfig::default();
        assert!(!config.hero_title.is_empty());
        assert!(!config.hero_subtitle.is_empty());
        assert_eq!(config.primary_color, "#B71C1C");
        assert_eq!(config.contact_phone, "02-123-4567");
    }

    #[test]
    fn test_config_serialization_field_names() {
        let config = SiteConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"heroTitle\""));
        assert!(json.contains("\"heroSubtitle\""));
        assert!(json.contains("\"primaryColor\""));
        assert!(json.contains("\"contactPhone\""));
        assert!(json.contains("\"chatUrl\""));
    }
}
