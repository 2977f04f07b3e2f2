//! Post entities and the category enumeration.

use serde::{Deserialize, Serialize};

/// Category a post is filed under.
///
/// Selects which public feed tab shows the post. Exactly one per post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    /// Academy announcements.
    Notice,
    /// Exam success stories.
    Success,
    /// Study guides.
    Guide,
}

impl PostCategory {
    /// All categories in tab display order.
    pub const ALL: [Self; 3] = [Self::Notice, Self::Success, Self::Guide];

    /// Map a string key to a category.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "notice" => Some(Self::Notice),
            "success" => Some(Self::Success),
            "guide" => Some(Self::Guide),
            _ => None,
        }
    }

    /// The string key for this category.
    pub fn key(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Success => "success",
            Self::Guide => "guide",
        }
    }

    /// Display label for feed tabs and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Notice => "Notices",
            Self::Success => "Success Stories",
            Self::Guide => "Study Guides",
        }
    }
}

/// A single content item shown in one of the category feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque unique identity, assigned at creation and never reused.
    pub id: String,

    /// Post headline.
    pub title: String,

    /// Body text. Free text, accepted verbatim.
    pub content: String,

    /// The feed this post appears under.
    pub category: PostCategory,

    /// Display date. Not validated; collection order drives display order.
    pub date: String,

    /// Optional image reference. Views render a fallback slot when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Post {
    /// Create a new post without an image.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: PostCategory,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category,
            date: date.into(),
            image_url: None,
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_key() {
        assert_eq!(PostCategory::from_key("notice"), Some(PostCategory::Notice));
        assert_eq!(
            PostCategory::from_key("success"),
            Some(PostCategory::Success)
        );
        assert_eq!(PostCategory::from_key("guide"), Some(PostCategory::Guide));
        assert_eq!(PostCategory::from_key("announcement"), None);
        assert_eq!(PostCategory::from_key(""), None);
    }

    #[test]
    fn test_category_key_round_trip() {
        for category in PostCategory::ALL {
            assert_eq!(PostCategory::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn test_post_creation() {
        let post = Post::new("1", "Title", "Body", PostCategory::Notice, "2026-02-20");
        assert_eq!(post.id, "1");
        assert_eq!(post.category, PostCategory::Notice);
        assert!(post.image_url.is_none());
    }

    #[test]
    fn test_post_with_image() {
        let post = Post::new("1", "Title", "Body", PostCategory::Guide, "2026-02-20")
            .with_image("https://example.com/a.jpg");
        assert_eq!(post.image_url.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_post_serialization() {
        let post = Post::new("1", "Title", "Body", PostCategory::Success, "2026-02-15")
            .with_image("https://example.com/a.jpg");
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"category\":\"success\""));
        assert!(json.contains("\"imageUrl\":\"https://example.com/a.jpg\""));
    }

    #[test]
    fn test_post_deserialization_without_image() {
        let json = r#"{"id":"9","title":"T","content":"C","category":"guide","date":"2026-01-01"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.category, PostCategory::Guide);
        assert!(post.image_url.is_none());
    }
}
