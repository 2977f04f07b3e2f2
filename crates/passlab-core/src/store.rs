//! The in-memory content store and its mutation operations.

use std::collections::HashSet;

use crate::{Post, PostCategory, SiteConfig};

/// Placeholder fields for a freshly added post.
const NEW_POST_TITLE: &str = "New post";
const NEW_POST_CONTENT: &str = "Write the post body here.";
const NEW_POST_IMAGE: &str = "https://picsum.photos/seed/new/800/600";

/// In-memory holder of the site configuration and the ordered post collection.
///
/// One instance is owned by the running application; every view reads from it
/// and the admin surface mutates it through the operations below. There is no
/// persistence layer: a fresh instance starts from the seeded state, and
/// nothing survives a reload.
///
/// All mutations are synchronous whole-record replacements behind an
/// exclusive borrow, so readers never observe a mid-update state.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    config: SiteConfig,
    posts: Vec<Post>,
    /// Every id ever issued, including seeded and since-deleted ones.
    /// Deleting a post does not free its id for reuse.
    issued_ids: HashSet<String>,
}

impl Default for ContentStore {
    /// The seeded initial state: one post per category, newest first.
    fn default() -> Self {
        Self::new(
            SiteConfig::default(),
            vec![
                Post::new(
                    "1",
                    "Enrolment open for the 2026 immersion study hall",
                    "Start your journey to a pass in the best study environment in Noryangjin.",
                    PostCategory::Notice,
                    "2026-02-20",
                )
                .with_image("https://picsum.photos/seed/study1/800/600"),
                Post::new(
                    "2",
                    "Grade 9 public administration final pass - a member's story",
                    "The strict daily management system of the study hall was the key to my pass.",
                    PostCategory::Success,
                    "2026-02-15",
                )
                .with_image("https://picsum.photos/seed/success1/800/600"),
                Post::new(
                    "3",
                    "How to keep an effective mistake notebook",
                    "The review technique our successful members recommend in one voice.",
                    PostCategory::Guide,
                    "2026-02-10",
                )
                .with_image("https://picsum.photos/seed/guide1/800/600"),
            ],
        )
    }
}

impl ContentStore {
    /// Create a store from explicit contents.
    pub fn new(config: SiteConfig, posts: Vec<Post>) -> Self {
        let issued_ids = posts.iter().map(|post| post.id.clone()).collect();
        Self {
            config,
            posts,
            issued_ids,
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// All posts in display order (newest first).
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts filed under `category`, preserving relative order.
    pub fn posts_in(&self, category: PostCategory) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.category == category)
            .cloned()
            .collect()
    }

    /// Replace the configuration wholesale.
    ///
    /// Any field combination is accepted; the previous value is discarded.
    pub fn replace_config(&mut self, config: SiteConfig) {
        self.config = config;
    }

    /// Add a placeholder post and return it as the active edit target.
    ///
    /// The id derives from `now_millis` and is bumped past every id the store
    /// has ever issued, so ids stay distinct for back-to-back additions within
    /// the same millisecond and are never reassigned after a deletion. New
    /// posts are prepended.
    pub fn add_post(&mut self, now_millis: u64, date: impl Into<String>) -> Post {
        let mut stamp = now_millis;
        let mut id = stamp.to_string();
        while self.issued_ids.contains(&id) {
            stamp += 1;
            id = stamp.to_string();
        }
        self.issued_ids.insert(id.clone());

        let post = Post::new(
            id,
            NEW_POST_TITLE,
            NEW_POST_CONTENT,
            PostCategory::Notice,
            date,
        )
        .with_image(NEW_POST_IMAGE);

        self.posts.insert(0, post.clone());
        post
    }

    /// Replace the post whose id matches `post.id` with the supplied record.
    ///
    /// Position, collection length and every other entry are untouched.
    /// An unknown id is a silent no-op.
    pub fn update_post(&mut self, post: Post) {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id == post.id) {
            *slot = post;
        }
    }

    /// Remove the post with `id`. An unknown id is a silent no-op.
    pub fn delete_post(&mut self, id: &str) {
        self.posts.retain(|post| post.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(posts: Vec<Post>) -> ContentStore {
        ContentStore::new(SiteConfig::default(), posts)
    }

    fn two_posts() -> Vec<Post> {
        vec![
            Post::new("A", "First", "Body A", PostCategory::Notice, "2026-02-20"),
            Post::new("B", "Second", "Body B", PostCategory::Success, "2026-02-15"),
        ]
    }

    #[test]
    fn test_seeded_default() {
        let store = ContentStore::default();
        assert_eq!(store.posts().len(), 3);
        assert_eq!(store.posts()[0].category, PostCategory::Notice);
        assert_eq!(store.config(), &SiteConfig::default());
    }

    #[test]
    fn test_add_post_prepends() {
        let mut store = store_with(two_posts());
        let added = store.add_post(1000, "2026-03-01");

        assert_eq!(store.posts().len(), 3);
        assert_eq!(store.posts()[0], added);
        assert_eq!(store.posts()[1].id, "A");
        assert_eq!(added.category, PostCategory::Notice);
        assert_eq!(added.date, "2026-03-01");
        assert!(added.image_url.is_some());
    }

    #[test]
    fn test_add_post_ids_unique_for_same_timestamp() {
        let mut store = store_with(Vec::new());
        let mut ids: Vec<String> = Vec::new();
        for _ in 0..10 {
            ids.push(store.add_post(42, "2026-03-01").id);
        }

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_add_post_never_reuses_deleted_ids() {
        let mut store = store_with(Vec::new());
        let first = store.add_post(7, "2026-03-01");
        store.delete_post(&first.id);

        let second = store.add_post(7, "2026-03-01");
        assert_ne!(second.id, first.id);
    }

    #[test]
    fn test_add_post_seeded_ids_stay_retired_after_delete() {
        let mut store = ContentStore::default();
        store.delete_post("1");

        let added = store.add_post(1, "2026-03-01");
        assert_eq!(added.id, "4");
    }

    #[test]
    fn test_add_post_id_skips_seeded_ids() {
        // Seeds occupy "1".."3"; a colliding timestamp must bump past them.
        let mut store = ContentStore::default();
        let added = store.add_post(1, "2026-03-01");
        assert_eq!(added.id, "4");
    }

    #[test]
    fn test_add_then_filter_scenario() {
        let mut store = store_with(two_posts());
        let added = store.add_post(99, "2026-03-01");

        let notices = store.posts_in(PostCategory::Notice);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].id, added.id);
        assert_eq!(notices[1].id, "A");
    }

    #[test]
    fn test_update_post_replaces_in_place() {
        let mut store = store_with(two_posts());
        let replacement = Post::new("B", "Rewritten", "New body", PostCategory::Guide, "2026-04-01");
        store.update_post(replacement.clone());

        assert_eq!(store.posts().len(), 2);
        assert_eq!(store.posts()[0].id, "A");
        assert_eq!(store.posts()[1], replacement);
        assert!(store.posts_in(PostCategory::Success).is_empty());
        assert_eq!(store.posts_in(PostCategory::Guide).len(), 1);
    }

    #[test]
    fn test_update_post_unknown_id_is_noop() {
        let mut store = store_with(two_posts());
        let before = store.clone();
        store.update_post(Post::new(
            "missing",
            "Ghost",
            "Ghost",
            PostCategory::Notice,
            "2026-01-01",
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_post_removes_exactly_one() {
        let mut store = store_with(two_posts());
        store.delete_post("A");
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.posts()[0].id, "B");

        // Deleting again is a silent no-op.
        store.delete_post("A");
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.posts()[0].id, "B");
    }

    #[test]
    fn test_replace_config_is_wholesale() {
        let mut store = store_with(Vec::new());
        let new_config = SiteConfig {
            hero_title: "New headline".to_string(),
            hero_subtitle: "New subheading".to_string(),
            primary_color: "#004488".to_string(),
            contact_phone: "02-765-4321".to_string(),
            address: "Elsewhere".to_string(),
            chat_url: "https://chat.example.com".to_string(),
        };

        store.replace_config(new_config.clone());
        assert_eq!(store.config(), &new_config);
    }

    #[test]
    fn test_posts_in_preserves_relative_order() {
        let mut posts = two_posts();
        posts.push(Post::new(
            "C",
            "Third",
            "Body C",
            PostCategory::Notice,
            "2026-02-01",
        ));
        let store = store_with(posts);

        let notices = store.posts_in(PostCategory::Notice);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].id, "A");
        assert_eq!(notices[1].id, "C");
    }

    #[test]
    fn test_draft_edits_commit_only_on_update() {
        let mut store = store_with(two_posts());

        // An editor draft is a clone; mutating it does not touch the store.
        let mut draft = store.posts()[1].clone();
        draft.title = "Edited in the modal".to_string();
        draft.category = PostCategory::Guide;
        assert_eq!(store.posts()[1].title, "Second");
        assert_eq!(store.posts()[1].category, PostCategory::Success);

        // Only an explicit save commits the draft.
        store.update_post(draft.clone());
        assert_eq!(store.posts()[1], draft);
    }
}
