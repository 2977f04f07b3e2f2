//! Pass Lab UI Components
//!
//! Leptos components shared by the public site and the admin surface.
//!
//! # Components
//!
//! ## Icons
//! - [`Icon`] - Inline SVG icon drawn from the [`IconKind`] set
//! - [`NamedIcon`] - Icon selected by string key; unknown keys render nothing
//!
//! ## Feed
//! - [`CategoryTabs`] - Tab strip over the post categories
//! - [`PostGrid`] - Card grid for one category feed
//! - [`PostCard`] - Single post card
//! - [`PostImage`] - Image slot with a fallback when no source is set
//!
//! ## Admin
//! - [`SiteConfigForm`] - Site settings editor with draft/save semantics
//! - [`PostTable`] - Post list with add/edit/delete actions
//! - [`PostEditorModal`] - Modal holding the single open post draft

pub mod admin;
pub mod feed;
pub mod icons;

pub use admin::{PostEditorModal, PostTable, SiteConfigForm};
pub use feed::{CategoryTabs, PostCard, PostGrid, PostImage};
pub use icons::{Icon, IconKind, NamedIcon};
