//! Public feed components: category tabs, the post grid, and cards.

use leptos::prelude::*;
use passlab_core::{Post, PostCategory};

/// Tab strip over the post categories.
#[component]
pub fn CategoryTabs(
    /// The currently selected feed.
    active: RwSignal<PostCategory>,
) -> impl IntoView {
    view! {
      <div class="pl-tabs" role="tablist">
        <For
          each=|| PostCategory::ALL
          key=|category| category.key()
          children=move |category| {
            let is_active = Memo::new(move |_| active.get() == category);
            view! {
              <button
                class="pl-tab"
                class:active=is_active
                role="tab"
                aria-selected=move || if is_active.get() { "true" } else { "false" }
                on:click=move |_| active.set(category)
              >
                {category.label()}
              </button>
            }
          }
        />

      </div>
    }
}

/// Card grid for one category feed.
///
/// Expects the posts to be filtered already; display order equals the order
/// of the supplied collection.
#[component]
pub fn PostGrid(
    /// The posts to display.
    posts: Signal<Vec<Post>>,
) -> impl IntoView {
    view! {
      <div class="pl-post-grid">
        <Show
          when=move || !posts.get().is_empty()
          fallback=|| {
            view! { <p class="pl-post-empty">"No posts in this category yet."</p> }
          }
        >

          <For
            each=move || posts.get()
            key=|post| post.id.clone()
            children=move |post| {
              view! { <PostCard post=post /> }
            }
          />

        </Show>
      </div>
    }
}

/// A single post card.
#[component]
pub fn PostCard(
    /// The post to display.
    post: Post,
) -> impl IntoView {
    view! {
      <article class="pl-post-card">
        <div class="pl-post-card-media">
          <PostImage url=post.image_url.clone() alt=post.title.clone() />
          <span class="pl-post-badge">{post.category.label()}</span>
        </div>
        <div class="pl-post-date">{post.date.clone()}</div>
        <h3 class="pl-post-title">{post.title.clone()}</h3>
        <p class="pl-post-excerpt">{post.content.clone()}</p>
      </article>
    }
}

/// Image slot that degrades to a neutral placeholder when no source is set.
///
/// A broken or unreachable URL is left to the browser's native fallback;
/// nothing in the view layer treats it as an error.
#[component]
pub fn PostImage(
    /// Optional image source.
    url: Option<String>,
    /// Alt text for the image.
    #[prop(default = String::new())]
    alt: String,
) -> impl IntoView {
    match url {
        Some(src) if !src.is_empty() => view! {
          <img class="pl-post-image" src=src alt=alt referrerpolicy="no-referrer" />
        }
        .into_any(),
        _ => view! { <div class="pl-post-image pl-post-image-missing" aria-hidden="true"></div> }
            .into_any(),
    }
}
