//! Admin surface components: the site settings form, the post table, and the
//! post editor modal.
//!
//! Editing follows a draft/commit discipline: committed values live in the
//! content store, drafts live in local component state, and only an explicit
//! save action commits a draft back through the supplied callback.

use leptos::prelude::*;
use passlab_core::{Post, PostCategory, SiteConfig};

use crate::feed::PostImage;
use crate::icons::{Icon, IconKind};

/// Site settings editor.
///
/// Seeds a local draft from the committed configuration when it mounts.
/// Edits touch only the draft; store readers keep seeing the last-committed
/// value until the save action fires.
#[component]
pub fn SiteConfigForm(
    /// The committed configuration the draft is seeded from.
    config: Signal<SiteConfig>,
    /// Invoked with the whole draft when the save action fires.
    on_save: Callback<SiteConfig>,
) -> impl IntoView {
    let draft = RwSignal::new(config.get_untracked());

    view! {
      <section class="pl-admin-panel">
        <h2 class="pl-admin-panel-title">
          <Icon kind=IconKind::Settings size=20 />
          "Site settings"
        </h2>

        <div class="pl-admin-form">
          <label class="pl-field">
            <span class="pl-field-label">"Hero title"</span>
            <input
              type="text"
              prop:value=move || draft.get().hero_title
              on:input=move |ev| {
                draft.update(|d| d.hero_title = event_target_value(&ev));
              }
            />
          </label>

          <label class="pl-field">
            <span class="pl-field-label">"Hero subtitle"</span>
            <textarea
              prop:value=move || draft.get().hero_subtitle
              on:input=move |ev| {
                draft.update(|d| d.hero_subtitle = event_target_value(&ev));
              }
            ></textarea>
          </label>

          <label class="pl-field">
            <span class="pl-field-label">"Primary color"</span>
            <input
              type="text"
              prop:value=move || draft.get().primary_color
              on:input=move |ev| {
                draft.update(|d| d.primary_color = event_target_value(&ev));
              }
            />
          </label>

          <label class="pl-field">
            <span class="pl-field-label">"Contact phone"</span>
            <input
              type="text"
              prop:value=move || draft.get().contact_phone
              on:input=move |ev| {
                draft.update(|d| d.contact_phone = event_target_value(&ev));
              }
            />
          </label>

          <label class="pl-field">
            <span class="pl-field-label">"Address"</span>
            <input
              type="text"
              prop:value=move || draft.get().address
              on:input=move |ev| {
                draft.update(|d| d.address = event_target_value(&ev));
              }
            />
          </label>

          <label class="pl-field">
            <span class="pl-field-label">"Chat link"</span>
            <input
              type="text"
              prop:value=move || draft.get().chat_url
              on:input=move |ev| {
                draft.update(|d| d.chat_url = event_target_value(&ev));
              }
            />
          </label>
        </div>

        <div class="pl-admin-panel-footer">
          <button class="pl-button" on:click=move |_| on_save.run(draft.get())>
            <Icon kind=IconKind::Save size=16 />
            "Save settings"
          </button>
        </div>
      </section>
    }
}

/// Post list for the admin surface, with add/edit/delete actions.
#[component]
pub fn PostTable(
    /// All posts in display order.
    posts: Signal<Vec<Post>>,
    /// Invoked when the add action fires.
    on_add: Callback<()>,
    /// Invoked with the selected post when its edit action fires.
    on_edit: Callback<Post>,
    /// Invoked with the post id when its delete action fires.
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
      <section class="pl-admin-panel">
        <div class="pl-admin-posts-header">
          <h2 class="pl-admin-panel-title">
            <Icon kind=IconKind::FileText size=20 />
            "Posts (" {move || posts.get().len()} ")"
          </h2>
          <button class="pl-button" on:click=move |_| on_add.run(())>
            <Icon kind=IconKind::Plus size=14 />
            "New post"
          </button>
        </div>

        <ul class="pl-admin-post-list">
          <For
            each=move || posts.get()
            key=|post| post.id.clone()
            children=move |post| {
              let edit_target = post.clone();
              let delete_id = post.id.clone();
              view! {
                <li class="pl-admin-post-row">
                  <div class="pl-admin-post-thumb">
                    <PostImage url=post.image_url.clone() alt=post.title.clone() />
                  </div>
                  <div class="pl-admin-post-meta">
                    <span class="pl-admin-post-badge">{post.category.label()}</span>
                    <span class="pl-admin-post-date">{post.date.clone()}</span>
                    <h3 class="pl-admin-post-title">{post.title.clone()}</h3>
                  </div>
                  <div class="pl-admin-post-actions">
                    <button
                      class="pl-icon-button"
                      aria-label="Edit post"
                      on:click=move |_| on_edit.run(edit_target.clone())
                    >
                      <Icon kind=IconKind::Edit size=18 />
                    </button>
                    <button
                      class="pl-icon-button danger"
                      aria-label="Delete post"
                      on:click=move |_| on_delete.run(delete_id.clone())
                    >
                      <Icon kind=IconKind::Trash size=18 />
                    </button>
                  </div>
                </li>
              }
            }
          />

        </ul>
      </section>
    }
}

/// Modal editor for a single post draft.
///
/// `editing` holds the one open draft; `None` keeps the modal closed.
/// Cancel, overlay click and Escape all discard the draft without touching
/// the store. Only the save action commits, through `on_save`, which also
/// closes the modal. Setting `editing` to another post replaces any unsaved
/// draft implicitly.
#[component]
pub fn PostEditorModal(
    /// The open draft, if any.
    editing: RwSignal<Option<Post>>,
    /// Invoked with the draft when the save action fires.
    on_save: Callback<Post>,
) -> impl IntoView {
    // Close on Escape key
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            editing.set(None);
        }
    };

    // Close when clicking overlay
    let on_overlay_click = move |_| {
        editing.set(None);
    };

    // Prevent closing when clicking modal content
    let on_content_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
    };

    let save = move |_| {
        if let Some(draft) = editing.get() {
            on_save.run(draft);
            editing.set(None);
        }
    };

    view! {
      <Show when=move || editing.get().is_some()>
        <div class="pl-modal-overlay" on:click=on_overlay_click on:keydown=on_keydown>
          <div class="pl-modal-content" on:click=on_content_click>
            <div class="pl-modal-header">
              <h3 class="pl-modal-title">"Edit post"</h3>
              <button
                class="pl-icon-button"
                aria-label="Close editor"
                on:click=move |_| editing.set(None)
              >
                <Icon kind=IconKind::Close size=18 />
              </button>
            </div>

            <div class="pl-modal-body">
              <label class="pl-field">
                <span class="pl-field-label">"Category"</span>
                <select
                  prop:value=move || {
                    editing.get().map(|post| post.category.key().to_string()).unwrap_or_default()
                  }
                  on:change=move |ev| {
                    if let Some(category) = PostCategory::from_key(&event_target_value(&ev)) {
                      editing
                        .update(|draft| {
                          if let Some(post) = draft.as_mut() {
                            post.category = category;
                          }
                        });
                    }
                  }
                >
                  <For
                    each=|| PostCategory::ALL
                    key=|category| category.key()
                    children=move |category| {
                      view! { <option value=category.key()>{category.label()}</option> }
                    }
                  />

                </select>
              </label>

              <label class="pl-field">
                <span class="pl-field-label">"Title"</span>
                <input
                  type="text"
                  prop:value=move || editing.get().map(|post| post.title).unwrap_or_default()
                  on:input=move |ev| {
                    editing
                      .update(|draft| {
                        if let Some(post) = draft.as_mut() {
                          post.title = event_target_value(&ev);
                        }
                      });
                  }
                />
              </label>

              <label class="pl-field">
                <span class="pl-field-label">"Content"</span>
                <textarea
                  prop:value=move || editing.get().map(|post| post.content).unwrap_or_default()
                  on:input=move |ev| {
                    editing
                      .update(|draft| {
                        if let Some(post) = draft.as_mut() {
                          post.content = event_target_value(&ev);
                        }
                      });
                  }
                ></textarea>
              </label>

              <label class="pl-field">
                <span class="pl-field-label">"Image URL"</span>
                <div class="pl-field-inline">
                  <input
                    type="text"
                    prop:value=move || {
                      editing.get().and_then(|post| post.image_url).unwrap_or_default()
                    }
                    on:input=move |ev| {
                      editing
                        .update(|draft| {
                          if let Some(post) = draft.as_mut() {
                            let value = event_target_value(&ev);
                            post.image_url = if value.is_empty() { None } else { Some(value) };
                          }
                        });
                    }
                  />
                  <div class="pl-editor-preview" aria-hidden="true">
                    <img
                      src=move || {
                        editing.get().and_then(|post| post.image_url).unwrap_or_default()
                      }
                      alt=""
                    />
                  </div>
                </div>
              </label>
            </div>

            <div class="pl-modal-footer">
              <button class="pl-button ghost" on:click=move |_| editing.set(None)>
                "Cancel"
              </button>
              <button class="pl-button" on:click=save>
                "Save"
              </button>
            </div>
          </div>
        </div>
      </Show>
    }
}
