//! The admin editing surface: site settings and post management, wired to
//! the four content store operations.

use chrono::Local;
use leptos::prelude::*;
use passlab_core::{ContentStore, Post, SiteConfig};
use passlab_ui::{Icon, IconKind, PostEditorModal, PostTable, SiteConfigForm};

/// Which admin panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Site,
    Posts,
}

/// The admin presentation tree.
///
/// Unmounting this view (leaving admin mode) drops the config draft and any
/// open post draft without committing them.
#[component]
pub fn AdminView(
    /// The content store the admin surface edits.
    store: RwSignal<ContentStore>,
) -> impl IntoView {
    let tab = RwSignal::new(AdminTab::Site);
    let editing = RwSignal::new(None::<Post>);

    let config = Signal::derive(move || store.get().config().clone());
    let posts = Signal::derive(move || store.get().posts().to_vec());

    let save_config = Callback::new(move |new_config: SiteConfig| {
        log::debug!("replacing site configuration");
        store.update(|s| s.replace_config(new_config));
    });

    let add_post = Callback::new(move |()| {
        let now = Local::now();
        let post = store
            .write()
            .add_post(now.timestamp_millis().unsigned_abs(), now.format("%Y-%m-%d").to_string());
        log::debug!("added post {}", post.id);
        // The fresh post opens straight in the editor.
        editing.set(Some(post));
    });

    let open_editor = Callback::new(move |post: Post| {
        // Replaces any unsaved draft without confirmation.
        editing.set(Some(post));
    });

    let save_post = Callback::new(move |post: Post| {
        log::debug!("saving post {}", post.id);
        store.update(|s| s.update_post(post));
    });

    let delete_post = Callback::new(move |id: String| {
        log::debug!("deleting post {id}");
        store.update(|s| s.delete_post(&id));
    });

    view! {
      <main class="pl-admin">
        <div class="pl-admin-header">
          <div>
            <h1 class="pl-admin-title">"Admin dashboard"</h1>
            <p class="pl-admin-lede">"Edit the site copy and the post feeds."</p>
          </div>

          <div class="pl-admin-tabs">
            <button
              class="pl-admin-tab"
              class:active=move || tab.get() == AdminTab::Site
              on:click=move |_| tab.set(AdminTab::Site)
            >
              <Icon kind=IconKind::Settings size=16 />
              "Site settings"
            </button>
            <button
              class="pl-admin-tab"
              class:active=move || tab.get() == AdminTab::Posts
              on:click=move |_| tab.set(AdminTab::Posts)
            >
              <Icon kind=IconKind::FileText size=16 />
              "Posts"
            </button>
          </div>
        </div>

        <Show
          when=move || tab.get() == AdminTab::Posts
          fallback=move || view! { <SiteConfigForm config=config on_save=save_config /> }
        >
          <PostTable posts=posts on_add=add_post on_edit=open_editor on_delete=delete_post />
        </Show>

        <PostEditorModal editing=editing on_save=save_post />
      </main>
    }
}
