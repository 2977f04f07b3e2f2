//! Page composition for the Pass Lab site.
//!
//! [`App`] owns the application state - the content store, the view mode and
//! the public feed selection - and renders either the public site or the
//! admin surface against the same store. Nothing is persisted: a reload
//! starts over from the seeded state.

mod admin;
mod public;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use passlab_core::{ContentStore, PostCategory, ViewMode};
use passlab_ui::{Icon, IconKind};

use crate::admin::AdminView;
use crate::public::PublicView;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#intro", "About"),
    ("#system", "System"),
    ("#facilities", "Facilities"),
    ("#posts", "News"),
    ("#contact", "Contact"),
];

/// Application root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(ContentStore::default());
    let mode = RwSignal::new(ViewMode::default());
    let active_tab = RwSignal::new(PostCategory::Notice);
    let menu_open = RwSignal::new(false);

    let config = Signal::derive(move || store.get().config().clone());

    // Switching away from admin unmounts its component tree, which drops any
    // unsaved drafts - there is no confirmation step.
    let toggle_mode = move |_| {
        mode.set(mode.get().toggled());
        menu_open.set(false);
    };

    view! {
      <Title text="Pass Lab Immersion Study Hall" />

      <div class="pl-app" style=move || format!("--primary: {}", config.get().primary_color)>
        <nav class="pl-nav">
          <div class="pl-nav-brand">
            <span class="pl-nav-mark">"P"</span>
            <div class="pl-nav-name">
              <span class="pl-nav-name-small">"PASS LAB"</span>
              <span class="pl-nav-name-large">"Immersion Study Hall"</span>
            </div>
          </div>

          <div class="pl-nav-links">
            <For
              each=|| NAV_LINKS
              key=|(href, _)| *href
              children=move |(href, label)| {
                view! {
                  <a href=href class="pl-nav-link">
                    {label}
                  </a>
                }
              }
            />

            <button class="pl-nav-mode" on:click=toggle_mode>
              <Show
                when=move || mode.get().is_admin()
                fallback=|| {
                  view! {
                    <Icon kind=IconKind::LayoutDashboard size=14 />
                    "Admin"
                  }
                }
              >
                <Icon kind=IconKind::LogOut size=14 />
                "Exit"
              </Show>
            </button>
          </div>

          <button
            class="pl-nav-burger"
            aria-label="Toggle menu"
            on:click=move |_| menu_open.update(|open| *open = !*open)
          >
            <Show when=move || menu_open.get() fallback=|| view! { <Icon kind=IconKind::Menu size=20 /> }>
              <Icon kind=IconKind::Close size=20 />
            </Show>
          </button>
        </nav>

        <Show when=move || menu_open.get()>
          <div class="pl-menu-overlay">
            <For
              each=|| NAV_LINKS
              key=|(href, _)| *href
              children=move |(href, label)| {
                view! {
                  <a href=href class="pl-menu-link" on:click=move |_| menu_open.set(false)>
                    {label}
                  </a>
                }
              }
            />

            <button class="pl-menu-mode" on:click=toggle_mode>
              <Show
                when=move || mode.get().is_admin()
                fallback=|| {
                  view! {
                    <Icon kind=IconKind::LayoutDashboard size=20 />
                    "Admin mode"
                  }
                }
              >
                <Icon kind=IconKind::LogOut size=20 />
                "Public mode"
              </Show>
            </button>
          </div>
        </Show>

        <Show
          when=move || mode.get().is_admin()
          fallback=move || view! { <PublicView store=store active_tab=active_tab /> }
        >
          <AdminView store=store />
        </Show>

        <footer class="pl-footer">
          <div class="pl-footer-brand">
            <span class="pl-footer-title">"Pass Lab Immersion Study Hall"</span>
            <p class="pl-footer-blurb">
              "A premium managed study hall built on twenty years of exam
              coaching. Everything here exists to protect your focus."
            </p>
          </div>

          <div class="pl-footer-contact">
            <h4 class="pl-footer-heading">"Contact"</h4>
            <div class="pl-footer-line">
              <Icon kind=IconKind::Phone size=16 />
              <span>{move || config.get().contact_phone}</span>
            </div>
            <div class="pl-footer-line">
              <Icon kind=IconKind::MapPin size=16 />
              <span>{move || config.get().address}</span>
            </div>
            <div class="pl-footer-line">
              <Icon kind=IconKind::MessageSquare size=16 />
              <a href=move || config.get().chat_url target="_blank" rel="noreferrer">
                "Chat with us"
              </a>
            </div>
          </div>

          <div class="pl-footer-links">
            <h4 class="pl-footer-heading">"Quick links"</h4>
            <For
              each=|| NAV_LINKS
              key=|(href, _)| *href
              children=move |(href, label)| {
                view! {
                  <a href=href class="pl-footer-link">
                    {label}
                  </a>
                }
              }
            />

          </div>
        </footer>
      </div>
    }
}
