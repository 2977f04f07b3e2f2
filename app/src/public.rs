//! The public-facing site: hero, system features, facilities, the category
//! feed and the contact section. Everything reads from the committed content
//! store; nothing here mutates it.

use leptos::prelude::*;
use passlab_core::{ContentStore, PostCategory};
use passlab_ui::{CategoryTabs, Icon, IconKind, NamedIcon, PostGrid};

/// One entry of the system-features grid. Icons are selected by string key;
/// an unrecognized key simply renders no icon.
#[derive(Clone, Copy)]
struct Feature {
    icon: &'static str,
    tag: &'static str,
    title: &'static str,
    desc: &'static str,
}

const SYSTEM_FEATURES: [Feature; 5] = [
    Feature {
        icon: "shield-check",
        tag: "Discipline",
        title: "Strict attendance management",
        desc: "Arrivals, departures and breaks are recorded daily, and a manager follows up on every absence.",
    },
    Feature {
        icon: "book-open",
        tag: "Coaching",
        title: "Weekly study coaching",
        desc: "A dedicated coach reviews your weekly plan and keeps your workload honest.",
    },
    Feature {
        icon: "layout-dashboard",
        tag: "Data",
        title: "Learning dashboard",
        desc: "Pure study hours are measured and visualised so you can see your real momentum.",
    },
    Feature {
        icon: "smartphone",
        tag: "Focus",
        title: "Phone-free immersion",
        desc: "Phones are checked in at the door. The hall stays silent, and so do the notifications.",
    },
    Feature {
        icon: "clock",
        tag: "Routine",
        title: "A managed 14-hour day",
        desc: "The timetable runs from open to close; arrivals, meals and breaks all happen on schedule.",
    },
];

const FACILITIES: [(&str, &str); 4] = [
    (
        "Wide personal desks",
        "https://picsum.photos/seed/f1/600/800",
    ),
    (
        "Premium ergonomic chairs",
        "https://picsum.photos/seed/f2/600/800",
    ),
    ("White-noise system", "https://picsum.photos/seed/f3/600/800"),
    ("Refresh lounge", "https://picsum.photos/seed/f4/600/800"),
];

/// The public presentation tree.
#[component]
pub fn PublicView(
    /// The content store every section reads from.
    store: RwSignal<ContentStore>,
    /// The selected feed tab.
    active_tab: RwSignal<PostCategory>,
) -> impl IntoView {
    let config = Signal::derive(move || store.get().config().clone());
    let filtered = Signal::derive(move || store.get().posts_in(active_tab.get()));

    view! {
      <main class="pl-public">
        <section class="pl-hero">
          <h1 class="pl-hero-title">{move || config.get().hero_title}</h1>
          <p class="pl-hero-subtitle">{move || config.get().hero_subtitle}</p>
          <div class="pl-hero-actions">
            <a href="#contact" class="pl-button large">
              "Reserve a seat"
              <Icon kind=IconKind::ChevronRight size=20 />
            </a>
            <a href="#system" class="pl-button large ghost">
              "See the system"
            </a>
          </div>
          <div class="pl-hero-benefit">
            <Icon kind=IconKind::Award size=24 />
            <div>
              <span class="pl-hero-benefit-tag">"Special benefit"</span>
              <span class="pl-hero-benefit-text">
                "Up to 30% off tuition for early enrolment"
              </span>
            </div>
          </div>
        </section>

        <section id="intro" class="pl-intro">
          <div class="pl-intro-copy">
            <h2 class="pl-section-title">"Why immersion?"</h2>
            <p>
              "Exams are not decided by how long you sit at a desk but by the
              density of the hours you spend there. Most candidates manage
              three or four truly focused hours a day; the study hall exists
              to multiply that number."
            </p>
          </div>
          <div class="pl-intro-stats">
            <div class="pl-stat-card">
              <span class="pl-stat-value">"98%"</span>
              <span class="pl-stat-label">"Attendance rate"</span>
            </div>
            <div class="pl-stat-card">
              <span class="pl-stat-value">"14h"</span>
              <span class="pl-stat-label">"Daily study time"</span>
            </div>
          </div>
        </section>

        <section id="system" class="pl-system">
          <h2 class="pl-section-title">"The immersion system"</h2>
          <p class="pl-section-lede">
            "More than a quiet room: every element of the day is managed."
          </p>
          <div class="pl-feature-grid">
            <For
              each=|| SYSTEM_FEATURES
              key=|feature| feature.icon
              children=move |feature| {
                view! {
                  <div class="pl-feature-card">
                    <div class="pl-feature-head">
                      <NamedIcon name=feature.icon.to_string() size=28 />
                      <span class="pl-feature-tag">{feature.tag}</span>
                    </div>
                    <h3 class="pl-feature-title">{feature.title}</h3>
                    <p class="pl-feature-desc">{feature.desc}</p>
                  </div>
                }
              }
            />

          </div>
        </section>

        <section id="facilities" class="pl-facilities">
          <h2 class="pl-section-title">"A space built for study"</h2>
          <div class="pl-facility-grid">
            <For
              each=|| FACILITIES
              key=|(title, _)| *title
              children=move |(title, img)| {
                view! {
                  <figure class="pl-facility-card">
                    <img src=img alt=title referrerpolicy="no-referrer" />
                    <figcaption>{title}</figcaption>
                  </figure>
                }
              }
            />

          </div>
        </section>

        <section id="posts" class="pl-posts">
          <h2 class="pl-section-title">"News and guides"</h2>
          <CategoryTabs active=active_tab />
          <PostGrid posts=filtered />
        </section>

        <section id="contact" class="pl-contact">
          <div class="pl-contact-info">
            <h2 class="pl-section-title">"Visit or get in touch"</h2>
            <div class="pl-contact-line">
              <Icon kind=IconKind::Phone size=20 />
              <div>
                <h4>"Phone"</h4>
                <p>{move || config.get().contact_phone}</p>
              </div>
            </div>
            <div class="pl-contact-line">
              <Icon kind=IconKind::MapPin size=20 />
              <div>
                <h4>"Address"</h4>
                <p>{move || config.get().address}</p>
              </div>
            </div>
            <div class="pl-contact-line">
              <Icon kind=IconKind::MessageSquare size=20 />
              <div>
                <h4>"Chat"</h4>
                <a href=move || config.get().chat_url target="_blank" rel="noreferrer">
                  "Open a chat consultation"
                </a>
              </div>
            </div>
          </div>

          // Display-only enquiry form; nothing is submitted anywhere.
          <form class="pl-contact-form" on:submit=move |ev| ev.prevent_default()>
            <h3>"Quick enquiry"</h3>
            <label class="pl-field">
              <span class="pl-field-label">"Name"</span>
              <input type="text" placeholder="Your name" />
            </label>
            <label class="pl-field">
              <span class="pl-field-label">"Phone"</span>
              <input type="tel" placeholder="Your phone number" />
            </label>
            <label class="pl-field">
              <span class="pl-field-label">"Exam track"</span>
              <select>
                <option>"Grade 9 public administration"</option>
                <option>"Grade 7 public administration"</option>
                <option>"Police / fire service"</option>
                <option>"Other"</option>
              </select>
            </label>
            <label class="pl-field">
              <span class="pl-field-label">"Message"</span>
              <textarea placeholder="What would you like to ask?"></textarea>
            </label>
            <button type="submit" class="pl-button">
              "Send enquiry"
            </button>
          </form>
        </section>
      </main>
    }
}
