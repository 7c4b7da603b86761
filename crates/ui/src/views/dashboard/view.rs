use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portal_core::nav::{ActiveView, Navigator};

use crate::routes::Route;

use super::{CalendarPage, ClassPage, OverviewPage, ProgressPage, SettingsPage, SubjectDetailPage};

#[component]
pub fn StudentDashboardView() -> Element {
    let navigator = use_navigator();
    let mut pages = use_signal(Navigator::new);

    let active = pages.read().active().clone();
    let page = pages.read().active_page();
    let highlights: Vec<(&'static str, bool)> = pages.read().highlights().collect();
    let content = match active {
        ActiveView::SubjectDetail(subject) => rsx! {
            SubjectDetailPage {
                subject,
                on_back: move |()| pages.write().back_to_class(),
            }
        },
        ActiveView::Page(_) => match page {
            Some("Class") => rsx! {
                ClassPage { on_open: move |subject: String| pages.write().show_subject(subject) }
            },
            Some("Calendar") => rsx! { CalendarPage {} },
            Some("Progress") => rsx! { ProgressPage {} },
            Some("Setting") => rsx! { SettingsPage {} },
            _ => rsx! { OverviewPage {} },
        },
    };

    rsx! {
        div { class: "dashboard",
            nav { class: "sidebar",
                div { class: "logo",
                    "Study "
                    span { class: "brand-accent", "Sync" }
                }
                for (name, highlighted) in highlights {
                    button {
                        key: "{name}",
                        class: if highlighted { "nav-item active" } else { "nav-item" },
                        r#type: "button",
                        onclick: move |_| {
                            pages.write().display(name);
                        },
                        "{name}"
                    }
                }
                button {
                    class: "back danger",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::RoleSelect {});
                    },
                    "Back"
                }
            }
            main { class: "content", {content} }
        }
    }
}
