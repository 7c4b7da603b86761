use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portal_core::model::Role;

use crate::routes::Route;

#[component]
pub fn RoleSelectView() -> Element {
    rsx! {
        div { class: "page role-select",
            h1 { class: "brand",
                "Study "
                span { class: "brand-accent", "Sync." }
            }
            div { class: "role-buttons",
                RoleButton { role: Role::Professor, icon: "🧑‍🏫" }
                RoleButton { role: Role::Student, icon: "🎓" }
            }
        }
    }
}

#[component]
fn RoleButton(role: Role, icon: &'static str) -> Element {
    let navigator = use_navigator();
    rsx! {
        button {
            class: "role-button",
            r#type: "button",
            onclick: move |_| {
                navigator.push(Route::Login { role });
            },
            span { class: "role-icon", "{icon}" }
            span { class: "role-label", "{role.label()}" }
        }
    }
}
