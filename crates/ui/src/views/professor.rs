use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn ProfessorPanelView() -> Element {
    let navigator = use_navigator();
    rsx! {
        div { class: "page professor",
            h2 { "Professor Dashboard coming soon..." }
            button {
                class: "back danger",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::RoleSelect {});
                },
                "Back"
            }
        }
    }
}
