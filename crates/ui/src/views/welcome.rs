use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portal_core::model::Role;

use crate::routes::Route;

#[component]
pub fn WelcomeView(role: Role, id: String) -> Element {
    let navigator = use_navigator();
    rsx! {
        div { class: "page welcome",
            div { class: "welcome-icon", "👋" }
            h1 { class: "welcome-title", "Welcome!" }
            p { class: "welcome-id",
                "{role.label()} Number: "
                b { "{id}" }
            }
            p { class: "welcome-note",
                "You have successfully logged in."
                br {}
                "Enjoy your session!"
            }
            button {
                class: "primary",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::dashboard_for(role));
                },
                "Continue"
            }
        }
    }
}
