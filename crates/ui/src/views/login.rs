use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portal_core::model::Role;

use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::LoginVm;

#[component]
pub fn LoginView(role: Role) -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(|| LoginVm::new(role));
    let mut error = use_signal(|| None::<ViewError>);

    let mut submit = move || {
        let vm = form.read().clone();
        match vm.submit() {
            Ok(credentials) => {
                log::info!("{} signed in as {}", credentials.role().label(), credentials.id());
                error.set(None);
                navigator.push(Route::Welcome {
                    role: credentials.role(),
                    id: credentials.id().to_string(),
                });
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let vm = form.read().clone();
    rsx! {
        div { class: "page login",
            h1 { class: "brand",
                "Study "
                span { class: "brand-accent", "Sync" }
            }
            h2 { "{vm.title()}" }
            form {
                class: "login-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit();
                },
                input {
                    class: "login-id",
                    r#type: "text",
                    placeholder: "{vm.id_placeholder()}",
                    value: "{vm.id}",
                    oninput: move |evt: FormEvent| form.write().id = evt.value(),
                }
                div { class: "password-row",
                    input {
                        class: "login-password",
                        r#type: vm.password_input_type(),
                        placeholder: "Password",
                        value: "{vm.password}",
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    button {
                        class: "reveal",
                        r#type: "button",
                        title: "Show password",
                        onclick: move |_| {
                            let mut form = form.write();
                            form.show_password = !form.show_password;
                        },
                        "👁"
                    }
                }
                a { class: "forgot", href: "#", "Forgot password?" }
                if let Some(err) = error() {
                    p { class: "form-error", "{err.message()}" }
                }
                button { class: "primary", r#type: "submit", "Login" }
            }
            button {
                class: "back",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::RoleSelect {});
                },
                "Back"
            }
        }
    }
}
