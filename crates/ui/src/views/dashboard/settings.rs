use dioxus::prelude::*;
use portal_core::model::{NotificationSettings, PasswordChange};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Info(String),
    Error(ViewError),
}

#[component]
pub fn SettingsPage() -> Element {
    let ctx = use_context::<AppContext>();
    let settings_service = ctx.settings();
    let settings_for_resource = settings_service.clone();

    let mut email = use_signal(|| false);
    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut show_old = use_signal(|| false);
    let mut show_new = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    let resource = use_resource(move || {
        let settings = settings_for_resource.clone();
        async move {
            let loaded = settings.load().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(loaded)
        }
    });
    let state = view_state_from_resource(&resource);

    use_effect(move || {
        if let Some(Ok(loaded)) = resource.value().read().as_ref() {
            email.set(loaded.email_notifications);
        }
    });

    let on_update_password = {
        let settings = settings_service.clone();
        move |_: MouseEvent| {
            let change = PasswordChange {
                old_password: old_password(),
                new_password: new_password(),
            };
            match settings.change_password(&change) {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    notice.set(Some(Notice::Info("Password updated successfully.".into())));
                }
                Err(err) => notice.set(Some(Notice::Error(ViewError::from(err)))),
            }
        }
    };

    let on_save = {
        let settings = settings_service;
        move |_: MouseEvent| {
            let settings = settings.clone();
            let chosen = NotificationSettings {
                email_notifications: email(),
            };
            spawn(async move {
                match settings.save(chosen).await {
                    Ok(saved) => notice.set(Some(Notice::Info(saved.summary()))),
                    Err(err) => notice.set(Some(Notice::Error(ViewError::from(err)))),
                }
            });
        }
    };

    rsx! {
        div { class: "page settings",
            h2 { "⚙️ Settings" }

            section { class: "settings-block",
                h3 { "Change Password" }
                PasswordField {
                    placeholder: "Old Password",
                    value: old_password(),
                    visible: show_old(),
                    on_input: move |value| old_password.set(value),
                    on_toggle: move |()| show_old.toggle(),
                }
                PasswordField {
                    placeholder: "New Password",
                    value: new_password(),
                    visible: show_new(),
                    on_input: move |value| new_password.set(value),
                    on_toggle: move |()| show_new.toggle(),
                }
                button { class: "primary", r#type: "button", onclick: on_update_password, "Update Password" }
            }

            section { class: "settings-block",
                h3 { "Notification Preferences" }
                match state {
                    ViewState::Loading => rsx! { p { "Loading..." } },
                    ViewState::Error(err) => rsx! { p { class: "form-error", "{err.message()}" } },
                    ViewState::Idle | ViewState::Ready(_) => rsx! {
                        label { class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: email(),
                                oninput: move |evt: FormEvent| email.set(evt.checked()),
                            }
                            "Enable Email Notifications"
                        }
                    },
                }
                button { class: "primary", r#type: "button", onclick: on_save, "Save Settings" }
            }

            match notice() {
                Some(Notice::Info(text)) => rsx! { pre { class: "notice", "{text}" } },
                Some(Notice::Error(err)) => rsx! { p { class: "form-error", "{err.message()}" } },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn PasswordField(
    placeholder: &'static str,
    value: String,
    visible: bool,
    on_input: EventHandler<String>,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "password-row",
            input {
                r#type: if visible { "text" } else { "password" },
                placeholder,
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            button {
                class: "reveal",
                r#type: "button",
                onclick: move |_| on_toggle.call(()),
                "👁"
            }
        }
    }
}
