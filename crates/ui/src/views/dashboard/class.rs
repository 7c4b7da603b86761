use dioxus::prelude::*;
use portal_core::model::curriculum::SUBJECTS;

#[component]
pub fn ClassPage(on_open: EventHandler<String>) -> Element {
    rsx! {
        div { class: "page class",
            for subject in SUBJECTS {
                button {
                    key: "{subject.name}",
                    class: "subject-tile",
                    style: "background-color: {subject.accent}",
                    r#type: "button",
                    onclick: move |_| on_open.call(subject.name.to_string()),
                    "{subject.icon}  {subject.name}"
                }
            }
        }
    }
}
