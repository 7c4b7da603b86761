use dioxus::prelude::*;
use portal_core::model::{Agenda, TodoList};

use crate::context::AppContext;
use crate::vm::CalendarVm;

use super::widgets::{CalendarGrid, ListCard};

#[component]
pub fn CalendarPage() -> Element {
    let ctx = use_context::<AppContext>();
    let calendar = CalendarVm::for_day(ctx.clock().today());
    let agenda = use_hook(Agenda::seeded);
    let initial = agenda.today.clone();
    let mut todos = use_signal(move || TodoList::new(initial));
    let mut draft = use_signal(String::new);

    let mut add_task = move || {
        let text = draft();
        if todos.write().add(&text) {
            draft.set(String::new());
        }
    };

    let items = todos.read().items().to_vec();
    rsx! {
        div { class: "page calendar-page",
            h2 { "📅 Calendar & Task Schedule" }
            div { class: "calendar-split",
                CalendarGrid { vm: calendar }
                section { class: "todo",
                    h3 { "To-do" }
                    ul {
                        for item in items {
                            li { "{item}" }
                        }
                    }
                    form {
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            add_task();
                        },
                        input {
                            r#type: "text",
                            placeholder: "Enter task for today:",
                            value: "{draft}",
                            oninput: move |evt: FormEvent| draft.set(evt.value()),
                        }
                        button { r#type: "submit", "➕ New To-do" }
                    }
                }
            }
            ListCard { title: "Incoming Activities", items: agenda.upcoming }
        }
    }
}
