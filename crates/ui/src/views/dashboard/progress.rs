use dioxus::prelude::*;
use portal_core::model::ProgressRange;

use crate::vm::ProgressBoardVm;

use super::widgets::ScoreChart;

#[component]
pub fn ProgressPage() -> Element {
    let mut range = use_signal(ProgressRange::default);
    let current = range();
    let board = ProgressBoardVm::for_range(current);
    let rows = board.rows.clone();

    rsx! {
        div { class: "page progress",
            h2 { "📊 Progress Tracker" }
            select {
                class: "range-select",
                value: "{current}",
                onchange: move |evt: FormEvent| match evt.value().parse::<ProgressRange>() {
                    Ok(selected) => range.set(selected),
                    Err(err) => log::warn!("{err}"),
                },
                for choice in ProgressRange::ALL {
                    option {
                        value: "{choice}",
                        selected: choice == current,
                        "{choice}"
                    }
                }
            }
            ul { class: "activity-list",
                for row in rows {
                    li { style: "color: {row.color}", "{row.text}" }
                }
            }
            h3 { "📈 Performance Trend" }
            ScoreChart { board }
        }
    }
}
