use dioxus::prelude::*;
use portal_core::model::{Agenda, ProgressRange};

use crate::context::AppContext;
use crate::vm::{CalendarVm, ProgressBoardVm};

use super::widgets::{CalendarGrid, ListCard, ScoreChart};

#[component]
pub fn OverviewPage() -> Element {
    let ctx = use_context::<AppContext>();
    let calendar = CalendarVm::for_day(ctx.clock().today());
    let board = ProgressBoardVm::for_range(ProgressRange::ThisWeek);
    let agenda = Agenda::seeded();

    rsx! {
        div { class: "page overview",
            div { class: "overview-left",
                h3 { "📅 Calendar Preview" }
                CalendarGrid { vm: calendar }
                h3 { "📈 Weekly Score Snapshot" }
                ScoreChart { board }
            }
            div { class: "overview-right",
                ListCard { title: "📌 Today's Tasks", items: agenda.today }
                ListCard { title: "⏳ Upcoming Activities", items: agenda.upcoming }
                ListCard {
                    title: "📢 Teacher Posts & Announcements",
                    items: agenda.announcements,
                }
            }
        }
    }
}
