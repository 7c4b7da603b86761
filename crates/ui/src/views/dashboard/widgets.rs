use dioxus::prelude::*;

use crate::vm::{CHART_HEIGHT, CHART_WIDTH, CalendarVm, ProgressBoardVm};

#[component]
pub(super) fn CalendarGrid(vm: CalendarVm) -> Element {
    rsx! {
        table { class: "calendar",
            caption { "{vm.title}" }
            thead {
                tr {
                    for day in vm.weekdays {
                        th { "{day}" }
                    }
                }
            }
            tbody {
                for week in vm.weeks.iter() {
                    tr {
                        for cell in week.iter() {
                            td { class: if cell.is_today { "today" }, "{cell.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Line chart of one range's scores on a 0..=100 axis.
#[component]
pub(super) fn ScoreChart(board: ProgressBoardVm) -> Element {
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let line = board.polyline();
    rsx! {
        figure { class: "score-chart",
            figcaption { "{board.title}" }
            svg {
                "viewBox": "{view_box}",
                "preserveAspectRatio": "none",
                polyline {
                    class: "score-line",
                    "points": "{line}",
                    "fill": "none",
                    "stroke": "#2563eb",
                    "stroke-width": "2",
                }
                for point in board.points.iter() {
                    circle {
                        "cx": "{point.x}",
                        "cy": "{point.y}",
                        "r": "4",
                        "fill": "#2563eb",
                        title { "{point.label}: {point.score}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn ListCard(title: String, items: Vec<String>) -> Element {
    rsx! {
        section { class: "list-card",
            h3 { "{title}" }
            ul {
                for item in items {
                    li { "{item}" }
                }
            }
        }
    }
}
