use portal_core::model::progress::records;
use portal_core::model::{ProgressRange, ProgressRecord};

pub const CHART_WIDTH: u32 = 600;
pub const CHART_HEIGHT: u32 = 220;
const CHART_PADDING: u32 = 24;
const MAX_SCORE: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRowVm {
    pub text: String,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartPointVm {
    pub label: &'static str,
    pub score: u32,
    pub x: u32,
    pub y: u32,
}

/// Activity list and score chart for one range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBoardVm {
    pub range: ProgressRange,
    pub title: String,
    pub rows: Vec<ActivityRowVm>,
    pub points: Vec<ChartPointVm>,
}

impl ProgressBoardVm {
    #[must_use]
    pub fn for_range(range: ProgressRange) -> Self {
        let data = records(range);
        Self {
            range,
            title: format!("{range} Scores"),
            rows: data.iter().map(activity_row).collect(),
            points: chart_points(data),
        }
    }

    /// `points` attribute for an SVG polyline.
    #[must_use]
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("{},{}", point.x, point.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn activity_row(record: &ProgressRecord) -> ActivityRowVm {
    ActivityRowVm {
        text: format!("{} - {}", record.label, record.status),
        color: record.color.css(),
    }
}

fn chart_points(data: &[ProgressRecord]) -> Vec<ChartPointVm> {
    let inner_width = CHART_WIDTH - 2 * CHART_PADDING;
    let inner_height = CHART_HEIGHT - 2 * CHART_PADDING;
    let steps = u32::try_from(data.len().saturating_sub(1)).unwrap_or(u32::MAX).max(1);

    (0u32..)
        .zip(data)
        .map(|(index, record)| {
            let score = record.grade().chart_score().min(MAX_SCORE);
            ChartPointVm {
                label: record.label,
                score,
                x: CHART_PADDING + inner_width * index / steps,
                y: CHART_PADDING + inner_height - inner_height * score / MAX_SCORE,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_join_label_and_status() {
        let vm = ProgressBoardVm::for_range(ProgressRange::ThisWeek);
        assert_eq!(vm.title, "This Week Scores");
        assert_eq!(vm.rows[0].text, "Math Homework - Graded: 90/100");
        assert_eq!(vm.rows[0].color, "green");
        assert_eq!(vm.rows[1].text, "Science Quiz - Ungraded");
        assert_eq!(vm.rows[1].color, "gray");
    }

    #[test]
    fn ungraded_points_sit_on_the_axis() {
        let vm = ProgressBoardVm::for_range(ProgressRange::LastMonth);
        let portfolio = vm
            .points
            .iter()
            .find(|point| point.label == "English Portfolio")
            .unwrap();
        assert_eq!(portfolio.score, 0);
        assert_eq!(portfolio.y, CHART_HEIGHT - CHART_PADDING);
        assert!(vm.points.iter().all(|point| point.score <= 100));
    }

    #[test]
    fn points_span_the_chart() {
        let vm = ProgressBoardVm::for_range(ProgressRange::LastWeek);
        assert_eq!(vm.points.first().unwrap().x, CHART_PADDING);
        assert_eq!(vm.points.last().unwrap().x, CHART_WIDTH - CHART_PADDING);
        assert_eq!(vm.polyline().split(' ').count(), vm.points.len());
    }
}
