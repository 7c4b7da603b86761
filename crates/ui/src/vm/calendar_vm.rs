use chrono::NaiveDate;
use portal_core::calendar::MonthGrid;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCellVm {
    pub label: String,
    pub is_today: bool,
}

/// Month grid ready for a `table`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarVm {
    pub title: String,
    pub weekdays: [&'static str; 7],
    pub weeks: Vec<Vec<DayCellVm>>,
}

impl CalendarVm {
    #[must_use]
    pub fn for_day(today: NaiveDate) -> Self {
        let grid = MonthGrid::containing(today);
        let weeks = grid
            .weeks
            .iter()
            .map(|week| {
                week.iter()
                    .map(|day| DayCellVm {
                        label: day.map(|d| d.to_string()).unwrap_or_default(),
                        is_today: day.is_some() && *day == grid.today,
                    })
                    .collect()
            })
            .collect();
        Self {
            title: grid.title(),
            weekdays: WEEKDAY_LABELS,
            weeks,
        }
    }
}
