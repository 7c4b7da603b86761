use chrono::{Datelike, NaiveDate};

/// A month laid out as Sunday-first weeks for the calendar widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub today: Option<u32>,
    pub weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    /// Build the grid for the month containing `date`, marking `date` as today.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();
        let days = days_in_month(year, month);
        let lead = date
            .with_day(1)
            .map_or(0, |first| first.weekday().num_days_from_sunday() as usize);

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut slot = lead;
        for day in 1..=days {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }

        Self {
            year,
            month,
            today: Some(date.day()),
            weeks,
        }
    }

    /// e.g. `November 2023`.
    #[must_use]
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .map_or(28, |last| last.day())
}
