use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("unknown progress range: {0}")]
    UnknownRange(String),
}

//
// ─── RANGE ─────────────────────────────────────────────────────────────────────
//

/// Time-range filter for the progress page, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProgressRange {
    #[default]
    ThisWeek,
    LastWeek,
    LastMonth,
}

impl ProgressRange {
    pub const ALL: [ProgressRange; 3] = [
        ProgressRange::ThisWeek,
        ProgressRange::LastWeek,
        ProgressRange::LastMonth,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProgressRange::ThisWeek => "This Week",
            ProgressRange::LastWeek => "Last Week",
            ProgressRange::LastMonth => "Last Month",
        }
    }
}

impl fmt::Display for ProgressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProgressRange {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.label() == s)
            .ok_or_else(|| ProgressError::UnknownRange(s.to_string()))
    }
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Display color tag attached to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Gray,
}

impl StatusColor {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Gray => "gray",
        }
    }
}

/// Parsed form of a status string such as `Graded: 90/100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeStatus {
    Graded { score: u32, out_of: u32 },
    Ungraded,
    Unrecognized,
}

impl GradeStatus {
    /// Parse a status string. Never fails; unknown shapes become `Unrecognized`.
    #[must_use]
    pub fn parse(status: &str) -> Self {
        let status = status.trim();
        if status.eq_ignore_ascii_case("ungraded") {
            return GradeStatus::Ungraded;
        }
        let Some(rest) = status.strip_prefix("Graded:") else {
            return GradeStatus::Unrecognized;
        };
        let Some((score, out_of)) = rest.trim().split_once('/') else {
            return GradeStatus::Unrecognized;
        };
        match (score.trim().parse(), out_of.trim().parse()) {
            (Ok(score), Ok(out_of)) => GradeStatus::Graded { score, out_of },
            _ => GradeStatus::Unrecognized,
        }
    }

    /// Value plotted on the chart: the score when graded, otherwise zero.
    #[must_use]
    pub fn chart_score(self) -> u32 {
        match self {
            GradeStatus::Graded { score, .. } => score,
            GradeStatus::Ungraded | GradeStatus::Unrecognized => 0,
        }
    }
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Immutable, pre-seeded activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRecord {
    pub label: &'static str,
    pub status: &'static str,
    pub color: StatusColor,
}

impl ProgressRecord {
    const fn graded(label: &'static str, status: &'static str) -> Self {
        Self {
            label,
            status,
            color: StatusColor::Green,
        }
    }

    const fn ungraded(label: &'static str) -> Self {
        Self {
            label,
            status: "Ungraded",
            color: StatusColor::Gray,
        }
    }

    #[must_use]
    pub fn grade(&self) -> GradeStatus {
        GradeStatus::parse(self.status)
    }
}

const THIS_WEEK: &[ProgressRecord] = &[
    ProgressRecord::graded("Math Homework", "Graded: 90/100"),
    ProgressRecord::ungraded("Science Quiz"),
    ProgressRecord::graded("English Essay", "Graded: 88/100"),
    ProgressRecord::graded("History Quiz", "Graded: 82/100"),
    ProgressRecord::ungraded("Biology Lab"),
    ProgressRecord::graded("PE Fitness Test", "Graded: 92/100"),
    ProgressRecord::graded("Computer Assignment", "Graded: 85/100"),
];

const LAST_WEEK: &[ProgressRecord] = &[
    ProgressRecord::graded("Math Project", "Graded: 87/100"),
    ProgressRecord::ungraded("Science Lab"),
    ProgressRecord::graded("English Reading", "Graded: 80/100"),
    ProgressRecord::graded("History Report", "Graded: 78/100"),
    ProgressRecord::ungraded("Art Sketch"),
    ProgressRecord::graded("Geography Quiz", "Graded: 84/100"),
    ProgressRecord::graded("Music Composition", "Graded: 90/100"),
];

const LAST_MONTH: &[ProgressRecord] = &[
    ProgressRecord::graded("Math Exam", "Graded: 75/100"),
    ProgressRecord::graded("Science Fair", "Graded: 93/100"),
    ProgressRecord::ungraded("English Portfolio"),
    ProgressRecord::graded("History Debate", "Graded: 85/100"),
    ProgressRecord::graded("Computer Lab", "Graded: 80/100"),
    ProgressRecord::ungraded("Art Exhibit"),
    ProgressRecord::graded("Geography Map", "Graded: 86/100"),
];

/// Records for a range.
#[must_use]
pub fn records(range: ProgressRange) -> &'static [ProgressRecord] {
    match range {
        ProgressRange::ThisWeek => THIS_WEEK,
        ProgressRange::LastWeek => LAST_WEEK,
        ProgressRange::LastMonth => LAST_MONTH,
    }
}
