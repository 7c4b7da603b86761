mod calendar;
mod class;
mod overview;
mod progress;
mod settings;
mod subject;
mod view;
mod widgets;

pub use calendar::CalendarPage;
pub use class::ClassPage;
pub use overview::OverviewPage;
pub use progress::ProgressPage;
pub use settings::SettingsPage;
pub use subject::SubjectDetailPage;
pub use view::StudentDashboardView;
