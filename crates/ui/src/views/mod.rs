mod dashboard;
mod login;
mod professor;
mod role_select;
mod state;
mod welcome;

pub use dashboard::{
    CalendarPage, ClassPage, OverviewPage, ProgressPage, SettingsPage, StudentDashboardView,
    SubjectDetailPage,
};
pub use login::LoginView;
pub use professor::ProfessorPanelView;
pub use role_select::RoleSelectView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use welcome::WelcomeView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
