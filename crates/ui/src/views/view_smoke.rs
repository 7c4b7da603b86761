use std::sync::Arc;

use portal_core::model::{AssignmentKey, NoteKey, NotificationSettings, Role};
use storage::repository::{SettingsRepository, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn role_select_offers_both_roles() {
    let mut harness = setup_view_harness(ViewKind::RoleSelect);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Professor"), "missing professor in {html}");
    assert!(html.contains("Student"), "missing student in {html}");
    assert!(html.contains("Sync."), "missing brand in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_labels_follow_role() {
    let mut harness = setup_view_harness(ViewKind::Login(Role::Student));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Student Login"), "missing title in {html}");
    assert!(html.contains("Student No."), "missing placeholder in {html}");
    assert!(html.contains("Forgot password?"), "missing link in {html}");
    assert!(!html.contains("form-error"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_shows_id() {
    let mut harness = setup_view_harness(ViewKind::Welcome(Role::Student, "22-00451"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome!"), "missing greeting in {html}");
    assert!(html.contains("22-00451"), "missing id in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_starts_on_overview() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("nav-item active"), "missing highlight in {html}");
    assert!(html.contains("Calendar Preview"), "missing calendar in {html}");
    assert!(html.contains("November 2023"), "missing month in {html}");
    assert!(html.contains("Math Quiz - 10:00 AM"), "missing task in {html}");
    assert!(html.contains("This Week Scores"), "missing chart in {html}");
    assert_eq!(html.matches("nav-item active").count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn progress_page_lists_this_week() {
    let mut harness = setup_view_harness(ViewKind::Progress);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Math Homework - Graded: 90/100"), "missing row in {html}");
    assert!(html.contains("Science Quiz - Ungraded"), "missing ungraded row in {html}");
    assert!(html.contains("Last Month"), "missing range option in {html}");
    assert!(html.contains("polyline"), "missing chart line in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn calendar_page_shows_todos() {
    let mut harness = setup_view_harness(ViewKind::Calendar);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("To-do"), "missing to-do in {html}");
    assert!(html.contains("Science Lab - 2:00 PM"), "missing seeded task in {html}");
    assert!(html.contains("Incoming Activities"), "missing upcoming in {html}");
    assert!(html.contains("History Exam - June 22"), "missing upcoming item in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subject_page_loads_saved_note() {
    let mut harness = setup_view_harness(ViewKind::Subject("Mathematics"));
    harness
        .storage
        .notes
        .save_note(
            &NoteKey::new("Modules", "Module 1: Introduction"),
            "ask about prime numbers",
        )
        .await
        .expect("save note");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Mathematics"), "missing title in {html}");
    assert!(html.contains("Module 1: Introduction"), "missing module in {html}");
    assert!(html.contains("ask about prime numbers"), "missing note in {html}");
    assert!(html.contains("Ask AI"), "missing assistant in {html}");
    assert!(html.contains("Back to Class"), "missing back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assignments_tab_reflects_submission() {
    let mut harness = setup_view_harness(ViewKind::SubjectTab("Science", 2));
    harness
        .storage
        .assignments
        .submit(
            &AssignmentKey::new("Science", "Assignment 1"),
            "/home/student/lab-report.pdf",
        )
        .await
        .expect("submit");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Uploaded ✔"), "missing uploaded label in {html}");
    assert!(html.contains("Upload File"), "missing open assignments in {html}");
    assert!(html.contains("View Your Work"), "missing view button in {html}");
    assert_eq!(html.matches("Uploaded ✔").count(), 1);
    assert!(!html.contains("Ask AI"), "assistant only belongs to modules: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn professor_panel_is_a_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Professor);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Professor Dashboard coming soon..."), "missing text in {html}");
    assert!(html.contains("Back"), "missing back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_page_renders_forms() {
    let storage = Storage::in_memory();
    storage
        .settings
        .save_settings(&NotificationSettings {
            email_notifications: true,
        })
        .await
        .expect("save settings");
    let mut harness = setup_view_harness_with_storage(ViewKind::Settings, storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Change Password"), "missing password form in {html}");
    assert!(html.contains("Enable Email Notifications"), "missing checkbox in {html}");
    assert!(html.contains("Save Settings"), "missing save in {html}");
}

struct FailingSettingsRepo;

#[async_trait::async_trait]
impl SettingsRepository for FailingSettingsRepo {
    async fn get_settings(&self) -> Result<Option<NotificationSettings>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn save_settings(&self, _settings: &NotificationSettings) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn settings_page_renders_error_state() {
    let mut storage = Storage::in_memory();
    storage.settings = Arc::new(FailingSettingsRepo);
    let mut harness = setup_view_harness_with_storage(ViewKind::Settings, storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(!html.contains("Enable Email Notifications"), "unexpected checkbox in {html}");
}
