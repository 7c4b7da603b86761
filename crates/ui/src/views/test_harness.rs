use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use portal_core::model::Role;
use portal_core::time::fixed_clock;
use services::{
    AppServices, AssignmentService, AssistantService, Clock, NoteService, SettingsService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::platform::{FileOpener, FileOpenerRef, FilePicker, FilePickerRef};
use crate::views::{
    CalendarPage, LoginView, OverviewPage, ProfessorPanelView, ProgressPage, RoleSelectView,
    SettingsPage, StudentDashboardView, SubjectDetailPage, WelcomeView,
};

/// Stands in for native dialogs: the picker is always dismissed.
struct NoDialogs;

impl FilePicker for NoDialogs {
    fn pick_file(&self, _title: &str) -> Option<PathBuf> {
        None
    }
}

impl FileOpener for NoDialogs {
    fn open_path(&self, _path: &str) {}
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    picker: FilePickerRef,
    opener: FileOpenerRef,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn notes(&self) -> Arc<NoteService> {
        self.services.notes()
    }

    fn assignments(&self) -> Arc<AssignmentService> {
        self.services.assignments()
    }

    fn settings(&self) -> Arc<SettingsService> {
        self.services.settings()
    }

    fn assistant(&self) -> Arc<AssistantService> {
        self.services.assistant()
    }

    fn file_picker(&self) -> FilePickerRef {
        Arc::clone(&self.picker)
    }

    fn file_opener(&self) -> FileOpenerRef {
        Arc::clone(&self.opener)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    RoleSelect,
    Login(Role),
    Welcome(Role, &'static str),
    Dashboard,
    Overview,
    Calendar,
    Progress,
    Settings,
    Subject(&'static str),
    SubjectTab(&'static str, usize),
    Professor,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::RoleSelect => rsx! { RoleSelectView {} },
        ViewKind::Login(role) => rsx! { LoginView { role } },
        ViewKind::Welcome(role, id) => rsx! { WelcomeView { role, id: id.to_string() } },
        ViewKind::Dashboard => rsx! { StudentDashboardView {} },
        ViewKind::Overview => rsx! { OverviewPage {} },
        ViewKind::Calendar => rsx! { CalendarPage {} },
        ViewKind::Progress => rsx! { ProgressPage {} },
        ViewKind::Settings => rsx! { SettingsPage {} },
        ViewKind::Subject(subject) => rsx! {
            SubjectDetailPage { subject: subject.to_string(), on_back: move |()| {} }
        },
        ViewKind::SubjectTab(subject, initial_tab) => rsx! {
            SubjectDetailPage {
                subject: subject.to_string(),
                on_back: move |()| {},
                initial_tab,
            }
        },
        ViewKind::Professor => rsx! { ProfessorPanelView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let services = AppServices::from_storage(&storage, AssistantService::disabled());
    let app = Arc::new(TestApp {
        services,
        picker: Arc::new(NoDialogs),
        opener: Arc::new(NoDialogs),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
