use dioxus::prelude::*;
use dioxus_router::Routable;
use portal_core::model::Role;

use crate::views::{
    LoginView, ProfessorPanelView, RoleSelectView, StudentDashboardView, WelcomeView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", RoleSelectView)] RoleSelect {},
    #[route("/login/:role", LoginView)] Login { role: Role },
    #[route("/welcome/:role/:id", WelcomeView)] Welcome { role: Role, id: String },
    #[route("/student", StudentDashboardView)] StudentDashboard {},
    #[route("/professor", ProfessorPanelView)] ProfessorPanel {},
}

impl Route {
    /// Where "Continue" leads after the welcome screen.
    #[must_use]
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Student => Route::StudentDashboard {},
            Role::Professor => Route::ProfessorPanel {},
        }
    }
}
