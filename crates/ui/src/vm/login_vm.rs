use portal_core::model::{Credentials, LoginDraft, Role};

use crate::views::ViewError;

/// Login form state for one role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginVm {
    role: Role,
    pub id: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginVm {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            id: String::new(),
            password: String::new(),
            show_password: false,
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Login", self.role.label())
    }

    #[must_use]
    pub fn id_placeholder(&self) -> String {
        format!("{} No.", self.role.label())
    }

    #[must_use]
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` with the message to show next to the form.
    pub fn submit(&self) -> Result<Credentials, ViewError> {
        LoginDraft::new(self.role, &self.id, &self.password)
            .validate()
            .map_err(ViewError::invalid)
    }
}
