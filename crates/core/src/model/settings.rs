use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("Please fill both password fields.")]
    MissingPassword,
}

/// Persisted account preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub email_notifications: bool,
}

impl NotificationSettings {
    #[must_use]
    pub fn summary(&self) -> String {
        let state = if self.email_notifications {
            "Enabled"
        } else {
            "Disabled"
        };
        format!("Settings saved.\nEmail Notifications: {state}")
    }
}

/// Password change form. There is no credential backend behind it.
#[derive(Clone, Debug, Default)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChange {
    /// # Errors
    ///
    /// Returns `SettingsError::MissingPassword` if either field is empty.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.old_password.is_empty() || self.new_password.is_empty() {
            return Err(SettingsError::MissingPassword);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_change_requires_both_fields() {
        let change = PasswordChange {
            old_password: "old".into(),
            new_password: String::new(),
        };
        assert_eq!(change.validate(), Err(SettingsError::MissingPassword));

        let change = PasswordChange {
            old_password: "old".into(),
            new_password: "new".into(),
        };
        assert!(change.validate().is_ok());
    }

    #[test]
    fn summary_mentions_notification_state() {
        let on = NotificationSettings {
            email_notifications: true,
        };
        assert!(on.summary().ends_with("Enabled"));
        assert!(NotificationSettings::default().summary().ends_with("Disabled"));
    }

    #[test]
    fn missing_field_deserializes_to_default() {
        let parsed: NotificationSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, NotificationSettings::default());
    }
}
