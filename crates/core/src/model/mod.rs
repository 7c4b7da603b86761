mod agenda;
pub mod curriculum;
mod keys;
pub mod progress;
mod settings;
mod student;

pub use agenda::{Agenda, TodoList};
pub use curriculum::{Section, SectionItem, SectionKind, Subject};
pub use keys::{AssignmentKey, KEY_SEPARATOR, KeyParseError, NoteKey};
pub use progress::{GradeStatus, ProgressError, ProgressRange, ProgressRecord, StatusColor};
pub use settings::{NotificationSettings, PasswordChange, SettingsError};
pub use student::{Credentials, LoginDraft, LoginError, Role, StudentNumber};
