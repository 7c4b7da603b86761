use std::path::PathBuf;
use std::sync::Arc;

mod desktop;

/// Native "open file" dialog.
pub trait FilePicker: Send + Sync {
    fn pick_file(&self, title: &str) -> Option<PathBuf>;
}

/// Hands a path to the OS default application.
pub trait FileOpener: Send + Sync {
    fn open_path(&self, path: &str);
}

pub type FilePickerRef = Arc<dyn FilePicker>;
pub type FileOpenerRef = Arc<dyn FileOpener>;

pub use desktop::{DesktopFileOpener, RfdFilePicker};
