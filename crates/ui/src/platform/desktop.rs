use std::path::PathBuf;
use std::process::Command;

use super::{FileOpener, FilePicker};

pub struct RfdFilePicker;

impl FilePicker for RfdFilePicker {
    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(title).pick_file()
    }
}

pub struct DesktopFileOpener;

impl FileOpener for DesktopFileOpener {
    fn open_path(&self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        let spawned = if cfg!(target_os = "macos") {
            Command::new("open").arg(path).spawn()
        } else if cfg!(target_os = "windows") {
            Command::new("cmd").args(["/C", "start", "", path]).spawn()
        } else {
            Command::new("xdg-open").arg(path).spawn()
        };
        if let Err(err) = spawned {
            log::warn!("could not open {path}: {err}");
        }
    }
}
