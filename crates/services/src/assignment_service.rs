use std::path::Path;
use std::sync::Arc;

use portal_core::model::AssignmentKey;
use storage::repository::AssignmentRepository;

use crate::error::AssignmentServiceError;

pub const UPLOAD_LABEL: &str = "Upload File";
pub const UPLOADED_LABEL: &str = "Uploaded ✔";

/// Button state for one assignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionControls {
    pub upload_enabled: bool,
    pub upload_label: &'static str,
    pub view_enabled: bool,
}

impl SubmissionControls {
    #[must_use]
    pub fn for_state(submitted: bool) -> Self {
        if submitted {
            Self {
                upload_enabled: false,
                upload_label: UPLOADED_LABEL,
                view_enabled: true,
            }
        } else {
            Self {
                upload_enabled: true,
                upload_label: UPLOAD_LABEL,
                view_enabled: false,
            }
        }
    }
}

/// Base name of a submitted path, falling back to the raw string.
#[must_use]
pub fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Line shown under a submitted assignment.
#[must_use]
pub fn submitted_caption(path: &str) -> String {
    format!("Submitted: {}", file_name(path))
}

/// Tracks which file was handed in for each assignment.
#[derive(Clone)]
pub struct AssignmentService {
    submissions: Arc<dyn AssignmentRepository>,
}

impl AssignmentService {
    #[must_use]
    pub fn new(submissions: Arc<dyn AssignmentRepository>) -> Self {
        Self { submissions }
    }

    /// # Errors
    ///
    /// Returns `AssignmentServiceError::Storage` if repository access fails.
    pub async fn submission(
        &self,
        key: &AssignmentKey,
    ) -> Result<Option<String>, AssignmentServiceError> {
        let path = self.submissions.get_submission(key).await?;
        Ok(path)
    }

    /// Record `path` as the submission for `key`. The file is neither copied
    /// nor checked for existence.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentServiceError::Storage` if the snapshot cannot be written.
    pub async fn submit(&self, key: &AssignmentKey, path: &str) -> Result<(), AssignmentServiceError> {
        self.submissions.submit(key, path).await?;
        log::info!("submitted {path} for {key}");
        Ok(())
    }

    /// Drop the submission for `key`. Unsubmitting an unknown key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentServiceError::Storage` if the snapshot cannot be written.
    pub async fn unsubmit(&self, key: &AssignmentKey) -> Result<(), AssignmentServiceError> {
        if self.submissions.unsubmit(key).await? {
            log::info!("unsubmitted {key}");
        } else {
            log::debug!("nothing to unsubmit for {key}");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AssignmentServiceError::Storage` if repository access fails.
    pub async fn controls(
        &self,
        key: &AssignmentKey,
    ) -> Result<SubmissionControls, AssignmentServiceError> {
        let submitted = self.submission(key).await?.is_some();
        Ok(SubmissionControls::for_state(submitted))
    }

    /// # Errors
    ///
    /// Returns `AssignmentServiceError::Storage` if repository access fails.
    pub async fn list_submissions(
        &self,
    ) -> Result<Vec<(AssignmentKey, String)>, AssignmentServiceError> {
        let submissions = self.submissions.list_submissions().await?;
        Ok(submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use storage::repository::InMemoryRepository;

    fn service() -> AssignmentService {
        AssignmentService::new(Arc::new(InMemoryRepository::new()))
    }

    #[test]
    fn file_name_takes_last_component() {
        assert_eq!(file_name("/home/ana/docs/report.pdf"), "report.pdf");
        assert_eq!(file_name("report.pdf"), "report.pdf");
        assert_eq!(submitted_caption("/tmp/lab.docx"), "Submitted: lab.docx");
    }

    #[tokio::test]
    async fn controls_follow_submission_state() {
        let service = service();
        let key = AssignmentKey::new("History", "Assignment 2");

        let before = service.controls(&key).await.unwrap();
        assert!(before.upload_enabled);
        assert!(!before.view_enabled);
        assert_eq!(before.upload_label, "Upload File");

        service.submit(&key, "/tmp/timeline.pdf").await.unwrap();
        let after = service.controls(&key).await.unwrap();
        assert!(!after.upload_enabled);
        assert!(after.view_enabled);
        assert_eq!(after.upload_label, "Uploaded ✔");
    }

    #[tokio::test]
    async fn unsubmit_unknown_key_is_ok() {
        let service = service();
        let key = AssignmentKey::new("Art", "Assignment 3");
        service.unsubmit(&key).await.unwrap();
        assert!(service.list_submissions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn resubmitting_replaces_path() {
        let service = service();
        let key = AssignmentKey::new("Geography", "Assignment 1");
        service.submit(&key, "/tmp/draft.pdf").await.unwrap();
        service.submit(&key, "/tmp/final.pdf").await.unwrap();
        assert_eq!(
            service.submission(&key).await.unwrap().as_deref(),
            Some("/tmp/final.pdf")
        );
    }
}
