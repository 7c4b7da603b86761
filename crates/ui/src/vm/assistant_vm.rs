use services::AssistantError;

/// What the "Ask AI" panel shows.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AssistantState {
    #[default]
    Idle,
    Loading,
    Ready(String),
    Failed(String),
}

impl AssistantState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, AssistantState::Loading)
    }
}

/// A cancelled request returns the panel to idle.
#[must_use]
pub fn assistant_state_from_result(result: Result<String, AssistantError>) -> AssistantState {
    match result {
        Ok(text) => AssistantState::Ready(text),
        Err(AssistantError::Cancelled) => AssistantState::Idle,
        Err(AssistantError::Disabled) => AssistantState::Failed(
            "The assistant is off. Set STUDYSYNC_AI_API_KEY to enable it.".to_string(),
        ),
        Err(AssistantError::TimedOut(_)) => {
            AssistantState::Failed("The assistant took too long to answer.".to_string())
        }
        Err(err) => AssistantState::Failed(format!("Something went wrong:\n{err}")),
    }
}
