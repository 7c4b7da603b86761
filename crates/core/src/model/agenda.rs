/// Static dashboard lists. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agenda {
    pub today: Vec<String>,
    pub upcoming: Vec<String>,
    pub announcements: Vec<String>,
}

impl Agenda {
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            today: owned(&["Math Quiz - 10:00 AM", "Science Lab - 2:00 PM"]),
            upcoming: owned(&["Essay Due - June 20", "History Exam - June 22"]),
            announcements: owned(&[
                "New Announcement: Review for Final Exam",
                "Reminder: Submit Science Project",
            ]),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// In-memory to-do list on the calendar page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Append a trimmed task. Blank input is ignored and returns `false`.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}
