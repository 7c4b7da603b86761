//! Dashboard page switching.
//!
//! The sidebar pages form a fixed, ordered list. `display` selects one by
//! position; a subject page sits outside the list and clears the highlight.

/// Sidebar pages in display order.
pub const SIDEBAR_PAGES: [&str; 5] = ["Dashboard", "Class", "Calendar", "Progress", "Setting"];

/// What the content area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    /// Index into `SIDEBAR_PAGES`.
    Page(usize),
    SubjectDetail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active: ActiveView,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on the first sidebar page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: ActiveView::Page(0),
        }
    }

    #[must_use]
    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    /// Name of the active sidebar page, if one is selected.
    #[must_use]
    pub fn active_page(&self) -> Option<&'static str> {
        match self.active {
            ActiveView::Page(index) => SIDEBAR_PAGES.get(index).copied(),
            ActiveView::SubjectDetail(_) => None,
        }
    }

    /// Select a sidebar page by name. Unknown names leave the state untouched.
    ///
    /// Returns `true` if the name was recognised.
    pub fn display(&mut self, name: &str) -> bool {
        match SIDEBAR_PAGES.iter().position(|page| *page == name) {
            Some(index) => {
                self.active = ActiveView::Page(index);
                true
            }
            None => {
                log::debug!("ignoring unknown page {name:?}");
                false
            }
        }
    }

    pub fn show_subject(&mut self, subject: impl Into<String>) {
        self.active = ActiveView::SubjectDetail(subject.into());
    }

    pub fn back_to_class(&mut self) {
        self.display("Class");
    }

    /// `(name, highlighted)` for every sidebar entry.
    pub fn highlights(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        SIDEBAR_PAGES
            .iter()
            .enumerate()
            .map(move |(index, name)| (*name, self.active == ActiveView::Page(index)))
    }
}
