//! Seeded class catalog: subjects and the sections shown on a subject page.

use crate::model::{AssignmentKey, NoteKey};

/// A subject tile on the class page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

/// What a section offers besides private notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Module text can be sent to the assistant.
    Modules,
    Pointers,
    /// Items accept a file submission.
    Assignments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionItem {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub kind: SectionKind,
    pub items: &'static [SectionItem],
    pub gradient: (&'static str, &'static str),
}

impl Section {
    /// Note key for one of this section's items.
    #[must_use]
    pub fn note_key(&self, item: &SectionItem) -> NoteKey {
        NoteKey::new(self.title, item.title)
    }
}

/// Assignment key for an item under the given subject.
#[must_use]
pub fn assignment_key(subject: &str, item: &SectionItem) -> AssignmentKey {
    AssignmentKey::new(subject, item.title)
}

pub const SUBJECTS: &[Subject] = &[
    Subject { name: "Mathematics", icon: "📐", accent: "#fce7f3" },
    Subject { name: "Science", icon: "🔬", accent: "#dbeafe" },
    Subject { name: "English", icon: "📚", accent: "#fee2e2" },
    Subject { name: "History", icon: "🏰", accent: "#e0f2fe" },
    Subject { name: "Geography", icon: "🗺️", accent: "#dcfce7" },
    Subject { name: "Computer Science", icon: "💻", accent: "#ede9fe" },
    Subject { name: "Art", icon: "🎨", accent: "#fef9c3" },
];

const MODULE_ITEMS: &[SectionItem] = &[
    SectionItem {
        title: "Module 1: Introduction",
        body: "Mathematics is the study of numbers, shapes, and patterns.",
    },
    SectionItem {
        title: "Module 2: Advanced Topics",
        body: "Covers calculus and problem-solving techniques.",
    },
    SectionItem {
        title: "Module 3: Practice",
        body: "Hands-on exercises and practice problems.",
    },
];

const POINTER_ITEMS: &[SectionItem] = &[
    SectionItem { title: "Key Formula", body: "List of formulas you should memorize." },
    SectionItem { title: "Important Concepts", body: "Concepts you must understand." },
    SectionItem { title: "Sample Questions", body: "Example questions for practice." },
];

const ASSIGNMENT_ITEMS: &[SectionItem] = &[
    SectionItem { title: "Assignment 1", body: "Solve exercises on page 34-35." },
    SectionItem { title: "Assignment 2", body: "Group activity about measurements." },
    SectionItem { title: "Assignment 3", body: "Create a math puzzle." },
];

/// Sections are shared by every subject.
pub const SECTIONS: &[Section] = &[
    Section {
        title: "Modules",
        kind: SectionKind::Modules,
        items: MODULE_ITEMS,
        gradient: ("#6366f1", "#38bdf8"),
    },
    Section {
        title: "Pointers to Review",
        kind: SectionKind::Pointers,
        items: POINTER_ITEMS,
        gradient: ("#f43f5e", "#f87171"),
    },
    Section {
        title: "Assignments",
        kind: SectionKind::Assignments,
        items: ASSIGNMENT_ITEMS,
        gradient: ("#22c55e", "#a3e635"),
    },
];

#[must_use]
pub fn find_subject(name: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|subject| subject.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_subjects_and_three_sections() {
        assert_eq!(SUBJECTS.len(), 7);
        assert_eq!(SECTIONS.len(), 3);
        assert!(SECTIONS.iter().all(|section| section.items.len() == 3));
    }

    #[test]
    fn note_keys_use_section_title() {
        let section = &SECTIONS[0];
        let key = section.note_key(&section.items[0]);
        assert_eq!(key, NoteKey::new("Modules", "Module 1: Introduction"));
    }

    #[test]
    fn assignment_keys_use_subject_name() {
        let item = &SECTIONS[2].items[1];
        assert_eq!(
            assignment_key("Science", item),
            AssignmentKey::new("Science", "Assignment 2")
        );
    }

    #[test]
    fn find_subject_is_exact() {
        assert!(find_subject("Art").is_some());
        assert!(find_subject("art").is_none());
    }
}
