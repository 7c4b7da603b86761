use portal_core::model::curriculum::{SECTIONS, find_subject};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectHeaderVm {
    pub title: String,
    pub accent: &'static str,
}

impl SubjectHeaderVm {
    /// Unknown subjects still get a plain title.
    #[must_use]
    pub fn for_subject(name: &str) -> Self {
        match find_subject(name) {
            Some(subject) => Self {
                title: format!("{} {}", subject.icon, subject.name),
                accent: subject.accent,
            },
            None => Self {
                title: name.to_string(),
                accent: "#f3f4f6",
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTabVm {
    pub index: usize,
    pub title: &'static str,
    pub active: bool,
}

#[must_use]
pub fn map_section_tabs(active: usize) -> Vec<SectionTabVm> {
    SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| SectionTabVm {
            index,
            title: section.title,
            active: index == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_catalog_icon() {
        let header = SubjectHeaderVm::for_subject("Science");
        assert_eq!(header.title, "🔬 Science");
        assert_eq!(header.accent, "#dbeafe");
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let tabs = map_section_tabs(2);
        assert_eq!(tabs.len(), 3);
        assert_eq!(
            tabs.iter().filter(|tab| tab.active).map(|tab| tab.title).collect::<Vec<_>>(),
            vec!["Assignments"]
        );
    }
}
