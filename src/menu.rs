/// Top-level views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuSelection {
    #[default]
    Profile,
    Publications,
    DataExplorer,
    Contact,
}

impl MenuSelection {
    /// Radio order in the sidebar.
    pub const ALL: [MenuSelection; 4] = [
        MenuSelection::Profile,
        MenuSelection::Publications,
        MenuSelection::DataExplorer,
        MenuSelection::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuSelection::Profile => "Researcher Profile",
            MenuSelection::Publications => "Publications",
            MenuSelection::DataExplorer => "STEM Data Explorer",
            MenuSelection::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_distinct() {
        let labels: HashSet<_> = MenuSelection::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels.len(), MenuSelection::ALL.len());
        assert_eq!(MenuSelection::DataExplorer.label(), "STEM Data Explorer");
    }

    #[test]
    fn explorer_is_navigable() {
        assert!(MenuSelection::ALL.contains(&MenuSelection::DataExplorer));
        assert_eq!(MenuSelection::default(), MenuSelection::Profile);
    }
}
