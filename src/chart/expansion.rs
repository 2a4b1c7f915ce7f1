use std::collections::HashMap;

use crate::org::EmployeeNode;

/// Per-node expand/collapse flags keyed by employee id.
///
/// Entries are never removed. Ids missing from the map resolve to a
/// caller-supplied fallback, which the layout sets to the parent's own value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn from_map(expanded: HashMap<String, bool>) -> Self {
        Self { expanded }
    }

    /// Expands the root and every node with children down to `expanded_levels`
    /// levels below it; deeper nodes with children start collapsed.
    pub fn seeded(root: &EmployeeNode, expanded_levels: usize) -> Self {
        let mut expanded = HashMap::new();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if node.has_children() {
                expanded.insert(node.id.clone(), depth <= expanded_levels);
            }
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }

        Self { expanded }
    }

    pub fn is_expanded(&self, id: &str, fallback: bool) -> bool {
        self.expanded.get(id).copied().unwrap_or(fallback)
    }

    pub fn toggle(&mut self, id: &str) {
        let entry = self.expanded.entry(id.to_owned()).or_insert(true);
        *entry = !*entry;
    }

    pub fn collapse_all(&mut self) {
        for value in self.expanded.values_mut() {
            *value = false;
        }
    }

    pub fn expand_all(&mut self, root: &EmployeeNode) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.has_children() {
                self.expanded.insert(node.id.clone(), true);
            }
            stack.extend(node.children.iter());
        }
    }

    /// Expands every id on `path`, typically the ancestors of a selection.
    pub fn reveal<'a>(&mut self, path: impl IntoIterator<Item = &'a str>) {
        for id in path {
            self.expanded.insert(id.to_owned(), true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::fixture::{northwind, small_chain};

    #[test]
    fn missing_ids_use_fallback() {
        let state = ExpansionState::default();
        assert!(state.is_expanded("anyone", true));
        assert!(!state.is_expanded("anyone", false));
    }

    #[test]
    fn first_toggle_of_unknown_id_collapses() {
        let mut state = ExpansionState::default();
        state.toggle("coo");
        assert!(!state.is_expanded("coo", true));
        state.toggle("coo");
        assert!(state.is_expanded("coo", false));
        assert_eq!(
            state,
            ExpansionState::from_map(HashMap::from([("coo".to_owned(), true)]))
        );
    }

    #[test]
    fn seed_expands_root_and_two_levels() {
        let state = ExpansionState::seeded(&northwind(), 2);
        assert!(state.is_expanded("ceo", false));
        assert!(state.is_expanded("coo", false));
        assert!(state.is_expanded("cfo", false));
        assert!(state.is_expanded("vp-upstream", false));
        assert!(state.is_expanded("vp-downstream", false));
        assert!(!state.is_expanded("dir-reservoir", true));
        assert!(!state.is_expanded("senior-petroleum", true));
        // leaves never get an entry
        assert!(state.is_expanded("vp-hr", true));
    }

    #[test]
    fn collapse_all_only_touches_known_ids() {
        let mut state = ExpansionState::seeded(&small_chain(), 3);
        state.collapse_all();
        assert_eq!(state.expanded.len(), 2);
        assert!(state.is_expanded("vp1", true));
        assert!(!state.is_expanded("ceo", true));
        assert!(!state.is_expanded("coo", true));
    }

    #[test]
    fn expand_all_and_reveal_set_true() {
        let root = northwind();
        let mut state = ExpansionState::seeded(&root, 0);
        assert!(state.is_expanded("ceo", false));
        assert!(!state.is_expanded("coo", true));

        state.reveal(["ceo", "coo"]);
        assert!(state.is_expanded("coo", false));
        assert!(!state.is_expanded("vp-upstream", true));

        state.expand_all(&root);
        assert!(state.is_expanded("senior-petroleum", false));
    }
}
