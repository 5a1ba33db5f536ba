use indexmap::IndexMap;

use crate::model::list::TaskList;

/// Name of the list created whenever the registry would otherwise be empty
pub const DEFAULT_LIST: &str = "Default";

/// Every task list, keyed by unique name, plus the current selection
///
/// The registry owns all lists and, through them, every task node.
/// It is never empty and `current` always names one of its lists; the
/// operations that remove or rename lists keep both promises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// All lists in creation order
    pub lists: IndexMap<String, TaskList>,
    /// Name of the list that task commands operate on
    pub current: String,
}

impl Registry {
    /// A registry holding only an empty Default list
    pub fn new() -> Self {
        Registry::bootstrap(IndexMap::new(), None)
    }

    /// Build a registry from loaded lists and a remembered selection
    ///
    /// An empty load is the first-run case and gets the Default list. A
    /// remembered selection that no longer names a list falls back to the
    /// first one.
    pub fn bootstrap(mut lists: IndexMap<String, TaskList>, selected: Option<&str>) -> Self {
        if lists.is_empty() {
            lists.insert(DEFAULT_LIST.to_string(), TaskList::new());
        }
        let current = match selected {
            Some(name) if lists.contains_key(name) => name.to_string(),
            _ => match lists.keys().next() {
                Some(first) => first.clone(),
                None => DEFAULT_LIST.to_string(),
            },
        };
        Registry { lists, current }
    }

    /// The currently selected list
    pub fn current_list(&self) -> &TaskList {
        &self.lists[&self.current]
    }

    /// The currently selected list, mutable
    pub fn current_list_mut(&mut self) -> &mut TaskList {
        &mut self.lists[&self.current]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_load_bootstraps_default() {
        let registry = Registry::bootstrap(IndexMap::new(), None);
        assert_eq!(registry.lists.len(), 1);
        assert!(registry.lists.contains_key(DEFAULT_LIST));
        assert_eq!(registry.current, DEFAULT_LIST);
        assert!(registry.current_list().is_empty());
    }

    #[test]
    fn nonempty_load_is_not_padded_with_default() {
        let mut lists = IndexMap::new();
        lists.insert("Groceries".to_string(), TaskList::new());
        let registry = Registry::bootstrap(lists, None);
        assert_eq!(registry.lists.len(), 1);
        assert!(!registry.lists.contains_key(DEFAULT_LIST));
        assert_eq!(registry.current, "Groceries");
    }

    #[test]
    fn remembered_selection_is_honored() {
        let mut lists = IndexMap::new();
        lists.insert("A".to_string(), TaskList::new());
        lists.insert("B".to_string(), TaskList::new());
        let registry = Registry::bootstrap(lists, Some("B"));
        assert_eq!(registry.current, "B");
    }

    #[test]
    fn stale_selection_falls_back_to_first_list() {
        let mut lists = IndexMap::new();
        lists.insert("A".to_string(), TaskList::new());
        lists.insert("B".to_string(), TaskList::new());
        let registry = Registry::bootstrap(lists, Some("Gone"));
        assert_eq!(registry.current, "A");
    }
}
