use crate::model::list::TaskList;
use crate::model::registry::{DEFAULT_LIST, Registry};

/// Error type for list registry operations
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("list name cannot be empty")]
    EmptyName,
    #[error("list already exists: {0}")]
    Duplicate(String),
    #[error("list not found: {0}")]
    NotFound(String),
}

// ---------------------------------------------------------------------------
// Create / rename / delete / select
// ---------------------------------------------------------------------------

/// Create a new empty list and select it. Returns the generated name.
///
/// The name is the base plus the smallest positive integer suffix not
/// already taken, starting from 1, so deleting "List 2" frees that name
/// for a later creation. A blank base falls back to "List".
pub fn create_list(registry: &mut Registry, base: &str) -> String {
    let base = base.trim();
    let base = if base.is_empty() { "List" } else { base };

    let mut n = 1;
    let name = loop {
        let candidate = format!("{} {}", base, n);
        if !registry.lists.contains_key(&candidate) {
            break candidate;
        }
        n += 1;
    };

    registry.lists.insert(name.clone(), TaskList::new());
    registry.current = name.clone();
    name
}

/// Rename a list in place, keeping its position and contents.
///
/// The new name is trimmed and must be non-empty and unused. The
/// selection follows a renamed current list.
pub fn rename_list(registry: &mut Registry, old: &str, new: &str) -> Result<(), ListError> {
    let new = new.trim();
    if new.is_empty() {
        return Err(ListError::EmptyName);
    }
    if registry.lists.contains_key(new) {
        return Err(ListError::Duplicate(new.to_string()));
    }
    let index = registry
        .lists
        .get_index_of(old)
        .ok_or_else(|| ListError::NotFound(old.to_string()))?;

    // Re-key at the same index so list order is undisturbed
    if let Some((_, list)) = registry.lists.shift_remove_index(index) {
        registry.lists.shift_insert(index, new.to_string(), list);
    }
    if registry.current == old {
        registry.current = new.to_string();
    }
    Ok(())
}

/// Delete a list and everything in it.
///
/// The registry never goes empty: dropping the last list immediately
/// recreates an empty Default. When the deleted list was current, the
/// first remaining list becomes current.
pub fn delete_list(registry: &mut Registry, name: &str) -> Result<(), ListError> {
    if registry.lists.shift_remove(name).is_none() {
        return Err(ListError::NotFound(name.to_string()));
    }
    if registry.lists.is_empty() {
        registry
            .lists
            .insert(DEFAULT_LIST.to_string(), TaskList::new());
    }
    if registry.current == name
        && let Some(first) = registry.lists.keys().next()
    {
        registry.current = first.clone();
    }
    Ok(())
}

/// Select the list that task operations apply to.
pub fn select_list(registry: &mut Registry, name: &str) -> Result<(), ListError> {
    if !registry.lists.contains_key(name) {
        return Err(ListError::NotFound(name.to_string()));
    }
    registry.current = name.to_string();
    Ok(())
}
