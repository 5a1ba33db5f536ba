use crate::model::task::{TaskMap, TaskNode};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task text cannot be empty")]
    EmptyText,
    #[error("task already exists: {0}")]
    Duplicate(String),
    #[error("task not found: {0}")]
    NotFound(String),
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Insert a new unchecked task into a sibling collection.
///
/// The same operation serves top-level tasks (a list's task map) and
/// subtasks (any node's subtask map), at any depth. Text is trimmed first;
/// empty or duplicate text is rejected and the collection is left
/// untouched. Returns the canonical (trimmed) text.
pub fn add_task(siblings: &mut TaskMap, text: &str) -> Result<String, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    if siblings.contains_key(text) {
        return Err(TaskError::Duplicate(text.to_string()));
    }
    siblings.insert(text.to_string(), TaskNode::new());
    Ok(text.to_string())
}

/// Flip a task's completion state. Subtasks and ancestors are not touched.
pub fn toggle_complete(node: &mut TaskNode) {
    node.completed = !node.completed;
}

/// Remove a task and its entire subtree from a sibling collection.
///
/// Removing text that is not present is a no-op; the return value says
/// whether anything was removed. `shift_remove` keeps the remaining
/// siblings in their original order.
pub fn delete_task(siblings: &mut TaskMap, text: &str) -> bool {
    siblings.shift_remove(text).is_some()
}

// ---------------------------------------------------------------------------
// Path resolution
// ---------------------------------------------------------------------------

/// Find a node by its chain of ancestor texts, root first.
///
/// An empty path finds nothing; a one-element path addresses a top-level
/// task.
pub fn find_node<'a>(tasks: &'a TaskMap, path: &[&str]) -> Option<&'a TaskNode> {
    let (first, rest) = path.split_first()?;
    let node = tasks.get(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find_node(&node.subtasks, rest)
    }
}

/// Find a node by its chain of ancestor texts, returning it mutably.
pub fn find_node_mut<'a>(tasks: &'a mut TaskMap, path: &[&str]) -> Option<&'a mut TaskNode> {
    let (first, rest) = path.split_first()?;
    let node = tasks.get_mut(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find_node_mut(&mut node.subtasks, rest)
    }
}

/// Resolve the sibling collection a parent path points into: the top-level
/// map for an empty path, otherwise the subtasks of the addressed node.
pub fn siblings_mut<'a>(
    tasks: &'a mut TaskMap,
    parent_path: &[&str],
) -> Result<&'a mut TaskMap, TaskError> {
    if parent_path.is_empty() {
        return Ok(tasks);
    }
    match find_node_mut(tasks, parent_path) {
        Some(node) => Ok(&mut node.subtasks),
        None => Err(TaskError::NotFound(parent_path.join(" / "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> TaskMap {
        let mut tasks = TaskMap::new();
        add_task(&mut tasks, "Buy milk").unwrap();
        add_task(&mut tasks, "Call mom").unwrap();
        add_task(&mut tasks, "Pack for trip").unwrap();
        let milk = tasks.get_mut("Buy milk").unwrap();
        add_task(&mut milk.subtasks, "Buy 2%").unwrap();
        add_task(&mut milk.subtasks, "Check coupons").unwrap();
        tasks
    }

    // --- add ---

    #[test]
    fn test_add_task_starts_unchecked() {
        let mut tasks = TaskMap::new();
        let key = add_task(&mut tasks, "Buy milk").unwrap();
        assert_eq!(key, "Buy milk");

        let node = tasks.get("Buy milk").unwrap();
        assert!(!node.completed);
        assert!(node.subtasks.is_empty());
    }

    #[test]
    fn test_add_task_trims_text() {
        let mut tasks = TaskMap::new();
        let key = add_task(&mut tasks, "  Buy milk  ").unwrap();
        assert_eq!(key, "Buy milk");
        assert!(tasks.contains_key("Buy milk"));
    }

    #[test]
    fn test_add_task_rejects_empty_text() {
        let mut tasks = TaskMap::new();
        assert!(matches!(add_task(&mut tasks, ""), Err(TaskError::EmptyText)));
        assert!(matches!(
            add_task(&mut tasks, "   "),
            Err(TaskError::EmptyText)
        ));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_add_task_rejects_duplicate_sibling() {
        let mut tasks = sample_tasks();
        let err = add_task(&mut tasks, "Buy milk").unwrap_err();
        assert!(matches!(err, TaskError::Duplicate(_)));
        // Trimming happens before the uniqueness check
        let err = add_task(&mut tasks, " Buy milk ").unwrap_err();
        assert!(matches!(err, TaskError::Duplicate(_)));
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn test_same_text_allowed_under_different_parents() {
        let mut tasks = sample_tasks();
        let trip = tasks.get_mut("Pack for trip").unwrap();
        add_task(&mut trip.subtasks, "Buy milk").unwrap();
        assert!(tasks.contains_key("Buy milk"));
        assert!(tasks["Pack for trip"].subtasks.contains_key("Buy milk"));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let tasks = sample_tasks();
        let texts: Vec<&str> = tasks.keys().map(|k| k.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Call mom", "Pack for trip"]);
    }

    #[test]
    fn test_nesting_depth_is_unbounded() {
        let mut tasks = TaskMap::new();
        add_task(&mut tasks, "level 0").unwrap();
        let mut current = tasks.get_mut("level 0").unwrap();
        for depth in 1..=5 {
            let text = format!("level {}", depth);
            add_task(&mut current.subtasks, &text).unwrap();
            current = current.subtasks.get_mut(&text).unwrap();
        }
        let node = find_node(
            &tasks,
            &["level 0", "level 1", "level 2", "level 3", "level 4", "level 5"],
        );
        assert!(node.is_some());
    }

    // --- toggle ---

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let mut tasks = sample_tasks();
        let node = tasks.get_mut("Buy milk").unwrap();

        toggle_complete(node);
        assert!(node.completed);

        toggle_complete(node);
        assert!(!node.completed);
    }

    #[test]
    fn test_toggle_does_not_cascade() {
        let mut tasks = sample_tasks();
        toggle_complete(tasks.get_mut("Buy milk").unwrap());

        let milk = &tasks["Buy milk"];
        assert!(milk.completed);
        assert!(milk.subtasks.values().all(|sub| !sub.completed));

        // Completing every subtask does not complete the parent either
        let mut tasks = sample_tasks();
        let milk = tasks.get_mut("Buy milk").unwrap();
        for sub in milk.subtasks.values_mut() {
            toggle_complete(sub);
        }
        assert!(!tasks["Buy milk"].completed);
    }

    // --- delete ---

    #[test]
    fn test_delete_removes_whole_subtree() {
        let mut tasks = sample_tasks();
        assert!(delete_task(&mut tasks, "Buy milk"));
        assert!(!tasks.contains_key("Buy milk"));
        assert!(find_node(&tasks, &["Buy milk", "Buy 2%"]).is_none());
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut tasks = sample_tasks();
        assert!(!delete_task(&mut tasks, "Nope"));
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn test_delete_keeps_sibling_order() {
        let mut tasks = sample_tasks();
        delete_task(&mut tasks, "Call mom");
        let texts: Vec<&str> = tasks.keys().map(|k| k.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Pack for trip"]);

        // A later add appends after the survivors
        add_task(&mut tasks, "Water plants").unwrap();
        let texts: Vec<&str> = tasks.keys().map(|k| k.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Pack for trip", "Water plants"]);
    }

    #[test]
    fn test_deleted_text_can_be_reused() {
        let mut tasks = sample_tasks();
        delete_task(&mut tasks, "Buy milk");
        add_task(&mut tasks, "Buy milk").unwrap();

        let node = &tasks["Buy milk"];
        assert!(!node.completed);
        assert!(node.subtasks.is_empty());
        // Re-added at the end, not at its old position
        assert_eq!(tasks.get_index_of("Buy milk"), Some(2));
    }

    // --- path resolution ---

    #[test]
    fn test_find_node_walks_the_tree() {
        let tasks = sample_tasks();
        assert!(find_node(&tasks, &["Buy milk"]).is_some());
        assert!(find_node(&tasks, &["Buy milk", "Buy 2%"]).is_some());
        assert!(find_node(&tasks, &["Buy milk", "Nope"]).is_none());
        assert!(find_node(&tasks, &["Nope", "Buy 2%"]).is_none());
        assert!(find_node(&tasks, &[]).is_none());
    }

    #[test]
    fn test_siblings_mut_resolves_parents() {
        let mut tasks = sample_tasks();

        let top = siblings_mut(&mut tasks, &[]).unwrap();
        assert_eq!(top.len(), 3);

        let subs = siblings_mut(&mut tasks, &["Buy milk"]).unwrap();
        assert_eq!(subs.len(), 2);

        let err = siblings_mut(&mut tasks, &["Nope"]).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }
}
