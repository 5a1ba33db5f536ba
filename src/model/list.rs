use serde::{Deserialize, Serialize};

use crate::model::task::TaskMap;

/// A named, ordered collection of top-level tasks
///
/// The list's name lives in the registry as its key, so renaming a list
/// moves the entry without touching its contents. Serialization is
/// transparent: on disk a list is just its task map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    /// Top-level tasks in insertion order
    pub tasks: TaskMap,
}

impl TaskList {
    /// A new empty list
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Number of top-level tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks at all
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Total number of tasks, including every nested subtask
    pub fn total_tasks(&self) -> usize {
        count_nodes(&self.tasks).0
    }

    /// Number of completed tasks, including nested subtasks
    pub fn completed_tasks(&self) -> usize {
        count_nodes(&self.tasks).1
    }
}

/// Walk a task map and return (total, completed) counts for the subtree
fn count_nodes(tasks: &TaskMap) -> (usize, usize) {
    let mut total = 0;
    let mut completed = 0;
    for node in tasks.values() {
        total += 1;
        if node.completed {
            completed += 1;
        }
        let (t, c) = count_nodes(&node.subtasks);
        total += t;
        completed += c;
    }
    (total, completed)
}
