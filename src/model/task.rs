use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered text-to-node collection used at every level of the task tree
pub type TaskMap = IndexMap<String, TaskNode>;

/// A single to-do entry
///
/// The task's text is not a field here: it is the key in the parent
/// collection, which makes sibling texts unique by construction. The same
/// shape recurs at every depth, so a top-level task and a deeply nested
/// subtask are the same type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    /// Completion state; toggling never cascades up or down the tree
    #[serde(default)]
    pub completed: bool,
    /// Nested subtasks in insertion order
    #[serde(default)]
    pub subtasks: TaskMap,
}

impl TaskNode {
    /// A fresh unchecked task with no subtasks
    pub fn new() -> Self {
        TaskNode::default()
    }

    /// Whether this node has any subtasks
    pub fn has_subtasks(&self) -> bool {
        !self.subtasks.is_empty()
    }
}
