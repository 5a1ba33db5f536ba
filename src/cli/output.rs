use serde::Serialize;

use crate::model::list::TaskList;
use crate::model::task::{TaskMap, TaskNode};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct ListJson {
    pub name: String,
    pub current: bool,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct ListInfoJson {
    pub name: String,
    pub current: bool,
    pub tasks: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct TimerJson {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(text: &str, node: &TaskNode) -> TaskJson {
    TaskJson {
        text: text.to_string(),
        completed: node.completed,
        subtasks: tasks_to_json(&node.subtasks),
    }
}

pub fn tasks_to_json(tasks: &TaskMap) -> Vec<TaskJson> {
    tasks
        .iter()
        .map(|(text, node)| task_to_json(text, node))
        .collect()
}

pub fn list_to_json(name: &str, list: &TaskList, current: bool) -> ListJson {
    ListJson {
        name: name.to_string(),
        current,
        tasks: tasks_to_json(&list.tasks),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line checkbox summary
pub fn format_task_line(text: &str, node: &TaskNode) -> String {
    let checkbox = if node.completed { 'x' } else { ' ' };
    format!("[{}] {}", checkbox, text)
}

/// Format a task with its subtasks, indented
pub fn format_task_tree(text: &str, node: &TaskNode, indent: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let prefix = "  ".repeat(indent);
    lines.push(format!("{}{}", prefix, format_task_line(text, node)));

    for (sub_text, sub) in &node.subtasks {
        lines.extend(format_task_tree(sub_text, sub, indent + 1));
    }
    lines
}

/// Format one whole list: name header, then the indented task tree
pub fn format_list(name: &str, list: &TaskList, current: bool) -> Vec<String> {
    let marker = if current { " (current)" } else { "" };
    let mut lines = vec![format!("{}{}", name, marker)];
    if list.is_empty() {
        lines.push("  (empty)".to_string());
        return lines;
    }
    for (text, node) in &list.tasks {
        lines.extend(format_task_tree(text, node, 1));
    }
    lines
}

/// One line per list for the `lists` command: marker, name, counts
pub fn format_list_summary(name: &str, list: &TaskList, current: bool) -> String {
    let marker = if current { '*' } else { ' ' };
    format!(
        "{} {}  {}/{} done",
        marker,
        name,
        list.completed_tasks(),
        list.total_tasks()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops::{add_task, toggle_complete};
    use insta::assert_snapshot;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        add_task(&mut list.tasks, "Buy milk").unwrap();
        add_task(&mut list.tasks, "Call mom").unwrap();
        let milk = list.tasks.get_mut("Buy milk").unwrap();
        add_task(&mut milk.subtasks, "Buy 2%").unwrap();
        add_task(&mut milk.subtasks, "Check coupons").unwrap();
        toggle_complete(milk.subtasks.get_mut("Buy 2%").unwrap());
        toggle_complete(list.tasks.get_mut("Call mom").unwrap());
        list
    }

    #[test]
    fn test_format_list_renders_nested_checkboxes() {
        let list = sample_list();
        let output = format_list("Groceries", &list, true).join("\n");
        assert_snapshot!(output, @r"
        Groceries (current)
          [ ] Buy milk
            [x] Buy 2%
            [ ] Check coupons
          [x] Call mom
        ");
    }

    #[test]
    fn test_format_empty_list() {
        let list = TaskList::new();
        let output = format_list("Default", &list, false).join("\n");
        assert_snapshot!(output, @r"
        Default
          (empty)
        ");
    }

    #[test]
    fn test_format_list_summary_line() {
        let list = sample_list();
        assert_eq!(
            format_list_summary("Groceries", &list, true),
            "* Groceries  2/4 done"
        );
        assert_eq!(
            format_list_summary("Groceries", &list, false),
            "  Groceries  2/4 done"
        );
    }

    #[test]
    fn test_json_tree_shape() {
        let list = sample_list();
        let json = serde_json::to_value(list_to_json("Groceries", &list, true)).unwrap();

        assert_eq!(json["name"], "Groceries");
        assert_eq!(json["current"], true);
        assert_eq!(json["tasks"][0]["text"], "Buy milk");
        assert_eq!(json["tasks"][0]["completed"], false);
        assert_eq!(json["tasks"][0]["subtasks"][0]["text"], "Buy 2%");
        assert_eq!(json["tasks"][0]["subtasks"][0]["completed"], true);
        // Leaf tasks omit the empty subtasks array
        assert!(json["tasks"][1]["subtasks"].is_null());
    }
}
