use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted selection state (written to .state.json)
///
/// Kept apart from the store so losing it costs a preference, never a
/// task: a missing or malformed file just means no remembered selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Name of the list task commands operate on
    #[serde(default)]
    pub current_list: String,
}

/// Read .state.json from the data directory
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let path = dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data directory
pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
