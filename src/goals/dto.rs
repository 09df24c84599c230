use serde::Deserialize;

use super::repo_types::Priority;

/// Raw add/edit goal form. The target date arrives as the text the user
/// typed and is parsed at the validation boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub target_date: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}
