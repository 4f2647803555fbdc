use serde::{Deserialize, Serialize};

fn default_save_text() -> bool {
    true
}

fn default_max_entries() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Persist recognized text to the history file.
    #[serde(default = "default_save_text")]
    pub save_text: bool,
    /// Oldest entries are dropped past this count.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            save_text: default_save_text(),
            max_entries: default_max_entries(),
        }
    }
}
