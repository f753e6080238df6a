use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Label shown next to the date field.
    #[serde(default = "default_label")]
    pub label: String,
    /// Lowest year the year field accepts (default: 2010). The ceiling is
    /// always the current year + 1.
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Initial date as `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub initial: Option<String>,
    /// Start with editing disabled.
    #[serde(default)]
    pub disabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: default_label(),
            min_year: default_min_year(),
            initial: None,
            disabled: false,
        }
    }
}

fn default_label() -> String {
    "Date".to_string()
}

fn default_min_year() -> i32 {
    2010
}
