use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the appliance's gravity database.
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Seconds SQLite waits on a locked database before failing the statement.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

fn default_db_path() -> String {
    "/etc/pihole/gravity.db".to_string()
}

fn default_busy_timeout_secs() -> u64 {
    5
}
