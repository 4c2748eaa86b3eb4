use serde::{Deserialize, Serialize};

/// Greeting returned by `GET /`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HelloResponse {
    pub message: String,
    pub category: String,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self {
            message: "Hello, world!".to_string(),
            category: "default".to_string(),
        }
    }
}
