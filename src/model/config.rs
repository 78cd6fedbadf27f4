use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://94.74.86.174:8080/api";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Absent means requests never time out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        self.request_timeout_secs
            .map(std::time::Duration::from_secs)
    }
}

/// Durable client state; `token` is the only persisted session datum.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClientState {
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
