use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::DevServicesConfig;

/// A server started by Dev Services, together with the config it was started with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapturedService {
    pub config: DevServicesConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl CapturedService {
    pub fn new(config: DevServicesConfig, instance_id: Option<String>) -> Self {
        Self {
            config,
            instance_id,
            started_at: Utc::now(),
        }
    }
}
