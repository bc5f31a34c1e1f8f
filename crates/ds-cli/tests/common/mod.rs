// Each test binary compiles this module independently and uses a different
// subset of helpers, so unused-function warnings are expected.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};

use ds_core::models::{CapturedService, DevServicesConfig};

/// A config with every option set away from its default.
pub fn full_config() -> DevServicesConfig {
    DevServicesConfig::default()
        .with_port(Some(11222))
        .with_shared(false)
        .with_service_name("grid")
        .with_artifacts(Some(vec![
            "org.postgresql:postgresql:42.3.1".into(),
            "https://example.com/lib.jar".into(),
        ]))
        .with_cache("cache2", "REPL_SYNC")
        .with_cache("cache1", "DIST_SYNC")
}

/// A captured server with a fixed start time for deterministic output.
pub fn captured(config: DevServicesConfig) -> CapturedService {
    CapturedService {
        config,
        instance_id: Some("container-1".into()),
        started_at: Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap(),
    }
}
