use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "infinispan";

/// Label attached to shared instances; its value is the configured service name.
pub const DEV_SERVICE_LABEL: &str = "quarkus-dev-service-infinispan";

/// Dev Services options for the Infinispan client.
///
/// Built once per config-load cycle and never mutated afterwards. The `with_*`
/// methods consume the value and return a new one. Equality and hashing cover
/// every field, so two configs compare equal exactly when a previously started
/// server can be reused for the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DevServicesConfig {
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u32>,
    shared: bool,
    service_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifacts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    caches: BTreeMap<String, String>,
}

impl Default for DevServicesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: None,
            shared: true,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            artifacts: None,
            caches: BTreeMap::new(),
        }
    }
}

impl DevServicesConfig {
    /// Whether Dev Services may start or reuse a server at all.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Fixed listen port. `None` means the port is chosen randomly.
    ///
    /// The value is not range-checked here; see `services::ports::fixed_port`.
    pub fn port(&self) -> Option<u32> {
        self.port
    }

    /// Whether a running instance carrying the same label may be reused.
    pub fn shared(&self) -> bool {
        self.shared
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Maven coordinates or URLs of libraries to add to the server.
    pub fn artifacts(&self) -> Option<&[String]> {
        self.artifacts.as_deref()
    }

    /// Cache name to template identifier.
    pub fn caches(&self) -> &BTreeMap<String, String> {
        &self.caches
    }

    /// The label key/value pair used to tag and discover shared instances.
    pub fn discovery_label(&self) -> (&'static str, &str) {
        (DEV_SERVICE_LABEL, &self.service_name)
    }

    /// Equality against a possibly absent config. `None` never matches.
    pub fn same_as(&self, other: Option<&DevServicesConfig>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Combined hash over all fields, stable within a process.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_port(mut self, port: Option<u32>) -> Self {
        self.port = port;
        self
    }

    pub fn with_shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn with_artifacts(mut self, artifacts: Option<Vec<String>>) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn with_cache(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.caches.insert(name.into(), template.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DevServicesConfig {
        DevServicesConfig::default()
            .with_port(Some(11222))
            .with_service_name("grid")
            .with_artifacts(Some(vec!["org.postgresql:postgresql:42.3.1".into()]))
            .with_cache("c1", "DIST_SYNC")
            .with_cache("c2", "REPL_SYNC")
    }

    #[test]
    fn defaults() {
        let config = DevServicesConfig::default();
        assert!(config.enabled());
        assert_eq!(config.port(), None);
        assert!(config.shared());
        assert_eq!(config.service_name(), "infinispan");
        assert!(config.artifacts().is_none());
        assert!(config.caches().is_empty());
    }

    #[test]
    fn equality_is_reflexive_symmetric_transitive() {
        let a = sample();
        let b = sample();
        let c = sample();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn equal_configs_share_fingerprint() {
        assert_eq!(sample().fingerprint(), sample().fingerprint());
        assert_eq!(
            DevServicesConfig::default().fingerprint(),
            DevServicesConfig::default().fingerprint()
        );
    }

    #[test]
    fn any_single_field_change_breaks_equality() {
        let base = sample();
        let variants = [
            base.clone().with_enabled(false),
            base.clone().with_port(None),
            base.clone().with_port(Some(11223)),
            base.clone().with_shared(false),
            base.clone().with_service_name("other"),
            base.clone().with_artifacts(None),
            base.clone()
                .with_artifacts(Some(vec!["org.postgresql:postgresql:42.3.2".into()])),
            base.clone().with_cache("c3", "LOCAL"),
            base.clone().with_cache("c1", "REPL_SYNC"),
        ];
        for variant in &variants {
            assert_ne!(&base, variant);
        }
    }

    #[test]
    fn cache_order_does_not_matter() {
        let forward = DevServicesConfig::default()
            .with_cache("c1", "DIST_SYNC")
            .with_cache("c2", "REPL_SYNC");
        let reverse = DevServicesConfig::default()
            .with_cache("c2", "REPL_SYNC")
            .with_cache("c1", "DIST_SYNC");
        assert_eq!(forward, reverse);
        assert_eq!(forward.fingerprint(), reverse.fingerprint());
    }

    #[test]
    fn artifact_order_matters() {
        let a = DevServicesConfig::default().with_artifacts(Some(vec!["a".into(), "b".into()]));
        let b = DevServicesConfig::default().with_artifacts(Some(vec!["b".into(), "a".into()]));
        assert_ne!(a, b);
    }

    #[test]
    fn empty_artifacts_differ_from_unset() {
        let empty = DevServicesConfig::default().with_artifacts(Some(Vec::new()));
        assert_ne!(empty, DevServicesConfig::default());
    }

    #[test]
    fn same_as_absent_is_false() {
        let config = sample();
        assert!(!config.same_as(None));
        assert!(config.same_as(Some(&sample())));
        assert!(!config.same_as(Some(&DevServicesConfig::default())));
    }

    #[test]
    fn discovery_label_uses_service_name() {
        let config = DevServicesConfig::default().with_service_name("grid-a");
        assert_eq!(
            config.discovery_label(),
            ("quarkus-dev-service-infinispan", "grid-a")
        );
    }

    #[test]
    fn yaml_uses_kebab_case_and_defaults() {
        let yaml = "service-name: grid\ncaches:\n  c1: DIST_SYNC\n";
        let config: DevServicesConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config,
            DevServicesConfig::default()
                .with_service_name("grid")
                .with_cache("c1", "DIST_SYNC")
        );
    }

    #[test]
    fn yaml_rejects_unknown_fields() {
        let yaml = "enabled: true\nimage: infinispan/server\n";
        assert!(serde_yaml::from_str::<DevServicesConfig>(yaml).is_err());
    }

    #[test]
    fn serialization_skips_unset_values() {
        let json = serde_json::to_string(&DevServicesConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"enabled":true,"shared":true,"service-name":"infinispan"}"#
        );
    }

    #[test]
    fn config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DevServicesConfig>();
    }
}
