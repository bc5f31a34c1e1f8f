use crate::models::{CapturedService, DevServicesConfig};

/// What to do with the dev service for a freshly loaded config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReuseDecision {
    /// Dev Services are switched off; any captured server should be stopped.
    Disabled,
    /// Nothing captured yet.
    Start,
    /// The captured server was started with an equal config.
    Reuse,
    /// The config changed since the captured server was started.
    Restart,
}

impl ReuseDecision {
    pub fn label(&self) -> &'static str {
        match self {
            ReuseDecision::Disabled => "disabled",
            ReuseDecision::Start => "start",
            ReuseDecision::Reuse => "reuse",
            ReuseDecision::Restart => "restart",
        }
    }

    /// Whether a new server has to be started.
    pub fn needs_start(&self) -> bool {
        matches!(self, ReuseDecision::Start | ReuseDecision::Restart)
    }
}

/// Tracks the server started in a previous config-load cycle.
#[derive(Debug, Default)]
pub struct ReuseTracker {
    captured: Option<CapturedService>,
}

impl ReuseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_captured(captured: Option<CapturedService>) -> Self {
        Self { captured }
    }

    pub fn captured(&self) -> Option<&CapturedService> {
        self.captured.as_ref()
    }

    pub fn decide(&self, config: &DevServicesConfig) -> ReuseDecision {
        let previous = self.captured.as_ref().map(|c| &c.config);
        let decision = if !config.enabled() {
            ReuseDecision::Disabled
        } else if previous.is_none() {
            ReuseDecision::Start
        } else if config.same_as(previous) {
            ReuseDecision::Reuse
        } else {
            ReuseDecision::Restart
        };

        tracing::info!(
            decision = decision.label(),
            service_name = config.service_name(),
            fingerprint = config.fingerprint(),
            "dev services reuse decision"
        );
        decision
    }

    pub fn record_started(&mut self, config: DevServicesConfig, instance_id: Option<String>) {
        tracing::debug!(
            service_name = config.service_name(),
            instance_id = ?instance_id,
            "captured dev service"
        );
        self.captured = Some(CapturedService::new(config, instance_id));
    }

    pub fn clear(&mut self) -> Option<CapturedService> {
        self.captured.take()
    }
}
