use std::path::Path;

use ds_core::error::Result;
use ds_core::models::{CapturedService, DevServicesConfig};
use ds_core::services::ports;
use ds_core::services::reuse::{ReuseDecision, ReuseTracker};
use ds_core::services::state::CapturedStateStore;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub decision: ReuseDecision,
    /// The server the decision leaves in place, if any.
    pub captured: Option<CapturedService>,
}

/// Decide what to do with the server captured under `state_dir` and persist the result.
///
/// A new server is only recorded once its fixed port has passed the range check.
pub async fn run_plan(
    state_dir: &Path,
    config: DevServicesConfig,
    instance_id: Option<String>,
) -> Result<PlanOutcome> {
    let store = CapturedStateStore::new(state_dir);
    let mut tracker = ReuseTracker::with_captured(store.load().await?);

    let decision = tracker.decide(&config);
    match decision {
        ReuseDecision::Disabled => {
            tracker.clear();
            store.clear().await?;
        }
        ReuseDecision::Start | ReuseDecision::Restart => {
            let port = ports::fixed_port(&config)?;
            tracing::debug!(port = ?port, decision = decision.label(), "starting dev service");
            tracker.record_started(config, instance_id);
            if let Some(captured) = tracker.captured() {
                store.save(captured).await?;
            }
        }
        ReuseDecision::Reuse => {}
    }

    Ok(PlanOutcome {
        decision,
        captured: tracker.captured().cloned(),
    })
}
