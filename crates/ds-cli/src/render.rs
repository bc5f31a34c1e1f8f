use std::fmt::Write;

use ds_core::models::{CapturedService, ConfigKind, DevServicesConfig, SCHEMA};
use ds_core::services::reuse::ReuseDecision;

const KEY_WIDTH: usize = 14;

/// Render the resolved config as an aligned two-column table.
pub fn render_config(config: &DevServicesConfig) -> String {
    let mut out = String::new();
    row(&mut out, "enabled", &config.enabled().to_string());
    row(
        &mut out,
        "port",
        &config
            .port()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "random".into()),
    );
    row(&mut out, "shared", &config.shared().to_string());
    row(&mut out, "service-name", config.service_name());
    let (label, value) = config.discovery_label();
    row(&mut out, "label", &format!("{label}={value}"));

    match config.artifacts() {
        Some(artifacts) => list(&mut out, "artifacts", artifacts.iter().cloned()),
        None => row(&mut out, "artifacts", "none"),
    }
    if config.caches().is_empty() {
        row(&mut out, "caches", "none");
    } else {
        list(
            &mut out,
            "caches",
            config
                .caches()
                .iter()
                .map(|(name, template)| format!("{name} = {template}")),
        );
    }
    out
}

/// Render a reuse decision and the server it applies to.
pub fn render_decision(decision: ReuseDecision, captured: Option<&CapturedService>) -> String {
    let mut out = String::new();
    row(&mut out, "decision", decision.label());
    if let Some(captured) = captured {
        row(
            &mut out,
            "instance",
            captured.instance_id.as_deref().unwrap_or("unknown"),
        );
        row(
            &mut out,
            "started",
            &captured.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        );
        row(&mut out, "service-name", captured.config.service_name());
    }
    out
}

/// Render the recognised options with their type, default and description.
pub fn render_schema() -> String {
    let mut out = String::new();
    for item in SCHEMA {
        let name = match item.kind {
            ConfigKind::StringMap => format!("{}.<name>", item.name),
            _ => item.name.to_string(),
        };
        let detail = format!(
            "{:<16}{:<12}{}",
            item.kind.label(),
            item.default.unwrap_or("-"),
            item.description
        );
        row(&mut out, &name, &detail);
    }
    out
}

fn row(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "{key:<width$}{value}", width = KEY_WIDTH);
}

fn list(out: &mut String, key: &str, values: impl Iterator<Item = String>) {
    let mut first = true;
    for value in values {
        let key = if first { key } else { "" };
        row(out, key, &value);
        first = false;
    }
    if first {
        row(out, key, "[]");
    }
}
