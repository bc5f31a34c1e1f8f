use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DevServicesError, Result};
use crate::models::schema::{self, ConfigField, ConfigKind, SCHEMA};
use crate::models::DevServicesConfig;

// key, optional separator, value
static PROPERTY_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^=:\s]+)\s*[=:]?\s*(.*)$").unwrap());

/// Parse `.properties` text into a key/value map. Later keys win.
pub fn parse_properties(contents: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    let mut logical = String::new();

    for raw_line in contents.lines() {
        let line = if logical.is_empty() {
            raw_line
        } else {
            raw_line.trim_start()
        };
        if logical.is_empty() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
        }

        let trailing = line.len() - line.trim_end_matches('\\').len();
        if trailing % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continue;
        }
        logical.push_str(line);

        if let Some(caps) = PROPERTY_LINE_RE.captures(&logical) {
            properties.insert(caps[1].to_string(), caps[2].to_string());
        }
        logical.clear();
    }

    if let Some(caps) = PROPERTY_LINE_RE.captures(&logical) {
        properties.insert(caps[1].to_string(), caps[2].to_string());
    }

    properties
}

/// Build a config from the `<prefix>.*` keys of a property map.
///
/// Absent and empty keys fall back to the schema defaults. Unknown keys under
/// the prefix are logged and ignored.
pub fn from_properties(
    prefix: &str,
    properties: &BTreeMap<String, String>,
) -> Result<DevServicesConfig> {
    apply_properties(DevServicesConfig::default(), prefix, properties)
}

fn apply_properties(
    mut config: DevServicesConfig,
    prefix: &str,
    properties: &BTreeMap<String, String>,
) -> Result<DevServicesConfig> {
    let group_prefix = format!("{prefix}.");

    for (key, value) in properties {
        let Some(suffix) = key.strip_prefix(&group_prefix) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            tracing::debug!(key = %key, "empty value, keeping current");
            continue;
        }
        let Some(item) = schema::lookup(suffix) else {
            tracing::warn!(key = %key, "unrecognized dev services option");
            continue;
        };

        config = match item.field {
            ConfigField::Enabled => config.with_enabled(parse_bool(key, value)?),
            ConfigField::Port => config.with_port(Some(parse_port(key, value)?)),
            ConfigField::Shared => config.with_shared(parse_bool(key, value)?),
            ConfigField::ServiceName => config.with_service_name(value),
            ConfigField::Artifacts => config.with_artifacts(split_list(value)),
            ConfigField::Caches => {
                let name = &suffix[item.name.len() + 1..];
                config.with_cache(unquote(name), value)
            }
        };
    }

    tracing::debug!(
        enabled = config.enabled(),
        shared = config.shared(),
        service_name = config.service_name(),
        caches = config.caches().len(),
        "dev services config resolved"
    );
    Ok(config)
}

/// Render a config back into `<prefix>.*` properties.
pub fn to_properties(prefix: &str, config: &DevServicesConfig) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    properties.insert(format!("{prefix}.enabled"), config.enabled().to_string());
    if let Some(port) = config.port() {
        properties.insert(format!("{prefix}.port"), port.to_string());
    }
    properties.insert(format!("{prefix}.shared"), config.shared().to_string());
    properties.insert(
        format!("{prefix}.service-name"),
        config.service_name().to_string(),
    );
    if let Some(artifacts) = config.artifacts() {
        let joined = artifacts
            .iter()
            .map(|a| a.replace('\\', "\\\\").replace(',', "\\,"))
            .collect::<Vec<_>>()
            .join(",");
        properties.insert(format!("{prefix}.artifacts"), joined);
    }
    for (name, template) in config.caches() {
        properties.insert(cache_key(prefix, name), template.clone());
    }
    properties
}

/// Property key of a cache entry. Names containing dots are quoted.
fn cache_key(prefix: &str, name: &str) -> String {
    if name.contains('.') {
        format!("{prefix}.caches.\"{name}\"")
    } else {
        format!("{prefix}.caches.{name}")
    }
}

/// Environment variable name for a property: upper-cased, every
/// non-alphanumeric character replaced by `_`.
pub fn env_var_name(property: &str) -> String {
    property
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Override properties from environment variables.
///
/// Cache entries can only be overridden for cache names already present,
/// since the variable name does not preserve the original cache name.
pub fn overlay_env<I, K, V>(prefix: &str, properties: &mut BTreeMap<String, String>, env: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let caches_prefix = format!("{prefix}.caches.");
    let cache_keys: Vec<String> = properties
        .keys()
        .filter(|key| key.starts_with(&caches_prefix))
        .cloned()
        .collect();
    let overrides = env_overrides(prefix, cache_keys, env);
    properties.extend(overrides);
}

fn env_overrides<I, K, V>(
    prefix: &str,
    cache_keys: Vec<String>,
    env: I,
) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let env: HashMap<String, String> = env
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    let mut overrides = BTreeMap::new();
    if env.is_empty() {
        return overrides;
    }

    let candidates = SCHEMA
        .iter()
        .filter(|item| item.kind != ConfigKind::StringMap)
        .map(|item| format!("{prefix}.{}", item.name))
        .chain(cache_keys);

    for property in candidates {
        let var = env_var_name(&property);
        if let Some(value) = env.get(&var) {
            tracing::debug!(property = %property, var = %var, "overridden from environment");
            overrides.insert(property, value.clone());
        }
    }
    overrides
}

/// Load a config file: `.properties` (prefixed keys) or `.yaml`/`.yml`
/// (the group's own keys, unprefixed).
pub fn load(path: &Path, prefix: &str) -> Result<DevServicesConfig> {
    load_with_env(path, prefix, std::iter::empty::<(String, String)>())
}

/// Load a config file, then apply environment overrides on top.
///
/// YAML values are taken as deserialized; only the environment overrides go
/// through property parsing.
pub fn load_with_env<I, K, V>(path: &Path, prefix: &str, env: I) -> Result<DevServicesConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    if !path.exists() {
        return Err(DevServicesError::ConfigNotFound(path.to_path_buf()));
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("properties") => {
            let contents = std::fs::read_to_string(path)?;
            let mut properties = parse_properties(&contents);
            overlay_env(prefix, &mut properties, env);
            from_properties(prefix, &properties)
        }
        Some("yaml") | Some("yml") => {
            let contents = std::fs::read_to_string(path)?;
            let config: DevServicesConfig = serde_yaml::from_str(&contents)
                .map_err(|e| DevServicesError::InvalidConfig(e.to_string()))?;
            let cache_keys = config
                .caches()
                .keys()
                .map(|name| cache_key(prefix, name))
                .collect();
            let overrides = env_overrides(prefix, cache_keys, env);
            apply_properties(config, prefix, &overrides)
        }
        _ => Err(DevServicesError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(invalid_value(key, value, "a boolean")),
    }
}

fn parse_port(key: &str, value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| invalid_value(key, value, "a non-negative integer"))
}

fn invalid_value(key: &str, value: &str, expected: &'static str) -> DevServicesError {
    DevServicesError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

/// Split on unescaped commas. `\,` is a literal comma, `\\` a literal backslash.
fn split_list(value: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some(',') | Some('\\')) => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    items.push(current);

    let items: Vec<String> = items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn unquote(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|n| n.strip_suffix('"'))
        .unwrap_or(name)
}
