/// Key prefix the options live under in a properties source.
pub const DEFAULT_PREFIX: &str = "quarkus.infinispan-client.devservices";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Boolean,
    Integer,
    String,
    StringList,
    /// One entry per `<name>.<key>` suffix.
    StringMap,
}

impl ConfigKind {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigKind::Boolean => "boolean",
            ConfigKind::Integer => "integer",
            ConfigKind::String => "string",
            ConfigKind::StringList => "list of string",
            ConfigKind::StringMap => "map of string",
        }
    }
}

/// The `DevServicesConfig` field an option binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Enabled,
    Port,
    Shared,
    ServiceName,
    Artifacts,
    Caches,
}

/// One recognised option of the Dev Services group.
#[derive(Debug, Clone, Copy)]
pub struct ConfigItem {
    pub name: &'static str,
    pub field: ConfigField,
    pub kind: ConfigKind,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

pub const SCHEMA: &[ConfigItem] = &[
    ConfigItem {
        name: "enabled",
        field: ConfigField::Enabled,
        kind: ConfigKind::Boolean,
        default: Some("true"),
        description: "Enable or disable Dev Services for Infinispan",
    },
    ConfigItem {
        name: "port",
        field: ConfigField::Port,
        kind: ConfigKind::Integer,
        default: None,
        description: "Fixed port the server listens on; random when unset",
    },
    ConfigItem {
        name: "shared",
        field: ConfigField::Shared,
        kind: ConfigKind::Boolean,
        default: Some("true"),
        description: "Reuse a running server carrying the same service label",
    },
    ConfigItem {
        name: "service-name",
        field: ConfigField::ServiceName,
        kind: ConfigKind::String,
        default: Some("infinispan"),
        description: "Value of the quarkus-dev-service-infinispan label",
    },
    ConfigItem {
        name: "artifacts",
        field: ConfigField::Artifacts,
        kind: ConfigKind::StringList,
        default: None,
        description: "Maven coordinates or URLs of libraries added to the server",
    },
    ConfigItem {
        name: "caches",
        field: ConfigField::Caches,
        kind: ConfigKind::StringMap,
        default: None,
        description: "Caches to create, mapped to their cache template",
    },
];

/// Find the schema item for an option suffix. `caches.<name>` resolves to `caches`.
pub fn lookup(suffix: &str) -> Option<&'static ConfigItem> {
    SCHEMA.iter().find(|item| match item.kind {
        ConfigKind::StringMap => suffix
            .strip_prefix(item.name)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|rest| !rest.is_empty()),
        _ => suffix == item.name,
    })
}
