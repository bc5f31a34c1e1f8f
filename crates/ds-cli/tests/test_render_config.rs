mod common;

use ds_cli::render::{render_config, render_schema};
use ds_core::models::DevServicesConfig;

use common::full_config;

#[test]
fn default_config_renders() {
    let output = render_config(&DevServicesConfig::default());
    insta::assert_snapshot!(output, @r"
    enabled       true
    port          random
    shared        true
    service-name  infinispan
    label         quarkus-dev-service-infinispan=infinispan
    artifacts     none
    caches        none
    ");
}

#[test]
fn full_config_renders() {
    let output = render_config(&full_config());
    insta::assert_snapshot!(output, @r"
    enabled       true
    port          11222
    shared        false
    service-name  grid
    label         quarkus-dev-service-infinispan=grid
    artifacts     org.postgresql:postgresql:42.3.1
                  https://example.com/lib.jar
    caches        cache1 = DIST_SYNC
                  cache2 = REPL_SYNC
    ");
}

#[test]
fn empty_artifact_list_renders() {
    let config = DevServicesConfig::default()
        .with_enabled(false)
        .with_artifacts(Some(Vec::new()));
    let output = render_config(&config);
    insta::assert_snapshot!(output, @r"
    enabled       false
    port          random
    shared        true
    service-name  infinispan
    label         quarkus-dev-service-infinispan=infinispan
    artifacts     []
    caches        none
    ");
}

#[test]
fn schema_lists_every_option() {
    let output = render_schema();
    insta::assert_snapshot!(output, @r"
    enabled       boolean         true        Enable or disable Dev Services for Infinispan
    port          integer         -           Fixed port the server listens on; random when unset
    shared        boolean         true        Reuse a running server carrying the same service label
    service-name  string          infinispan  Value of the quarkus-dev-service-infinispan label
    artifacts     list of string  -           Maven coordinates or URLs of libraries added to the server
    caches.<name> map of string   -           Caches to create, mapped to their cache template
    ");
}
