use clap::Parser;

use ds_cli::cli::{Cli, Command, SourceArgs};
use ds_cli::{plan, render};
use ds_core::models::DevServicesConfig;
use ds_core::services::config_loader;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Held for the lifetime of the program so buffered log lines are flushed.
    let _guard = if cli.debug {
        Some(setup_debug_logging())
    } else {
        None
    };

    match cli.command {
        Command::Show { source, json } => {
            let config = load(&source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", render::render_config(&config));
            }
        }
        Command::Plan {
            source,
            state_dir,
            instance_id,
        } => {
            let config = load(&source)?;
            let outcome = plan::run_plan(&state_dir, config, instance_id).await?;
            print!(
                "{}",
                render::render_decision(outcome.decision, outcome.captured.as_ref())
            );
        }
        Command::Schema => print!("{}", render::render_schema()),
    }

    Ok(())
}

/// Configure file-based tracing to `.devservices-debug.log` in CWD.
fn setup_debug_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", ".devservices-debug.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .init();

    guard
}

fn load(source: &SourceArgs) -> color_eyre::Result<DevServicesConfig> {
    let config = config_loader::load_with_env(&source.config, &source.prefix, std::env::vars())?;
    tracing::debug!(path = %source.config.display(), "config loaded");
    Ok(config)
}
