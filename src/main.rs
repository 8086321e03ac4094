//! dspflow - command line entry point
//!
//! `dspflow [VALUE] <StepType>...` builds a pipeline from the given step type
//! names. With a leading number it runs that single value through the steps,
//! otherwise it performs a generator-driven run.

use anyhow::Context;
use dspflow::{config, EngineConfig, PipelineBuilder, PipelineEvent, StepType};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG_ENV: &str = "DSPFLOW_CONFIG";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dspflow=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let value = match args.first().map(|a| a.parse::<f64>()) {
        Some(Ok(v)) => {
            args.remove(0);
            Some(v)
        }
        _ => None,
    };

    if args.is_empty() {
        print_usage();
        std::process::exit(2);
    }

    let config = match config_path() {
        Some(path) => {
            tracing::info!("Loading config from {:?}", path);
            EngineConfig::load_or_default(&path)
        }
        None => EngineConfig::default(),
    };

    let (mut pipeline, bridge) = PipelineBuilder::new(config)
        .steps(args.iter().map(String::as_str))
        .build()
        .context("failed to build pipeline")?;

    match value {
        Some(v) => {
            let out = pipeline.run_value(v);
            report_events(&bridge);
            println!("{}", out);
        }
        None => {
            let out = pipeline.run();
            report_events(&bridge);
            let rendered: Vec<String> = out.iter().map(|v| v.to_string()).collect();
            println!("{}", rendered.join(" "));
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("usage: dspflow [VALUE] <StepType>...");
    eprintln!();
    eprintln!("step types:");
    for step_type in StepType::all() {
        let role = if step_type.is_source() {
            " (source)"
        } else if step_type.is_sink() {
            " (sink)"
        } else {
            ""
        };
        let summary = step_type.description().lines().next().unwrap_or_default();
        eprintln!("  {:<14}{} {}", step_type.name(), role, summary);
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(config::default_path)
}

fn report_events(bridge: &dspflow::PipelineBridge) {
    for event in bridge.iter_pending() {
        match event {
            PipelineEvent::PlotDataUpdated(data) => {
                tracing::info!("Plot updated: {} sample(s)", data.len())
            }
            PipelineEvent::BranchTaken(taken) => tracing::info!("Branch taken: {}", taken),
            other => tracing::debug!("{:?}", other),
        }
    }
}
