//! ArgMatches → configuration and action.

use clap::ArgMatches;
use std::path::PathBuf;
use tcu_trace::{TraceCategory, TraceConfig};

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Rotate { categories: Vec<TraceCategory> },
    Append { category: TraceCategory, message: String },
    List { categories: Vec<TraceCategory> },
    Prune { categories: Vec<TraceCategory> },
}

/// Resolve the configuration: file first, then flag overrides.
pub fn matches_to_config(matches: &ArgMatches) -> Result<TraceConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => TraceConfig::from_json_file(path)
            .map_err(|e| format!("Failed to load {}: {}", path, e))?,
        None => TraceConfig::default(),
    };

    if let Some(dir) = matches.get_one::<String>("dir") {
        config.trace_dir = PathBuf::from(dir);
    }
    if let Some(days) = matches.get_one::<usize>("max-days") {
        config = config.with_max_trace_days(*days);
    }
    if matches.get_flag("no-settle") {
        config.settle_delay_ms = 0;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Translate the chosen subcommand.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    match matches.subcommand() {
        Some(("rotate", sub)) => Ok(CliAction::Rotate {
            categories: categories(sub)?,
        }),
        Some(("append", sub)) => {
            let category = match categories(sub)?.as_slice() {
                [one] => *one,
                _ => return Err("append needs exactly one --category".to_string()),
            };
            let message = sub
                .get_many::<String>("message")
                .map(|parts| parts.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            Ok(CliAction::Append { category, message })
        }
        Some(("list", sub)) => Ok(CliAction::List {
            categories: categories(sub)?,
        }),
        Some(("prune", sub)) => Ok(CliAction::Prune {
            categories: categories(sub)?,
        }),
        Some((other, _)) => Err(format!("unknown command: {}", other)),
        None => Err("no command given".to_string()),
    }
}

fn categories(sub: &ArgMatches) -> Result<Vec<TraceCategory>, String> {
    match sub.get_one::<String>("category") {
        Some(name) => name
            .parse::<TraceCategory>()
            .map(|c| vec![c])
            .map_err(|e| e.to_string()),
        None => Ok(TraceCategory::ALL.to_vec()),
    }
}
