//! tcu-trace — operator CLI for terrarium trace files.
//!
//! ```text
//! tcu-trace --dir /var/lib/tcu/trace rotate
//! tcu-trace --dir /var/lib/tcu/trace append -c state "manual check"
//! tcu-trace --dir /var/lib/tcu/trace list -c temp
//! tcu-trace --dir /var/lib/tcu/trace --max-days 7 prune
//! ```

mod commands;
mod parse;

use std::process;

use chrono::{Local, NaiveDateTime};
use tcu_trace::{TraceCategory, TraceRecorder};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::{matches_to_action, matches_to_config, CliAction};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let exit_code = match run(&matches) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &clap::ArgMatches) -> Result<(), String> {
    let config = matches_to_config(matches)?;
    let action = matches_to_action(matches)?;
    debug!(?action, dir = %config.trace_dir.display(), "running command");
    let recorder =
        TraceRecorder::open(config).map_err(|e| format!("Failed to open trace directory: {}", e))?;

    match action {
        CliAction::Rotate { categories } => {
            let now = Local::now().naive_local();
            let mut failed = 0;
            for category in categories {
                match recorder.rotate_category(category, now) {
                    Ok(name) => println!("{}", name),
                    Err(e) => {
                        eprintln!("{}: {}", category, e);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                return Err(format!("{} categor{} not rotated", failed, plural(failed)));
            }
        }
        CliAction::Append { category, message } => {
            let now = Local::now().naive_local();
            if !append_line(&recorder, category, now, &message)? {
                eprintln!("tracing is disabled; nothing written");
            }
        }
        CliAction::List { categories } => {
            for category in categories {
                for name in recorder.list(category).map_err(|e| e.to_string())? {
                    println!("{}", name);
                }
            }
        }
        CliAction::Prune { categories } => {
            for category in categories {
                let removed = recorder
                    .manager(category)
                    .prune()
                    .map_err(|e| e.to_string())?;
                for name in removed {
                    println!("removed {}", name);
                }
            }
        }
    }
    Ok(())
}

/// Append `message` to today's file, creating it if needed.
///
/// Returns `Ok(false)` without touching the directory when tracing is off.
fn append_line(
    recorder: &TraceRecorder,
    category: TraceCategory,
    now: NaiveDateTime,
    message: &str,
) -> Result<bool, String> {
    if !recorder.flag().is_enabled() {
        return Ok(false);
    }
    recorder
        .resume_category(category, now)
        .map_err(|e| e.to_string())?;
    recorder
        .try_trace_at(category, now, format_args!("{}", message))
        .map_err(|e| e.to_string())
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}
