//! Command-line definition.

use clap::{Arg, ArgAction, Command};

fn category_arg(required: bool) -> Arg {
    Arg::new("category")
        .long("category")
        .short('c')
        .value_name("CATEGORY")
        .help("Trace category: state or temp (default: all)")
        .required(required)
}

/// Build the clap command tree.
pub fn build_cli() -> Command {
    Command::new("tcu-trace")
        .about("Manage terrarium trace files")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("JSON configuration file"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .short('d')
                .value_name("DIR")
                .global(true)
                .help("Trace directory (overrides the configuration file)"),
        )
        .arg(
            Arg::new("max-days")
                .long("max-days")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .global(true)
                .help("Files kept per category (overrides the configuration file)"),
        )
        .arg(
            Arg::new("no-settle")
                .long("no-settle")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Skip the pause after creating a file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            Command::new("rotate")
                .about("Create today's trace file, replacing any from earlier today")
                .arg(category_arg(false)),
        )
        .subcommand(
            Command::new("append")
                .about("Append a line to today's trace file")
                .arg(category_arg(true))
                .arg(
                    Arg::new("message")
                        .value_name("MESSAGE")
                        .num_args(1..)
                        .required(true)
                        .trailing_var_arg(true),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List retained trace files, oldest first")
                .arg(category_arg(false)),
        )
        .subcommand(
            Command::new("prune")
                .about("Delete the oldest files beyond the retention bound")
                .arg(category_arg(false)),
        )
}
