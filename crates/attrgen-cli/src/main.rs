//! Attribute table generator CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use attrgen_cli::commands::{run_bump_app_version, run_bump_version, run_generate, run_renumber};
use attrgen_cli::logging::{LogConfig, LogFormat, init_logging, transcript_path};
use attrgen_cli::types::GenerateOptions;
use attrgen_rewrite::RenumberOptions;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Generate(args) => run_generate(&GenerateOptions {
            schema: args.schema,
            project: args.project,
            root: args.root,
            dry_run: args.dry_run,
        })
        .map(|result| print_summary(&result)),
        Command::BumpVersion(args) => run_bump_version(&args.schema)
            .map(|version| println!("API version {version}")),
        Command::BumpAppVersion(args) => run_bump_app_version(&args.header, &args.output)
            .map(|version| println!("{}", version.version_line())),
        Command::Renumber(args) => run_renumber(
            &args.schema,
            RenumberOptions {
                base: args.base,
                offset: args.offset,
            },
        )
        .map(|count| println!("{count} total attributes")),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default().with_level(cli.verbosity.tracing_level_filter());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config = config.with_format(match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    });
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config.with_transcript(
        cli.transcript
            .then(|| transcript_path(cli.command.name())),
    )
}
