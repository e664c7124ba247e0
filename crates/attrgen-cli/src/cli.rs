//! CLI argument definitions for the attribute table generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use attrgen_rewrite::DEFAULT_VERSION_OUTPUT;
use attrgen_rewrite::renumber::{DEFAULT_BASE, DEFAULT_OFFSET};
use attrgen_schema::{DEFAULT_PROJECT, DEFAULT_SCHEMA_FILE};

#[derive(Parser)]
#[command(
    name = "attrgen",
    version,
    about = "Attribute table generator - splice generated C into attr_table.c/.h",
    long_about = "Generate the firmware attribute table from the JSON API schema.\n\n\
                  Bumps the schema's API version, selects the attributes of one project,\n\
                  checks ids and names for duplicates and rewrites the generated regions\n\
                  of custom/<PROJECT>/include/attr_table.h and source/attr_table.c."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Also write a debug transcript to logs/<command>.transcript.log.
    #[arg(long = "transcript", global = true)]
    pub transcript: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bump the API version and regenerate a project's attribute table.
    Generate(GenerateArgs),

    /// Only bump the API version stored in the schema.
    BumpVersion(SchemaArgs),

    /// Bump APP_VERSION_PATCH in a firmware version header.
    BumpAppVersion(AppVersionArgs),

    /// Renumber attribute ids at or above a base (early development only).
    Renumber(RenumberArgs),
}

impl Command {
    /// Name used for the transcript file.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::BumpVersion(_) => "bump-version",
            Self::BumpAppVersion(_) => "bump-app-version",
            Self::Renumber(_) => "renumber",
        }
    }
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the JSON API schema.
    #[arg(value_name = "SCHEMA", default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,

    /// Project whose attributes are generated.
    #[arg(value_name = "PROJECT", default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Directory containing custom/<PROJECT>/ (default: $ATTRGEN_ROOT, then
    /// the current directory).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Render and report without bumping the version or writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the JSON API schema.
    #[arg(value_name = "SCHEMA", default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,
}

#[derive(Parser)]
pub struct AppVersionArgs {
    /// Header defining APP_VERSION_MAJOR/MINOR/PATCH.
    #[arg(value_name = "HEADER")]
    pub header: PathBuf,

    /// File receiving `version=<major>.<minor>.<patch>`.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_VERSION_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct RenumberArgs {
    /// Path to the JSON API schema.
    #[arg(value_name = "SCHEMA", default_value = DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,

    /// Ids below this value are left alone.
    #[arg(long = "base", default_value_t = DEFAULT_BASE)]
    pub base: u32,

    /// First id assigned.
    #[arg(long = "offset", default_value_t = DEFAULT_OFFSET)]
    pub offset: u32,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
