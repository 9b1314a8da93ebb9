//! Command-line argument definitions using clap's derive API.

use clap::{Args, Parser, Subcommand};

/// Command-line interface for the tempo time conversion tool
///
/// The root invocation converts a single value between time formats:
/// `tempo <value> [flags]`, or `<producer> | tempo [flags]` when the
/// value is piped in. The `show` and `clear` subcommands list the
/// supported formats and entities and manage stored defaults.
#[derive(Parser)]
#[command(
    version,
    about,
    name = "tempo",
    args_conflicts_with_subcommands = true,
    after_help = "Examples:\n  \
        tempo 681678000 --input-format UnixSecs\n  \
        tempo now --output-format RFC3339\n  \
        tempo 681678000000 -i UnixMilli -o custom -r \"mmm yyyy-mm-dd hhh:nn:ss.000 zthhmm\"\n  \
        tempo \"2011-05-07 14:15:16\" -i USDateTime -z America/Chicago\n  \
        tempo show --time-formats\n  \
        tempo show --custom-entities"
)]
pub struct Cli {
    /// The value to convert: text in the input format, an epoch
    /// integer, or the literal "now". Omit it when piping input in.
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags for the root conversion invocation.
#[derive(Args, Default)]
pub struct ConvertArgs {
    /// The input format name. See "tempo show --time-formats" for the
    /// allowed names. Defaults to USDateTimeZ.
    #[arg(short = 'i', long)]
    pub input_format: Option<String>,

    /// Layout text when the input format is "custom" or "strftime"
    #[arg(short = 'l', long)]
    pub input_layout: Option<String>,

    /// The output format name. See "tempo show --time-formats" for the
    /// allowed names. Defaults to USDateTimeZ.
    #[arg(short = 'o', long)]
    pub output_format: Option<String>,

    /// Layout text when the output format is "custom" or "strftime"
    #[arg(short = 'r', long)]
    pub output_layout: Option<String>,

    /// Timezone for the converted value: an IANA region/location name
    /// or a fixed offset like -0700 or +0300. If omitted, the value's
    /// own zone is kept.
    #[arg(short = 'z', long, allow_hyphen_values = true)]
    pub output_timezone: Option<String>,

    /// Where to send the result: console or clipboard. Defaults to
    /// console.
    #[arg(short = 't', long)]
    pub output_target: Option<String>,

    /// Print only the converted value
    #[arg(short = 'v', long)]
    pub value_only: bool,

    /// Piped input is detected automatically; this forces pipe mode
    /// when the detection is not enough. Pipe mode reads the value from
    /// stdin and prints only the converted value.
    #[arg(short = 'p', long)]
    pub piped: bool,

    /// Save the effective settings as the local default config
    #[arg(long)]
    pub set_default: bool,

    /// Save the effective settings as the global default config
    #[arg(long)]
    pub set_global_default: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show time formats, custom layout entities, or stored defaults
    Show(ShowArgs),
    /// Remove local and global config settings
    Clear(ClearArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// List the available time formats
    #[arg(short = 'f', long)]
    pub time_formats: bool,

    /// List the available custom layout entities
    #[arg(short = 'c', long)]
    pub custom_entities: bool,

    /// Print the stored local defaults
    #[arg(short = 'l', long)]
    pub local_defaults: bool,

    /// Print the stored global defaults
    #[arg(short = 'g', long)]
    pub global_defaults: bool,
}

impl ShowArgs {
    /// True when no listing was requested.
    pub fn is_empty(&self) -> bool {
        !(self.time_formats || self.custom_entities || self.local_defaults || self.global_defaults)
    }
}

#[derive(Args)]
pub struct ClearArgs {
    /// Remove the local config file
    #[arg(short = 'l', long)]
    pub local: bool,

    /// Remove the global config file
    #[arg(short = 'g', long)]
    pub global: bool,
}

impl ClearArgs {
    /// True when nothing was asked to be cleared.
    pub fn is_empty(&self) -> bool {
        !(self.local || self.global)
    }
}
