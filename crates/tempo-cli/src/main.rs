//! tempo CLI application
//!
//! Command-line interface for the tempo time conversion tool: flag
//! parsing, pipe detection, stored defaults, and output routing around
//! the tempo-core conversion engine.

mod args;
mod config;
mod output;
mod renderer;
mod show;

use std::io::{IsTerminal, Read};

use anyhow::{bail, Context, Result};
use args::{Cli, ClearArgs, Commands, ConvertArgs, ShowArgs};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use output::OutputTarget;
use renderer::Renderer;
use tempo_core::{convert, ConvertRequest};

fn main() -> Result<()> {
    env_logger::init();

    let Cli { value, convert: convert_flags, no_color, command } = Cli::parse();

    let renderer = Renderer::new(!no_color);

    match command {
        Some(Commands::Show(show_args)) => run_show(&show_args, &renderer),
        Some(Commands::Clear(clear_args)) => run_clear(&clear_args),
        None => run_convert(value, &convert_flags),
    }
}

/// The effective conversion settings: command-line flags first, stored
/// defaults filling the gaps.
struct Settings {
    input_format: String,
    input_layout: String,
    output_format: String,
    output_layout: String,
    output_timezone: String,
    output_target: String,
    value_only: bool,
}

impl Settings {
    fn merge(flags: &ConvertArgs, stored: &config::Defaults) -> Self {
        fn pick(flag: &Option<String>, stored: &Option<String>) -> String {
            flag.clone().or_else(|| stored.clone()).unwrap_or_default()
        }

        Settings {
            input_format: pick(&flags.input_format, &stored.input_format),
            input_layout: pick(&flags.input_layout, &stored.input_layout),
            output_format: pick(&flags.output_format, &stored.output_format),
            output_layout: pick(&flags.output_layout, &stored.output_layout),
            output_timezone: pick(&flags.output_timezone, &stored.output_timezone),
            output_target: pick(&flags.output_target, &stored.output_target),
            value_only: flags.value_only || stored.value_only.unwrap_or(false),
        }
    }

    fn to_defaults(&self) -> config::Defaults {
        fn keep(text: &str) -> Option<String> {
            (!text.is_empty()).then(|| text.to_string())
        }

        config::Defaults {
            input_format: keep(&self.input_format),
            input_layout: keep(&self.input_layout),
            output_format: keep(&self.output_format),
            output_layout: keep(&self.output_layout),
            output_timezone: keep(&self.output_timezone),
            output_target: keep(&self.output_target),
            value_only: self.value_only.then_some(true),
        }
    }
}

fn run_convert(value: Option<String>, flags: &ConvertArgs) -> Result<()> {
    let piped = flags.piped || (value.is_none() && !std::io::stdin().is_terminal());

    let value = match value {
        Some(value) => value,
        None if piped => read_piped_value()?,
        None => bail!("no input provided; pass a value or pipe one in (see --help)"),
    };

    let settings = Settings::merge(flags, &config::load());
    let target = OutputTarget::resolve(&settings.output_target)?;

    let request = ConvertRequest {
        value,
        input_format: settings.input_format.clone(),
        input_layout: settings.input_layout.clone(),
        output_format: settings.output_format.clone(),
        output_layout: settings.output_layout.clone(),
        output_timezone: settings.output_timezone.clone(),
    };

    debug!(
        "converting {:?} from {:?} to {:?}",
        request.value, request.input_format, request.output_format
    );

    let result = convert(&request)?;

    // Pipe mode emits the bare value so conversions compose in shell
    // pipelines.
    let text = if settings.value_only || piped {
        result
    } else {
        format!("Converted Result: {result}")
    };
    target.deliver(&text)?;

    if flags.set_default {
        let path = config::save_local(&settings.to_defaults())?;
        info!("saved local defaults to {}", path.display());
    }

    if flags.set_global_default {
        let path = config::save_global(&settings.to_defaults())?;
        info!("saved global defaults to {}", path.display());
    }

    Ok(())
}

fn read_piped_value() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failure reading pipe input")?;
    Ok(buffer.trim_matches(['\n', '\r', '\t', ' ']).to_string())
}

fn run_show(show_args: &ShowArgs, renderer: &Renderer) -> Result<()> {
    if show_args.is_empty() {
        return print_subcommand_help("show");
    }

    show::run(show_args, renderer)
}

fn run_clear(clear_args: &ClearArgs) -> Result<()> {
    if clear_args.is_empty() {
        return print_subcommand_help("clear");
    }

    if clear_args.local {
        if config::clear_local()? {
            println!("Local config removed");
        } else {
            println!("No local config to remove");
        }
    }

    if clear_args.global {
        if config::clear_global()? {
            println!("Global config removed");
        } else {
            println!("No global config to remove");
        }
    }

    Ok(())
}

fn print_subcommand_help(name: &str) -> Result<()> {
    let mut command = Cli::command();
    let subcommand = command
        .find_subcommand_mut(name)
        .with_context(|| format!("no such subcommand: {name}"))?;
    subcommand.print_help().context("unable to print help")?;
    Ok(())
}
