mod config;
mod error;
mod format;
mod input;
mod sink;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use config::Config;
use format::Options;
use input::TerminalPrompt;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Format JSON from a file, URL, stdin, or a literal argument")]
struct Args {
    /// File path, http(s) URL, or literal JSON; reads stdin when omitted
    input: Option<String>,

    /// Number of spaces per indentation level
    #[arg(short, long)]
    indent: Option<usize>,

    /// Sort object keys recursively
    #[arg(short, long)]
    sort: bool,

    /// Copy the result to the system clipboard
    #[arg(short, long)]
    clipboard: bool,

    /// Save the result to a timestamped file in this directory
    #[arg(short, long)]
    outdir: Option<PathBuf>,

    /// Fetch URLs without asking for confirmation
    #[arg(long)]
    trust_all: bool,

    /// Persist the effective options as the new defaults
    #[arg(long)]
    save_config: bool,
}

impl Args {
    // Flags override the persisted defaults; boolean flags can only turn
    // behavior on, turning it off permanently means editing the config file.
    fn merged_config(&self, defaults: Config) -> Config {
        Config {
            indent_spaces: self.indent.unwrap_or(defaults.indent_spaces),
            sort_keys: self.sort || defaults.sort_keys,
            copy_to_clipboard: self.clipboard || defaults.copy_to_clipboard,
            output_dir: self.outdir.clone().or(defaults.output_dir),
            trust_all_urls: self.trust_all || defaults.trust_all_urls,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let defaults = Config::load().unwrap_or_else(|err| {
        warn!("failed to load config, using defaults: {err}");
        Config::default()
    });
    let config = args.merged_config(defaults);

    if args.save_config {
        match config.save() {
            Ok(()) => eprintln!("Configuration saved"),
            Err(err) => warn!("failed to save configuration: {err}"),
        }
    }

    let data = input::resolve(
        args.input.as_deref(),
        config.trust_all_urls,
        &mut TerminalPrompt,
    )
    .context("failed to read input")?;

    let opts = Options {
        indent: config.indent_spaces,
        sort_keys: config.sort_keys,
    };

    let output = match format::format(&data, &opts) {
        Ok(output) => output,
        Err(err) => {
            // One repair attempt, then one retry. A second parse failure is
            // fatal.
            eprintln!("{err}; attempting auto-correction");
            let corrected = format::auto_correct(&data)?;
            format::format(corrected.as_bytes(), &opts)
                .context("auto-corrected input still failed to format")?
        }
    };

    println!("{output}");

    if config.copy_to_clipboard {
        match sink::copy_to_clipboard(&output) {
            Ok(()) => eprintln!("Copied to clipboard"),
            Err(err) => warn!("failed to copy to clipboard: {err}"),
        }
    }

    if let Some(dir) = &config.output_dir {
        match sink::save_to_dir(dir, &output) {
            Ok(path) => eprintln!("Saved to {}", path.display()),
            Err(err) => warn!("failed to save output file: {err}"),
        }
    }

    Ok(())
}
