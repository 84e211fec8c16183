use clap::Parser;
use serde::Serialize;

use wirecut::cli::commands::{Cli, Command};
use wirecut::cli::output;
use wirecut::config::FieldConfig;
use wirecut::error::Result;
use wirecut::segment::Segmenter;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean JSON.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse {
            file,
            config,
            pretty,
        } => cmd_parse(&file, config.as_deref(), pretty),
        Command::Fields { config } => cmd_fields(config.as_deref()),
    }
}

fn load_config(path: Option<&str>) -> Result<FieldConfig> {
    match path {
        Some(p) => FieldConfig::load(p),
        None => Ok(FieldConfig::default()),
    }
}

fn cmd_parse(file: &str, config: Option<&str>, pretty: bool) -> Result<()> {
    let cfg = load_config(config)?;
    let segmenter = Segmenter::new(cfg.matcher());
    let docs = segmenter.parse_file(file)?;

    let json = if pretty {
        output::format_json_pretty(&docs)
    } else {
        output::format_json(&docs)
    };
    println!("{json}");
    Ok(())
}

fn cmd_fields(config: Option<&str>) -> Result<()> {
    #[derive(Serialize)]
    struct FieldEntry<'a> {
        field: &'static str,
        pattern: &'a str,
    }

    let cfg = load_config(config)?;
    let matcher = cfg.matcher();
    let entries: Vec<FieldEntry> = matcher
        .iter()
        .map(|(kind, pattern)| FieldEntry {
            field: kind.as_str(),
            pattern,
        })
        .collect();

    println!("{}", output::format_json_pretty(&entries));
    Ok(())
}
