//! `guide-sheets` CLI: render the configured guide sheet to `guide-sheets/guidelines.pdf`.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use guide_sheets::{
    params_from_toml, parse_override, render_guide_sheet, GuideConfig, GuideError,
    DEFAULT_CONFIG_FILE, OUTPUT_PATH,
};

#[derive(Parser)]
#[command(version, about = "Printable calligraphy guide sheets")]
struct Cli {
    /// TOML file of guide sheet parameters [default: guide-sheet.toml, if present]
    config: Option<PathBuf>,

    /// Set a single parameter, overriding the configuration file
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
}

fn run(cli: Cli) -> Result<(), GuideError> {
    let config_path = match cli.config {
        Some(path) => Some(path),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            fallback.is_file().then_some(fallback)
        }
    };

    let mut params = match &config_path {
        Some(path) => {
            info!("reading parameters from {}", path.display());
            params_from_toml(&fs::read_to_string(path)?)?
        }
        None => {
            info!("no configuration file, every parameter starts at zero");
            Vec::new()
        }
    };
    for raw in cli.set.iter() {
        params.push(parse_override(raw)?);
    }

    let config = GuideConfig::from_params(params)?;
    let plan = render_guide_sheet(&config)?;
    info!("{} guide-sets on one {} page", plan.count, config.page_size);
    println!("{OUTPUT_PATH}");
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        eprintln!("guide-sheets: {e}");
        process::exit(1);
    }
}
