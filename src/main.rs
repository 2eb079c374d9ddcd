use clap::{Parser, Subcommand};
use cssunit::style;
use cssunit::unit::config::{Config, CONFIG_FILE_NAME};
use std::path::Path;

#[derive(Parser)]
#[command(name = "cssunit")]
#[command(about = "Convert values into CSS dimension strings", long_about = None)]
struct Cli {
    /// Configuration file (default: ./cssunit.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert values to CSS dimension strings
    Convert {
        /// Values to convert (numbers or text; "" is absent)
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Unit suffix (default: configured default unit)
        #[arg(short, long)]
        unit: Option<String>,

        /// Print a JSON array, with null for absent values
        #[arg(long)]
        json: bool,
    },

    /// Render a CSS declaration block from a TOML or JSON style file
    Style {
        /// Style file path (.json is read as JSON, anything else as TOML)
        path: String,

        /// Print a JSON object instead of CSS
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Convert { values, unit, json } => {
            convert_values(&config, &values, unit.as_deref(), json)
        }
        Commands::Style { path, json } => render_style(&config, &path, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None if Path::new(CONFIG_FILE_NAME).exists() => Ok(Config::load_from_file(CONFIG_FILE_NAME)?),
        None => {
            log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Config::empty())
        }
    }
}

fn convert_values(
    config: &Config,
    values: &[String],
    unit: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = config.converter();
    let results: Vec<Option<String>> = values
        .iter()
        .map(|value| converter.convert_str(value, unit))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in results {
            println!("{}", result.unwrap_or_default());
        }
    }

    Ok(())
}

fn render_style(config: &Config, path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let properties = style::properties_from_file(path)?;
    let declarations = style::StyleDeclarations::build(properties, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&declarations.to_json())?);
    } else {
        println!("{}", declarations);
    }

    Ok(())
}
