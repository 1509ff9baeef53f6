use clap::{Parser, Subcommand};
use runecase::{
    case::Case,
    config::{parse_override, Override, RenderConfig},
    substitute::render,
    tokenizer::{tokenize, tokenize_placeholders, tokenize_segments},
    Error, InternalResult,
};
use std::{io::Read, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert identifiers in TEXT to another casing
    Case {
        /// camel, snake, pascal, kebab or screaming_snake
        #[arg(short, long, value_parser = Case::parse)]
        to: Option<Case>,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input text; read from stdin when omitted
        text: Option<String>,
    },
    /// Replace {KEY} placeholders in TEXT
    Render {
        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Placeholder value, repeatable
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
        overrides: Vec<Override>,

        /// Input text; read from stdin when omitted
        text: Option<String>,
    },
    /// Print the tokens of TEXT, one per line
    Tokens {
        /// Only placeholder spans
        #[arg(long, conflicts_with = "segments")]
        placeholders: bool,

        /// Alternating text and placeholder spans
        #[arg(long)]
        segments: bool,

        /// Input text; read from stdin when omitted
        text: Option<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> InternalResult<RenderConfig> {
    match path {
        Some(path) => RenderConfig::from_file(path),
        None => Ok(RenderConfig::default()),
    }
}

fn read_input(text: Option<String>) -> InternalResult<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
            buffer.truncate(trimmed);
            Ok(buffer)
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Case { to, config, text } => {
            let config = load_config(config.as_ref())?;
            let case = to.unwrap_or(config.case);
            debug!("converting to {}", case);
            println!("{}", case.apply(&read_input(text)?));
        }
        Command::Render {
            config,
            overrides,
            text,
        } => {
            let mut config = load_config(config.as_ref())?;
            config.apply_overrides(&overrides);
            debug!("rendering with {} values", config.values.len());
            let input = read_input(text)?;
            println!("{}", render(&input, config.replacer()));
        }
        Command::Tokens {
            placeholders,
            segments,
            text,
        } => {
            let input = read_input(text)?;
            let tokens = if placeholders {
                tokenize_placeholders(&input)
            } else if segments {
                tokenize_segments(&input)
            } else {
                tokenize(&input)
            };
            for token in tokens {
                println!("{}", token);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
