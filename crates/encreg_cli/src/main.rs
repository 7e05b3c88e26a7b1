//! encreg CLI
//!
//! Command-line tools for inspecting the encoding registry.
//!
//! # Commands
//!
//! - `list` - List encodings and their aliases
//! - `lookup` - Resolve a name the way user code would
//! - `constants` - Show the constant names derived for encodings
//! - `defaults` - Show the resolved default encodings

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Encoding registry inspection tools.
#[derive(Parser)]
#[command(name = "encreg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Locale charmap to use instead of the environment's
    #[arg(global = true, short, long)]
    locale: Option<String>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List encodings in the built-in database
    List {
        /// Show aliases for each encoding
        #[arg(short, long)]
        aliases: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Resolve an encoding name
    Lookup {
        /// Encoding name, alias or special name
        name: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show derived constant names
    Constants {
        /// Derive for this name only; all published constants otherwise
        name: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the resolved default encodings
    Defaults {
        /// Default external encoding name
        #[arg(short, long)]
        external: Option<String>,

        /// Default internal encoding name
        #[arg(short, long)]
        internal: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let locale = cli.locale.as_deref();
    match cli.command {
        Commands::List { aliases, format } => {
            commands::list::run(locale, aliases, &format)?;
        }
        Commands::Lookup { name, format } => {
            commands::lookup::run(locale, &name, &format)?;
        }
        Commands::Constants { name, format } => {
            commands::constants::run(locale, name.as_deref(), &format)?;
        }
        Commands::Defaults {
            external,
            internal,
            format,
        } => {
            commands::defaults::run(locale, external, internal, &format)?;
        }
        Commands::Version => {
            println!("encreg CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("encreg core v{}", encreg_core::VERSION);
        }
    }

    Ok(())
}
