use std::cmp::Ordering;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vers_range::{Range, Scheme, VersConfig};

#[derive(Parser)]
#[command(name = "vers")]
#[command(version, about = "Parse, compare and convert version ranges")]
struct Cli {
    /// Log filter, e.g. `debug` or `vers_range=trace`; defaults to RUST_LOG or `warn`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether VERSION is inside RANGE
    Contains {
        /// A vers URI, or native syntax when --scheme is given
        range: String,
        version: String,
        #[arg(long)]
        scheme: Option<String>,
    },
    /// Print -1, 0 or 1 comparing A with B
    Compare {
        a: String,
        b: String,
        #[arg(long, default_value = "")]
        scheme: String,
    },
    /// Convert native range syntax into a vers URI
    Convert {
        range: String,
        #[arg(long)]
        scheme: String,
        /// Print the parsed intervals and exclusions as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let parser = vers_range::Parser::from_config(&VersConfig::default());

    match cli.command {
        Command::Contains {
            range,
            version,
            scheme,
        } => {
            let range = match scheme {
                Some(scheme) => parser.parse_native(&range, &Scheme::from_name(&scheme))?,
                None => parser.parse(&range)?,
            };
            println!("{}", range.contains(&version));
        }
        Command::Compare { a, b, scheme } => {
            let ordering = parser.compare(&a, &b, &Scheme::from_name(&scheme));
            println!("{}", ordering_to_int(ordering));
        }
        Command::Convert {
            range,
            scheme,
            json,
        } => {
            let scheme = Scheme::from_name(&scheme);
            let range: Range = parser.parse_native(&range, &scheme)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&range)?);
            } else {
                println!("{}", parser.to_vers_string(&range, &scheme));
            }
        }
    }

    Ok(())
}

fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
