//! `hjsonx` CLI — write JSON or Hjson input as config text and query dotted paths.
//!
//! ## Usage
//!
//! ```sh
//! # Format JSON as config text (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | hjsonx format
//!
//! # Format from file to file (parent directories are created)
//! hjsonx format -i settings.json -o out/settings.hjson
//!
//! # Query a value with a typed getter
//! hjsonx get -i settings.json --path window.size.width --as i32
//!
//! # Print a subtree as config text
//! hjsonx get -i settings.json --path window
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hjsonx_core::{
    get_array, get_bool, get_f32, get_f64, get_i32, get_i64, get_object, get_str_at, get_u32,
    get_u64, render, resolve,
};
use serde_json::Value;
use std::io::{self, Read};
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "hjsonx",
    version,
    about = "Write JSON as Hjson-style config text and query dotted paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug details (file encoding, writes) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render JSON or Hjson input as config text
    Format {
        /// Input Hjson or JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Look up a dotted path and print the value
    Get {
        /// Dotted key path, e.g. `window.size.width`
        #[arg(short, long)]
        path: String,
        /// Type to read the value as
        #[arg(long = "as", value_enum, default_value_t = ValueType::Node)]
        as_type: ValueType,
        /// Input Hjson or JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ValueType {
    Bool,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    String,
    Array,
    Object,
    /// Any node, printed as config text
    Node,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Format { input, output } => {
            let tree = read_tree(input.as_deref())?;
            match output {
                Some(path) => {
                    hjsonx_core::save(&tree, &path)
                        .with_context(|| format!("Failed to write file: {}", path))?;
                }
                None => print!("{}", render(&tree)),
            }
        }
        Commands::Get {
            path,
            as_type,
            input,
        } => {
            let tree = read_tree(input.as_deref())?;
            debug!(path = %path, as_type = ?as_type, "querying");
            match query(&tree, &path, as_type) {
                Some(text) => println!("{}", text),
                None => {
                    eprintln!("No {:?} value at '{}'", as_type, path);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Run the getter for `as_type` and format its result for printing.
/// Containers are printed as config text; scalars as plain text.
fn query(tree: &Value, path: &str, as_type: ValueType) -> Option<String> {
    match as_type {
        ValueType::Bool => get_bool(tree, path).map(|v| v.to_string()),
        ValueType::I32 => get_i32(tree, path).map(|v| v.to_string()),
        ValueType::U32 => get_u32(tree, path).map(|v| v.to_string()),
        ValueType::I64 => get_i64(tree, path).map(|v| v.to_string()),
        ValueType::U64 => get_u64(tree, path).map(|v| v.to_string()),
        ValueType::F32 => get_f32(tree, path).map(|v| v.to_string()),
        ValueType::F64 => get_f64(tree, path).map(|v| v.to_string()),
        ValueType::String => get_str_at(tree, path).map(str::to_string),
        ValueType::Array => get_array(tree, path).map(|arr| render(&Value::Array(arr.clone()))),
        ValueType::Object => {
            get_object(tree, path).map(|map| render(&Value::Object(map.clone())))
        }
        ValueType::Node => resolve(tree, path).map(render),
    }
}

/// Install the stderr log subscriber. `--verbose` forces debug output;
/// otherwise `RUST_LOG` applies, defaulting to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("hjsonx=debug,hjsonx_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hjsonx=warn,hjsonx_core=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Load the input tree (Hjson or JSON) from a file, BOM-aware, or parse it from stdin.
fn read_tree(path: Option<&str>) -> Result<Value> {
    match path {
        Some(path) => hjsonx_core::load(path)
            .with_context(|| format!("Failed to read file: {}", path))?
            .ok_or_else(|| anyhow!("File not found: {}", path)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            hjsonx_core::parse(&buf).context("Failed to parse input from stdin")
        }
    }
}
