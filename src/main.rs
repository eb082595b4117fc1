use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use rnsvg::{CheckerLookup, Options, convert_with_options};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rnsvg")]
#[command(about = "Convert SVG files into react-native-svg JSX", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    force: bool,

    /// Remove inline styles and <style> elements
    #[arg(long)]
    rm_style: bool,

    /// Do not add a default width/height to the root element
    #[arg(long)]
    no_dimensions: bool,

    /// Look up prop checkers by camelCase prop name instead of the markup name
    #[arg(long)]
    normalized_lookup: bool,

    /// Spaces per JSX indentation level
    #[arg(long, default_value = "2")]
    indent: usize,

    /// Print debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Read input
    let (input, source) = if cli.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        (buf, "<stdin>".to_string())
    } else {
        (
            fs::read_to_string(&cli.input)?,
            cli.input.display().to_string(),
        )
    };

    let options = Options {
        checker_lookup: if cli.normalized_lookup {
            CheckerLookup::Normalized
        } else {
            CheckerLookup::Raw
        },
        remove_style: cli.rm_style,
        default_dimensions: !cli.no_dimensions,
        indent: cli.indent,
    };

    let conversion = convert_with_options(&input, &source, &options)?;

    // Write output
    if cli.output.as_os_str() == "-" {
        io::stdout().write_all(conversion.jsx.as_bytes())?;
    } else {
        let mut file = OpenOptions::new()
            .write(true)
            .create(cli.force)
            .create_new(!cli.force)
            .truncate(cli.force)
            .open(&cli.output)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    format!(
                        "Output file {} already exists. Use --force to overwrite it",
                        cli.output.display()
                    )
                } else {
                    format!("Output file {} not writable: {e}", cli.output.display())
                }
            })?;
        file.write_all(conversion.jsx.as_bytes())?;
        eprintln!("File written to -> {}", cli.output.display());
    }

    Ok(())
}
