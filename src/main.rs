use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use doxmd::{convert_directory, Config, ExportFormat};

#[derive(Parser)]
#[command(
    name = "doxmd",
    version,
    about = "Convert Doxygen XML API references to Markdown/MDX"
)]
struct Cli {
    /// Directory containing Doxygen XML output
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory to write the generated documents to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Project name used as the index page title
    #[arg(long)]
    project: Option<String>,

    /// Offset applied to every heading level (may be negative)
    #[arg(long, allow_hyphen_values = true)]
    heading_offset: Option<i32>,

    /// Skip writing index.mdx
    #[arg(long)]
    no_index: bool,

    /// Path to a TOML config file (default: the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "mdx")]
    export: ExportFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Command-line flags override config file values
    if let Some(input) = cli.input {
        config.input_dir = input;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if let Some(project) = cli.project {
        config.project_name = project;
    }
    if let Some(offset) = cli.heading_offset {
        config.heading_offset = offset;
    }
    if cli.no_index {
        config.emit_index = false;
    }

    let generated = convert_directory(&config, &cli.export)?;
    println!(
        "Converted {} file(s) into {}",
        generated.len(),
        config.output_dir.display()
    );

    Ok(())
}
