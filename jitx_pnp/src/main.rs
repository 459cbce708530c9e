use anyhow::{Context, Result};
use clap::Parser;
use ecad_file_format::{OutputFormat, RenderedOutput, load_placements, render};
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Generate a pick-and-place file from a JITX XML board export.
///
/// Extracts designator, position, rotation, part number, package and board side of every placed
/// component, sorted by designator.
#[derive(Parser, Debug)]
#[command(name = "jitx_pnp", version)]
struct Cli {
    /// JITX XML board export
    xml_file: PathBuf,

    /// Output file, printed to stdout if omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write <stem>_top.<ext> and <stem>_bottom.<ext> without a Side column instead of one file
    #[arg(long, requires = "output")]
    split_sides: bool,

    /// Output format: csv, tsv or txt (fixed-width columns)
    #[arg(short, long, default_value = "csv", value_parser = OutputFormat::from_str)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let components = load_placements(&cli.xml_file)
        .with_context(|| format!("Failed to read placements from {}", cli.xml_file.display()))?;
    info!(
        "{} components found in {}",
        components.len(),
        cli.xml_file.display()
    );

    let format = cli.format;
    info!("Rendering as {format}");
    match &cli.output {
        Some(path) => {
            let outputs = render(&components, format, cli.split_sides)?;
            for written in write_outputs(path, &outputs)? {
                info!("Wrote {}", written.display());
            }
        }
        None => {
            for output in render(&components, format, false)? {
                std::io::stdout().lock().write_all(output.text.as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Write every output next to `path`, per-side ones with a `_top` / `_bottom` stem suffix.
fn write_outputs(path: &Path, outputs: &[RenderedOutput]) -> Result<Vec<PathBuf>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        let output_path = match output.name_suffix() {
            Some(suffix) => with_stem_suffix(path, &suffix),
            None => path.to_path_buf(),
        };
        fs::write(&output_path, &output.text)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        written.push(output_path);
    }
    Ok(written)
}

fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut file_name = path.file_stem().unwrap_or_default().to_os_string();
    file_name.push(suffix);
    if let Some(extension) = path.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    path.with_file_name(file_name)
}
