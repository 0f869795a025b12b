//! CLI tool for extracting normalized JSON records from office documents.

use anyhow::{Context, Result};
use clap::Parser;
use docparse::{ExportNamer, NormalizedDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// Extract structured text (slides, pages, paragraphs) from office documents.
#[derive(Parser, Debug)]
#[command(name = "docparse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document file(s) (.pptx, .pdf, .doc, .docx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Declared MIME type, used when the extension is not recognized
    #[arg(short, long)]
    mime: Option<String>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print records to stdout instead of writing files
    #[arg(short, long)]
    print: bool,

    /// Starting value for the export filename counter
    #[arg(long, default_value = "1")]
    counter: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let namer = ExportNamer::starting_at(args.counter);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, args.mime.as_deref()) {
            Ok(record) => {
                let json = serde_json::to_string_pretty(&record)
                    .context("Failed to serialize record")?;

                if args.print {
                    println!("{}", json);
                } else {
                    let output_path =
                        output_path_for(input_path, args.output.as_ref(), &namer, &record)?;
                    fs::write(&output_path, json)
                        .with_context(|| format!("Failed to write {}", output_path.display()))?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                // One file's failure must not abort the remaining inputs.
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Read and extract a single input file.
fn process_file(input_path: &Path, mime: Option<&str>) -> Result<NormalizedDocument> {
    let data = fs::read(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let record = docparse::extract(&data, filename, mime)?;

    log::debug!(
        "Extracted {} {} units from {}",
        record.unit_count(),
        record.type_tag(),
        filename
    );

    Ok(record)
}

/// Determine the output path for an extracted record.
///
/// Filenames come from the injected export sequence (`data_{type}_{n}.json`).
fn output_path_for(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    namer: &ExportNamer,
    record: &NormalizedDocument,
) -> Result<PathBuf> {
    let output_filename = namer.next_name(record.type_tag());

    let output_path = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}
