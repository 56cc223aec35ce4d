use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use polyconst_codegen::Generator;

#[derive(Parser)]
#[command(
    name = "polyconst",
    about = "Polyconst – share constant and enum definitions between programming languages"
)]
#[command(version)]
struct Cli {
    /// Input file in YAML format
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn run(input: &Path) -> Result<()> {
    let project = polyconst_spec::load_document(input)
        .with_context(|| format!("Failed to load '{}'", input.display()))?;

    // Every emitter is constructed before anything is generated, so a
    // bad target aborts with no partial output on disk.
    let generator = Generator::from_project(&project)?;
    let output = generator.generate(&project)?;

    output
        .write_to_disk(Path::new(""))
        .context("Failed to write generated files")?;

    println!(
        "{} Generated {} file(s) from {} constant(s) and {} enum(s)",
        "✓".green().bold(),
        output.file_count(),
        project.constants.len(),
        project.enums.len(),
    );
    for path in output.files().keys() {
        println!("  {} {}", "→".dimmed(), path);
    }

    Ok(())
}
