//! gymcat - Exercise catalog inspector

use std::process::ExitCode;

use clap::Parser;

use gymcat::{AcceptAll, Catalog, ImageCatalog, read_catalog};

#[derive(Parser)]
#[command(name = "gymcat")]
#[command(version, about = "Exercise catalog inspector", long_about = None)]
#[command(after_help = "EXAMPLES:
    gymcat exercises.xml --images gifs/    Validate references against a gif directory
    gymcat exercises.xml --json            Dump the parsed catalog as JSON
    gymcat exercises.xml                   Show a catalog summary")]
struct Cli {
    /// Input catalog XML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Directory of .gif files to resolve image references against
    /// (without it, every reference resolves)
    #[arg(long, value_name = "DIR")]
    images: Option<String>,

    /// Emit the parsed catalog as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Suppress missing-image warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let catalog = load(cli).map_err(|e| e.to_string())?;

    if !cli.quiet {
        for name in &catalog.missing_images {
            eprintln!("warning: unresolved image reference: {name}");
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&catalog).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        show_info(&cli.input, &catalog);
    }

    Ok(())
}

fn load(cli: &Cli) -> gymcat::Result<Catalog> {
    match &cli.images {
        Some(dir) => {
            let images = ImageCatalog::from_gif_dir(dir)?;
            read_catalog(&cli.input, &images)
        }
        None => read_catalog(&cli.input, &AcceptAll),
    }
}

fn show_info(path: &str, catalog: &Catalog) {
    println!("File: {path}");
    println!("Categories: {}", catalog.categories().len());
    println!("Exercises: {}", catalog.len());

    let steps: usize = catalog.exercises.iter().map(|e| e.steps.len()).sum();
    let tips: usize = catalog.exercises.iter().map(|e| e.tips.len()).sum();
    println!("Steps: {steps}");
    println!("Tips: {tips}");
    println!("Missing images: {}", catalog.missing_images.len());
}
