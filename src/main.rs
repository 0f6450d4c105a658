//! CLI entry point for `sql2bind`.

mod logging;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{debug, warn};
use sql2bind::classifier::statement_type::StatementType;
use sql2bind::output::formatter;
use sql2bind::output::manifest::Manifest;
use sql2bind::parser::statement::ParseOptions;
use sql2bind::parser::template::load_template;

#[derive(Parser)]
#[command(
    name = "sql2bind",
    about = "Split SQL template files into named fetch/execute statements for binding generators"
)]
struct Cli {
    /// Input SQL template files
    #[arg(required_unless_present = "template_dir")]
    input: Vec<PathBuf>,

    /// Process all .sql files in directory
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "sql2bind-output")]
    output_dir: PathBuf,

    /// Print manifests as JSON instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Keep comments in statement text
    #[arg(long)]
    keep_comments: bool,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let sql_files = collect_input_files(&cli);
    if sql_files.is_empty() {
        eprintln!("No input SQL files provided");
        process::exit(2);
    }

    let options = ParseOptions {
        strip_comments: !cli.keep_comments,
    };

    let mut manifests = Vec::with_capacity(sql_files.len());
    for path in &sql_files {
        if !path.exists() {
            eprintln!("Error: SQL file not found: {}", path.display());
            process::exit(2);
        }
        if !path.extension().is_some_and(|e| e == "sql") {
            warn!("{} doesn't have .sql extension", path.display());
        }

        let template = match load_template(path, &options) {
            Ok(template) => template,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(2);
            }
        };

        let stem = file_stem(path);
        let manifest = Manifest::from_template(&template, &path.display().to_string(), &stem);
        debug!(
            "{}: class {} with {} statements ({} fetch, {} execute)",
            path.display(),
            manifest.class_name,
            manifest.statements.len(),
            manifest.count(StatementType::Fetch),
            manifest.count(StatementType::Execute)
        );
        manifests.push((stem, manifest));
    }

    if cli.dry_run {
        for (_, manifest) in &manifests {
            match manifest.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing manifest: {e}");
                    process::exit(2);
                }
            }
        }
        return;
    }

    for (stem, manifest) in &manifests {
        if let Err(e) = formatter::write_output(&cli.output_dir, stem, manifest) {
            eprintln!("Error writing output: {e}");
            process::exit(2);
        }
    }
}

fn collect_input_files(cli: &Cli) -> Vec<PathBuf> {
    let mut sql_files = cli.input.clone();
    if let Some(dir) = &cli.template_dir {
        match std::fs::read_dir(dir) {
            Ok(entries) => {
                let mut found: Vec<PathBuf> = entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| path.extension().is_some_and(|e| e == "sql"))
                    .collect();
                found.sort();
                sql_files.extend(found);
            }
            Err(e) => {
                eprintln!("Error reading template directory: {e}");
                process::exit(2);
            }
        }
    }
    sql_files
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("queries")
        .to_string()
}
