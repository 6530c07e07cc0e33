//! docshift CLI - document and spreadsheet conversion tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docshift::{detect, Router};

#[derive(Parser)]
#[command(name = "docshift")]
#[command(version)]
#[command(about = "Convert between xlsx, csv, doc/docx and pdf", long_about = None)]
struct Cli {
    /// Input files
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Output directory (next to each input if not specified)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more files
    Convert {
        /// Input files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (next to each input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show the detected kind and planned output of a file
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported conversions
    Formats,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { inputs, output }) => cmd_convert(&inputs, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Formats) => {
            cmd_formats();
            Ok(())
        }
        None => {
            if cli.inputs.is_empty() {
                println!("{}", "Usage: docshift <FILE>... [-o DIR]".yellow());
                println!("       docshift --help for more information");
                Ok(())
            } else {
                cmd_convert(&cli.inputs, cli.output.as_deref())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output {
        std::fs::create_dir_all(dir)?;
    }

    let router = Router::with_defaults();

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut failures = 0usize;
    for input in inputs {
        pb.set_message(input.display().to_string());

        let result = match output {
            Some(dir) => router.convert_into(input, dir),
            None => router.convert(input),
        };
        match result {
            Ok(dest) => {
                pb.println(format!(
                    "{} {} {} {}",
                    "ok".green().bold(),
                    input.display(),
                    "->".dimmed(),
                    dest.display()
                ));
            }
            Err(e) => {
                failures += 1;
                pb.println(format!(
                    "{} {}: {}",
                    "failed".red().bold(),
                    input.display(),
                    e
                ));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if failures > 0 {
        return Err(format!("{} of {} conversions failed", failures, inputs.len()).into());
    }
    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rule = detect::match_rule(input);

    if json {
        let value = match rule {
            Some(rule) => serde_json::json!({
                "input": input.display().to_string(),
                "kind": rule.kind,
                "output": detect::output_path(input, rule).display().to_string(),
            }),
            None => serde_json::json!({
                "input": input.display().to_string(),
                "kind": serde_json::Value::Null,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match rule {
        Some(rule) => {
            println!("{}: {}", "File".bold(), input.display());
            println!("{}: {}", "Kind".bold(), rule.kind);
            println!(
                "{}: {}",
                "Output".bold(),
                detect::output_path(input, rule).display()
            );
        }
        None => {
            return Err(format!("unsupported file type: {}", input.display()).into());
        }
    }
    Ok(())
}

fn cmd_formats() {
    println!("{}", "Supported conversions".cyan().bold());
    println!("{}", "─".repeat(30).dimmed());
    for rule in detect::SUFFIX_RULES {
        println!("  {} {} {}", rule.suffix, "->".dimmed(), rule.target);
    }
}
