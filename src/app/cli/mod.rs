//! CLI Adapter.

mod interactive;
mod logging;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::commands::generate::GenerateOptions;
use crate::app::config::load_config;
use crate::app::report::{current_year, render_report};
use crate::app::session::CopyOutcome;
use crate::domain::status::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};
use crate::domain::{
    ASPECT_RATIOS, AppConfig, AppError, CAMERA_MOVEMENTS, FieldKind, FormField, GeneratedPrompts,
    OutputFormat,
};

#[derive(Parser)]
#[command(name = "veo-prompt")]
#[command(version)]
#[command(
    about = "Assemble localized and structured Veo 3 prompts from scene description fields",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Path to config.toml (default: ~/.veo-prompt/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate prompts from a form document and/or field assignments
    #[clap(visible_alias = "g")]
    Generate {
        /// Form document (.toml, .yaml, .yml or .json)
        #[arg(short, long)]
        form: Option<PathBuf>,
        /// Field assignment, e.g. --set sceneTitle="terminal bus malam"
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Output format: text, json, localized or structured
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Copy the structured prompt to the clipboard
        #[arg(short, long)]
        copy: bool,
        /// Include the prompt structure notes in text output
        #[arg(long)]
        notes: bool,
    },
    /// Fill the form and generate prompts through an interactive menu
    #[clap(visible_alias = "i")]
    Interactive {
        /// Form document to start from
        #[arg(short, long)]
        form: Option<PathBuf>,
    },
    /// List camera movement and aspect ratio options
    #[clap(visible_alias = "o")]
    Options,
    /// List form field keys with their labels and examples
    #[clap(visible_alias = "f")]
    Fields,
    /// Write a default form document
    InitForm {
        /// Destination (.toml, .yaml, .yml or .json)
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| {
        logging::init_logging(cli.verbose, &config.logging.level);
        dispatch(cli.command, &config)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands, config: &AppConfig) -> Result<(), AppError> {
    match command {
        Commands::Generate { form, set, format, copy, notes } => {
            let options = GenerateOptions { form, assignments: set, copy: copy || config.output.copy };
            run_generate(&options, format.unwrap_or(config.output.format), notes)
        }
        Commands::Interactive { form } => interactive::run_interactive(form),
        Commands::Options => {
            print_options();
            Ok(())
        }
        Commands::Fields => {
            print_fields();
            Ok(())
        }
        Commands::InitForm { path, force } => {
            crate::init_form(&path, force)?;
            println!("✅ Created form document at {}", path.display());
            Ok(())
        }
    }
}

fn run_generate(options: &GenerateOptions, format: OutputFormat, notes: bool) -> Result<(), AppError> {
    let outcome = crate::generate(options)?;

    let prompts = GeneratedPrompts {
        localized: outcome.session.localized_prompt().to_string(),
        structured: outcome.session.structured_prompt().to_string(),
    };
    println!("{}", format_prompts(&prompts, format, notes)?);

    match outcome.copy {
        Some(CopyOutcome::Copied) => eprintln!("✅ {}", COPY_SUCCESS_MESSAGE),
        Some(CopyOutcome::Failed(_)) => eprintln!("⚠️  {}", COPY_FAILURE_MESSAGE),
        Some(CopyOutcome::NothingToCopy) | None => {}
    }
    Ok(())
}

fn format_prompts(
    prompts: &GeneratedPrompts,
    format: OutputFormat,
    notes: bool,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => render_report(prompts, current_year(), notes),
        OutputFormat::Json => serde_json::to_string_pretty(prompts)
            .map_err(|err| AppError::parse_error("generated prompts", err)),
        OutputFormat::Localized => Ok(prompts.localized.clone()),
        OutputFormat::Structured => Ok(prompts.structured.clone()),
    }
}

fn print_options() {
    println!("Gerakan Kamera (cameraMovement):");
    for option in CAMERA_MOVEMENTS.iter().filter(|option| !option.value.is_empty()) {
        println!("  {:<10} {} / {}", option.value, option.label_localized, option.label_common);
    }
    println!();
    println!("Aspek Rasio (aspectRatio):");
    for option in ASPECT_RATIOS.iter() {
        println!("  {:<10} {}", option.value, option.label);
    }
}

fn print_fields() {
    for field in FormField::ALL {
        let kind = match field.kind() {
            FieldKind::Text => "text",
            FieldKind::Multiline => "multiline",
            FieldKind::Select => "select",
        };
        println!("{} ({}, {})", field.key(), field.label(), kind);
        println!("    contoh: {}", field.hint());
    }
}
