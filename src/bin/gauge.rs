//! Gauge CLI - Command-line interface for the mindgauge scoring engine
//!
//! Commands:
//! - init: Seed a profile from onboarding quiz answers
//! - update: Apply one assessment event to a profile
//! - charts: Print spider/line chart data for a profile
//! - questions: Print the built-in quiz catalog
//! - taxonomy: Print labels and sub-labels with severities

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mindgauge::charts::{line_chart, spider_chart};
use mindgauge::profile::AssessmentEvent;
use mindgauge::{initialize_from_quiz, quiz, taxonomy, ScoreError, UserScores};
use mindgauge::{apply_assessment, overall_score, ENGINE_VERSION};

/// Gauge - Scoring engine for longitudinal behavioral trait profiles
#[derive(Parser)]
#[command(name = "gauge")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score behavioral trait profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a profile from quiz answers
    Init {
        /// Answers JSON file mapping question id to answer token (use - for stdin)
        #[arg(short, long)]
        answers: PathBuf,

        /// Output file for the profile JSON (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Pretty-print the profile JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Apply one assessment event to a profile
    Update {
        /// Profile JSON file (use - for stdin)
        #[arg(short, long)]
        profile: PathBuf,

        /// Sub-label id from the fixed taxonomy
        #[arg(long)]
        sub_label: String,

        /// Treat the event as an improvement (default is a mistake)
        #[arg(long)]
        improvement: bool,

        /// Event magnitude, nominally 0.0-1.0
        #[arg(long, default_value_t = 1.0)]
        magnitude: f64,

        /// Output file for the updated profile JSON (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Pretty-print the profile JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print chart data for a profile
    Charts {
        /// Profile JSON file (use - for stdin)
        #[arg(short, long)]
        profile: PathBuf,

        /// Output as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in quiz catalog
    Questions {
        /// Output as JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },

    /// Print labels and sub-labels with severities
    Taxonomy {
        /// Output as JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GaugeCliError> {
    match cli.command {
        Commands::Init {
            answers,
            output,
            pretty,
        } => cmd_init(&answers, &output, pretty),

        Commands::Update {
            profile,
            sub_label,
            improvement,
            magnitude,
            output,
            pretty,
        } => cmd_update(&profile, &sub_label, improvement, magnitude, &output, pretty),

        Commands::Charts { profile, json } => cmd_charts(&profile, json),

        Commands::Questions { json } => cmd_questions(json),

        Commands::Taxonomy { json } => cmd_taxonomy(json),
    }
}

fn cmd_init(answers: &Path, output: &Path, pretty: bool) -> Result<(), GaugeCliError> {
    let input = read_input(answers)?;
    let answers: HashMap<String, i64> = serde_json::from_str(&input)?;

    let mut profile = UserScores::new();
    initialize_from_quiz(&mut profile, quiz::catalog(), &answers)?;

    write_profile(&profile, output, pretty)
}

fn cmd_update(
    profile_path: &Path,
    sub_label: &str,
    improvement: bool,
    magnitude: f64,
    output: &Path,
    pretty: bool,
) -> Result<(), GaugeCliError> {
    let input = read_input(profile_path)?;
    let mut profile = UserScores::from_json(&input)?;

    let event = AssessmentEvent {
        sub_label: sub_label.to_string(),
        is_improvement: improvement,
        magnitude,
    };
    apply_assessment(&mut profile, &event)?;

    write_profile(&profile, output, pretty)
}

fn cmd_charts(profile_path: &Path, json: bool) -> Result<(), GaugeCliError> {
    let input = read_input(profile_path)?;
    let profile = UserScores::from_json(&input)?;

    let spider = spider_chart(&profile);
    let line = line_chart(&profile);

    if json {
        let report = serde_json::json!({
            "overall_score": overall_score(&profile),
            "spider": spider,
            "line": line,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Overall score: {}", overall_score(&profile));
        println!("\nSpider chart:");
        for (label, score) in &spider {
            println!("  {:<20} {}", label, score);
        }
        println!("\nLine chart ({} points):", line.len());
        for entry in &line {
            println!(
                "  {}  score {:>6}  delta {:>+6}",
                entry.timestamp, entry.overall_score, entry.delta
            );
        }
    }

    Ok(())
}

fn cmd_questions(json: bool) -> Result<(), GaugeCliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(quiz::catalog())?);
        return Ok(());
    }

    for question in quiz::catalog() {
        println!("[{}] ({:?}) {}", question.id, question.label, question.text);
        for (i, (text, score)) in question.options.iter().enumerate() {
            println!("    {}. {} ({})", i, text, score);
        }
    }

    Ok(())
}

fn cmd_taxonomy(json: bool) -> Result<(), GaugeCliError> {
    if json {
        let report: Vec<serde_json::Value> = taxonomy::Label::ALL
            .into_iter()
            .map(|label| {
                serde_json::json!({
                    "id": label.as_str(),
                    "name": label.display_name(),
                    "sub_labels": taxonomy::sublabels_for(label),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for label in taxonomy::Label::ALL {
        println!("{} ({})", label.display_name(), label.as_str());
        for sublabel in taxonomy::sublabels_for(label) {
            println!("  {:<40} severity {}", sublabel.id, sublabel.severity);
        }
    }

    Ok(())
}

// Helper functions

fn read_input(path: &Path) -> Result<String, GaugeCliError> {
    if path.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("Reading from stdin; pipe JSON or press Ctrl-D when done");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn write_profile(profile: &UserScores, output: &Path, pretty: bool) -> Result<(), GaugeCliError> {
    let data = if pretty {
        serde_json::to_string_pretty(profile)?
    } else {
        profile.to_json()?
    };

    if output.to_string_lossy() == "-" {
        println!("{}", data);
    } else {
        fs::write(output, data)?;
    }

    Ok(())
}

// Error types

#[derive(Debug)]
enum GaugeCliError {
    Io(io::Error),
    Score(ScoreError),
    Json(serde_json::Error),
}

impl From<io::Error> for GaugeCliError {
    fn from(e: io::Error) -> Self {
        GaugeCliError::Io(e)
    }
}

impl From<ScoreError> for GaugeCliError {
    fn from(e: ScoreError) -> Self {
        GaugeCliError::Score(e)
    }
}

impl From<serde_json::Error> for GaugeCliError {
    fn from(e: serde_json::Error) -> Self {
        GaugeCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<GaugeCliError> for CliError {
    fn from(e: GaugeCliError) -> Self {
        match e {
            GaugeCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            GaugeCliError::Score(e) => {
                let hint = match e {
                    ScoreError::UnknownSubLabel(_) => {
                        Some("Run 'gauge taxonomy' for the valid sub-label ids".to_string())
                    }
                    ScoreError::OutOfRange { .. } | ScoreError::MissingOptions(_) => {
                        Some("Run 'gauge questions' for valid answer tokens".to_string())
                    }
                    ScoreError::JsonError(_) => Some("Check JSON syntax".to_string()),
                };
                CliError {
                    code: "SCORE_ERROR".to_string(),
                    message: e.to_string(),
                    hint,
                }
            }
            GaugeCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
        }
    }
}
