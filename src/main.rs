mod commands;
mod core;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio profile CLI with full-text search", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        default_value = "portfolio.json",
        help = "Profile document to operate on (.json, .yml or .yaml)"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter profile document
    Init {
        #[arg(long, help = "Overwrite an existing document")]
        force: bool,
    },
    /// Show the active profile
    Show {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Validate the document against the profile schema
    Validate {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Summarize the active profile's contents
    Status {
        #[arg(short, long, help = "Brief output")]
        brief: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Free-text search across skills, projects, work and education
    Search {
        query: String,
        #[arg(long, short, help = "Limit displayed results per section")]
        limit: Option<usize>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List projects, optionally filtered by skill
    Projects {
        #[arg(long, help = "Only projects using this skill (substring match)")]
        skill: Option<String>,
        #[arg(long, default_value_t = 1, help = "Page number")]
        page: usize,
        #[arg(long, default_value_t = 10, help = "Projects per page (max 100)")]
        limit: usize,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List skills grouped by category, filtered, or ranked by proficiency
    Skills {
        #[arg(long, help = "Only skills in this category")]
        category: Option<String>,
        #[arg(
            long,
            num_args = 0..=1,
            default_missing_value = "10",
            help = "Top N skills by proficiency (default 10)"
        )]
        top: Option<usize>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => commands::init::run(&cli.file, force),
        Commands::Show { json } => commands::show::run(&cli.file, json),
        Commands::Validate { json } => commands::validate::run(&cli.file, json),
        Commands::Status { brief, json } => commands::status::run(&cli.file, brief, json),
        Commands::Search { query, limit, json } => {
            commands::search::run(&cli.file, &query, limit, json)
        }
        Commands::Projects {
            skill,
            page,
            limit,
            json,
        } => commands::projects::run(&cli.file, skill.as_deref(), page, limit, json),
        Commands::Skills {
            category,
            top,
            json,
        } => commands::skills::run(&cli.file, category.as_deref(), top, json),
    }
}
