use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use jobboard::commands;
use jobboard_core::config::Config;
use jobboard_core::posting::{PostJobForm, CURRENCIES};
use jobboard_core::JobType;
use jobboard_sheets::DataSource;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobboard", about = "Job board — browse spreadsheet job postings")]
struct Cli {
    /// Write debug logs to /tmp/jobboard-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Job sheet path or http:// URL (overrides the config file).
    ///
    /// The default sheet, public/data/jobs.xlsx, is not shipped and must be
    /// provided; `jobboard template --out public/data/jobs.xlsx` writes a
    /// one-row starting point.
    #[arg(long, global = true, value_name = "PATH|URL")]
    source: Option<String>,

    /// Read this config file instead of ~/.config/jobboard/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Interactive list / detail browser (default).
    Browse,
    /// Print every job.
    List {
        #[arg(long)]
        json: bool,
        /// Case-insensitive match on title, company, location or type.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Print one job by id.
    Show {
        id: String,
        /// Print the schema.org JSON-LD block instead.
        #[arg(long)]
        schema: bool,
    },
    /// Write a sample workbook with the expected columns.
    Template {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Parse a workbook and report what would be imported. Nothing is saved.
    Upload { file: PathBuf },
    /// Build a posting from flags and report it. Nothing is saved.
    Post(PostArgs),
}

#[derive(Args)]
struct PostArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    company: String,
    #[arg(long)]
    location: String,
    #[arg(long = "type", default_value = "FULL_TIME")]
    job_type: String,
    #[arg(long)]
    description: String,
    /// One requirement; repeat for more.
    #[arg(long = "requirement", required = true)]
    requirements: Vec<String>,
    #[arg(long)]
    salary_min: String,
    #[arg(long)]
    salary_max: String,
    #[arg(long, default_value = CURRENCIES[0], value_parser = CURRENCIES)]
    currency: String,
    #[arg(long)]
    logo: Option<String>,
}

impl From<PostArgs> for PostJobForm {
    fn from(args: PostArgs) -> Self {
        PostJobForm {
            title: args.title,
            company: args.company,
            location: args.location,
            job_type: JobType::from(args.job_type),
            description: args.description,
            requirements: args.requirements.join("\n"),
            salary_min: args.salary_min,
            salary_max: args.salary_max,
            currency: args.currency,
            company_logo: args.logo.unwrap_or_default(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Cmd::Browse));
    init_logging(cli.debug, interactive)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path).with_context(|| format!("failed to read config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unavailable, using defaults");
            Config::defaults()
        }),
    };
    let source = DataSource::parse(cli.source.as_deref().unwrap_or(&config.source.location));
    let now = Utc::now();
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Cmd::Browse) {
        Cmd::Browse => {
            drop(out);
            jobboard_tui::run(config, source)
        }
        Cmd::List { json, filter } => {
            let catalog = commands::load_blocking(&source)?
                .map_err(|e| anyhow::anyhow!("Error loading jobs: {e}"))?;
            commands::list(&mut out, &catalog, filter.as_deref(), json, now)
        }
        Cmd::Show { id, schema } => {
            let catalog = commands::load_blocking(&source)?
                .map_err(|e| anyhow::anyhow!("Error loading job details: {e}"))?;
            commands::show(&mut out, &catalog, &id, schema, now)
        }
        Cmd::Template { out: path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&config.template.file_name));
            commands::template(&mut out, &path, now.date_naive())
        }
        Cmd::Upload { file } => commands::upload(&mut out, &file, now.date_naive()),
        Cmd::Post(args) => commands::post(&mut out, &PostJobForm::from(args), now),
    }
}

/// `--debug` logs everything to a file so the TUI screen stays clean. CLI
/// subcommands otherwise log warnings to stderr; the TUI logs nothing.
fn init_logging(debug: bool, interactive: bool) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/jobboard-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("jobboard debug log started, tail -f /tmp/jobboard-debug.log");
    } else if !interactive {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter("warn"))
            .init();
    }
    Ok(())
}
