#![forbid(unsafe_code)]
//! Advisor Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use advisor::commands::{
    execute_catalog, execute_generate, execute_init, execute_interview, execute_stats,
    CatalogOptions, Delivery, GenerateOptions, InitOptions, StatsOptions,
};
use advisor::config::CONFIG_FILE;
use advisor::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "advisor")]
#[command(about = "Personalized interview checklists for choosing a financial advisor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Output flags shared by checklist-producing commands
#[derive(clap::Args)]
struct OutputArgs {
    /// Output format (markdown, text, json, html)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the checklist to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show which question groups were added and why
    #[arg(long)]
    explain: bool,

    /// Do not save this submission
    #[arg(long)]
    no_save: bool,
}

impl From<OutputArgs> for Delivery {
    fn from(args: OutputArgs) -> Self {
        Delivery {
            format: args.format,
            output: args.output,
            explain: args.explain,
            no_save: args.no_save,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Directory for submissions and analytics
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Default output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Do not keep a submission log
        #[arg(long)]
        no_persist: bool,

        /// Do not count questionnaire steps
        #[arg(long)]
        no_analytics: bool,
    },

    /// Answer the questionnaire interactively
    Interview {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a checklist from flags or an answers file
    Generate {
        /// Answers file (JSON, or YAML with .yaml/.yml extension)
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Investable net worth (under_100k, 100k_500k, 500k_2m, 2m_5m, over_5m)
        #[arg(long)]
        net_worth: Option<String>,

        /// Primary goal (retirement, wealth_preservation, debt_management, tax_optimization, major_life_event)
        #[arg(long)]
        goal: Option<String>,

        /// Payment preference (fee_only, commission_based, not_sure)
        #[arg(long)]
        payment: Option<String>,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long)]
        experience: Option<String>,

        /// Special circumstance (business_owner, stock_options, divorce, inheritance, pension); repeatable
        #[arg(long = "circumstance")]
        circumstances: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the question catalog
    Catalog {
        /// Only check that question ids are unique
        #[arg(long)]
        check: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stored submissions and step counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Init { force, data_dir, format, no_persist, no_analytics } => {
            let options = InitOptions {
                path: cli.config,
                force,
                data_dir,
                format,
                no_persist,
                no_analytics,
            };
            execute_init(options)?;
        }

        Commands::Interview { output } => {
            execute_interview(output.into(), &config).await?;
        }

        Commands::Generate {
            answers,
            net_worth,
            goal,
            payment,
            experience,
            circumstances,
            output,
        } => {
            let options = GenerateOptions {
                answers_file: answers,
                net_worth,
                primary_goal: goal,
                payment_preference: payment,
                experience_level: experience,
                special_circumstances: circumstances,
                delivery: output.into(),
            };
            execute_generate(options, &config).await?;
        }

        Commands::Catalog { check, json } => {
            execute_catalog(CatalogOptions { check, json })?;
        }

        Commands::Stats { json } => {
            execute_stats(StatsOptions { json }, &config)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "advisor=debug" } else { "advisor=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
