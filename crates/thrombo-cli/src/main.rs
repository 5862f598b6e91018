use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod intake;

#[derive(Parser)]
#[command(name = "thrombo")]
#[command(about = "Antiplatelet therapy assessment and reporting", version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Report configuration file
    #[arg(short, long, global = true, default_value = "thrombo.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an intake file and write the report
    Assess {
        /// Intake JSON with `header` and `observation`
        intake: PathBuf,

        /// Write the HTML report here
        #[arg(long)]
        html: Option<PathBuf>,

        /// Write the DOCX report here
        #[arg(long)]
        docx: Option<PathBuf>,

        /// Do not append a row to the spreadsheet log
        #[arg(long)]
        no_append: bool,

        /// Print the full assessment as JSON instead of the table summary
        #[arg(long)]
        print_json: bool,
    },

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json);

    match cli.command {
        Command::Assess {
            intake,
            html,
            docx,
            no_append,
            print_json,
        } => commands::assess(&commands::AssessArgs {
            config: cli.config,
            intake,
            html,
            docx,
            append: !no_append,
            print_json,
        }),
        Command::InitConfig { force } => commands::init_config(&cli.config, force),
    }
}
