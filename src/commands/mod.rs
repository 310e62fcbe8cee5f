pub mod eval;
pub mod settings;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Compute overtime and today's target leave time from a timecard snapshot")]
    Eval(eval::EvalArgs),
    #[command(about = "Show or edit settings")]
    Settings(settings::SettingsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();

        let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::from_default_env() };
        // try_init: a subscriber may already be installed when embedded in tests
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

        match cli.command {
            Commands::Eval(args) => eval::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
        }
    }
}
