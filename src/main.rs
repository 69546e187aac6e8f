use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "event.json")]
    config: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch every section, rebuild the season ranking and write the output files.
    ///
    /// Pages are fetched over plain HTTP without running JavaScript. For sites
    /// that render standings client-side, save the rendered text per section
    /// and pass `--from-dir`.
    Update(cmd::update::UpdateArgs),
    /// Extract the standings of a single saved page.
    Parse(cmd::parse::ParseArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Update(args) => cmd::update::run(args, &cli.config),
        Commands::Parse(args) => cmd::parse::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
