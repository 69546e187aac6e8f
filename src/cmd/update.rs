use crate::reports;
use chessrank::api;
use chessrank::config::{EventConfig, FetchParams};
use chessrank::error::RankResult;
use chessrank::source::{CachedSource, DirSource, HttpSource, PageSource};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub fetch: FetchParams,

    /// Read saved page text (`<section id>.txt`) from this directory instead of fetching.
    ///
    /// Live fetching is a plain GET with no JavaScript, so standings that the
    /// site renders client-side come back empty. Rendered text saved from a
    /// browser is the dependable input.
    #[arg(long)]
    pub from_dir: Option<PathBuf>,

    /// Save the text of every fetched page here.
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,

    /// Output directory. Defaults to the one in the event file.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub csv: bool,

    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

pub fn run(args: UpdateArgs, config_path: &str) -> RankResult<()> {
    info!("📂 Loading event: {}", config_path);
    let config = EventConfig::load_from_file(config_path)?;

    let source = build_source(&args)?;
    let sections = api::collect_sections(&config, &*source, args.dump_dir.as_deref());
    reports::section_previews(&sections);

    let ranking = api::build_ranking(&config, &sections)?;

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());
    api::write_outputs(&ranking, &config, &out_dir, args.csv)?;

    reports::season_table(&ranking, args.top);
    Ok(())
}

fn build_source(args: &UpdateArgs) -> RankResult<Box<dyn PageSource>> {
    if let Some(dir) = &args.from_dir {
        info!("📂 Reading saved pages from {}", dir.display());
        return Ok(Box::new(DirSource::new(dir)));
    }

    let http = HttpSource::new(&args.fetch)?;
    match &args.fetch.cache_dir {
        Some(dir) => Ok(Box::new(CachedSource::new(
            http,
            dir,
            args.fetch.cache_minutes,
        ))),
        None => Ok(Box::new(http)),
    }
}
