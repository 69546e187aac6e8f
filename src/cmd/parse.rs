use crate::reports;
use chessrank::error::RankResult;
use chessrank::standings::extract;
use chessrank::text::visible_text;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Saved page text, or HTML with `--html`.
    pub file: PathBuf,

    /// Treat the file as HTML and reduce it to visible text first.
    #[arg(long, default_value_t = false)]
    pub html: bool,

    /// Print the records as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ParseArgs) -> RankResult<()> {
    let raw = fs::read_to_string(&args.file)?;
    let text = if args.html { visible_text(&raw) } else { raw };

    let records = extract(&text);
    info!(
        "🔎 {} players in {}",
        records.len(),
        args.file.display()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        reports::section_table(&args.file.display().to_string(), &records);
    }
    Ok(())
}
