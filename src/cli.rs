//! CLI interface for the ledger.
//!
//! One positional argument: the quest report log. The bulletin goes to
//! stdout; diagnostics go to stderr through `tracing`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use jiff::Zoned;
use jiff::civil::Date;
use tracing::info;

use crate::aggregate::aggregate;
use crate::config::Settings;
use crate::parse::read_reports_from_path;
use crate::render::Format;
use crate::report::ReportModel;
use crate::store::ReportStore;

/// Guild achievements from a Dungeon Archive quest log.
#[derive(Debug, Parser)]
#[command(name = "orbus-ledger", version)]
pub struct Cli {
    /// Tab-separated quest report log. The first line is a header and is skipped.
    pub input: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Bbcode)]
    pub format: FormatArg,

    /// Settings file. Defaults to `~/.orbus/config.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Date printed as "last updated" (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<Date>,
}

/// CLI-facing output format, mapped to the domain `Format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Forum bulletin markup.
    Bbcode,
    /// The report model as JSON.
    Json,
}

impl FormatArg {
    fn to_domain(self) -> Format {
        match self {
            Self::Bbcode => Format::BbCode,
            Self::Json => Format::Json,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let date = cli.date.unwrap_or_else(|| Zoned::now().date());

    let text = generate(&cli.input, &settings, cli.format.to_domain(), date)?;
    write_output(&mut io::stdout().lock(), &text)
}

/// Write the rendered report. A closed pipe is an error, not a panic.
fn write_output(out: &mut impl Write, text: &str) -> Result<(), String> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| format!("failed to write output: {e}"))
}

/// The whole pipeline: read the log, aggregate, rank, and render.
pub fn generate(
    input: &Path,
    settings: &Settings,
    format: Format,
    date: Date,
) -> Result<String, String> {
    let log = read_reports_from_path(input)
        .map_err(|e| format!("failed to read {}: {e}", input.display()))?;
    let dropped = log.dropped;
    let store: ReportStore = log.reports.into_iter().collect();
    let timelines = aggregate(&store);
    info!(
        reports = store.len(),
        characters = timelines.len(),
        dropped,
        "loaded quest log"
    );

    let model = ReportModel::build(&store, &timelines, settings, date, dropped);
    format
        .renderer()
        .render(&model)
        .map_err(|e| format!("failed to render report: {e}"))
}
