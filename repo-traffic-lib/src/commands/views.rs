use super::Host;
use super::common::{Common, CommonArgs, WindowArgs};
use crate::Result;
use crate::reports::{NO_DATA_MESSAGE, generate_console_series, generate_json_series};
use crate::source::load_records;
use crate::traffic::{DailyMetric, FixedClock, RepoKey, SeriesTotals, SystemClock, densify_with, filter, parse_metrics};
use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "     views";

#[derive(Parser, Debug)]
pub struct ViewsArgs {
    /// Account that owns the repository
    #[arg(long, short = 'a', value_name = "ACCOUNT")]
    pub account: String,

    /// Repository to show
    #[arg(long, short = 'r', value_name = "REPO")]
    pub repo: String,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Day the series is filled up to (default is the current UTC date)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Read records from a JSON file instead of the stats API
    #[arg(long, value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// Output the full daily series to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

/// Show the day-by-day traffic of one repository within the requested window.
pub async fn show_views<H: Host>(host: &mut H, common: &CommonArgs, args: &ViewsArgs) -> Result<()> {
    let common = Common::new(common)?;
    let key = RepoKey::new(&args.account, &args.repo);
    let bounds = args.window.bounds();

    let records = if let Some(path) = &args.input {
        load_records(path)?
    } else {
        common.client()?.views(&args.account, &args.repo, bounds).await?
    };

    let mut metrics = parse_metrics(&records)?;
    common.config.anchor.apply(&mut metrics);

    let dense = fill(&metrics, args.today);
    log::info!(target: LOG_TARGET, "{key}: {} record(s) filled to {} day(s)", metrics.len(), dense.len());

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json_series(&key, &dense, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing series to '{filename}'"))?;
    }

    if dense.is_empty() {
        let _ = writeln!(host.output(), "{NO_DATA_MESSAGE}");
        return Ok(());
    }

    let rows = filter(&dense, bounds);
    let totals = SeriesTotals::of(&rows);

    let mut console_output = String::new();
    generate_console_series(&key.repo_name, &rows, totals, common.use_colors(), &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    Ok(())
}

fn fill(metrics: &[DailyMetric], today: Option<NaiveDate>) -> Vec<DailyMetric> {
    match today {
        Some(today) => densify_with(metrics, &FixedClock::new(today)),
        None => densify_with(metrics, &SystemClock),
    }
}
