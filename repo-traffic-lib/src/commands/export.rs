use super::Host;
use super::common::{Common, CommonArgs, WindowArgs};
use crate::Result;
use crate::reports::{default_csv_file_name, generate_console_summary, generate_csv, generate_json_summary};
use crate::source::load_records;
use crate::traffic::{DateBounds, parse_tagged_metrics, summarize};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{EnrichableExt, IntoAppError};
use std::fs;
use std::io::{BufWriter, Write};

const LOG_TARGET: &str = "    export";

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Read records from a JSON file instead of the stats API
    #[arg(long, value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// CSV file to write (default is `github-repo-summary_<start>_to_<end>.csv`)
    #[arg(long, short = 'o', value_name = "PATH", help_heading = "Report Output")]
    pub output: Option<Utf8PathBuf>,

    /// Also output the summary to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Also show the summary on the console
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// Export per-repository totals for every account and repository over the requested window.
pub async fn export_summary<H: Host>(host: &mut H, common: &CommonArgs, args: &ExportArgs) -> Result<()> {
    let common = Common::new(common)?;
    let bounds = args.window.bounds();

    let _ = writeln!(host.output(), "Exporting data from {}", describe(bounds));

    let records = if let Some(path) = &args.input {
        load_records(path)?
    } else {
        common.client()?.all_views().await?
    };

    let mut flat = parse_tagged_metrics(&records)?;
    common.config.anchor.apply(&mut flat);

    let rows = summarize(&flat, bounds);
    log::info!(target: LOG_TARGET, "Summarized {} record(s) into {} repositories", flat.len(), rows.len());

    let filename = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from(default_csv_file_name(bounds)));
    let file = fs::File::create(&filename).into_app_err_with(|| format!("creating export file '{filename}'"))?;
    generate_csv(&rows, BufWriter::new(file)).map_err(|e| e.enrich_with(|| format!("writing export file '{filename}'")))?;

    if let Some(json_filename) = &args.json {
        let mut json_output = String::new();
        generate_json_summary(&rows, bounds, &mut json_output)?;
        fs::write(json_filename, json_output).into_app_err_with(|| format!("writing summary to '{json_filename}'"))?;
    }

    if args.console {
        let mut console_output = String::new();
        generate_console_summary(&rows, common.use_colors(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    let _ = writeln!(host.output(), "Wrote {} repositories to {filename}", rows.len());
    Ok(())
}

/// Describe the window the way the export banner shows it, e.g. `2024-01-01 to end`.
fn describe(bounds: DateBounds) -> String {
    let (start, end) = bounds.sides("start", "end");
    format!("{start} to {end}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use camino::Utf8Path;
    use chrono::NaiveDate;

    const FLAT: &str = r#"[
        {"account":"acme","repo_name":"rocket","date":"2024-01-01","views":5,"uniques":2},
        {"account":"acme","repo_name":"anvil","date":"2024-01-02","views":3,"uniques":1},
        {"account":"acme","repo_name":"rocket","date":"2024-01-03","views":4,"uniques":1}
    ]"#;

    fn common_args(dir: &Utf8Path) -> CommonArgs {
        CommonArgs::isolated(dir)
    }

    fn setup(json: &str) -> (tempfile::TempDir, Utf8PathBuf, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let input = dir.join("all.json");
        fs::write(&input, json).unwrap();
        (tmp, dir, input)
    }

    fn export_args(input: Utf8PathBuf, output: Utf8PathBuf) -> ExportArgs {
        ExportArgs {
            window: WindowArgs { start: None, end: None },
            input: Some(input),
            output: Some(output),
            json: None,
            console: false,
        }
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_writes_csv() {
        let (_tmp, dir, input) = setup(FLAT);
        let output = dir.join("summary.csv");

        let mut host = TestHost::new();
        export_summary(&mut host, &common_args(&dir), &export_args(input, output.clone())).await.unwrap();

        insta::assert_snapshot!(fs::read_to_string(&output).unwrap(), @r"
        GitHub Account,Repository,Date Range,Total Views,Total Unique Visitors
        acme,rocket,START to END,9,3
        acme,anvil,START to END,3,1
        ");
        assert!(host.output_str().starts_with("Exporting data from start to end\n"));
        assert!(host.output_str().contains("Wrote 2 repositories"));
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_window_restricts_totals() {
        let (_tmp, dir, input) = setup(FLAT);
        let output = dir.join("summary.csv");

        let mut args = export_args(input, output.clone());
        args.window.start = NaiveDate::from_ymd_opt(2024, 1, 2);
        args.console = true;

        let mut host = TestHost::new();
        export_summary(&mut host, &common_args(&dir), &args).await.unwrap();

        let csv = fs::read_to_string(&output).unwrap();
        assert!(csv.contains("acme,anvil,2024-01-02 to END,3,1"));
        assert!(csv.contains("acme,rocket,2024-01-02 to END,4,1"));
        assert!(host.output_str().contains("Total Unique Visitors"));
        assert!(host.output_str().starts_with("Exporting data from 2024-01-02 to end\n"));
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_json_summary() {
        let (_tmp, dir, input) = setup(FLAT);
        let json_path = dir.join("summary.json");

        let mut args = export_args(input, dir.join("summary.csv"));
        args.json = Some(json_path.clone());

        let mut host = TestHost::new();
        export_summary(&mut host, &common_args(&dir), &args).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["repositories"].as_array().unwrap().len(), 2);
        assert_eq!(value["repositories"][0]["total_views"], 9);
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_missing_account_fails() {
        let (_tmp, dir, input) = setup(r#"[{"repo_name":"rocket","date":"2024-01-01"}]"#);

        let mut host = TestHost::new();
        let result = export_summary(&mut host, &common_args(&dir), &export_args(input, dir.join("summary.csv"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_empty_input_writes_header_only() {
        let (_tmp, dir, input) = setup("[]");
        let output = dir.join("summary.csv");

        let mut host = TestHost::new();
        export_summary(&mut host, &common_args(&dir), &export_args(input, output.clone())).await.unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(DateBounds::unbounded()), "start to end");
        assert_eq!(describe(DateBounds::new(None, NaiveDate::from_ymd_opt(2024, 2, 29))), "start to 2024-02-29");
    }
}
