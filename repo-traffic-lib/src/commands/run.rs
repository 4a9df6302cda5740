//! Command dispatch logic for repo-traffic

use super::common::{CommonArgs, init_logging};
use super::{ExportArgs, InitArgs, ReposArgs, ViewsArgs, export_summary, init_config, list_accounts, list_repos, show_views, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "repo-traffic", author, version, long_about = None)]
#[command(about = "Inspect and export repository traffic statistics")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: TrafficSubcommand,
}

#[derive(Subcommand, Debug)]
enum TrafficSubcommand {
    /// List the accounts known to the stats API
    Accounts,
    /// List the repositories tracked for an account
    Repos(ReposArgs),
    /// Show the daily views and unique visitors of one repository
    Views(Box<ViewsArgs>),
    /// Export per-repository totals for all accounts to CSV
    Export(Box<ExportArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate,
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.common.log_level);

    match &cli.command {
        TrafficSubcommand::Accounts => list_accounts(host, &cli.common).await,
        TrafficSubcommand::Repos(repos_args) => list_repos(host, &cli.common, repos_args).await,
        TrafficSubcommand::Views(views_args) => show_views(host, &cli.common, views_args).await,
        TrafficSubcommand::Export(export_args) => export_summary(host, &cli.common, export_args).await,
        TrafficSubcommand::Init(init_args) => init_config(host, init_args),
        TrafficSubcommand::Validate => validate_config(host, &cli.common),
    }
}
