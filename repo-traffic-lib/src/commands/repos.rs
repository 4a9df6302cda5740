use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use clap::Parser;
use std::io::Write;

const LOG_TARGET: &str = "     repos";

#[derive(Parser, Debug)]
pub struct ReposArgs {
    /// Account whose repositories are listed
    #[arg(long, short = 'a', value_name = "ACCOUNT")]
    pub account: String,
}

/// Print the repositories tracked for one account, one per line.
pub async fn list_repos<H: Host>(host: &mut H, common: &CommonArgs, args: &ReposArgs) -> Result<()> {
    let common = Common::new(common)?;
    let repos = common.client()?.repos(&args.account).await?;

    log::info!(target: LOG_TARGET, "Found {} repositories for '{}'", repos.len(), args.account);

    let mut output = host.output();
    for repo in &repos {
        let _ = writeln!(output, "{repo}");
    }

    Ok(())
}
