use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use std::io::Write;

const LOG_TARGET: &str = "  accounts";

/// Print every account known to the stats API, one per line.
pub async fn list_accounts<H: Host>(host: &mut H, common: &CommonArgs) -> Result<()> {
    let common = Common::new(common)?;
    let accounts = common.client()?.accounts().await?;

    log::info!(target: LOG_TARGET, "Found {} account(s)", accounts.len());

    let mut output = host.output();
    for account in &accounts {
        let _ = writeln!(output, "{account}");
    }

    Ok(())
}
