use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use std::io::Write;

/// Check that the configuration, with command-line overrides applied, loads and validates
pub fn validate_config<H: Host>(host: &mut H, common: &CommonArgs) -> Result<()> {
    match Common::new(common) {
        Ok(resolved) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = &common.config {
                let _ = writeln!(host.output(), "Config file: {path}");
            }
            let config = &resolved.config;
            let _ = writeln!(host.output(), "API base URL: {}", config.base_url);
            let _ = writeln!(host.output(), "Request timeout: {:?}", config.request_timeout);
            let _ = writeln!(host.output(), "Anchor: {}", config.anchor);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
