//! `check` command.

use anyhow::Result;
use tola_head::config::HeadConfig;
use tola_head::log;

/// Report a loaded config as valid, with a short summary.
///
/// Invalid configs never get here: loading already fails with diagnostics.
pub fn run_check(config: &HeadConfig) -> Result<()> {
    let head = &config.head;
    log!(
        "check";
        "{} is valid ({} meta, {} og, {} twitter, {} link, {} json-ld)",
        config.config_path.display(),
        head.meta.len(),
        head.og.len(),
        head.twitter.len(),
        head.link.len(),
        head.jsonld.len()
    );
    Ok(())
}
