use anyhow::{Context, Result};
use sportcal_core::config::SportCalConfig;

/// Forget the selected event and the displayed month.
pub fn run(cfg: &SportCalConfig) -> Result<()> {
    let mut session = cfg.session_store()?;
    session
        .clear()
        .with_context(|| format!("Failed to clear session at {}", session.root().display()))?;
    println!("Session ended.");
    Ok(())
}
