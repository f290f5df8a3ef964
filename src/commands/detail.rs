use anyhow::Result;
use chrono::NaiveDate;
use sportcal_core::config::SportCalConfig;
use sportcal_core::detail::display_detail;

use super::PageContext;
use crate::render::Render;

/// Show the event currently handed to the detail view.
pub fn run(cfg: &SportCalConfig) -> Result<()> {
    let session = cfg.session_store()?;
    println!("{}", display_detail(&session).render());
    Ok(())
}

/// Select the event with `id` and show it.
pub async fn select(cfg: &SportCalConfig, today: NaiveDate, id: i64) -> Result<()> {
    let mut ctx = PageContext::load(cfg, today).await?;
    ctx.page.select(id, &mut ctx.session)?;
    println!("{}", display_detail(&ctx.session).render());
    Ok(())
}
