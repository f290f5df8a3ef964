use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sportcal_core::config::SportCalConfig;

use super::PageContext;

pub async fn run(cfg: &SportCalConfig, today: NaiveDate) -> Result<()> {
    let ctx = PageContext::load(cfg, today).await?;
    let active = ctx.page.filter();

    for sport in ctx.page.sports() {
        if active == Some(sport.as_str()) {
            println!("{} {}", sport.bold(), "(filter)".dimmed());
        } else {
            println!("{sport}");
        }
    }

    Ok(())
}
