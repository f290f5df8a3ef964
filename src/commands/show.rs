use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sportcal_core::config::SportCalConfig;
use sportcal_core::month::MonthCursor;

use super::PageContext;
use crate::render::Render;

/// Which way to move the displayed month before rendering.
#[derive(Debug, Clone, Copy)]
pub enum Navigate {
    Stay,
    Prev,
    Next,
    To(MonthCursor),
}

/// How to change the sport filter before rendering.
#[derive(Debug, Clone)]
pub enum FilterChange {
    Keep,
    All,
    Sport(String),
}

pub async fn run(
    cfg: &SportCalConfig,
    today: NaiveDate,
    navigate: Navigate,
    filter: FilterChange,
) -> Result<()> {
    let mut ctx = PageContext::load(cfg, today).await?;

    match navigate {
        Navigate::Stay => {}
        Navigate::Prev => ctx.page.prev_month(),
        Navigate::Next => ctx.page.next_month(),
        Navigate::To(month) => ctx.page.show_month(month),
    }

    match filter {
        FilterChange::Keep => {}
        FilterChange::All => ctx.page.set_filter(None),
        FilterChange::Sport(sport) => ctx.page.set_filter(Some(&sport)),
    }

    ctx.save_view()?;
    print_calendar(&ctx, today);

    Ok(())
}

/// Draw the calendar page for the current view.
pub fn print_calendar(ctx: &PageContext, today: NaiveDate) {
    let grid = ctx.page.render(today);
    println!("{}", grid.render());

    let filter = match ctx.page.filter() {
        Some(sport) => format!("Showing: {sport}"),
        None => "Showing: all sports".to_string(),
    };
    println!();
    println!("{}", filter.dimmed());

    if !grid.days().any(|day| day.has_events()) {
        println!("{}", "No events this month".dimmed());
    }
}
