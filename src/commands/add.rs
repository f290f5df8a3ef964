use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;
use sportcal_core::config::SportCalConfig;
use sportcal_core::form::EventForm;

use super::PageContext;
use super::show::print_calendar;
use crate::utils::tui::is_interactive;

/// Values given on the command line; `None` fields are prompted for.
#[derive(Debug, Default)]
pub struct AddArgs {
    pub date: Option<String>,
    pub time: Option<String>,
    pub sport: Option<String>,
    pub teams: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
}

pub async fn run(cfg: &SportCalConfig, today: NaiveDate, args: AddArgs) -> Result<()> {
    let missing_required = args.date.is_none()
        || args.time.is_none()
        || args.sport.is_none()
        || args.teams.is_none();
    let interactive = missing_required && is_interactive();

    let mut form = EventForm {
        date: field(args.date, "  Date (YYYY-MM-DD)", interactive)?,
        time: field(args.time, "  Time (HH:MM)", interactive)?,
        sport: field(args.sport, "  Sport", interactive)?,
        teams: field(args.teams, "  Teams", interactive)?,
        venue: field(args.venue, "  Venue (skip)", interactive)?,
        description: field(args.description, "  Description (skip)", interactive)?,
    };

    let mut ctx = PageContext::load(cfg, today).await?;

    let event = ctx.page.submit(&mut form, &mut ctx.store)?;

    ctx.save_view()?;

    println!("{} {} {}", "Added".green(), event, format!("#{}", event.id).dimmed());
    println!();
    print_calendar(&ctx, today);

    Ok(())
}

/// Use the given value, prompt for it, or leave it blank.
fn field(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}
