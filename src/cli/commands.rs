//! Subcommand handlers.

use anyhow::Context;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::info;

use huddle_schedule::export::{write_csv, CsvOptions};
use huddle_schedule::format::Locale;
use huddle_schedule::models::{Employee, WeeklySchedule};
use huddle_schedule::view::{
    assignments_for, current_week, filter_weeks, group_by_month, RosterSummary,
};
use huddle_schedule::{ConfigError, RosterConfig, ScheduleStore};

use super::Commands;

/// Runs the selected subcommand against `store`.
pub fn dispatch(
    command: &Commands,
    store: &ScheduleStore,
    config: &RosterConfig,
    locale: Locale,
) -> anyhow::Result<()> {
    match command {
        Commands::List {
            search,
            employee,
            json,
        } => list(store, search.as_deref(), employee.as_deref(), *json, locale),
        Commands::Months { search } => months(store, search.as_deref(), locale),
        Commands::Current { date } => {
            let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            current(store, today, locale)
        }
        Commands::Summary => summary(store),
        Commands::Export { output, no_bom } => {
            let path = output
                .clone()
                .unwrap_or_else(|| config.output.export_file.clone().into());
            let options = CsvOptions {
                bom: config.output.bom && !no_bom,
            };
            export(store, &path, options)
        }
        Commands::Check => check(config),
    }
}

/// Validates `config`, printing each problem found.
pub fn check(config: &RosterConfig) -> anyhow::Result<()> {
    match config.validate() {
        Ok(()) => {
            println!("configuration OK");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                println!("  [{:?}] {}", error.kind, error.message);
            }
            Err(ConfigError::Invalid(errors).into())
        }
    }
}

fn list(
    store: &ScheduleStore,
    search: Option<&str>,
    employee: Option<&str>,
    json: bool,
    locale: Locale,
) -> anyhow::Result<()> {
    let mut weeks = filter_weeks(store.iter(), search.unwrap_or(""));
    if let Some(id) = employee {
        weeks = assignments_for(weeks, id);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&weeks).context("failed to serialize roster")?;
        println!("{rendered}");
        return Ok(());
    }

    if weeks.is_empty() {
        println!("No weeks match.");
        return Ok(());
    }
    for week in weeks {
        print_row(week, locale);
    }
    Ok(())
}

fn months(store: &ScheduleStore, search: Option<&str>, locale: Locale) -> anyhow::Result<()> {
    let weeks = filter_weeks(store.iter(), search.unwrap_or(""));
    let groups = group_by_month(weeks);
    if groups.is_empty() {
        println!("No weeks match.");
        return Ok(());
    }

    for (month, weeks) in groups {
        println!("{} ({} weeks)", month.label(locale), weeks.len());
        for week in weeks {
            print_row(week, locale);
        }
        println!();
    }
    Ok(())
}

fn current(store: &ScheduleStore, today: NaiveDate, locale: Locale) -> anyhow::Result<()> {
    let Some(week) = current_week(store.iter(), today) else {
        println!("The roster is empty.");
        return Ok(());
    };

    println!(
        "Week {}: {} to {}",
        week.week_number,
        locale.long_date(week.start_date),
        locale.long_date(week.end_date)
    );
    print_person("Lead", &week.lead);
    print_person("Co-Lead", &week.co_lead);
    if week.has_holidays() {
        println!("  Holidays: {}", week.holiday_names());
    }
    println!("  Working days: {}", week.working_days.len());
    Ok(())
}

fn summary(store: &ScheduleStore) -> anyhow::Result<()> {
    let summary = RosterSummary::calculate(store.iter());

    println!("Active weeks:      {}", summary.active_weeks);
    println!("Total assignments: {}", summary.total_assignments);
    println!("Holidays observed: {}", summary.holidays_observed);
    println!("Working days:      {}", summary.working_days);
    if let Some((count, ids)) = summary.busiest() {
        println!("Most weeks served: {count} ({})", ids.join(", "));
    }
    Ok(())
}

fn export(store: &ScheduleStore, path: &Path, options: CsvOptions) -> anyhow::Result<()> {
    if path == Path::new("-") {
        let stdout = io::stdout();
        write_csv(stdout.lock(), store.iter(), options).context("failed to write CSV to stdout")?;
        return Ok(());
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(BufWriter::new(file), store.iter(), options)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), weeks = store.len(), "exported roster");
    eprintln!("Exported {} weeks to {}", store.len(), path.display());
    Ok(())
}

fn print_row(week: &WeeklySchedule, locale: Locale) {
    let mut line = format!(
        "{:>3}  {:<28} Lead: {:<28} Co-Lead: {}",
        week.week_number,
        locale.week_range(week.start_date, week.end_date),
        week.lead.name,
        week.co_lead.name,
    );
    if week.has_holidays() {
        line.push_str(&format!("  [{}]", week.holiday_names()));
    }
    println!("{line}");
}

fn print_person(role: &str, employee: &Employee) {
    println!("  {role}: {}", employee.name);
    if !employee.position.is_empty() {
        println!("    {}", employee.position);
    }
    if !employee.department.is_empty() {
        println!("    {}", employee.department);
    }
}
