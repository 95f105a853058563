use anyhow::{bail, Context, Result};
use chrono::Months;
use std::io::Write;
use std::path::Path;

use super::args::{BudgetAction, CalendarArgs, ChangeArgs, Command, EntryArgs, TargetArgs};
use crate::aggregate::{
    available_months, daily_breakdown, forecast_summary, month_summary, pattern_analysis,
    sum_by_period, waste_summary, Period,
};
use crate::budget::{BudgetOutlook, BudgetSetting};
use crate::classify::{classify, reinterpret};
use crate::config::Config;
use crate::db::{Database, Ledger};
use crate::errors::LedgerError;
use crate::export;
use crate::models::{ExpenseKey, ExpenseRecord, Source, Tag, YearMonth};
use crate::narrative::{build_prompt, request_feedback, ChatNarrator};
use crate::ui::render;
use crate::ui::session::Session;
use crate::ui::util::format_won;

/// Run one command and write its text to `out`.
pub(crate) fn dispatch(
    command: Command,
    config: &Config,
    db: &Database,
    out: &mut dyn Write,
) -> Result<()> {
    let text = match command {
        Command::Dashboard { source } => cli_dashboard(config, db, source)?,
        Command::Calendar(args) => cli_calendar(config, db, &args)?,
        Command::Report { source, month } => cli_report(db, source, month)?,
        Command::Patterns { source, tags } => cli_patterns(db, source, &tags)?,
        Command::Forecast {
            source,
            months,
            cut,
            feedback,
        } => cli_forecast(config, db, source, months, cut, feedback)?,
        Command::Budget { source, action } => cli_budget(config, db, source, action)?,
        Command::Add { source, entry } => cli_add(config, db, source, entry)?,
        Command::Update {
            source,
            target,
            changes,
        } => cli_update(config, db, source, &target, changes)?,
        Command::Delete { source, target } => cli_delete(db, source, &target)?,
        Command::List { source, month, by } => cli_list(db, source, month, by)?,
        Command::Export {
            source,
            month,
            output,
        } => cli_export(db, source, month, output.as_deref(), out)?,
        Command::Categories => render::render_categories(),
    };
    out.write_all(text.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

// ── Views ─────────────────────────────────────────────────────

fn cli_dashboard(config: &Config, db: &Database, source: Source) -> Result<String> {
    let since = config
        .today
        .checked_sub_months(Months::new(1))
        .context("Date out of range")?;
    let records = reinterpret(Ledger::new(db, source).load_since(since)?);
    Ok(render::render_dashboard(&waste_summary(&records, since)))
}

fn cli_calendar(config: &Config, db: &Database, args: &CalendarArgs) -> Result<String> {
    let mut session = Session::new(config.today);
    if let Some(month) = args.month {
        session.jump(month);
    }
    if args.prev {
        session.prev_month();
    }
    if args.next {
        session.next_month();
    }
    session.shift(args.shift);
    if let Some(day) = args.day {
        session.select_day(day);
    }

    let month = session.month;
    let records = reinterpret(Ledger::new(db, args.source).load_range(month.first_day(), month.end())?);
    Ok(render::render_calendar(&daily_breakdown(&records, month), &session))
}

fn cli_report(db: &Database, source: Source, month: Option<YearMonth>) -> Result<String> {
    let records = reinterpret(Ledger::new(db, source).load_all()?);
    let available = available_months(&records);
    let Some(month) = month.or_else(|| available.first().copied()) else {
        return Ok(format!("No {source} records yet.\n"));
    };
    Ok(render::render_report(&available, &month_summary(&records, month)))
}

fn cli_patterns(db: &Database, source: Source, tags: &[Tag]) -> Result<String> {
    let records = reinterpret(Ledger::new(db, source).load_all()?);
    Ok(render::render_patterns(&pattern_analysis(&records, tags)))
}

fn cli_forecast(
    config: &Config,
    db: &Database,
    source: Source,
    months: u32,
    cut: u32,
    feedback: bool,
) -> Result<String> {
    let records = reinterpret(Ledger::new(db, source).load_all()?);
    let forecast = forecast_summary(&records);
    let simulation = forecast.simulate_cut(cut, months);
    let feedback = if feedback {
        let narrator = ChatNarrator::from_config(config)?;
        Some(request_feedback(&narrator, &build_prompt(&forecast, months)))
    } else {
        None
    };
    Ok(render::render_forecast(&forecast, months, &simulation, feedback.as_ref()))
}

fn cli_budget(
    config: &Config,
    db: &Database,
    source: Source,
    action: Option<BudgetAction>,
) -> Result<String> {
    let path = config.budget_file();
    let mut text = String::new();
    if let Some(BudgetAction::Set { amount }) = action {
        BudgetSetting::new(amount)?.save(&path)?;
        text.push_str(&format!("Budget saved: {}\n\n", format_won(amount)));
    }

    let month = YearMonth::of(config.today);
    let records = Ledger::new(db, source).load_range(month.first_day(), month.end())?;
    let outlook = BudgetOutlook::compute(BudgetSetting::load(&path), &records, config.today);
    text.push_str(&render::render_budget(&outlook));
    Ok(text)
}

fn cli_list(
    db: &Database,
    source: Source,
    month: Option<YearMonth>,
    by: Option<Period>,
) -> Result<String> {
    let ledger = Ledger::new(db, source);
    let records = reinterpret(match month {
        Some(m) => ledger.load_range(m.first_day(), m.end())?,
        None => ledger.load_all()?,
    });
    Ok(match by {
        Some(period) => render::render_period_totals(&sum_by_period(&records, period)),
        None => render::render_records(&records),
    })
}

fn cli_export(
    db: &Database,
    source: Source,
    month: Option<YearMonth>,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<String> {
    let records = reinterpret(Ledger::new(db, source).load_all()?);
    let Some(month) = month.or_else(|| available_months(&records).first().copied()) else {
        return Ok(format!("No {source} records to export.\n"));
    };
    let rows: Vec<_> = records
        .into_iter()
        .filter(|r| month.contains(r.record.date))
        .collect();

    match output {
        Some(path) => {
            let count = export::export_to_path(path, &rows)?;
            Ok(format!("Exported {count} records for {month} to {}\n", path.display()))
        }
        None => {
            export::write_csv(out, &rows)?;
            Ok(String::new())
        }
    }
}

// ── Entry ─────────────────────────────────────────────────────

fn cli_add(config: &Config, db: &Database, source: Source, entry: EntryArgs) -> Result<String> {
    let record = ExpenseRecord::new(
        entry.date.unwrap_or(config.today),
        entry.time,
        entry.major.trim(),
        entry.minor.trim(),
        entry.cost,
    )
    .with_memo(entry.memo);
    let id = Ledger::new(db, source).insert(&record)?;
    Ok(format!("Recorded #{id}: {}\n", describe(&record)))
}

fn cli_update(
    config: &Config,
    db: &Database,
    source: Source,
    target: &TargetArgs,
    changes: ChangeArgs,
) -> Result<String> {
    let ledger = Ledger::new(db, source);
    let id = match target.id {
        Some(id) => id,
        None => ledger.resolve(&target_key(target)?)?,
    };
    let existing = ledger.get(id)?.ok_or_else(|| LedgerError::NoMatch {
        table: source.table(),
        key: format!("id {id}"),
    })?;

    let mut session = Session::new(config.today);
    session.begin_edit(id);
    let updated = apply_changes(existing.clone(), changes);
    if updated == existing {
        session.cancel_edit();
    } else {
        ledger.update(id, &updated)?;
    }

    // Show the day the record now lives on, with the edited row flagged.
    session.select_day(updated.date);
    let month = session.month;
    let records = reinterpret(ledger.load_range(month.first_day(), month.end())?);
    let calendar = daily_breakdown(&records, month);
    let day = render::render_day(updated.date, calendar.day(updated.date), session.editing);
    let verb = match session.finish_edit() {
        Some(_) => "Updated",
        None => "Unchanged",
    };
    Ok(format!("{verb} #{id}: {}\n\n{day}", describe(&updated)))
}

fn cli_delete(db: &Database, source: Source, target: &TargetArgs) -> Result<String> {
    let ledger = Ledger::new(db, source);
    let id = match target.id {
        Some(id) => {
            ledger.delete(id)?;
            id
        }
        None => ledger.delete_by_key(&target_key(target)?)?,
    };
    Ok(format!("Deleted #{id}\n"))
}

/// The natural key named on the command line. Date, major and minor are required.
pub(crate) fn target_key(target: &TargetArgs) -> Result<ExpenseKey> {
    let (Some(date), Some(major), Some(minor)) = (target.date, &target.major, &target.minor)
    else {
        bail!("Name the record with --id, or with --date, --major and --minor");
    };
    Ok(ExpenseKey {
        date,
        time: target.time,
        major: major.trim().to_string(),
        minor: minor.trim().to_string(),
        cost: target.cost,
    })
}

/// Overlay the `--set-*` flags onto a stored record.
pub(crate) fn apply_changes(mut record: ExpenseRecord, changes: ChangeArgs) -> ExpenseRecord {
    if let Some(date) = changes.set_date {
        record.date = date;
    }
    if let Some(time) = changes.set_time {
        record.time = Some(time);
    }
    if let Some(major) = changes.set_major {
        record.major = major.trim().to_string();
    }
    if let Some(minor) = changes.set_minor {
        record.minor = minor.trim().to_string();
    }
    if let Some(cost) = changes.set_cost {
        record.cost = cost;
    }
    if let Some(memo) = changes.set_memo {
        record.memo = memo;
    }
    record
}

fn describe(record: &ExpenseRecord) -> String {
    let time = record
        .time
        .map(|t| format!(" {t}"))
        .unwrap_or_default();
    format!(
        "{}{time} {} / {} {} → {}",
        record.date,
        record.major,
        record.minor,
        format_won(record.cost),
        classify(&record.major, &record.minor)
    )
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
