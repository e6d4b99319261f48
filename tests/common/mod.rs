// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use chrono::NaiveDate;
use pennywise::cli::{OutputFormat, Session};
use pennywise::domain::{Ledger, TransactionKind};

/// Helper to parse a yyyy-MM-dd string into a date
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: the two-transaction January ledger
/// (Salary 1000.00 on 2024-01-01, Food 50.00 on 2024-01-05)
pub fn january_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add(
        TransactionKind::Income,
        "Salary",
        100000,
        parse_date("2024-01-01"),
        "Jan pay",
    );
    ledger.add(
        TransactionKind::Expense,
        "Food",
        5000,
        parse_date("2024-01-05"),
        "Groceries",
    );
    ledger
}

/// Feed `lines` to a fresh session and return the final ledger and everything printed.
pub fn run_script(lines: &[&str]) -> Result<(Ledger, String)> {
    run_script_with(Ledger::new(), lines, OutputFormat::Table)
}

/// Feed `lines` to a session over the January ledger, printing tables.
pub fn run_on_january(lines: &[&str]) -> Result<(Ledger, String)> {
    run_script_with(january_ledger(), lines, OutputFormat::Table)
}

pub fn run_script_with(
    ledger: Ledger,
    lines: &[&str],
    format: OutputFormat,
) -> Result<(Ledger, String)> {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = Session::with_ledger(ledger, Cursor::new(script), Vec::new(), format);
    session.run()?;

    let (ledger, output) = session.into_parts();
    Ok((ledger, String::from_utf8(output)?))
}

/// Menu answers that add one transaction from its five field answers.
pub fn add_steps(fields: [&str; 5]) -> Vec<&str> {
    let mut steps = vec!["1"];
    steps.extend(fields);
    steps
}

/// Menu answers that replace listing entry `number` with five field answers.
pub fn update_steps<'a>(number: &'a str, fields: [&'a str; 5]) -> Vec<&'a str> {
    let mut steps = vec!["7", number];
    steps.extend(fields);
    steps
}
