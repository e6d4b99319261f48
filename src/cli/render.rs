use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;

use crate::application::{CategoryReport, SummaryReport};
use crate::domain::format_dollars;

/// How summary and spending reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Column names of `CategorySummary`, written when no rows would emit them.
const CATEGORY_HEADER: [&str; 5] = ["category", "total", "count", "average", "percentage"];

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn write_summary<W: Write>(
    out: &mut W,
    report: &SummaryReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *out);
            csv_writer.write_record(["type", "amount"])?;
            csv_writer.write_record(["income", report.total_income.to_string().as_str()])?;
            csv_writer.write_record(["expense", report.total_expense.to_string().as_str()])?;
            csv_writer.write_record(["net", report.net.to_string().as_str()])?;
            csv_writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "Summary from {} to {}:",
                format_date(report.from_date),
                format_date(report.to_date)
            )?;
            writeln!(
                out,
                "Total Income:  {:>12}",
                format_dollars(report.total_income)
            )?;
            writeln!(
                out,
                "Total Expense: {:>12}",
                format_dollars(report.total_expense)
            )?;
            writeln!(out, "{}", "-".repeat(27))?;
            writeln!(out, "Net:           {:>12}", format_dollars(report.net))?;
        }
    }
    Ok(())
}

pub fn write_category_report<W: Write>(
    out: &mut W,
    report: &CategoryReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *out);
            if report.categories.is_empty() {
                csv_writer.write_record(CATEGORY_HEADER)?;
            }
            for cat in &report.categories {
                csv_writer.serialize(cat)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "Spending by Category from {} to {}:",
                format_date(report.from_date),
                format_date(report.to_date)
            )?;
            if report.categories.is_empty() {
                writeln!(out, "No expenses recorded in this period.")?;
                return Ok(());
            }

            writeln!(
                out,
                "{:<20} {:>12} {:>6} {:>8}",
                "CATEGORY", "TOTAL", "COUNT", "PERCENT"
            )?;
            writeln!(out, "{}", "-".repeat(49))?;
            for cat in &report.categories {
                writeln!(
                    out,
                    "{:<20} {:>12} {:>6} {:>7.1}%",
                    truncate(&cat.category, 20),
                    format_dollars(cat.total),
                    cat.count,
                    cat.percentage
                )?;
            }
            writeln!(out, "{}", "-".repeat(49))?;
            writeln!(out, "{:<20} {:>12}", "TOTAL", format_dollars(report.total))?;
        }
    }
    Ok(())
}
