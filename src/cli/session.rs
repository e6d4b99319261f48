use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use thiserror::Error;

use crate::application::input::{parse_amount, parse_date, parse_index, parse_kind};
use crate::application::{CategoryReport, SummaryReport};
use crate::domain::{format_dollars, Cents, Ledger, Transaction, TransactionKind};

use super::qa;
use super::render::{write_category_report, write_summary, OutputFormat};

/// Raised when the input stream ends mid-session; the menu loop treats it like Exit.
#[derive(Error, Debug)]
#[error("input stream closed")]
pub struct InputClosed;

const MENU: &[&str] = &[
    "1. Add Transaction",
    "2. View Balance",
    "3. View All Transactions",
    "4. Generate Summary",
    "5. View Spending by Category",
    "6. Delete Transaction",
    "7. Update Transaction",
    "8. Interactive Q&A",
    "9. Exit",
];

/// One interactive run of the tracker. Owns the ledger and both terminal handles.
pub struct Session<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self::with_ledger(Ledger::new(), input, output, format)
    }

    pub fn with_ledger(ledger: Ledger, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            ledger,
            input,
            output,
            format,
        }
    }

    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Run the menu loop until Exit is chosen or input runs out.
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Err(e) if e.is::<InputClosed>() => {
                tracing::debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Personal Finance Manager!")?;
        loop {
            writeln!(self.output, "\nMenu:")?;
            for line in MENU {
                writeln!(self.output, "{}", line)?;
            }

            let choice = self.read_line()?;
            match choice.trim() {
                "1" => self.add_transaction()?,
                "2" => self.view_balance()?,
                "3" => self.view_transactions()?,
                "4" => self.generate_summary()?,
                "5" => self.view_spending_by_category()?,
                "6" => self.delete_transaction()?,
                "7" => self.update_transaction()?,
                "8" => self.interactive_qa()?,
                "9" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                other => {
                    tracing::debug!(choice = other, "invalid menu choice");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn add_transaction(&mut self) -> Result<()> {
        let kind = self.prompt_kind("Enter type (Income/Expense): ")?;
        let category = self.prompt("Enter category: ")?;
        let amount = self.prompt_amount("Enter amount: ")?;
        let date_input = self.prompt("Enter date (yyyy-MM-dd): ")?;
        let description = self.prompt("Enter description: ")?;

        match parse_date(&date_input) {
            Ok(date) => {
                self.ledger.add(kind, category, amount, date, description);
                writeln!(self.output, "Transaction added successfully.")?;
                self.view_balance()
            }
            Err(e) => {
                tracing::debug!(error = %e, "add abandoned");
                writeln!(self.output, "Invalid date format.")?;
                Ok(())
            }
        }
    }

    fn view_balance(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Current Balance: {}",
            format_dollars(self.ledger.balance())
        )?;
        Ok(())
    }

    fn view_transactions(&mut self) -> Result<()> {
        if self.ledger.is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
            return Ok(());
        }
        for (i, transaction) in self.ledger.all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, transaction)?;
        }
        Ok(())
    }

    fn generate_summary(&mut self) -> Result<()> {
        let Some((start, end)) = self.prompt_date_range()? else {
            return Ok(());
        };
        let report = SummaryReport::build(&self.ledger, Some(start), Some(end));
        write_summary(&mut self.output, &report, self.format)
    }

    fn view_spending_by_category(&mut self) -> Result<()> {
        let Some((start, end)) = self.prompt_date_range()? else {
            return Ok(());
        };
        let report = CategoryReport::build(&self.ledger, Some(start), Some(end));
        write_category_report(&mut self.output, &report, self.format)
    }

    fn delete_transaction(&mut self) -> Result<()> {
        self.view_transactions()?;
        let Some(index) = self.prompt_index("Enter the transaction index to delete: ")? else {
            return Ok(());
        };

        match self.ledger.delete_at(index) {
            Ok(_) => {
                writeln!(self.output, "Transaction deleted.")?;
                self.view_balance()
            }
            Err(e) => {
                tracing::debug!(error = %e, "delete rejected");
                writeln!(self.output, "Invalid transaction index.")?;
                Ok(())
            }
        }
    }

    fn update_transaction(&mut self) -> Result<()> {
        self.view_transactions()?;
        let Some(index) = self.prompt_index("Enter the transaction index to update: ")? else {
            return Ok(());
        };

        let kind = self.prompt_kind("Enter new type (Income/Expense): ")?;
        let category = self.prompt("Enter new category: ")?;
        let amount = self.prompt_amount("Enter new amount: ")?;
        let date_input = self.prompt("Enter new date (yyyy-MM-dd): ")?;
        let description = self.prompt("Enter new description: ")?;

        let replaced = parse_date(&date_input)
            .map(|date| Transaction::new(kind, category, amount, date, description))
            .and_then(|t| self.ledger.update_at(index, t).map_err(Into::into));

        match replaced {
            Ok(_) => {
                writeln!(self.output, "Transaction updated successfully.")?;
                self.view_balance()
            }
            Err(e) => {
                tracing::debug!(error = %e, "update abandoned");
                writeln!(self.output, "Invalid input. Update failed.")?;
                Ok(())
            }
        }
    }

    fn interactive_qa(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Interactive Q&A: Ask any finance-related question (type 'exit' to quit)"
        )?;
        loop {
            let question = self.prompt("Your question: ")?;
            if qa::is_exit(&question) {
                return Ok(());
            }
            writeln!(self.output, "{}", qa::answer(&question, &self.ledger))?;
        }
    }

    // ========================
    // Prompt helpers
    // ========================

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Re-prompts until the answer is exactly "Income" or "Expense".
    fn prompt_kind(&mut self, label: &str) -> Result<TransactionKind> {
        loop {
            let answer = self.prompt(label)?;
            match parse_kind(&answer) {
                Ok(kind) => return Ok(kind),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected transaction type");
                    writeln!(
                        self.output,
                        "Invalid Input. Please enter 'Income' or 'Expense'."
                    )?;
                }
            }
        }
    }

    /// Re-prompts until a non-negative amount is entered.
    fn prompt_amount(&mut self, label: &str) -> Result<Cents> {
        loop {
            let answer = self.prompt(label)?;
            match parse_amount(&answer) {
                Ok(cents) => return Ok(cents),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected amount");
                    writeln!(
                        self.output,
                        "Invalid amount. Please enter a non-negative number."
                    )?;
                }
            }
        }
    }

    /// Reads a listing number and converts it to a ledger index.
    /// Prints the error and yields `None` when it does not name a transaction.
    fn prompt_index(&mut self, label: &str) -> Result<Option<usize>> {
        let answer = self.prompt(label)?;
        match parse_index(&answer, self.ledger.len()) {
            Ok(index) => Ok(Some(index)),
            Err(e) => {
                tracing::debug!(error = %e, "rejected index");
                writeln!(self.output, "Invalid transaction index.")?;
                Ok(None)
            }
        }
    }

    /// Start then end date. The end date is not asked for if the start date is invalid.
    fn prompt_date_range(&mut self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let start = self.prompt("Enter start date (yyyy-MM-dd): ")?;
        let Ok(start) = parse_date(&start) else {
            writeln!(self.output, "Invalid date format.")?;
            return Ok(None);
        };
        let end = self.prompt("Enter end date (yyyy-MM-dd): ")?;
        let Ok(end) = parse_date(&end) else {
            writeln!(self.output, "Invalid date format.")?;
            return Ok(None);
        };
        Ok(Some((start, end)))
    }
}
