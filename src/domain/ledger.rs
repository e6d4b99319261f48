use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Cents, Transaction, TransactionKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Transaction index {index} is out of range (ledger holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Inclusive calendar range used by reports.
/// A range missing either bound matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

/// Income and expense totals for a date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Cents,
    pub total_expense: Cents,
    pub net: Cents,
}

/// Expense total and transaction count for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotal {
    pub total: Cents,
    pub count: i64,
}

/// Compute the balance from a list of transactions.
/// Balance = sum of income - sum of expenses
pub fn compute_balance(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .fold(0, |balance, t| balance + t.signed_amount())
}

/// Sum income and expenses for transactions dated inside `range`.
pub fn summarize(transactions: &[Transaction], range: DateRange) -> Summary {
    let (total_income, total_expense) = transactions
        .iter()
        .filter(|t| range.contains(t.date))
        .fold((0, 0), |(income, expense), t| match t.kind {
            TransactionKind::Income => (income + t.amount_cents, expense),
            TransactionKind::Expense => (income, expense + t.amount_cents),
        });

    Summary {
        total_income,
        total_expense,
        net: total_income - total_expense,
    }
}

/// Expense total and count per category for transactions dated inside `range`.
/// Categories without any expense in range are absent from the map.
pub fn category_totals(
    transactions: &[Transaction],
    range: DateRange,
) -> BTreeMap<String, CategoryTotal> {
    let mut totals: BTreeMap<String, CategoryTotal> = BTreeMap::new();

    for t in transactions
        .iter()
        .filter(|t| t.is_expense() && range.contains(t.date))
    {
        let entry = totals.entry(t.category.clone()).or_default();
        entry.total += t.amount_cents;
        entry.count += 1;
    }

    totals
}

/// Total expense per category for transactions dated inside `range`.
pub fn spending_by_category(
    transactions: &[Transaction],
    range: DateRange,
) -> BTreeMap<String, Cents> {
    category_totals(transactions, range)
        .into_iter()
        .map(|(category, totals)| (category, totals.total))
        .collect()
}

/// In-memory, insertion-ordered list of transactions.
/// Indices are 0-based.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction built from its parts. Callers validate kind and amount.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        category: impl Into<String>,
        amount_cents: Cents,
        date: NaiveDate,
        description: impl Into<String>,
    ) {
        self.push(Transaction::new(kind, category, amount_cents, date, description));
    }

    pub fn push(&mut self, transaction: Transaction) {
        tracing::debug!(
            kind = %transaction.kind,
            category = %transaction.category,
            amount_cents = transaction.amount_cents,
            date = %transaction.date,
            "transaction added"
        );
        self.transactions.push(transaction);
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn balance(&self) -> Cents {
        compute_balance(&self.transactions)
    }

    /// Remove the transaction at `index`, returning it.
    pub fn delete_at(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        self.check_index(index)?;
        let removed = self.transactions.remove(index);
        tracing::debug!(
            index,
            remaining = self.transactions.len(),
            "transaction deleted"
        );
        Ok(removed)
    }

    /// Replace the transaction at `index`, returning the previous one.
    pub fn update_at(
        &mut self,
        index: usize,
        transaction: Transaction,
    ) -> Result<Transaction, LedgerError> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.transactions[index], transaction);
        tracing::debug!(index, "transaction updated");
        Ok(previous)
    }

    pub fn summary(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Summary {
        summarize(&self.transactions, DateRange::new(start, end))
    }

    pub fn spending_by_category(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> BTreeMap<String, Cents> {
        spending_by_category(&self.transactions, DateRange::new(start, end))
    }

    pub fn category_totals(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> BTreeMap<String, CategoryTotal> {
        category_totals(&self.transactions, DateRange::new(start, end))
    }

    fn check_index(&self, index: usize) -> Result<(), LedgerError> {
        if index >= self.transactions.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::TransactionKind::{Expense, Income};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add(Income, "Salary", 100000, date("2024-01-01"), "Jan pay");
        ledger.add(Expense, "Food", 5000, date("2024-01-05"), "Groceries");
        ledger
    }

    #[test]
    fn test_compute_balance_empty() {
        assert_eq!(compute_balance(&[]), 0);
        assert_eq!(Ledger::new().balance(), 0);
    }

    #[test]
    fn test_balance_scenario() {
        assert_eq!(sample_ledger().balance(), 95000);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let mut ledger = Ledger::new();
        ledger.add(Expense, "Rent", 120000, date("2024-01-01"), "");
        ledger.add(Income, "Gift", 2000, date("2024-01-02"), "");
        assert_eq!(ledger.balance(), -118000);
    }

    #[test]
    fn test_date_range_inclusive() {
        let range = DateRange::between(date("2024-01-01"), date("2024-01-05"));
        assert!(range.contains(date("2024-01-01")));
        assert!(range.contains(date("2024-01-03")));
        assert!(range.contains(date("2024-01-05")));
        assert!(!range.contains(date("2023-12-31")));
        assert!(!range.contains(date("2024-01-06")));
    }

    #[test]
    fn test_date_range_missing_bound_matches_nothing() {
        let d = date("2024-01-01");
        assert!(!DateRange::new(None, Some(d)).contains(d));
        assert!(!DateRange::new(Some(d), None).contains(d));
        assert!(!DateRange::new(None, None).contains(d));
    }

    #[test]
    fn test_date_range_reversed_matches_nothing() {
        let range = DateRange::between(date("2024-01-05"), date("2024-01-01"));
        assert!(!range.contains(date("2024-01-03")));
    }

    #[test]
    fn test_summary_scenario() {
        let ledger = sample_ledger();
        let summary = ledger.summary(Some(date("2024-01-01")), Some(date("2024-01-05")));
        assert_eq!(
            summary,
            Summary {
                total_income: 100000,
                total_expense: 5000,
                net: 95000,
            }
        );
    }

    #[test]
    fn test_summary_no_matches() {
        let ledger = sample_ledger();
        let summary = ledger.summary(Some(date("2024-02-01")), Some(date("2024-02-28")));
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_summary_absent_bound_yields_zero() {
        let ledger = sample_ledger();
        let summary = ledger.summary(None, Some(date("2024-12-31")));
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_spending_by_category_scenario() {
        let ledger = sample_ledger();
        let spending =
            ledger.spending_by_category(Some(date("2024-01-01")), Some(date("2024-01-05")));

        assert_eq!(spending.len(), 1);
        assert_eq!(spending.get("Food"), Some(&5000));
        assert!(!spending.contains_key("Salary"));
    }

    #[test]
    fn test_spending_by_category_groups_and_filters() {
        let mut ledger = sample_ledger();
        ledger.add(Expense, "Food", 2550, date("2024-01-03"), "Lunch");
        ledger.add(Expense, "Rent", 80000, date("2024-02-01"), "Feb");

        let spending =
            ledger.spending_by_category(Some(date("2024-01-01")), Some(date("2024-01-31")));

        assert_eq!(spending.get("Food"), Some(&7550));
        assert!(!spending.contains_key("Rent"));
    }

    #[test]
    fn test_category_totals_count_in_one_pass() {
        let mut ledger = sample_ledger();
        ledger.add(Expense, "Food", 2550, date("2024-01-03"), "Lunch");
        ledger.add(Income, "Food", 700, date("2024-01-04"), "Sold");

        let totals = category_totals(
            ledger.all(),
            DateRange::between(date("2024-01-01"), date("2024-01-31")),
        );

        assert_eq!(
            totals.get("Food"),
            Some(&CategoryTotal {
                total: 7550,
                count: 2,
            })
        );
        assert_eq!(totals.len(), 1);
    }

    #[test]
    fn test_delete_at_preserves_order() {
        let mut ledger = sample_ledger();
        ledger.add(Expense, "Fuel", 4000, date("2024-01-07"), "Gas");

        let removed = ledger.delete_at(1).unwrap();

        assert_eq!(removed.category, "Food");
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[0].category, "Salary");
        assert_eq!(ledger.all()[1].category, "Fuel");
    }

    #[test]
    fn test_delete_at_out_of_range_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        let before = ledger.all().to_vec();

        let result = ledger.delete_at(2);

        assert_eq!(
            result,
            Err(LedgerError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(ledger.all(), before.as_slice());
    }

    #[test]
    fn test_update_at_replaces_wholesale() {
        let mut ledger = sample_ledger();
        let replacement = Transaction::new(Expense, "Dining", 3500, date("2024-01-06"), "Pizza");

        let previous = ledger.update_at(1, replacement.clone()).unwrap();

        assert_eq!(previous.category, "Food");
        assert_eq!(ledger.get(1), Some(&replacement));
        assert_eq!(ledger.balance(), 96500);
    }

    #[test]
    fn test_update_at_out_of_range() {
        let mut ledger = Ledger::new();
        let t = Transaction::new(Income, "Salary", 1, date("2024-01-01"), "");

        assert!(matches!(
            ledger.update_at(0, t),
            Err(LedgerError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(ledger.is_empty());
    }
}
