use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Cents, Ledger, Summary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub total_income: Cents,
    pub total_expense: Cents,
    pub net: Cents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub categories: Vec<CategorySummary>,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: Cents,
    pub count: i64,
    pub average: Cents,
    pub percentage: f64,
}

impl SummaryReport {
    pub fn build(ledger: &Ledger, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let Summary {
            total_income,
            total_expense,
            net,
        } = ledger.summary(start, end);

        Self {
            from_date: start,
            to_date: end,
            total_income,
            total_expense,
            net,
        }
    }
}

impl CategoryReport {
    /// Expense categories in range, largest total first.
    pub fn build(ledger: &Ledger, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let totals = ledger.category_totals(start, end);
        let total: Cents = totals.values().map(|t| t.total).sum();

        let mut categories: Vec<CategorySummary> = totals
            .into_iter()
            .map(|(category, cat)| {
                // Every category present has at least one expense
                let average = cat.total / cat.count;
                let percentage = if total > 0 {
                    (cat.total as f64 / total as f64) * 100.0
                } else {
                    0.0
                };
                CategorySummary {
                    category,
                    total: cat.total,
                    count: cat.count,
                    average,
                    percentage,
                }
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            from_date: start,
            to_date: end,
            categories,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::TransactionKind::{Expense, Income};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn january() -> (Option<NaiveDate>, Option<NaiveDate>) {
        (Some(date("2024-01-01")), Some(date("2024-01-31")))
    }

    fn january_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add(Income, "Salary", 300000, date("2024-01-01"), "Jan pay");
        ledger.add(Expense, "Groceries", 15000, date("2024-01-05"), "");
        ledger.add(Expense, "Groceries", 20000, date("2024-01-12"), "");
        ledger.add(Expense, "Dining", 5000, date("2024-01-10"), "");
        ledger.add(Expense, "Dining", 7500, date("2024-01-20"), "");
        ledger.add(Expense, "Rent", 100000, date("2024-02-01"), "");
        ledger
    }

    #[test]
    fn test_summary_report() {
        let (start, end) = january();
        let report = SummaryReport::build(&january_ledger(), start, end);

        assert_eq!(report.total_income, 300000);
        assert_eq!(report.total_expense, 47500);
        assert_eq!(report.net, 252500);
        assert_eq!(report.from_date, start);
    }

    #[test]
    fn test_category_report() {
        let (start, end) = january();
        let report = CategoryReport::build(&january_ledger(), start, end);

        assert_eq!(report.total, 47500);
        assert_eq!(report.categories.len(), 2);

        let groceries = &report.categories[0];
        assert_eq!(groceries.category, "Groceries");
        assert_eq!(groceries.total, 35000);
        assert_eq!(groceries.count, 2);
        assert_eq!(groceries.average, 17500);
        assert!((groceries.percentage - 73.68).abs() < 0.01);

        let dining = &report.categories[1];
        assert_eq!(dining.category, "Dining");
        assert_eq!(dining.total, 12500);
        assert_eq!(dining.count, 2);
        assert_eq!(dining.average, 6250);
    }

    #[test]
    fn test_category_report_empty_range() {
        let start = Some(date("2023-01-01"));
        let end = Some(date("2023-12-31"));
        let report = CategoryReport::build(&january_ledger(), start, end);

        assert!(report.categories.is_empty());
        assert_eq!(report.total, 0);
    }
}
