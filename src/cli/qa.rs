//! Keyword-matched answers for the interactive Q&A mode.

use crate::domain::{format_dollars, Ledger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Report the live ledger balance
    Balance,
    Text(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Lowercase substrings; any one of them triggers the rule
    pub keywords: &'static [&'static str],
    pub reply: Reply,
}

/// Checked top to bottom, first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["balance"],
        reply: Reply::Balance,
    },
    Rule {
        keywords: &["summary"],
        reply: Reply::Text(
            "To generate a summary, please use the Generate Summary option in the menu.",
        ),
    },
    Rule {
        keywords: &["update"],
        reply: Reply::Text(
            "To update a transaction, select the Update Transaction option from the menu.",
        ),
    },
    Rule {
        keywords: &["delete"],
        reply: Reply::Text(
            "To delete a transaction, select the Delete Transaction option from the menu.",
        ),
    },
    Rule {
        keywords: &["category"],
        reply: Reply::Text(
            "To view spending by category, choose the View Spending by Category option.",
        ),
    },
    Rule {
        keywords: &["add"],
        reply: Reply::Text(
            "To add a transaction, select the Add Transaction option from the menu.",
        ),
    },
    Rule {
        keywords: &["income", "expense"],
        reply: Reply::Text(
            "You can add income or expenses by clicking 'Add Transaction'.",
        ),
    },
];

pub const FALLBACK: &str = "I'm sorry, I don't have an answer for that question.";

pub fn is_exit(question: &str) -> bool {
    question.trim().eq_ignore_ascii_case("exit")
}

/// First rule whose keyword appears in `question`, ignoring case.
pub fn match_rule(question: &str) -> Option<&'static Rule> {
    let question = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| question.contains(k)))
}

pub fn answer(question: &str, ledger: &Ledger) -> String {
    match match_rule(question).map(|rule| rule.reply) {
        Some(Reply::Balance) => format!(
            "Your current balance is: {}",
            format_dollars(ledger.balance())
        ),
        Some(Reply::Text(text)) => text.to_string(),
        None => FALLBACK.to_string(),
    }
}
