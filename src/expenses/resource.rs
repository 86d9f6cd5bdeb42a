use crate::utils::formatting::format_date;
use serde::Deserialize;
use std::fmt;

/// Column headers of the expenses table, in display order.
///
pub const COLUMNS: [&str; 6] = [
    "Date",
    "Merchant",
    "Amount",
    "Category",
    "Description",
    "Status",
];

/// Columns whose text is capitalised per word when drawn.
///
pub const CAPITALIZED_COLUMNS: [usize; 2] = [3, 5];

/// Opaque expense identifier, shown for the highlighted row.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExpenseId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseId::Number(n) => write!(f, "{}", n),
            ExpenseId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Date value as sent by the server: a date string or epoch milliseconds.
///
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DateValue {
    Millis(i64),
    Text(String),
}

/// Amount as sent by the server, kept in its original string form.
///
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole floats such as 150.00 print without a fraction
            Amount::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x == 0.0 => write!(f, "0"),
                Some(x) if n.is_f64() => write!(f, "{}", x),
                _ => write!(f, "{}", n),
            },
            Amount::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Defines expense data structure.
///
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub date: DateValue,
    pub merchant: String,
    pub amount: Amount,
    pub category: String,
    pub description: String,
    pub status: String,
}

impl Expense {
    /// Return the display cells for the expense in column order. Values are
    /// verbatim apart from the date and the dollar prefix; capitalisation is
    /// left to the renderer.
    ///
    pub fn cells(&self) -> [String; 6] {
        [
            format_date(&self.date),
            self.merchant.to_owned(),
            format!("${}", self.amount),
            self.category.to_owned(),
            self.description.to_owned(),
            self.status.to_owned(),
        ]
    }
}
