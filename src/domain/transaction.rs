use crate::error::StoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strictly positive expense amount.
///
/// Wraps `rust_decimal::Decimal` so that a `Transaction` can never carry a zero
/// or negative value, whether it was built in code or read from a CSV file.
/// Text input is parsed as a decimal directly, keeping the scale as written.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, StoreError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(StoreError::InvalidArgument(format!(
                "amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = StoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let decimal = Decimal::from_str(value.trim()).map_err(|e| {
            StoreError::InvalidArgument(format!("invalid amount '{value}': {e}"))
        })?;
        Self::new(decimal)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Food,
    Travel,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Bills => "bills",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| StoreError::InvalidArgument(format!("unknown category '{needle}'")))
    }
}

impl TryFrom<String> for Category {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One expense entry.
///
/// Equality is structural: two transactions with the same amount and category
/// are interchangeable as far as the store is concerned.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub amount: Amount,
    pub category: Category,
}

impl Transaction {
    pub fn new(amount: Decimal, category: Category) -> Result<Self, StoreError> {
        Ok(Self {
            amount: Amount::new(amount)?,
            category,
        })
    }
}
