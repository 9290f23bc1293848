use std::fmt;

use crate::amount::{adjust_value, format_with_commas};
use crate::errors::AmountError;
use crate::types::{TokenBalance, UNKNOWN_TOKEN};

pub const NAME_HEADER: &str = "Token Name";
pub const BALANCE_HEADER: &str = "Balance";
pub const NO_TOKENS: &str = "No tokens found.";

/// A rendered table line: token name and grouped whole-unit balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub balance: String,
}

/// A token left out of the table because its amount could not be rescaled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    pub name: String,
    pub error: AmountError,
}

impl fmt::Display for SkippedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error adjusting value for token {}: {}", self.name, self.error)
    }
}

/// Token balances laid out as a two-column, pipe-delimited text table.
///
/// Tokens without a name are dropped, as are tokens whose amount fails to
/// rescale (those are kept in [`BalanceTable::skipped`]). Column widths
/// cover the headers and every kept row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceTable {
    rows: Vec<Row>,
    skipped: Vec<SkippedToken>,
    name_width: usize,
    balance_width: usize,
}

impl BalanceTable {
    pub fn from_balances(balances: &[TokenBalance]) -> Self {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();
        let mut name_width = NAME_HEADER.len();
        let mut balance_width = BALANCE_HEADER.len();

        for balance in balances {
            let name = balance.display_name();
            if name == UNKNOWN_TOKEN {
                tracing::debug!(token = %balance.token.address, "skipping unnamed token");
                continue;
            }

            let formatted = match adjust_value(&balance.value, &balance.token.decimals) {
                Ok(whole) => format_with_commas(&whole),
                Err(error) => {
                    tracing::debug!(token = name, %error, "skipping token with bad amount");
                    skipped.push(SkippedToken {
                        name: name.to_string(),
                        error,
                    });
                    continue;
                }
            };

            // widths are byte lengths; padding is per char
            name_width = name_width.max(name.len());
            balance_width = balance_width.max(formatted.len());
            rows.push(Row {
                name: name.to_string(),
                balance: formatted,
            });
        }

        Self {
            rows,
            skipped,
            name_width,
            balance_width,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn skipped(&self) -> &[SkippedToken] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn name_width(&self) -> usize {
        self.name_width
    }

    pub fn balance_width(&self) -> usize {
        self.balance_width
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, name: &str, balance: &str) -> fmt::Result {
        writeln!(
            f,
            "| {:<nw$} | {:>bw$} |",
            name,
            balance,
            nw = self.name_width,
            bw = self.balance_width
        )
    }
}

impl fmt::Display for BalanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "{}", NO_TOKENS);
        }

        self.write_line(f, NAME_HEADER, BALANCE_HEADER)?;
        writeln!(
            f,
            "|-{}-|-{}-|",
            "-".repeat(self.name_width),
            "-".repeat(self.balance_width)
        )?;
        for row in &self.rows {
            self.write_line(f, &row.name, &row.balance)?;
        }
        Ok(())
    }
}
