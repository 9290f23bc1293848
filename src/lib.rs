mod amount;
mod chain;
mod config;
mod errors;
mod explorer;
mod table;
mod types;

pub use amount::{adjust_value, format_with_commas};
pub use chain::BalanceSource;
pub use config::{Config, ExplorerConfig};
pub use errors::{AmountError, ExplorerError};
pub use explorer::{decode_token_balances, ExplorerClient, PULSECHAIN_API};
pub use table::{BalanceTable, Row, SkippedToken, BALANCE_HEADER, NAME_HEADER, NO_TOKENS};
pub use types::{Token, TokenBalance, UNKNOWN_TOKEN};

use anyhow::Result;

/// Get the token balance table for an address from the configured explorer
pub async fn get_balance_table(address: &str) -> Result<BalanceTable> {
    let config = Config::load()?;
    tracing::debug!(explorer = %config.explorer.name, "using explorer");

    let client = ExplorerClient::new(config.explorer.api);
    Ok(client.get_balance_table(address).await?)
}
