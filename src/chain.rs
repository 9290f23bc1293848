use async_trait::async_trait;

use crate::errors::ExplorerError;
use crate::table::BalanceTable;
use crate::types::TokenBalance;

/// Trait for token balance sources - implement this for each explorer backend
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Get every token balance held by an address, in the order reported
    async fn get_token_balances(&self, address: &str) -> Result<Vec<TokenBalance>, ExplorerError>;

    /// Get the balances for an address laid out as a table
    async fn get_balance_table(&self, address: &str) -> Result<BalanceTable, ExplorerError> {
        let balances = self.get_token_balances(address).await?;
        Ok(BalanceTable::from_balances(&balances))
    }
}
