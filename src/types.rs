use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name shown for tokens the explorer has no name for
pub const UNKNOWN_TOKEN: &str = "Unknown";

/// Token metadata as reported by the explorer.
///
/// Everything is carried as text; only `name` and `decimals` are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub circulating_market_cap: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub decimals: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub exchange_rate: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub holders: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_supply: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub token_type: String,
}

/// One entry of the `token-balances` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: Token,
    #[serde(default, deserialize_with = "lenient_string")]
    pub token_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub token_instance: String,
    /// Raw, unscaled amount. May exceed any native integer width.
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

impl TokenBalance {
    /// The token name, or [`UNKNOWN_TOKEN`] when the explorer gave none
    pub fn display_name(&self) -> &str {
        if self.token.name.is_empty() {
            UNKNOWN_TOKEN
        } else {
            &self.token.name
        }
    }
}

// Absent or null becomes "", other scalars their text, objects compact JSON.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_blockscout_entry() {
        let json = r#"{
            "token": {
                "address": "0xA1077a294dDE1B09bB078844df40758a5D0f9a27",
                "circulating_market_cap": null,
                "decimals": "18",
                "exchange_rate": "0.00003",
                "holders": "271035",
                "icon_url": null,
                "name": "Wrapped Pulse",
                "symbol": "WPLS",
                "total_supply": "3420000000000000000000000000",
                "type": "ERC-20"
            },
            "token_id": null,
            "token_instance": null,
            "value": "1500000000000000000000"
        }"#;

        let balance: TokenBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.token.name, "Wrapped Pulse");
        assert_eq!(balance.token.decimals, "18");
        assert_eq!(balance.token.token_type, "ERC-20");
        assert_eq!(balance.token.icon_url, "");
        assert_eq!(balance.token_id, "");
        assert_eq!(balance.value, "1500000000000000000000");
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let balance: TokenBalance = serde_json::from_str(r#"{"value": "5"}"#).unwrap();
        assert_eq!(balance.token, Token::default());
        assert_eq!(balance.display_name(), UNKNOWN_TOKEN);

        let balance: TokenBalance = serde_json::from_str(r#"{"token": null}"#).unwrap();
        assert_eq!(balance.value, "");
        assert_eq!(balance.token.name, "");
    }

    #[test]
    fn test_non_string_scalars_are_carried_as_text() {
        let json = r#"{
            "token": {"name": "Foo", "decimals": 6, "holders": 12},
            "token_instance": {"id": "7", "metadata": null},
            "value": "1"
        }"#;

        let balance: TokenBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.token.decimals, "6");
        assert_eq!(balance.token.holders, "12");
        assert_eq!(balance.token_instance, r#"{"id":"7","metadata":null}"#);
    }

    #[test]
    fn test_new_and_deprecated_key_names_together() {
        let json = r#"{
            "token": {
                "address": "0x1",
                "address_hash": "0x1",
                "name": "Foo",
                "decimals": "2",
                "holders": "3",
                "holders_count": "3"
            },
            "value": "12345"
        }"#;

        let balance: TokenBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.token.address, "0x1");
        assert_eq!(balance.token.holders, "3");
        assert_eq!(balance.token.name, "Foo");
    }

    #[test]
    fn test_display_name() {
        let mut balance = TokenBalance::default();
        assert_eq!(balance.display_name(), "Unknown");

        balance.token.name = "HEX".to_string();
        assert_eq!(balance.display_name(), "HEX");
    }
}
