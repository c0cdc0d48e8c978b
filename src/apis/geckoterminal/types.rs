/// GeckoTerminal API response types
///
/// The upstream payload nests pool metrics under `attributes` and reports
/// most numerics as decimal strings. Every numeric field goes through a
/// parse-or-default conversion: a missing, null or non-numeric value
/// becomes 0 instead of failing the record.
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// SAFE NUMERIC CONVERSION
// ============================================================================

/// Convert a JSON value (number or decimal string) to f64, defaulting to 0
pub(crate) fn value_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Convert a JSON value (number or integer string) to i64, defaulting to 0
pub(crate) fn value_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

// ============================================================================
// RAW RESPONSE SHAPE
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PoolsResponse {
    #[serde(default)]
    pub data: Vec<RawPool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPool {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: RawPoolAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPoolAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub base_token: RawBaseToken,
    #[serde(default)]
    pub base_token_price_usd: Value,
    #[serde(default)]
    pub quote_token_price_usd: Value,
    #[serde(default)]
    pub volume_usd: RawWindowed,
    #[serde(default)]
    pub price_change_percentage: RawWindowed,
    #[serde(default)]
    pub reserve_in_usd: Value,
    #[serde(default)]
    pub fdv_usd: Value,
    #[serde(default)]
    pub market_cap_usd: Value,
    #[serde(default)]
    pub transactions: RawTransactions,
    #[serde(default)]
    pub pool_created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawBaseToken {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Metric windows as reported upstream (1h / 6h / 24h)
#[derive(Debug, Default, Deserialize)]
pub struct RawWindowed {
    #[serde(default)]
    pub h1: Value,
    #[serde(default)]
    pub h6: Value,
    #[serde(default)]
    pub h24: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTransactions {
    #[serde(default)]
    pub h1: RawTxWindow,
    #[serde(default)]
    pub h24: RawTxWindow,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTxWindow {
    #[serde(default)]
    pub buys: Value,
    #[serde(default)]
    pub sells: Value,
    #[serde(default)]
    pub unique_buys: Value,
    #[serde(default)]
    pub unique_sells: Value,
}

impl RawPool {
    /// Normalize the raw payload into a [`PoolRecord`] for the given network
    pub fn to_pool(&self, network: &str) -> PoolRecord {
        let attrs = &self.attributes;
        PoolRecord {
            pool_id: self.id.clone().unwrap_or_default(),
            name: attrs.name.clone().unwrap_or_default(),
            symbol: attrs.base_token.symbol.clone().unwrap_or_default(),
            address: attrs.address.clone().unwrap_or_default(),
            token_address: attrs.base_token.address.clone().unwrap_or_default(),
            base_token_price_usd: value_f64(&attrs.base_token_price_usd),
            quote_token_price_usd: value_f64(&attrs.quote_token_price_usd),
            volume_24h: value_f64(&attrs.volume_usd.h24),
            volume_6h: value_f64(&attrs.volume_usd.h6),
            volume_1h: value_f64(&attrs.volume_usd.h1),
            price_change_24h: value_f64(&attrs.price_change_percentage.h24),
            price_change_6h: value_f64(&attrs.price_change_percentage.h6),
            price_change_1h: value_f64(&attrs.price_change_percentage.h1),
            liquidity: value_f64(&attrs.reserve_in_usd),
            fdv: value_f64(&attrs.fdv_usd),
            market_cap: value_f64(&attrs.market_cap_usd),
            transactions_24h: value_i64(&attrs.transactions.h24.buys)
                + value_i64(&attrs.transactions.h24.sells),
            transactions_1h: value_i64(&attrs.transactions.h1.buys)
                + value_i64(&attrs.transactions.h1.sells),
            unique_transactions_24h: value_i64(&attrs.transactions.h24.unique_buys)
                + value_i64(&attrs.transactions.h24.unique_sells),
            pool_created_at: attrs.pool_created_at.clone().unwrap_or_default(),
            network: network.to_string(),
        }
    }
}

// ============================================================================
// NORMALIZED POOL RECORD
// ============================================================================

/// One liquidity pool for a token, normalized from the upstream payload.
///
/// Immutable after construction; numeric fields are already defaulted so
/// downstream aggregation never sees a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolRecord {
    pub pool_id: String,
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub token_address: String,
    pub base_token_price_usd: f64,
    pub quote_token_price_usd: f64,
    pub volume_24h: f64,
    pub volume_6h: f64,
    pub volume_1h: f64,
    pub price_change_24h: f64,
    pub price_change_6h: f64,
    pub price_change_1h: f64,
    pub liquidity: f64,
    pub fdv: f64,
    pub market_cap: f64,
    pub transactions_24h: i64,
    pub transactions_1h: i64,
    pub unique_transactions_24h: i64,
    pub pool_created_at: String,
    pub network: String,
}
