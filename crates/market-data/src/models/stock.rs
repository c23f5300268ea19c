use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// One security's snapshot as carried by the index payload.
///
/// `symbol` is the stable display identity. Every numeric field is
/// optional: the upstream substitutes `"-"` or omits fields for halted
/// or thinly traded securities, and a missing number must render as a
/// dash rather than break formatting.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RowMeta>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub last_price: Option<Decimal>,

    /// Absolute change since previous close, signed.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub change: Option<Decimal>,

    /// Percent change since previous close, signed.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub p_change: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub open: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub day_high: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub day_low: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_volume")]
    pub total_traded_volume: Option<u64>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_traded_value: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub year_high: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub year_low: Option<Decimal>,

    /// Intraday sparkline image reference, when the upstream provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_today_path: Option<String>,
}

/// Nested metadata block on each row.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl StockRow {
    pub fn company_name(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.company_name.as_deref())
    }
}

/// Normalize a raw upstream payload into a row list.
///
/// The row array is expected at the `data` field. A missing field, or a
/// `data` that is not an array, degrades to an empty list instead of an
/// error so a malformed payload can never crash rendering. Individual
/// rows that fail to deserialize are skipped.
pub fn normalize(raw: &Value) -> Vec<StockRow> {
    let Some(items) = raw.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(row) => Some(row),
            Err(err) => {
                warn!("Skipping malformed stock row: {}", err);
                None
            }
        })
        .collect()
}

/// Accept a JSON number or numeric string; anything else becomes `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.as_f64().and_then(|f| Decimal::try_from(f).ok()),
        Value::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

fn lenient_volume<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }))
}
