/// Market-data client for the Nobitex UDF history endpoint
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SignalError};
use crate::types::Bar;

/// UDF-style history response: parallel timestamp/close arrays plus a status
/// field ("ok" on success, "no_data"/"error" otherwise).
#[derive(Debug, Deserialize)]
struct UdfHistoryResponse {
    s: String,
    t: Option<Vec<i64>>,
    c: Option<Vec<f64>>,
}

pub struct MarketClient {
    client: reqwest::Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch close-price bars for `symbol` at the given resolution code over
    /// [from, to]. Bars come back in upstream order (strictly ascending
    /// timestamps per the UDF contract).
    pub async fn get_candles(
        &self,
        symbol: &str,
        resolution: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Bar>> {
        let url = format!("{}/market/udf/history", self.base_url);

        debug!(
            symbol,
            resolution,
            from = %from,
            to = %to,
            "Fetching candles"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("resolution", resolution),
                ("from", &from.timestamp().to_string()),
                ("to", &to.timestamp().to_string()),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        let history: UdfHistoryResponse = serde_json::from_str(&body)?;

        parse_history(history)
    }
}

fn parse_history(history: UdfHistoryResponse) -> Result<Vec<Bar>> {
    if history.s != "ok" {
        return Err(SignalError::DataSource(format!(
            "History request failed with status: {}",
            history.s
        )));
    }

    let timestamps = history
        .t
        .ok_or_else(|| SignalError::DataSource("Missing timestamp array".to_string()))?;
    let closes = history
        .c
        .ok_or_else(|| SignalError::DataSource("Missing close array".to_string()))?;

    if timestamps.len() != closes.len() {
        return Err(SignalError::DataSource(format!(
            "Mismatched history arrays: {} timestamps vs {} closes",
            timestamps.len(),
            closes.len()
        )));
    }

    if timestamps.is_empty() {
        return Err(SignalError::DataSource("Empty history response".to_string()));
    }

    let bars = timestamps
        .into_iter()
        .zip(closes)
        .filter_map(|(ts, close)| {
            DateTime::from_timestamp(ts, 0).map(|timestamp| Bar { timestamp, close })
        })
        .collect();

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_response() {
        let history: UdfHistoryResponse =
            serde_json::from_str(r#"{"s":"ok","t":[1747600000,1747603600],"c":[102.5,103.0]}"#)
                .unwrap();
        let bars = parse_history(history).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 102.5);
        assert_eq!(bars[0].timestamp.timestamp(), 1747600000);
    }

    #[test]
    fn test_non_ok_status_is_data_source_error() {
        let history: UdfHistoryResponse = serde_json::from_str(r#"{"s":"no_data"}"#).unwrap();
        let err = parse_history(history).unwrap_err();
        assert!(matches!(err, SignalError::DataSource(_)));
        assert!(err.is_upstream());
    }

    #[test]
    fn test_mismatched_arrays_rejected() {
        let history: UdfHistoryResponse =
            serde_json::from_str(r#"{"s":"ok","t":[1747600000],"c":[102.5,103.0]}"#).unwrap();
        assert!(matches!(
            parse_history(history),
            Err(SignalError::DataSource(_))
        ));
    }

    #[test]
    fn test_empty_response_rejected() {
        let history: UdfHistoryResponse =
            serde_json::from_str(r#"{"s":"ok","t":[],"c":[]}"#).unwrap();
        assert!(matches!(
            parse_history(history),
            Err(SignalError::DataSource(_))
        ));
    }
}
