//! Cosmos REST endpoint probe

use std::time::Instant;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use super::{ProbeConfig, ProbeDetails, ProbeResult};

/// Probe a Cosmos RPC endpoint via its `/status` route
pub async fn probe(url: &str, config: &ProbeConfig) -> ProbeResult {
    let url = url.trim();
    debug!(url, "starting Cosmos RPC probe");

    let start = Instant::now();
    let outcome = tokio::time::timeout(config.timeout, fetch(url, config)).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok(details)) => {
            debug!(url, latency_ms, "Cosmos RPC probe succeeded");
            ProbeResult::ok(latency_ms, details)
        }
        Ok(Err(e)) => {
            warn!(url, latency_ms, error = %e, "Cosmos RPC probe failed");
            ProbeResult::failed(latency_ms, e.to_string())
        }
        Err(_) => {
            let e = Error::Timeout(config.timeout.as_secs());
            warn!(url, latency_ms, error = %e, "Cosmos RPC probe timed out");
            ProbeResult::failed(latency_ms, e.to_string())
        }
    }
}

async fn fetch(url: &str, config: &ProbeConfig) -> Result<ProbeDetails> {
    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let status_url = format!("{}/status", url.trim_end_matches('/'));

    let response = client
        .get(&status_url)
        .header("content-type", "application/json")
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP {}", response.status())));
    }

    let payload: Value = response
        .json()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    parse_status(&payload)
}

/// Extract node and sync info from a Tendermint `/status` response
///
/// Some gateways strip the JSON-RPC `result` wrapper, so both shapes are
/// accepted.
fn parse_status(payload: &Value) -> Result<ProbeDetails> {
    let result = payload.get("result").unwrap_or(payload);

    let node_info = result
        .get("node_info")
        .ok_or_else(|| Error::Network("malformed status response: missing node_info".to_string()))?;

    let network = node_info
        .get("network")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Network("malformed status response: missing network".to_string()))?
        .to_string();

    let version = node_info
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let moniker = node_info
        .get("moniker")
        .and_then(Value::as_str)
        .map(str::to_string);

    let sync_info = result.get("sync_info");
    let latest_block_height = sync_info
        .and_then(|s| s.get("latest_block_height"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let catching_up = sync_info
        .and_then(|s| s.get("catching_up"))
        .and_then(Value::as_bool);

    Ok(ProbeDetails::Cosmos {
        network,
        version,
        moniker,
        latest_block_height,
        catching_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_status_with_result_wrapper() {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": -1,
            "result": {
                "node_info": {
                    "network": "cosmoshub-4",
                    "version": "0.37.2",
                    "moniker": "relayer-1",
                },
                "sync_info": {
                    "latest_block_height": "21360000",
                    "catching_up": false,
                },
            },
        });

        let details = parse_status(&payload).unwrap();
        match details {
            ProbeDetails::Cosmos {
                network,
                version,
                moniker,
                latest_block_height,
                catching_up,
            } => {
                assert_eq!(network, "cosmoshub-4");
                assert_eq!(version, "0.37.2");
                assert_eq!(moniker.as_deref(), Some("relayer-1"));
                assert_eq!(latest_block_height.as_deref(), Some("21360000"));
                assert_eq!(catching_up, Some(false));
            }
            _ => panic!("expected Cosmos details"),
        }
    }

    #[test]
    fn test_parse_status_without_wrapper() {
        let payload = json!({
            "node_info": { "network": "osmosis-1", "version": "0.38.0" },
        });

        let details = parse_status(&payload).unwrap();
        match details {
            ProbeDetails::Cosmos { network, latest_block_height, .. } => {
                assert_eq!(network, "osmosis-1");
                assert!(latest_block_height.is_none());
            }
            _ => panic!("expected Cosmos details"),
        }
    }

    #[test]
    fn test_parse_status_rejects_malformed() {
        assert!(parse_status(&json!({"result": {}})).is_err());
        assert!(parse_status(&json!({})).is_err());
    }
}
