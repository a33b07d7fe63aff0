//! EVM JSON-RPC endpoint probe

use std::time::Instant;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use super::{ProbeConfig, ProbeDetails, ProbeResult};

/// Probe an EVM JSON-RPC endpoint
///
/// Issues `eth_blockNumber`, `eth_chainId`, `net_version`, and
/// `eth_gasPrice` concurrently. The first two decide success; the others
/// degrade to absent fields when the node rejects them.
pub async fn probe(url: &str, config: &ProbeConfig) -> ProbeResult {
    let url = url.trim();
    debug!(url, "starting EVM RPC probe");

    let start = Instant::now();
    let outcome = tokio::time::timeout(config.timeout, fetch(url, config)).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok(details)) => {
            debug!(url, latency_ms, "EVM RPC probe succeeded");
            ProbeResult::ok(latency_ms, details)
        }
        Ok(Err(e)) => {
            warn!(url, latency_ms, error = %e, "EVM RPC probe failed");
            ProbeResult::failed(latency_ms, e.to_string())
        }
        Err(_) => {
            let e = Error::Timeout(config.timeout.as_secs());
            warn!(url, latency_ms, error = %e, "EVM RPC probe timed out");
            ProbeResult::failed(latency_ms, e.to_string())
        }
    }
}

async fn fetch(url: &str, config: &ProbeConfig) -> Result<ProbeDetails> {
    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let (block_number, chain_id, network_id, gas_price) = tokio::join!(
        call(&client, url, "eth_blockNumber"),
        call(&client, url, "eth_chainId"),
        call(&client, url, "net_version"),
        call(&client, url, "eth_gasPrice"),
    );

    let block_number = parse_quantity(&block_number?)?;
    let chain_id = parse_quantity(&chain_id?)?;

    // Optional calls degrade rather than failing the probe
    let network_id = network_id
        .ok()
        .and_then(|v| v.as_str().map(str::to_string));
    let gas_price = gas_price
        .ok()
        .and_then(|v| parse_quantity(&v).ok())
        .map(|p| p.to_string());

    Ok(ProbeDetails::Evm {
        chain_id: chain_id.to_string(),
        block_number: block_number.to_string(),
        network_id,
        gas_price,
    })
}

/// Issue a single parameterless JSON-RPC call and return its result field
async fn call(client: &Client, url: &str, method: &str) -> Result<Value> {
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": [],
    });

    let response = client
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Network(format!("{}: {}", method, e)))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!("{}: HTTP {}", method, response.status())));
    }

    let payload: Value = response
        .json()
        .await
        .map_err(|e| Error::Network(format!("{}: {}", method, e)))?;

    if let Some(error) = payload.get("error") {
        return Err(Error::Network(format!("{}: {}", method, error)));
    }

    payload
        .get("result")
        .cloned()
        .ok_or_else(|| Error::Network(format!("{}: missing result", method)))
}

/// Parse a JSON-RPC quantity (`"0x..."` hex string) into a u64
fn parse_quantity(value: &Value) -> Result<u64> {
    let text = value
        .as_str()
        .ok_or_else(|| Error::Network(format!("expected quantity string, got {}", value)))?;

    let digits = text.strip_prefix("0x").unwrap_or(text);
    u64::from_str_radix(digits, 16)
        .map_err(|e| Error::Network(format!("malformed quantity '{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(&json!("0x10")).unwrap(), 16);
        assert_eq!(parse_quantity(&json!("0x0")).unwrap(), 0);
        assert!(parse_quantity(&json!("0xzz")).is_err());
        assert!(parse_quantity(&json!(42)).is_err());
    }
}
