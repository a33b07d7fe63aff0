//! RPC endpoint probing
//!
//! Each probe fires a small fixed batch of read-only calls at a
//! user-supplied endpoint and reports end-to-end latency plus basic
//! liveness metadata. Endpoint failures never escape as errors; they are
//! folded into the returned [`ProbeResult`].

pub mod evm;
pub mod cosmos;

use std::time::Duration;

use serde::{Serialize, Deserialize};

/// Probe configuration
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Upper bound on the whole probe batch
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// Outcome of a single probe, ephemeral and serializable for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Whether the endpoint answered the required calls
    pub success: bool,
    /// End-to-end latency of the call batch in milliseconds
    pub latency_ms: u64,
    /// Liveness metadata, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ProbeDetails>,
    /// Error description, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    fn ok(latency_ms: u64, details: ProbeDetails) -> Self {
        Self {
            success: true,
            latency_ms,
            details: Some(details),
            error: None,
        }
    }

    fn failed(latency_ms: u64, error: String) -> Self {
        Self {
            success: false,
            latency_ms,
            details: None,
            error: Some(error),
        }
    }
}

/// Chain-specific liveness metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "chain", rename_all = "snake_case")]
pub enum ProbeDetails {
    /// EVM JSON-RPC endpoint
    Evm {
        /// Chain id as a decimal string
        chain_id: String,
        /// Latest block number as a decimal string
        block_number: String,
        /// `net_version` response, absent when the node rejects the call
        #[serde(skip_serializing_if = "Option::is_none")]
        network_id: Option<String>,
        /// Gas price in wei as a decimal string, absent when unavailable
        #[serde(skip_serializing_if = "Option::is_none")]
        gas_price: Option<String>,
    },
    /// Cosmos REST/status endpoint
    Cosmos {
        /// Network (chain id) reported by the node
        network: String,
        /// Node software version
        version: String,
        /// Node moniker, when reported
        #[serde(skip_serializing_if = "Option::is_none")]
        moniker: Option<String>,
        /// Latest block height as reported by sync info
        #[serde(skip_serializing_if = "Option::is_none")]
        latest_block_height: Option<String>,
        /// Whether the node is still catching up
        #[serde(skip_serializing_if = "Option::is_none")]
        catching_up: Option<bool>,
    },
}
