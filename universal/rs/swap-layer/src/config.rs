use serde::{Deserialize, Serialize};

use crate::state::SwapTimeLimit;

/// Deployment settings supplied by the embedding program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Wormhole chain ID of this deployment.
    pub chain: u16,

    #[serde(default)]
    pub gas_overheads: EvmGasOverheads,

    /// Applied to peers registered through governance, which carries no time limits.
    #[serde(default = "default_swap_time_limit")]
    pub swap_time_limit: SwapTimeLimit,
}

impl Config {
    pub fn new(chain: u16) -> Self {
        Self {
            chain,
            gas_overheads: Default::default(),
            swap_time_limit: default_swap_time_limit(),
        }
    }
}

fn default_swap_time_limit() -> SwapTimeLimit {
    SwapTimeLimit {
        fast_limit: 10,
        finalized_limit: 30,
    }
}

/// EVM gas units charged for relaying, by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvmGasOverheads {
    pub base: u64,
    pub dropoff: u64,
    pub uniswap_v3: VenueGas,
    pub trader_joe: VenueGas,
}

impl Default for EvmGasOverheads {
    fn default() -> Self {
        Self {
            base: 100_000,
            dropoff: 10_000,
            uniswap_v3: VenueGas {
                overhead: 100_000,
                per_swap: 100_000,
            },
            trader_joe: VenueGas {
                overhead: 100_000,
                per_swap: 100_000,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueGas {
    pub overhead: u64,
    pub per_swap: u64,
}
