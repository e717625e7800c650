use serde::{Deserialize, Serialize};
use swap_layer_messages::types::{GasDropoff, GasPrice, UniversalAddress};

/// Registered swap layer deployment on a foreign chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    /// Wormhole chain ID. Cannot be zero or the local chain.
    pub chain: u16,

    /// Peer address. Cannot be zero address, and never changes once registered.
    pub address: UniversalAddress,

    pub relay_params: RelayParams,
}

/// Pricing inputs for relaying to a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayParams {
    /// Flat fee in USDC smallest units. `u32::MAX` disables relaying.
    pub base_fee: u32,

    /// Price of the destination's native token in USDC smallest units.
    pub native_token_price: u64,

    pub max_gas_dropoff: GasDropoff,

    /// Margin in [crate::MAX_BPS] units.
    pub gas_dropoff_margin: u32,

    pub execution_params: ExecutionParams,

    pub swap_time_limit: SwapTimeLimit,
}

impl RelayParams {
    pub const DISABLED_BASE_FEE: u32 = u32::MAX;

    pub fn is_relaying_disabled(&self) -> bool {
        self.base_fee == Self::DISABLED_BASE_FEE
    }
}

/// Destination execution environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionParams {
    #[default]
    None,
    Evm {
        gas_price: GasPrice,

        /// Margin in [crate::MAX_BPS] units.
        gas_price_margin: u32,
    },
}

/// Seconds after a fill is prepared before a relayer may give up on the swap and pay out USDC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SwapTimeLimit {
    pub fast_limit: u32,
    pub finalized_limit: u32,
}
