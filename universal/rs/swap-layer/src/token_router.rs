//! Seam to the token router, the escrow primitive that moves USDC across chains. The swap layer
//! hands it prepared orders and consumes the fills it delivers.

use std::collections::BTreeMap;

use swap_layer_messages::types::UniversalAddress;

use crate::error::{Result, SwapLayerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreparedOrderId(pub u64);

/// Fills are keyed by the hash of the attestation that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreparedFillId(pub [u8; 32]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareMarketOrderArgs {
    pub amount_in: u64,
    pub target_chain: u16,

    /// Swap layer peer that redeems the fill on the target chain.
    pub redeemer: UniversalAddress,

    /// Encoded swap message.
    pub redeemer_message: Vec<u8>,

    pub refund_token: UniversalAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillType {
    #[default]
    Unset,
    WormholeCctpDeposit,
    FastFill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedFill {
    pub source_chain: u16,
    pub order_sender: UniversalAddress,
    pub redeemer_message: Vec<u8>,
    pub fill_type: FillType,

    /// Unix time the fill was prepared.
    pub timestamp: i64,

    /// USDC held by the fill's custody account.
    pub amount: u64,
}

pub trait TokenRouter {
    fn prepare_market_order(&mut self, args: PrepareMarketOrderArgs) -> Result<PreparedOrderId>;

    fn prepared_fill(&self, id: &PreparedFillId) -> Option<&PreparedFill>;

    /// Close the fill and release its custody. A fill can only be consumed once.
    fn consume_prepared_fill(&mut self, id: &PreparedFillId) -> Result<u64>;
}

/// In-memory token router for embedding tests.
#[derive(Debug, Default)]
pub struct MemoryTokenRouter {
    orders: BTreeMap<PreparedOrderId, PrepareMarketOrderArgs>,
    fills: BTreeMap<PreparedFillId, PreparedFill>,
    next_order: u64,
}

impl MemoryTokenRouter {
    pub fn new() -> Self {
        Default::default()
    }

    /// Deliver a fill, as the cross-chain transport would.
    pub fn insert_fill(&mut self, id: PreparedFillId, fill: PreparedFill) {
        self.fills.insert(id, fill);
    }

    pub fn order(&self, id: &PreparedOrderId) -> Option<&PrepareMarketOrderArgs> {
        self.orders.get(id)
    }

    pub fn orders(&self) -> impl Iterator<Item = (&PreparedOrderId, &PrepareMarketOrderArgs)> {
        self.orders.iter()
    }
}

impl TokenRouter for MemoryTokenRouter {
    fn prepare_market_order(&mut self, args: PrepareMarketOrderArgs) -> Result<PreparedOrderId> {
        if args.amount_in == 0 {
            return Err(SwapLayerError::TokenRouter("amount in must be nonzero".into()));
        }

        let id = PreparedOrderId(self.next_order);
        self.next_order = self
            .next_order
            .checked_add(1)
            .ok_or(SwapLayerError::U64Overflow)?;
        self.orders.insert(id, args);

        Ok(id)
    }

    fn prepared_fill(&self, id: &PreparedFillId) -> Option<&PreparedFill> {
        self.fills.get(id)
    }

    fn consume_prepared_fill(&mut self, id: &PreparedFillId) -> Result<u64> {
        self.fills
            .remove(id)
            .map(|fill| fill.amount)
            .ok_or(SwapLayerError::PreparedFillNotFound)
    }
}
