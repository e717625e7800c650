use swap_layer_messages::types::UniversalAddress;
use tracing::debug;

use crate::{
    error::{Result, SwapLayerError},
    token_router::PreparedFillId,
    SwapLayer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInboundAccounts {
    /// Must be the staged inbound's recipient.
    pub recipient: UniversalAddress,

    /// Token account that receives the custody balance.
    pub dst_token: UniversalAddress,

    /// Receives the staged record's storage refund.
    pub beneficiary: UniversalAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasedInbound {
    pub dst_token: UniversalAddress,
    pub amount: u64,
    pub beneficiary: UniversalAddress,
    pub source_chain: u16,
    pub sender: UniversalAddress,
    pub recipient_payload: Vec<u8>,
}

/// Pays out a staged inbound transfer and closes it.
pub fn release_inbound<R>(
    swap_layer: &mut SwapLayer<R>,
    accounts: ReleaseInboundAccounts,
    id: &PreparedFillId,
) -> Result<ReleasedInbound> {
    let staged_inbound = swap_layer
        .staged_inbound
        .get(id)
        .ok_or(SwapLayerError::StagedInboundNotFound)?;
    require!(
        staged_inbound.recipient == accounts.recipient,
        SwapLayerError::InvalidRecipient
    );

    let staged_inbound = swap_layer
        .staged_inbound
        .remove(id)
        .ok_or(SwapLayerError::StagedInboundNotFound)?;

    debug!(
        recipient = %accounts.recipient,
        amount = staged_inbound.custody_amount,
        "released inbound"
    );

    Ok(ReleasedInbound {
        dst_token: accounts.dst_token,
        amount: staged_inbound.custody_amount,
        beneficiary: accounts.beneficiary,
        source_chain: staged_inbound.source_chain,
        sender: staged_inbound.sender,
        recipient_payload: staged_inbound.recipient_payload,
    })
}
