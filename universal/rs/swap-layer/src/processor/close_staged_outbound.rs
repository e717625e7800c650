use swap_layer_messages::types::UniversalAddress;
use tracing::debug;

use crate::{
    error::{Result, SwapLayerError},
    state::StagedOutboundId,
    SwapLayer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedOutboundRefund {
    /// Receives the escrowed USDC.
    pub sender: UniversalAddress,

    /// Receives the staged record's storage refund.
    pub prepared_by: UniversalAddress,

    pub amount: u64,
}

/// Cancels a staged outbound transfer before it is initiated.
pub fn close_staged_outbound<R>(
    swap_layer: &mut SwapLayer<R>,
    sender: UniversalAddress,
    id: StagedOutboundId,
) -> Result<StagedOutboundRefund> {
    let staged_outbound = swap_layer
        .staged_outbound
        .get(&id)
        .ok_or(SwapLayerError::StagedOutboundNotFound)?;
    require!(
        staged_outbound.sender == sender,
        SwapLayerError::NotStagedSender
    );

    let refund = StagedOutboundRefund {
        sender,
        prepared_by: staged_outbound.prepared_by,
        amount: staged_outbound.custody_amount,
    };
    swap_layer.staged_outbound.remove(&id);

    debug!(id = id.0, amount = refund.amount, "closed staged outbound");

    Ok(refund)
}
