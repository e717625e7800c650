use swap_layer_messages::types::UniversalAddress;
use tracing::debug;

use crate::{
    error::{Result, SwapLayerError},
    state::{StagedOutboundId, StagedRedeem},
    token_router::{PrepareMarketOrderArgs, PreparedOrderId, TokenRouter},
    utils, SwapLayer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiateTransferAccounts {
    /// Must be the payer that staged the outbound transfer.
    pub payer: UniversalAddress,

    pub usdc_refund_token: UniversalAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatedTransfer {
    pub prepared_order: PreparedOrderId,

    /// USDC handed to the token router.
    pub amount_in: u64,

    /// Encoded swap message attached to the order.
    pub redeemer_message: Vec<u8>,
}

/// Hands a staged outbound transfer to the token router. The staged record is consumed only if
/// the order is prepared.
pub fn initiate_transfer<R: TokenRouter>(
    swap_layer: &mut SwapLayer<R>,
    accounts: InitiateTransferAccounts,
    id: StagedOutboundId,
) -> Result<InitiatedTransfer> {
    let mut staged_outbound = swap_layer
        .staged_outbound
        .get(&id)
        .cloned()
        .ok_or(SwapLayerError::StagedOutboundNotFound)?;

    require!(
        staged_outbound.prepared_by == accounts.payer,
        SwapLayerError::PreparedByMismatch
    );
    require!(
        staged_outbound.usdc_refund_token == accounts.usdc_refund_token,
        SwapLayerError::InvalidRefundToken
    );

    let target_peer = swap_layer.registered_peer(staged_outbound.target_chain)?;
    let redeemer = target_peer.address;

    // Relay parameters may have moved since staging.
    if let StagedRedeem::Relay {
        gas_dropoff,
        relaying_fee,
        max_relayer_fee,
    } = &mut staged_outbound.staged_redeem
    {
        let current_fee = utils::relayer_fees::calculate_relayer_fee(
            &swap_layer.config.gas_overheads,
            &target_peer.relay_params,
            *gas_dropoff,
            &staged_outbound.output_token,
        )?;
        require!(
            current_fee <= *max_relayer_fee,
            SwapLayerError::ExceedsMaxRelayingFee
        );
        require!(
            current_fee < staged_outbound.custody_amount,
            SwapLayerError::InsufficientAmountIn
        );

        *relaying_fee = current_fee;
    }

    let redeemer_message = staged_outbound
        .to_swap_message_v1()?
        .encode()
        .map_err(|e| SwapLayerError::EncodeFailed(e.to_string()))?;

    let prepared_order = swap_layer
        .token_router
        .prepare_market_order(PrepareMarketOrderArgs {
            amount_in: staged_outbound.custody_amount,
            target_chain: staged_outbound.target_chain,
            redeemer,
            redeemer_message: redeemer_message.clone(),
            refund_token: staged_outbound.usdc_refund_token,
        })?;

    swap_layer.staged_outbound.remove(&id);

    debug!(
        id = id.0,
        prepared_order = prepared_order.0,
        amount_in = staged_outbound.custody_amount,
        "initiated transfer"
    );

    Ok(InitiatedTransfer {
        prepared_order,
        amount_in: staged_outbound.custody_amount,
        redeemer_message,
    })
}
