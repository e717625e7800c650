use swap_layer_messages::types::{OutputToken, RedeemMode, UniversalAddress};
use tracing::debug;

use crate::{
    error::{Result, SwapLayerError},
    state::{StagedInbound, StagedInboundInfo},
    token_router::{PreparedFillId, TokenRouter},
    SwapLayer,
};

/// Moves the fill into a staged inbound record for its recipient to release.
pub fn complete_transfer_payload<R: TokenRouter>(
    swap_layer: &mut SwapLayer<R>,
    staged_by: UniversalAddress,
    id: &PreparedFillId,
) -> Result<()> {
    let swap_layer_fill = super::read_swap_layer_fill(swap_layer, id)?;
    let source_chain = swap_layer_fill.fill.source_chain;
    let swap_msg = swap_layer_fill.message;

    let (sender, buf) = match swap_msg.redeem_mode {
        RedeemMode::Payload { sender, buf } => (sender, buf),
        _ => return Err(SwapLayerError::InvalidRedeemMode),
    };
    require!(
        matches!(swap_msg.output_token, OutputToken::Usdc),
        SwapLayerError::InvalidOutputToken
    );
    require!(
        !swap_layer.staged_inbound.contains_key(id),
        SwapLayerError::AlreadyInitialized
    );

    let custody_amount = swap_layer.token_router.consume_prepared_fill(id)?;

    swap_layer.staged_inbound.insert(
        *id,
        StagedInbound {
            info: StagedInboundInfo {
                custody_amount,
                staged_by,
                source_chain,
                sender,
                recipient: swap_msg.recipient,
                is_native: false,
            },
            recipient_payload: buf.into(),
        },
    );

    debug!(source_chain, %sender, custody_amount, "staged inbound payload");

    Ok(())
}
