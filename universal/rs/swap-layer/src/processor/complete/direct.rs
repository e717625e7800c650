use swap_layer_messages::types::{OutputToken, RedeemMode, UniversalAddress};
use tracing::debug;

use crate::{
    error::{Result, SwapLayerError},
    token_router::{PreparedFillId, TokenRouter},
    SwapLayer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectPayout {
    pub recipient: UniversalAddress,
    pub amount: u64,
}

/// Pays the whole fill to its recipient.
pub fn complete_transfer_direct<R: TokenRouter>(
    swap_layer: &mut SwapLayer<R>,
    recipient: UniversalAddress,
    id: &PreparedFillId,
) -> Result<DirectPayout> {
    let swap_layer_fill = super::read_swap_layer_fill(swap_layer, id)?;
    let swap_msg = &swap_layer_fill.message;

    require!(
        matches!(swap_msg.redeem_mode, RedeemMode::Direct),
        SwapLayerError::InvalidRedeemMode
    );
    require!(
        matches!(swap_msg.output_token, OutputToken::Usdc),
        SwapLayerError::InvalidOutputToken
    );
    require!(
        swap_msg.recipient == recipient,
        SwapLayerError::InvalidRecipient
    );

    let amount = swap_layer.token_router.consume_prepared_fill(id)?;

    debug!(%recipient, amount, "completed direct transfer");

    Ok(DirectPayout { recipient, amount })
}
