use swap_layer_messages::types::{RedeemMode, UniversalAddress};
use tracing::{debug, warn};

use crate::{
    error::{Result, SwapLayerError},
    token_router::{FillType, PreparedFillId, TokenRouter},
    SwapLayer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTransferRelayAccounts {
    /// The payer of the transaction. This could either be the recipient or a relayer.
    pub payer: UniversalAddress,

    pub recipient: UniversalAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayPayout {
    pub recipient: UniversalAddress,

    /// USDC paid to the recipient.
    pub user_amount: u64,

    /// Native gas the payer sends to the recipient, in the destination's smallest unit.
    pub gas_dropoff: u128,

    pub fee_recipient_token: UniversalAddress,

    /// USDC paid to the fee recipient.
    pub relaying_fee: u64,
}

/// Settles a relayed fill in USDC. A fill that asked for a swap is only paid out in USDC once the
/// source peer's swap time limit has passed.
pub fn complete_transfer_relay<R: TokenRouter>(
    swap_layer: &mut SwapLayer<R>,
    accounts: CompleteTransferRelayAccounts,
    id: &PreparedFillId,
    now: i64,
) -> Result<RelayPayout> {
    let CompleteTransferRelayAccounts { payer, recipient } = accounts;

    let swap_layer_fill = super::read_swap_layer_fill(swap_layer, id)?;
    let swap_msg = &swap_layer_fill.message;

    let (gas_dropoff, relaying_fee) = match swap_msg.redeem_mode {
        RedeemMode::Relay {
            gas_dropoff,
            relaying_fee,
        } => (gas_dropoff, relaying_fee.to_u64()),
        _ => return Err(SwapLayerError::InvalidRedeemMode),
    };

    require!(
        swap_msg.recipient == recipient,
        SwapLayerError::InvalidRecipient
    );

    if swap_msg.output_token.swap().is_some() {
        let fill = swap_layer_fill.fill;
        let time_diff = now.saturating_sub(fill.timestamp);
        let swap_time_limit = &swap_layer_fill.associated_peer.relay_params.swap_time_limit;

        let limit = match fill.fill_type {
            FillType::FastFill => swap_time_limit.fast_limit,
            FillType::WormholeCctpDeposit => swap_time_limit.finalized_limit,
            FillType::Unset => return Err(SwapLayerError::UnsupportedFillType),
        };
        require!(
            time_diff >= i64::from(limit),
            SwapLayerError::SwapTimeLimitNotExceeded
        );

        warn!(
            source_chain = fill.source_chain,
            time_diff, "swap time limit exceeded, paying out USDC"
        );
    }

    let self_redeem = payer == recipient;
    require!(
        self_redeem || relaying_fee <= swap_layer_fill.fill.amount,
        SwapLayerError::InvalidRelayerFee
    );

    let fee_recipient_token = swap_layer.custodian()?.fee_recipient_token;
    let custody_amount = swap_layer.token_router.consume_prepared_fill(id)?;

    // If the payer is the recipient, just transfer the tokens to the recipient.
    let payout = if self_redeem {
        RelayPayout {
            recipient,
            user_amount: custody_amount,
            gas_dropoff: 0,
            fee_recipient_token,
            relaying_fee: 0,
        }
    } else {
        RelayPayout {
            recipient,
            user_amount: custody_amount
                .checked_sub(relaying_fee)
                .ok_or(SwapLayerError::InvalidRelayerFee)?,
            gas_dropoff: gas_dropoff.denormalize(),
            fee_recipient_token,
            relaying_fee,
        }
    };

    debug!(
        %recipient,
        user_amount = payout.user_amount,
        relaying_fee = payout.relaying_fee,
        "completed relay transfer"
    );

    Ok(payout)
}
