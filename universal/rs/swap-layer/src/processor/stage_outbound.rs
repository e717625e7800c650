use swap_layer_messages::{
    types::{OutputToken, RedeemOption, UniversalAddress},
    wire::ReadableExt,
};
use tracing::debug;

use crate::{
    error::{Result, SwapLayerError},
    state::{StagedOutbound, StagedOutboundId, StagedOutboundInfo, StagedRedeem},
    utils, SwapLayer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutboundAccounts {
    /// Pays to create the staged outbound. Only this payer may initiate it.
    pub payer: UniversalAddress,

    /// Owner of the USDC being escrowed.
    pub sender: UniversalAddress,

    pub usdc_refund_token: UniversalAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutboundArgs {
    /// Transfer amount. For an exact-in relay the relaying fee is taken out of this amount,
    /// otherwise it is added on top.
    pub amount_in: u64,
    pub is_exact_in: bool,

    pub target_chain: u16,
    pub recipient: UniversalAddress,

    /// Defaults to a direct redeem.
    pub redeem_option: Option<RedeemOption>,

    /// Encoded [OutputToken]. Defaults to USDC.
    pub encoded_output_token: Option<Vec<u8>>,
}

pub fn stage_outbound<R>(
    swap_layer: &mut SwapLayer<R>,
    accounts: StageOutboundAccounts,
    args: StageOutboundArgs,
) -> Result<StagedOutboundId> {
    let StageOutboundArgs {
        amount_in,
        is_exact_in,
        target_chain,
        recipient,
        redeem_option,
        encoded_output_token,
    } = args;

    require!(amount_in > 0, SwapLayerError::ZeroAmountIn);
    require!(!recipient.is_zero(), SwapLayerError::InvalidRecipient);

    let target_peer = swap_layer.registered_peer(target_chain)?;

    let output_token = match encoded_output_token {
        Some(encoded) => OutputToken::read_all(&encoded)
            .map_err(|_| SwapLayerError::InvalidOutputToken)?,
        None => OutputToken::Usdc,
    };

    let (custody_amount, staged_redeem) = match redeem_option.unwrap_or_default() {
        RedeemOption::Direct => (amount_in, StagedRedeem::Direct),
        RedeemOption::Payload(buf) => {
            // The message carries the payload behind a 2-byte length.
            require!(
                buf.len() <= usize::from(u16::MAX),
                SwapLayerError::PayloadTooLarge
            );

            (amount_in, StagedRedeem::Payload(buf.into()))
        }
        RedeemOption::Relay {
            gas_dropoff,
            max_relaying_fee,
        } => {
            require!(
                gas_dropoff <= target_peer.relay_params.max_gas_dropoff,
                SwapLayerError::InvalidGasDropoff
            );

            // Relaying fee must be less than the user-specific maximum.
            let max_relayer_fee = max_relaying_fee.to_u64();
            let relaying_fee = utils::relayer_fees::calculate_relayer_fee(
                &swap_layer.config.gas_overheads,
                &target_peer.relay_params,
                gas_dropoff,
                &output_token,
            )?;
            require!(
                relaying_fee <= max_relayer_fee,
                SwapLayerError::ExceedsMaxRelayingFee
            );

            let custody_amount = if is_exact_in {
                require!(
                    amount_in > relaying_fee,
                    SwapLayerError::InsufficientAmountIn
                );

                amount_in
            } else {
                amount_in
                    .checked_add(relaying_fee)
                    .ok_or(SwapLayerError::U64Overflow)?
            };

            (
                custody_amount,
                StagedRedeem::Relay {
                    gas_dropoff,
                    relaying_fee,
                    max_relayer_fee,
                },
            )
        }
    };

    let id = StagedOutboundId(swap_layer.next_staged_outbound);
    swap_layer.next_staged_outbound = swap_layer
        .next_staged_outbound
        .checked_add(1)
        .ok_or(SwapLayerError::U64Overflow)?;

    swap_layer.staged_outbound.insert(
        id,
        StagedOutbound {
            info: StagedOutboundInfo {
                prepared_by: accounts.payer,
                sender: accounts.sender,
                target_chain,
                recipient,
                usdc_refund_token: accounts.usdc_refund_token,
            },
            staged_redeem,
            output_token,
            custody_amount,
        },
    );

    debug!(id = id.0, target_chain, custody_amount, "staged outbound");

    Ok(id)
}
