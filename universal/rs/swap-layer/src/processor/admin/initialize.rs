use swap_layer_messages::types::UniversalAddress;
use tracing::info;

use crate::{
    error::{Result, SwapLayerError},
    state::Custodian,
    SwapLayer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeArgs {
    pub owner_assistant: UniversalAddress,
    pub fee_updater: UniversalAddress,

    /// USDC token account that collects relayer fees.
    pub fee_recipient_token: UniversalAddress,
}

/// Creates the custodian. The caller becomes the program's owner.
pub fn initialize<R>(
    swap_layer: &mut SwapLayer<R>,
    owner: UniversalAddress,
    args: InitializeArgs,
) -> Result<()> {
    require!(
        swap_layer.custodian.is_none(),
        SwapLayerError::AlreadyInitialized
    );
    require!(!owner.is_zero(), SwapLayerError::InvalidNewOwner);
    require!(
        !args.owner_assistant.is_zero(),
        SwapLayerError::AssistantZeroPubkey
    );
    require!(
        !args.fee_updater.is_zero(),
        SwapLayerError::FeeUpdaterZeroPubkey
    );
    require!(
        !args.fee_recipient_token.is_zero(),
        SwapLayerError::FeeRecipientZeroPubkey
    );

    swap_layer.custodian = Some(Custodian {
        owner,
        pending_owner: None,
        owner_assistant: args.owner_assistant,
        fee_updater: args.fee_updater,
        fee_recipient_token: args.fee_recipient_token,
    });

    info!(%owner, chain = swap_layer.config.chain, "initialized custodian");

    Ok(())
}
