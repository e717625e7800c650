use swap_layer_messages::types::UniversalAddress;
use tracing::info;

use crate::{
    error::{Result, SwapLayerError},
    state::RelayParams,
    utils, SwapLayer,
};

pub fn update_owner_assistant<R>(
    swap_layer: &mut SwapLayer<R>,
    owner: UniversalAddress,
    new_owner_assistant: UniversalAddress,
) -> Result<()> {
    let custodian = swap_layer.custodian_mut()?;
    custodian.require_owner(&owner)?;
    require!(
        !new_owner_assistant.is_zero(),
        SwapLayerError::AssistantZeroPubkey
    );

    custodian.owner_assistant = new_owner_assistant;

    info!(%new_owner_assistant, "updated owner assistant");

    Ok(())
}

pub fn update_fee_updater<R>(
    swap_layer: &mut SwapLayer<R>,
    admin: UniversalAddress,
    new_fee_updater: UniversalAddress,
) -> Result<()> {
    let custodian = swap_layer.custodian_mut()?;
    custodian.require_admin(&admin)?;
    require!(
        !new_fee_updater.is_zero(),
        SwapLayerError::FeeUpdaterZeroPubkey
    );

    custodian.fee_updater = new_fee_updater;

    info!(%new_fee_updater, "updated fee updater");

    Ok(())
}

pub fn update_fee_recipient<R>(
    swap_layer: &mut SwapLayer<R>,
    admin: UniversalAddress,
    new_fee_recipient_token: UniversalAddress,
) -> Result<()> {
    let custodian = swap_layer.custodian_mut()?;
    custodian.require_admin(&admin)?;
    require!(
        !new_fee_recipient_token.is_zero(),
        SwapLayerError::FeeRecipientZeroPubkey
    );

    custodian.fee_recipient_token = new_fee_recipient_token;

    info!(%new_fee_recipient_token, "updated fee recipient");

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRelayParametersArgs {
    pub chain: u16,
    pub relay_params: RelayParams,
}

/// Replaces a peer's relay parameters. The peer's address is untouched.
pub fn update_relay_params<R>(
    swap_layer: &mut SwapLayer<R>,
    fee_updater: UniversalAddress,
    args: UpdateRelayParametersArgs,
) -> Result<()> {
    swap_layer.custodian()?.require_fee_updater(&fee_updater)?;

    let UpdateRelayParametersArgs {
        chain,
        relay_params,
    } = args;

    utils::relay_parameters::verify_relay_params(&relay_params)?;

    let peer = swap_layer
        .peers
        .get_mut(&chain)
        .ok_or(SwapLayerError::AccountNotInitialized)?;
    peer.relay_params = relay_params;

    info!(chain, base_fee = relay_params.base_fee, "updated relay parameters");

    Ok(())
}
