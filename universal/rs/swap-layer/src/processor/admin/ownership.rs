use swap_layer_messages::types::UniversalAddress;
use tracing::info;

use crate::{
    error::{Result, SwapLayerError},
    SwapLayer,
};

pub fn submit_ownership_transfer_request<R>(
    swap_layer: &mut SwapLayer<R>,
    owner: UniversalAddress,
    new_owner: UniversalAddress,
) -> Result<()> {
    let custodian = swap_layer.custodian_mut()?;
    custodian.require_owner(&owner)?;

    require!(!new_owner.is_zero(), SwapLayerError::InvalidNewOwner);
    require!(new_owner != custodian.owner, SwapLayerError::AlreadyOwner);

    custodian.pending_owner = Some(new_owner);

    info!(%new_owner, "submitted ownership transfer request");

    Ok(())
}

/// Only the pending owner can confirm, which makes them the owner.
pub fn confirm_ownership_transfer_request<R>(
    swap_layer: &mut SwapLayer<R>,
    pending_owner: UniversalAddress,
) -> Result<()> {
    let custodian = swap_layer.custodian_mut()?;
    require!(
        custodian.pending_owner == Some(pending_owner),
        SwapLayerError::NotPendingOwner
    );

    let previous_owner = std::mem::replace(&mut custodian.owner, pending_owner);
    custodian.pending_owner = None;

    info!(%previous_owner, new_owner = %pending_owner, "confirmed ownership transfer");

    Ok(())
}

pub fn cancel_ownership_transfer_request<R>(
    swap_layer: &mut SwapLayer<R>,
    owner: UniversalAddress,
) -> Result<()> {
    let custodian = swap_layer.custodian_mut()?;
    custodian.require_owner(&owner)?;

    custodian.pending_owner = None;

    info!("cancelled ownership transfer request");

    Ok(())
}
