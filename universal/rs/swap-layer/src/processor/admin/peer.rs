use swap_layer_messages::types::UniversalAddress;
use tracing::info;

use crate::{
    error::{Result, SwapLayerError},
    state::{Peer, RelayParams},
    utils, SwapLayer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPeerArgs {
    pub chain: u16,
    pub address: UniversalAddress,
    pub relay_params: RelayParams,
}

pub fn add_peer<R>(
    swap_layer: &mut SwapLayer<R>,
    admin: UniversalAddress,
    args: AddPeerArgs,
) -> Result<()> {
    swap_layer.custodian()?.require_admin(&admin)?;

    let AddPeerArgs {
        chain,
        address,
        relay_params,
    } = args;

    require!(
        chain != 0 && chain != swap_layer.config.chain,
        SwapLayerError::ChainNotAllowed
    );
    require!(!address.is_zero(), SwapLayerError::InvalidPeer);

    utils::relay_parameters::verify_relay_params(&relay_params)?;

    require!(
        !swap_layer.peers.contains_key(&chain),
        SwapLayerError::PeerAlreadyExists
    );

    swap_layer.peers.insert(
        chain,
        Peer {
            chain,
            address,
            relay_params,
        },
    );

    info!(chain, %address, "added peer");

    Ok(())
}

/// Peers are pinned to the address they were added with. Only relay parameters change here.
pub fn update_peer<R>(
    swap_layer: &mut SwapLayer<R>,
    owner: UniversalAddress,
    args: AddPeerArgs,
) -> Result<()> {
    swap_layer.custodian()?.require_owner(&owner)?;

    let AddPeerArgs {
        chain,
        address,
        relay_params,
    } = args;

    utils::relay_parameters::verify_relay_params(&relay_params)?;

    let peer = swap_layer
        .peers
        .get_mut(&chain)
        .ok_or(SwapLayerError::AccountNotInitialized)?;
    require!(peer.address == address, SwapLayerError::InvalidPeer);

    peer.relay_params = relay_params;

    info!(chain, %address, "updated peer");

    Ok(())
}
