use std::collections::BTreeMap;

use swap_layer_messages::{
    messages::{Endpoint, GovernanceCommand},
    types::UniversalAddress,
    wire::Batch,
};
use tracing::info;

use crate::{
    error::{Result, SwapLayerError},
    state::Peer,
    utils::relay_parameters::{relay_params_from_fee_params, verify_relay_params},
    SwapLayer,
};

/// Executes a batch of governance commands as the owner. Nothing is written unless every command
/// succeeds.
pub fn execute_governance<R>(
    swap_layer: &mut SwapLayer<R>,
    owner: UniversalAddress,
    commands: &Batch<GovernanceCommand>,
) -> Result<()> {
    swap_layer.custodian()?.require_owner(&owner)?;

    let mut endpoints = BTreeMap::<u16, Peer>::new();
    for command in commands.iter() {
        match command {
            GovernanceCommand::UpdateEndpoint {
                endpoint: Endpoint { chain, address },
                fee_params,
            } => {
                let (chain, address) = (*chain, *address);
                require!(
                    chain != 0 && chain != swap_layer.config.chain,
                    SwapLayerError::ChainNotAllowed
                );
                require!(!address.is_zero(), SwapLayerError::InvalidPeer);

                let existing = endpoints.get(&chain).or_else(|| swap_layer.peers.get(&chain));
                let swap_time_limit = match existing {
                    Some(peer) => {
                        require!(peer.address == address, SwapLayerError::InvalidPeer);
                        peer.relay_params.swap_time_limit
                    }
                    None => swap_layer.config.swap_time_limit,
                };

                let relay_params = relay_params_from_fee_params(fee_params, swap_time_limit);
                verify_relay_params(&relay_params)?;

                endpoints.insert(
                    chain,
                    Peer {
                        chain,
                        address,
                        relay_params,
                    },
                );
            }
            GovernanceCommand::ProposeEndpointUpdate { .. }
            | GovernanceCommand::UpgradeContract { .. }
            | GovernanceCommand::ProposeContractUpgrade { .. } => {
                return Err(SwapLayerError::UnsupportedGovernanceCommand)
            }
        }
    }

    for (chain, peer) in endpoints {
        info!(chain, address = %peer.address, "updated endpoint");
        swap_layer.peers.insert(chain, peer);
    }

    Ok(())
}
