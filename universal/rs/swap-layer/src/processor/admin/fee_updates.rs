use std::collections::{btree_map::Entry, BTreeMap};

use swap_layer_messages::{messages::ChainFeeParamUpdate, types::UniversalAddress, wire::Batch};
use tracing::info;

use crate::{
    error::{Result, SwapLayerError},
    state::RelayParams,
    utils::relay_parameters::{apply_fee_param_update, verify_relay_params},
    SwapLayer,
};

/// Applies a batch of fee updates. Either every update lands or none does.
pub fn apply_fee_param_updates<R>(
    swap_layer: &mut SwapLayer<R>,
    fee_updater: UniversalAddress,
    updates: &Batch<ChainFeeParamUpdate>,
) -> Result<()> {
    swap_layer.custodian()?.require_fee_updater(&fee_updater)?;

    let mut staged = BTreeMap::<u16, RelayParams>::new();
    for ChainFeeParamUpdate { chain, update } in updates.iter() {
        let params = match staged.entry(*chain) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let peer = swap_layer
                    .peers
                    .get(chain)
                    .ok_or(SwapLayerError::AccountNotInitialized)?;
                entry.insert(peer.relay_params)
            }
        };

        apply_fee_param_update(params, *update)?;
    }

    for params in staged.values() {
        verify_relay_params(params)?;
    }

    for (chain, relay_params) in staged {
        if let Some(peer) = swap_layer.peers.get_mut(&chain) {
            peer.relay_params = relay_params;
        }
        info!(chain, "applied fee parameter updates");
    }

    Ok(())
}
