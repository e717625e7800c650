use swap_layer_messages::{
    messages::{FeeParams, Query, SubQuery},
    types::UniversalAddress,
    wire::{Batch, Writeable},
};

use crate::{
    error::{Result, SwapLayerError},
    utils, SwapLayer,
};

/// Answers each query in order and concatenates the encoded responses. Addresses are 32 bytes,
/// zero when unset.
pub fn query<R>(swap_layer: &SwapLayer<R>, queries: &Batch<Query>) -> Result<Vec<u8>> {
    let mut response = Vec::new();

    for query in queries.iter() {
        match query {
            Query::FeeParams { chain } => {
                let fee_params = match swap_layer.peer(*chain) {
                    Some(peer) => utils::relay_parameters::fee_params_from_relay_params(
                        &peer.relay_params,
                    )?,
                    None => FeeParams::default(),
                };
                fee_params
                    .write(&mut response)
                    .map_err(|e| SwapLayerError::EncodeFailed(e.to_string()))?;
            }
            Query::Endpoint {
                sub_query: SubQuery::Current,
                chain,
            } => {
                let address = swap_layer
                    .peer(*chain)
                    .map(|peer| peer.address)
                    .unwrap_or(UniversalAddress::ZERO);
                response.extend_from_slice(address.as_bytes());
            }
            Query::Assistant => {
                let custodian = swap_layer.custodian()?;
                response.extend_from_slice(custodian.owner_assistant.as_bytes());
            }
            Query::Owner {
                sub_query: SubQuery::Current,
            } => {
                let custodian = swap_layer.custodian()?;
                response.extend_from_slice(custodian.owner.as_bytes());
            }
            Query::Owner {
                sub_query: SubQuery::Proposed,
            } => {
                let pending_owner = swap_layer
                    .custodian()?
                    .pending_owner
                    .unwrap_or(UniversalAddress::ZERO);
                response.extend_from_slice(pending_owner.as_bytes());
            }
            Query::FeeRecipient {
                sub_query: SubQuery::Current,
            } => {
                let custodian = swap_layer.custodian()?;
                response.extend_from_slice(custodian.fee_recipient_token.as_bytes());
            }
            _ => return Err(SwapLayerError::UnsupportedQuery),
        }
    }

    Ok(response)
}
