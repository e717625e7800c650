mod direct;
pub use direct::*;

mod payload;
pub use payload::*;

mod relay;
pub use relay::*;

use swap_layer_messages::SwapMessageV1;

use crate::{
    error::{Result, SwapLayerError},
    state::Peer,
    token_router::{PreparedFill, PreparedFillId, TokenRouter},
    SwapLayer,
};

/// Prepared fill whose redeemer message came from a registered peer.
struct SwapLayerFill<'a> {
    fill: &'a PreparedFill,
    associated_peer: &'a Peer,
    message: SwapMessageV1,
}

fn read_swap_layer_fill<'a, R: TokenRouter>(
    swap_layer: &'a SwapLayer<R>,
    id: &PreparedFillId,
) -> Result<SwapLayerFill<'a>> {
    let fill = swap_layer
        .token_router
        .prepared_fill(id)
        .ok_or(SwapLayerError::PreparedFillNotFound)?;

    let message = SwapMessageV1::decode(&fill.redeemer_message)
        .map_err(|_| SwapLayerError::InvalidSwapMessage)?;

    let associated_peer = swap_layer
        .peer(fill.source_chain)
        .filter(|peer| peer.address == fill.order_sender)
        .ok_or(SwapLayerError::InvalidPeer)?;

    Ok(SwapLayerFill {
        fill,
        associated_peer,
        message,
    })
}
