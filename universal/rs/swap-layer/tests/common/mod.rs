#![allow(dead_code)]

use swap_layer::{
    config::Config,
    processor::{AddPeerArgs, InitializeArgs},
    state::{ExecutionParams, RelayParams, SwapTimeLimit},
    token_router::{FillType, MemoryTokenRouter, PreparedFill, PreparedFillId},
    SwapLayer,
};
use swap_layer_messages::{
    types::{GasDropoff, GasPrice, UniversalAddress},
    SwapMessageV1,
};

pub const LOCAL_CHAIN: u16 = 1;
pub const PEER_CHAIN: u16 = 2;

pub const OWNER: UniversalAddress = UniversalAddress::new([0x01; 32]);
pub const ASSISTANT: UniversalAddress = UniversalAddress::new([0x02; 32]);
pub const FEE_UPDATER: UniversalAddress = UniversalAddress::new([0x03; 32]);
pub const FEE_RECIPIENT_TOKEN: UniversalAddress = UniversalAddress::new([0x04; 32]);

pub const LOCAL_ADDRESS: UniversalAddress = UniversalAddress::new([0x10; 32]);
pub const PEER_ADDRESS: UniversalAddress = UniversalAddress::new([0x20; 32]);

pub const PAYER: UniversalAddress = UniversalAddress::new([0x30; 32]);
pub const SENDER: UniversalAddress = UniversalAddress::new([0x31; 32]);
pub const REFUND_TOKEN: UniversalAddress = UniversalAddress::new([0x32; 32]);
pub const RECIPIENT: UniversalAddress = UniversalAddress::new([0x33; 32]);
pub const RELAYER: UniversalAddress = UniversalAddress::new([0x34; 32]);

pub fn relay_params() -> RelayParams {
    RelayParams {
        base_fee: 1_500_000,                       // 1.5 USDC
        native_token_price: 200_000_000,           // 200 USDC
        max_gas_dropoff: GasDropoff::new(500_000), // .5 ETH
        gas_dropoff_margin: 500_000,               // 50%
        execution_params: ExecutionParams::Evm {
            gas_price: GasPrice::new(10_000), // 10 GWEI
            gas_price_margin: 250_000,        // 25%
        },
        swap_time_limit: SwapTimeLimit {
            fast_limit: 10,
            finalized_limit: 30,
        },
    }
}

/// Initialized deployment on `chain` with one registered peer.
pub fn setup_with(
    chain: u16,
    peer_chain: u16,
    peer_address: UniversalAddress,
) -> SwapLayer<MemoryTokenRouter> {
    setup_with_router(chain, peer_chain, peer_address, MemoryTokenRouter::new())
}

pub fn setup_with_router<R>(
    chain: u16,
    peer_chain: u16,
    peer_address: UniversalAddress,
    token_router: R,
) -> SwapLayer<R> {
    let mut swap_layer = SwapLayer::new(Config::new(chain), token_router);
    swap_layer
        .initialize(
            OWNER,
            InitializeArgs {
                owner_assistant: ASSISTANT,
                fee_updater: FEE_UPDATER,
                fee_recipient_token: FEE_RECIPIENT_TOKEN,
            },
        )
        .unwrap();
    swap_layer
        .add_peer(
            OWNER,
            AddPeerArgs {
                chain: peer_chain,
                address: peer_address,
                relay_params: relay_params(),
            },
        )
        .unwrap();

    swap_layer
}

pub fn setup() -> SwapLayer<MemoryTokenRouter> {
    setup_with(LOCAL_CHAIN, PEER_CHAIN, PEER_ADDRESS)
}

pub fn fill_id(seed: u8) -> PreparedFillId {
    PreparedFillId([seed; 32])
}

/// Delivers a fill from the registered peer carrying `message`.
pub fn deliver(
    swap_layer: &mut SwapLayer<MemoryTokenRouter>,
    seed: u8,
    message: &SwapMessageV1,
    amount: u64,
    fill_type: FillType,
    timestamp: i64,
) -> PreparedFillId {
    deliver_raw(
        swap_layer,
        seed,
        PreparedFill {
            source_chain: PEER_CHAIN,
            order_sender: PEER_ADDRESS,
            redeemer_message: message.encode().unwrap(),
            fill_type,
            timestamp,
            amount,
        },
    )
}

pub fn deliver_raw(
    swap_layer: &mut SwapLayer<MemoryTokenRouter>,
    seed: u8,
    fill: PreparedFill,
) -> PreparedFillId {
    let id = fill_id(seed);
    swap_layer.token_router_mut().insert_fill(id, fill);
    id
}
