//! Swap layer program core. Stages outbound USDC transfers, hands them to the token router with an
//! attached [SwapMessageV1](swap_layer_messages::SwapMessageV1), and settles the fills the router
//! delivers according to their redeem mode.

macro_rules! require {
    ($cond:expr, $err:expr $(,)?) => {
        if !($cond) {
            return Err($err);
        }
    };
}

pub mod config;
pub mod error;
pub mod processor;
pub mod state;
pub mod token_router;
pub mod utils;

pub use swap_layer_messages;

use std::collections::BTreeMap;

use swap_layer_messages::{
    messages::{ChainFeeParamUpdate, GovernanceCommand, Query},
    types::UniversalAddress,
    wire::Batch,
};

use config::Config;
use error::{Result, SwapLayerError};
use processor::*;
use state::{Custodian, Peer, StagedInbound, StagedOutbound, StagedOutboundId};
use token_router::{PreparedFillId, TokenRouter};

/// 100% in the unit used for relay margins.
pub const MAX_BPS: u32 = 1_000_000;

/// Program state for one chain. Every operation either applies all of its effects or none.
#[derive(Debug)]
pub struct SwapLayer<R> {
    pub(crate) config: Config,
    pub(crate) custodian: Option<Custodian>,
    pub(crate) peers: BTreeMap<u16, Peer>,
    pub(crate) staged_outbound: BTreeMap<StagedOutboundId, StagedOutbound>,
    pub(crate) staged_inbound: BTreeMap<PreparedFillId, StagedInbound>,
    pub(crate) next_staged_outbound: u64,
    pub(crate) token_router: R,
}

impl<R> SwapLayer<R> {
    pub fn new(config: Config, token_router: R) -> Self {
        Self {
            config,
            custodian: None,
            peers: BTreeMap::new(),
            staged_outbound: BTreeMap::new(),
            staged_inbound: BTreeMap::new(),
            next_staged_outbound: 0,
            token_router,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn custodian(&self) -> Result<&Custodian> {
        self.custodian
            .as_ref()
            .ok_or(SwapLayerError::AccountNotInitialized)
    }

    pub(crate) fn custodian_mut(&mut self) -> Result<&mut Custodian> {
        self.custodian
            .as_mut()
            .ok_or(SwapLayerError::AccountNotInitialized)
    }

    pub fn peer(&self, chain: u16) -> Option<&Peer> {
        self.peers.get(&chain)
    }

    pub(crate) fn registered_peer(&self, chain: u16) -> Result<&Peer> {
        self.peer(chain).ok_or(SwapLayerError::AccountNotInitialized)
    }

    pub fn staged_outbound(&self, id: StagedOutboundId) -> Option<&StagedOutbound> {
        self.staged_outbound.get(&id)
    }

    pub fn staged_inbound(&self, id: &PreparedFillId) -> Option<&StagedInbound> {
        self.staged_inbound.get(id)
    }

    pub fn token_router(&self) -> &R {
        &self.token_router
    }

    pub fn token_router_mut(&mut self) -> &mut R {
        &mut self.token_router
    }

    pub fn initialize(&mut self, owner: UniversalAddress, args: InitializeArgs) -> Result<()> {
        processor::initialize(self, owner, args)
    }

    pub fn submit_ownership_transfer_request(
        &mut self,
        owner: UniversalAddress,
        new_owner: UniversalAddress,
    ) -> Result<()> {
        processor::submit_ownership_transfer_request(self, owner, new_owner)
    }

    pub fn confirm_ownership_transfer_request(&mut self, pending_owner: UniversalAddress) -> Result<()> {
        processor::confirm_ownership_transfer_request(self, pending_owner)
    }

    pub fn cancel_ownership_transfer_request(&mut self, owner: UniversalAddress) -> Result<()> {
        processor::cancel_ownership_transfer_request(self, owner)
    }

    pub fn update_owner_assistant(
        &mut self,
        owner: UniversalAddress,
        new_owner_assistant: UniversalAddress,
    ) -> Result<()> {
        processor::update_owner_assistant(self, owner, new_owner_assistant)
    }

    pub fn update_fee_updater(
        &mut self,
        admin: UniversalAddress,
        new_fee_updater: UniversalAddress,
    ) -> Result<()> {
        processor::update_fee_updater(self, admin, new_fee_updater)
    }

    pub fn update_fee_recipient(
        &mut self,
        admin: UniversalAddress,
        new_fee_recipient_token: UniversalAddress,
    ) -> Result<()> {
        processor::update_fee_recipient(self, admin, new_fee_recipient_token)
    }

    pub fn add_peer(&mut self, admin: UniversalAddress, args: AddPeerArgs) -> Result<()> {
        processor::add_peer(self, admin, args)
    }

    pub fn update_peer(&mut self, owner: UniversalAddress, args: AddPeerArgs) -> Result<()> {
        processor::update_peer(self, owner, args)
    }

    pub fn update_relay_params(
        &mut self,
        fee_updater: UniversalAddress,
        args: UpdateRelayParametersArgs,
    ) -> Result<()> {
        processor::update_relay_params(self, fee_updater, args)
    }

    pub fn apply_fee_param_updates(
        &mut self,
        fee_updater: UniversalAddress,
        updates: &Batch<ChainFeeParamUpdate>,
    ) -> Result<()> {
        processor::apply_fee_param_updates(self, fee_updater, updates)
    }

    pub fn execute_governance(
        &mut self,
        owner: UniversalAddress,
        commands: &Batch<GovernanceCommand>,
    ) -> Result<()> {
        processor::execute_governance(self, owner, commands)
    }

    pub fn query(&self, queries: &Batch<Query>) -> Result<Vec<u8>> {
        processor::query(self, queries)
    }

    pub fn stage_outbound(
        &mut self,
        accounts: StageOutboundAccounts,
        args: StageOutboundArgs,
    ) -> Result<StagedOutboundId> {
        processor::stage_outbound(self, accounts, args)
    }

    pub fn close_staged_outbound(
        &mut self,
        sender: UniversalAddress,
        id: StagedOutboundId,
    ) -> Result<StagedOutboundRefund> {
        processor::close_staged_outbound(self, sender, id)
    }

    pub fn release_inbound(
        &mut self,
        accounts: ReleaseInboundAccounts,
        id: &PreparedFillId,
    ) -> Result<ReleasedInbound> {
        processor::release_inbound(self, accounts, id)
    }
}

impl<R: TokenRouter> SwapLayer<R> {
    pub fn initiate_transfer(
        &mut self,
        accounts: InitiateTransferAccounts,
        id: StagedOutboundId,
    ) -> Result<InitiatedTransfer> {
        processor::initiate_transfer(self, accounts, id)
    }

    pub fn complete_transfer_direct(
        &mut self,
        recipient: UniversalAddress,
        fill: &PreparedFillId,
    ) -> Result<DirectPayout> {
        processor::complete_transfer_direct(self, recipient, fill)
    }

    pub fn complete_transfer_relay(
        &mut self,
        accounts: CompleteTransferRelayAccounts,
        fill: &PreparedFillId,
        now: i64,
    ) -> Result<RelayPayout> {
        processor::complete_transfer_relay(self, accounts, fill, now)
    }

    pub fn complete_transfer_payload(
        &mut self,
        staged_by: UniversalAddress,
        fill: &PreparedFillId,
    ) -> Result<()> {
        processor::complete_transfer_payload(self, staged_by, fill)
    }
}
