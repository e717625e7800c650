use swap_layer_messages::types::UniversalAddress;

use crate::error::{Result, SwapLayerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custodian {
    /// Program's owner.
    pub owner: UniversalAddress,
    pub pending_owner: Option<UniversalAddress>,

    /// Program's assistant. Can register peers and rotate the fee updater and fee recipient.
    pub owner_assistant: UniversalAddress,

    /// Program's fee updater. Can push relay parameter updates.
    pub fee_updater: UniversalAddress,

    /// Program's fee recipient. Receives relayer fees in USDC.
    pub fee_recipient_token: UniversalAddress,
}

impl Custodian {
    pub fn is_owner(&self, signer: &UniversalAddress) -> bool {
        self.owner == *signer
    }

    pub fn is_owner_or_assistant(&self, signer: &UniversalAddress) -> bool {
        self.is_owner(signer) || self.owner_assistant == *signer
    }

    pub fn require_owner(&self, signer: &UniversalAddress) -> Result<()> {
        require!(self.is_owner(signer), SwapLayerError::OwnerOnly);
        Ok(())
    }

    pub fn require_admin(&self, signer: &UniversalAddress) -> Result<()> {
        require!(
            self.is_owner_or_assistant(signer),
            SwapLayerError::OwnerOrAssistantOnly
        );
        Ok(())
    }

    /// Fee updater, assistant or owner.
    pub fn require_fee_updater(&self, signer: &UniversalAddress) -> Result<()> {
        require!(
            self.fee_updater == *signer || self.is_owner_or_assistant(signer),
            SwapLayerError::InvalidFeeUpdater
        );
        Ok(())
    }
}
