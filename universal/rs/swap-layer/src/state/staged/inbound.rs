use swap_layer_messages::types::UniversalAddress;

/// Payload transfer held until its recipient releases it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedInbound {
    pub info: StagedInboundInfo,
    pub recipient_payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedInboundInfo {
    /// USDC moved out of the prepared fill.
    pub custody_amount: u64,

    /// Payer that created this StagedInbound.
    pub staged_by: UniversalAddress,

    /// Exposed out of convenience for the receiving program.
    pub source_chain: u16,

    /// The sender of the swap message.
    pub sender: UniversalAddress,

    /// The encoded recipient must be the caller.
    pub recipient: UniversalAddress,

    /// Indicates whether the output token type is Gas.
    pub is_native: bool,
}

impl std::ops::Deref for StagedInbound {
    type Target = StagedInboundInfo;

    fn deref(&self) -> &Self::Target {
        &self.info
    }
}
