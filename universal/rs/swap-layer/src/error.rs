pub type Result<T, E = SwapLayerError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapLayerError {
    // Codec
    #[error("redeemer message is not a valid swap message")]
    InvalidSwapMessage,
    #[error("failed to encode: {0}")]
    EncodeFailed(String),

    // Validation
    #[error("chain is not allowed")]
    ChainNotAllowed,
    #[error("invalid peer")]
    InvalidPeer,
    #[error("base fee must be nonzero")]
    InvalidBaseFee,
    #[error("native token price must be nonzero")]
    InvalidNativeTokenPrice,
    #[error("margin exceeds 100%")]
    InvalidMargin,
    #[error("gas price must be nonzero")]
    InvalidGasPrice,
    #[error("gas dropoff exceeds maximum")]
    InvalidGasDropoff,
    #[error("gas dropoff exceeds the peer's maximum")]
    GasDropoffTooHigh,
    #[error("relaying fee exceeds the specified maximum")]
    ExceedsMaxRelayingFee,
    #[error("relaying is disabled for this peer")]
    RelayingDisabled,
    #[error("invalid recipient")]
    InvalidRecipient,
    #[error("invalid output token")]
    InvalidOutputToken,
    #[error("invalid redeem mode")]
    InvalidRedeemMode,
    #[error("swap time limit not exceeded")]
    SwapTimeLimitNotExceeded,
    #[error("amount in must be nonzero")]
    ZeroAmountIn,
    #[error("amount in does not cover the relaying fee")]
    InsufficientAmountIn,
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("relayer fee exceeds the fill amount")]
    InvalidRelayerFee,
    #[error("unsupported fill type")]
    UnsupportedFillType,
    #[error("unsupported swap type")]
    UnsupportedSwapType,
    #[error("unsupported execution environment")]
    UnsupportedExecutionEnvironment,
    #[error("refund token does not match staged outbound")]
    InvalidRefundToken,
    #[error("payer did not prepare staged outbound")]
    PreparedByMismatch,
    #[error("assistant cannot be zero address")]
    AssistantZeroPubkey,
    #[error("fee updater cannot be zero address")]
    FeeUpdaterZeroPubkey,
    #[error("fee recipient cannot be zero address")]
    FeeRecipientZeroPubkey,
    #[error("new owner cannot be zero address")]
    InvalidNewOwner,
    #[error("already the owner")]
    AlreadyOwner,
    #[error("not the pending owner")]
    NotPendingOwner,
    #[error("unsupported governance command")]
    UnsupportedGovernanceCommand,
    #[error("unsupported query")]
    UnsupportedQuery,
    #[error("unsupported fee parameter update")]
    UnsupportedFeeParamUpdate,

    // Arithmetic
    #[error("u64 overflow")]
    U64Overflow,
    #[error("relayer fee does not fit 48 bits")]
    RelayerFeeOverflow,

    // State
    #[error("account not initialized")]
    AccountNotInitialized,
    #[error("already initialized")]
    AlreadyInitialized,
    #[error("peer already exists")]
    PeerAlreadyExists,
    #[error("staged outbound not found")]
    StagedOutboundNotFound,
    #[error("staged inbound not found")]
    StagedInboundNotFound,
    #[error("prepared fill not found")]
    PreparedFillNotFound,

    // Authorization
    #[error("owner only")]
    OwnerOnly,
    #[error("owner or assistant only")]
    OwnerOrAssistantOnly,
    #[error("invalid fee updater")]
    InvalidFeeUpdater,
    #[error("signer is not the staged sender")]
    NotStagedSender,

    #[error("token router: {0}")]
    TokenRouter(String),
}

impl SwapLayerError {
    /// Record missing, already consumed or already present. Never transient.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            Self::AccountNotInitialized
                | Self::AlreadyInitialized
                | Self::PeerAlreadyExists
                | Self::StagedOutboundNotFound
                | Self::StagedInboundNotFound
                | Self::PreparedFillNotFound
        )
    }
}
