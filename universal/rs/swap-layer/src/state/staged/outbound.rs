use swap_layer_messages::{
    messages::SwapMessageV1,
    types::{GasDropoff, OutputToken, RedeemMode, UniversalAddress, Uint48},
    wire::WriteableBytes,
};

use crate::error::{Result, SwapLayerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StagedOutboundId(pub u64);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum StagedRedeem {
    #[default]
    Direct,
    Relay {
        gas_dropoff: GasDropoff,

        /// Fee quoted when the transfer was staged. Initiation requotes it.
        relaying_fee: u64,

        /// Maximum fee that a relayer can charge for the transfer.
        max_relayer_fee: u64,
    },
    Payload(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedOutboundInfo {
    /// One who paid to create [StagedOutbound].
    pub prepared_by: UniversalAddress,

    /// Sender of the swap message.
    pub sender: UniversalAddress,

    /// Wormhole chain ID of the target network.
    pub target_chain: u16,

    /// Intended recipient of the transfer.
    pub recipient: UniversalAddress,

    /// Token account the token router refunds USDC to if the order is reverted.
    pub usdc_refund_token: UniversalAddress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedOutbound {
    pub info: StagedOutboundInfo,
    pub staged_redeem: StagedRedeem,
    pub output_token: OutputToken,

    /// USDC held for this transfer, relaying fee included.
    pub custody_amount: u64,
}

impl StagedOutbound {
    pub fn to_swap_message_v1(&self) -> Result<SwapMessageV1> {
        Ok(SwapMessageV1 {
            recipient: self.info.recipient,
            redeem_mode: match &self.staged_redeem {
                StagedRedeem::Direct => RedeemMode::Direct,
                StagedRedeem::Payload(buf) => {
                    // The message carries the payload behind a 2-byte length.
                    require!(
                        buf.len() <= usize::from(u16::MAX),
                        SwapLayerError::PayloadTooLarge
                    );

                    RedeemMode::Payload {
                        sender: self.info.sender,
                        buf: WriteableBytes::<u16>::try_from(buf.clone())
                            .map_err(|_| SwapLayerError::PayloadTooLarge)?,
                    }
                }
                StagedRedeem::Relay {
                    gas_dropoff,
                    relaying_fee,
                    ..
                } => RedeemMode::Relay {
                    gas_dropoff: *gas_dropoff,
                    relaying_fee: Uint48::try_from(*relaying_fee)
                        .map_err(|_| SwapLayerError::RelayerFeeOverflow)?,
                },
            },
            output_token: self.output_token.clone(),
        })
    }
}

impl std::ops::Deref for StagedOutbound {
    type Target = StagedOutboundInfo;

    fn deref(&self) -> &Self::Target {
        &self.info
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn staged(staged_redeem: StagedRedeem) -> StagedOutbound {
        StagedOutbound {
            info: StagedOutboundInfo {
                prepared_by: UniversalAddress::new([1; 32]),
                sender: UniversalAddress::new([2; 32]),
                target_chain: 2,
                recipient: UniversalAddress::new([3; 32]),
                usdc_refund_token: UniversalAddress::new([4; 32]),
            },
            staged_redeem,
            output_token: OutputToken::Usdc,
            custody_amount: 690_000,
        }
    }

    #[test]
    fn payload_takes_sender_from_record() {
        let message = staged(StagedRedeem::Payload(vec![0xde, 0xad]))
            .to_swap_message_v1()
            .unwrap();

        match message.redeem_mode {
            RedeemMode::Payload { sender, buf } => {
                assert_eq!(sender, UniversalAddress::new([2; 32]));
                assert_eq!(&buf[..], &[0xde, 0xad]);
            }
            other => panic!("unexpected redeem mode: {other:?}"),
        }
        assert_eq!(message.recipient, UniversalAddress::new([3; 32]));
    }

    #[test]
    fn relay_fee_must_fit_uint48() {
        let err = staged(StagedRedeem::Relay {
            gas_dropoff: GasDropoff::ZERO,
            relaying_fee: 1 << 48,
            max_relayer_fee: u64::MAX,
        })
        .to_swap_message_v1()
        .unwrap_err();
        assert_eq!(err, SwapLayerError::RelayerFeeOverflow);
    }

    #[test]
    fn oversized_payload() {
        let err = staged(StagedRedeem::Payload(vec![0; usize::from(u16::MAX) + 1]))
            .to_swap_message_v1()
            .unwrap_err();
        assert_eq!(err, SwapLayerError::PayloadTooLarge);
    }
}
