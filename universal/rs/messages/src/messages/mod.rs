mod fee_params;
pub use fee_params::*;

mod fee_update;
pub use fee_update::*;

mod governance;
pub use governance::*;

mod query;
pub use query::*;

use std::io;

use crate::{
    types::{OutputToken, RedeemMode, UniversalAddress},
    wire::{Readable, TypePrefixedPayload, TypePrefixedPayloadExt, Writeable},
};

/// Redeemer message attached to every swap layer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapMessageV1 {
    pub recipient: UniversalAddress,
    pub redeem_mode: RedeemMode,
    pub output_token: OutputToken,
}

impl SwapMessageV1 {
    /// Decode a full message, including its version byte.
    pub fn decode(buf: &[u8]) -> io::Result<Self> {
        Self::read_payload_all(buf)
    }

    /// Encode a full message, including its version byte.
    pub fn encode(&self) -> io::Result<Vec<u8>> {
        self.try_to_payload_vec()
    }
}

impl Readable for SwapMessageV1 {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        Ok(Self {
            recipient: Readable::read(reader)?,
            redeem_mode: Readable::read(reader)?,
            output_token: Readable::read(reader)?,
        })
    }
}

impl Writeable for SwapMessageV1 {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.recipient.write(writer)?;
        self.redeem_mode.write(writer)?;
        self.output_token.write(writer)
    }
}

impl TypePrefixedPayload<1> for SwapMessageV1 {
    const TYPE: Option<[u8; 1]> = Some([1]);

    fn written_size(&self) -> usize {
        self.redeem_mode
            .written_size()
            .saturating_add(self.output_token.written_size())
            .saturating_add(UniversalAddress::LEN)
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;
    use proptest::prelude::*;

    use crate::types::{
        EvmAddress, EvmSwapHop, EvmSwapParameters, GasDropoff, JupiterV6SwapParameters,
        OutputSwap, SwapType, Uint24, Uint48,
    };

    use super::*;

    const RECIPIENT: UniversalAddress = UniversalAddress::new(hex!(
        "0000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d"
    ));

    #[test]
    fn usdc_direct() {
        let encoded =
            hex!("010000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d0000");

        let message = SwapMessageV1::decode(&encoded).unwrap();
        assert_eq!(
            message,
            SwapMessageV1 {
                recipient: RECIPIENT,
                redeem_mode: RedeemMode::Direct,
                output_token: OutputToken::Usdc,
            }
        );
        assert_eq!(message.encode().unwrap(), encoded);
        assert_eq!(1 + message.written_size(), encoded.len());
    }

    #[test]
    fn usdc_relay() {
        let encoded = hex!(
            "010000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d02000000000000000f424000"
        );

        let message = SwapMessageV1::decode(&encoded).unwrap();
        assert_eq!(
            message,
            SwapMessageV1 {
                recipient: RECIPIENT,
                redeem_mode: RedeemMode::Relay {
                    gas_dropoff: GasDropoff::ZERO,
                    relaying_fee: Uint48::from(1_000_000u32),
                },
                output_token: OutputToken::Usdc,
            }
        );
        assert_eq!(message.encode().unwrap(), encoded);
    }

    #[test]
    fn usdc_payload() {
        let sender = hex!("000000000000000000000000f62849f9a0b5bf2913b396098f7c7019b51a820a");
        let encoded = hex!(
            "010000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d01000000000000000000000000f62849f9a0b5bf2913b396098f7c7019b51a820a0004deadbeef00"
        );

        let message = SwapMessageV1::decode(&encoded).unwrap();
        assert_eq!(
            message,
            SwapMessageV1 {
                recipient: RECIPIENT,
                redeem_mode: RedeemMode::Payload {
                    sender: UniversalAddress::new(sender),
                    buf: hex!("deadbeef").to_vec().try_into().unwrap(),
                },
                output_token: OutputToken::Usdc,
            }
        );
        assert_eq!(message.encode().unwrap(), encoded);
    }

    #[test]
    fn gas_via_uniswap() {
        let encoded = hex!(
            "010000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d00010000000000000000000000000000000000000000010001f4015991a2df15a8f6a256d3ec51e99254cd3fb576a90001f4"
        );

        let message = SwapMessageV1::decode(&encoded).unwrap();
        assert_eq!(
            message,
            SwapMessageV1 {
                recipient: RECIPIENT,
                redeem_mode: RedeemMode::Direct,
                output_token: OutputToken::Gas(OutputSwap {
                    deadline: 0,
                    limit_amount: 0,
                    swap_type: SwapType::UniswapV3(EvmSwapParameters {
                        first_pool_id: Uint24::from(500u16),
                        path: vec![EvmSwapHop {
                            address: EvmAddress::new(hex!(
                                "5991a2df15a8f6a256d3ec51e99254cd3fb576a9"
                            )),
                            pool_id: Uint24::from(500u16),
                        }],
                    }),
                }),
            }
        );
        assert_eq!(message.encode().unwrap(), encoded);
    }

    #[test]
    fn other_token_via_jupiter() {
        let message = SwapMessageV1 {
            recipient: RECIPIENT,
            redeem_mode: RedeemMode::Relay {
                gas_dropoff: GasDropoff::new(1),
                relaying_fee: Uint48::from(42u16),
            },
            output_token: OutputToken::Other {
                address: UniversalAddress::new([0xaa; 32]),
                swap: OutputSwap {
                    deadline: 1_700_000_000,
                    limit_amount: 1,
                    swap_type: SwapType::JupiterV6(JupiterV6SwapParameters {
                        dex_program_id: Some(UniversalAddress::new([0xbb; 32])),
                    }),
                },
            },
        };

        let encoded = message.encode().unwrap();
        assert_eq!(encoded.len(), 1 + message.written_size());
        assert_eq!(SwapMessageV1::decode(&encoded).unwrap(), message);
    }

    #[test]
    fn wrong_version() {
        let err = SwapMessageV1::decode(&hex!(
            "020000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d0000"
        ))
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn trailing_bytes() {
        let err = SwapMessageV1::decode(&hex!(
            "010000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d000000"
        ))
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn unknown_output_token() {
        let err = SwapMessageV1::decode(&hex!(
            "010000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d0003"
        ))
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn truncated() {
        let err = SwapMessageV1::decode(&hex!("01000000")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn relay_into_trader_joe_gas_swap() {
        let message = SwapMessageV1 {
            recipient: RECIPIENT,
            redeem_mode: RedeemMode::Relay {
                gas_dropoff: GasDropoff::new(50_000),
                relaying_fee: Uint48::from(1_750_000u32),
            },
            output_token: OutputToken::Gas(OutputSwap {
                deadline: 0,
                limit_amount: 0,
                swap_type: SwapType::TraderJoe(EvmSwapParameters {
                    first_pool_id: Uint24::from(1u16),
                    path: vec![],
                }),
            }),
        };

        let encoded = message.encode().unwrap();
        assert_eq!(encoded.len(), 1 + message.written_size());
        assert_eq!(&encoded[33..44], &hex!("020000c3500000001ab3f0"));
        assert_eq!(encoded[44], 1);
        assert_eq!(&encoded[65..], &hex!("0200000100"));
        assert_eq!(SwapMessageV1::decode(&encoded).unwrap(), message);
    }

    fn universal_address() -> impl Strategy<Value = UniversalAddress> {
        any::<[u8; 32]>().prop_map(UniversalAddress::new)
    }

    fn uint24() -> impl Strategy<Value = Uint24> {
        (0u32..=0x00ff_ffff).prop_map(|value| Uint24::try_from(value).unwrap())
    }

    fn evm_swap_parameters() -> impl Strategy<Value = EvmSwapParameters> {
        let hop = (any::<[u8; 20]>(), uint24()).prop_map(|(address, pool_id)| EvmSwapHop {
            address: EvmAddress::new(address),
            pool_id,
        });

        (uint24(), prop::collection::vec(hop, 0..4))
            .prop_map(|(first_pool_id, path)| EvmSwapParameters {
                first_pool_id,
                path,
            })
    }

    fn swap_type() -> impl Strategy<Value = SwapType> {
        prop_oneof![
            evm_swap_parameters().prop_map(SwapType::UniswapV3),
            evm_swap_parameters().prop_map(SwapType::TraderJoe),
            prop::option::of(universal_address()).prop_map(|dex_program_id| {
                SwapType::JupiterV6(JupiterV6SwapParameters { dex_program_id })
            }),
        ]
    }

    fn output_swap() -> impl Strategy<Value = OutputSwap> {
        (any::<u32>(), any::<u128>(), swap_type()).prop_map(
            |(deadline, limit_amount, swap_type)| OutputSwap {
                deadline,
                limit_amount,
                swap_type,
            },
        )
    }

    fn output_token() -> impl Strategy<Value = OutputToken> {
        prop_oneof![
            Just(OutputToken::Usdc),
            output_swap().prop_map(OutputToken::Gas),
            (universal_address(), output_swap())
                .prop_map(|(address, swap)| OutputToken::Other { address, swap }),
        ]
    }

    fn redeem_mode() -> impl Strategy<Value = RedeemMode> {
        prop_oneof![
            Just(RedeemMode::Direct),
            (universal_address(), prop::collection::vec(any::<u8>(), 0..64)).prop_map(
                |(sender, buf)| RedeemMode::Payload {
                    sender,
                    buf: buf.try_into().unwrap(),
                }
            ),
            (any::<u32>(), 0u64..(1 << 48)).prop_map(|(gas_dropoff, relaying_fee)| {
                RedeemMode::Relay {
                    gas_dropoff: GasDropoff::new(gas_dropoff),
                    relaying_fee: Uint48::try_from(relaying_fee).unwrap(),
                }
            }),
        ]
    }

    proptest! {
        #[test]
        fn every_combination_round_trips(
            recipient in universal_address(),
            redeem_mode in redeem_mode(),
            output_token in output_token(),
        ) {
            let message = SwapMessageV1 {
                recipient,
                redeem_mode,
                output_token,
            };

            let encoded = message.encode().unwrap();
            prop_assert_eq!(encoded.len(), 1 + message.written_size());
            prop_assert_eq!(SwapMessageV1::decode(&encoded).unwrap(), message);
        }
    }
}
