use std::io;

use crate::{
    messages::FeeParams,
    types::{EvmAddress, UniversalAddress},
    wire::{invalid_data, Readable, Writeable},
};

/// Peer endpoint on another chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub chain: u16,
    pub address: UniversalAddress,
}

impl Readable for Endpoint {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        Ok(Self {
            chain: Readable::read(reader)?,
            address: Readable::read(reader)?,
        })
    }
}

impl Writeable for Endpoint {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.chain.write(writer)?;
        self.address.write(writer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GovernanceCommand {
    UpdateEndpoint {
        endpoint: Endpoint,
        fee_params: FeeParams,
    },
    ProposeEndpointUpdate {
        endpoint: Endpoint,
    },
    UpgradeContract {
        implementation: EvmAddress,
    },
    ProposeContractUpgrade {
        implementation: EvmAddress,
    },
}

impl GovernanceCommand {
    const UPDATE_ENDPOINT: u8 = 0;
    const PROPOSE_ENDPOINT_UPDATE: u8 = 1;
    const UPGRADE_CONTRACT: u8 = 6;
    const PROPOSE_CONTRACT_UPGRADE: u8 = 7;
}

impl Readable for GovernanceCommand {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        match u8::read(reader)? {
            Self::UPDATE_ENDPOINT => Ok(Self::UpdateEndpoint {
                endpoint: Readable::read(reader)?,
                fee_params: Readable::read(reader)?,
            }),
            Self::PROPOSE_ENDPOINT_UPDATE => Ok(Self::ProposeEndpointUpdate {
                endpoint: Readable::read(reader)?,
            }),
            Self::UPGRADE_CONTRACT => Ok(Self::UpgradeContract {
                implementation: Readable::read(reader)?,
            }),
            Self::PROPOSE_CONTRACT_UPGRADE => Ok(Self::ProposeContractUpgrade {
                implementation: Readable::read(reader)?,
            }),
            _ => Err(invalid_data("Invalid GovernanceCommand")),
        }
    }
}

impl Writeable for GovernanceCommand {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Self::UpdateEndpoint {
                endpoint,
                fee_params,
            } => {
                Self::UPDATE_ENDPOINT.write(writer)?;
                endpoint.write(writer)?;
                fee_params.write(writer)
            }
            Self::ProposeEndpointUpdate { endpoint } => {
                Self::PROPOSE_ENDPOINT_UPDATE.write(writer)?;
                endpoint.write(writer)
            }
            Self::UpgradeContract { implementation } => {
                Self::UPGRADE_CONTRACT.write(writer)?;
                implementation.write(writer)
            }
            Self::ProposeContractUpgrade { implementation } => {
                Self::PROPOSE_CONTRACT_UPGRADE.write(writer)?;
                implementation.write(writer)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use crate::{
        types::GasPrice,
        wire::{Batch, ReadableExt, WriteableExt},
    };

    use super::*;

    #[test]
    fn update_endpoint() {
        let command = GovernanceCommand::UpdateEndpoint {
            endpoint: Endpoint {
                chain: 6,
                address: UniversalAddress::new([0x22; 32]),
            },
            fee_params: FeeParams {
                base_fee: 100,
                gas_price: GasPrice::new(1),
                ..Default::default()
            },
        };

        let encoded = command.try_to_vec().unwrap();
        assert_eq!(encoded.len(), 1 + 2 + 32 + FeeParams::ENCODED_SIZE);
        assert_eq!(&encoded[..3], &hex!("000006"));
        assert_eq!(GovernanceCommand::read_all(&encoded).unwrap(), command);
    }

    #[test]
    fn upgrade_batch() {
        let batch = Batch(vec![
            GovernanceCommand::ProposeContractUpgrade {
                implementation: EvmAddress::new([0x33; 20]),
            },
            GovernanceCommand::UpgradeContract {
                implementation: EvmAddress::new([0x33; 20]),
            },
        ]);

        let encoded = batch.try_to_vec().unwrap();
        assert_eq!(&encoded[..5], &hex!("0200000007"));
        assert_eq!(encoded[25], 6);
        assert_eq!(Batch::<GovernanceCommand>::read_all(&encoded).unwrap(), batch);
    }

    #[test]
    fn unassigned_tag() {
        let err = GovernanceCommand::read_all(&hex!("02")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
