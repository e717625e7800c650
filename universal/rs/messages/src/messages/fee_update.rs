use std::io;

use crate::{
    messages::fee_params::{read_gas_token_price, write_gas_token_price},
    types::{GasDropoff, GasPrice, Percentage},
    wire::{invalid_data, Readable, Writeable},
};

/// Single relay parameter change pushed by a fee updater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeParamUpdate {
    GasPrice {
        /// When the gas price was observed.
        timestamp: u32,
        gas_price: GasPrice,
    },
    /// Ten bytes on the wire, like [FeeParams](crate::messages::FeeParams).
    GasTokenPrice(u64),
    BaseFee(u32),
    GasPriceUpdateThreshold(Percentage),
    GasPriceMargin(Percentage),
    GasDropoffMargin(Percentage),
    MaxGasDropoff(GasDropoff),
}

impl FeeParamUpdate {
    const GAS_PRICE: u8 = 0;
    const GAS_TOKEN_PRICE: u8 = 1;
    const BASE_FEE: u8 = 2;
    const GAS_PRICE_UPDATE_THRESHOLD: u8 = 3;
    const GAS_PRICE_MARGIN: u8 = 4;
    const GAS_DROPOFF_MARGIN: u8 = 5;
    const MAX_GAS_DROPOFF: u8 = 6;
}

impl Readable for FeeParamUpdate {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        match u8::read(reader)? {
            Self::GAS_PRICE => Ok(Self::GasPrice {
                timestamp: Readable::read(reader)?,
                gas_price: Readable::read(reader)?,
            }),
            Self::GAS_TOKEN_PRICE => read_gas_token_price(reader).map(Self::GasTokenPrice),
            Self::BASE_FEE => Readable::read(reader).map(Self::BaseFee),
            Self::GAS_PRICE_UPDATE_THRESHOLD => {
                Readable::read(reader).map(Self::GasPriceUpdateThreshold)
            }
            Self::GAS_PRICE_MARGIN => Readable::read(reader).map(Self::GasPriceMargin),
            Self::GAS_DROPOFF_MARGIN => Readable::read(reader).map(Self::GasDropoffMargin),
            Self::MAX_GAS_DROPOFF => Readable::read(reader).map(Self::MaxGasDropoff),
            _ => Err(invalid_data("Invalid FeeParamUpdate")),
        }
    }
}

impl Writeable for FeeParamUpdate {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Self::GasPrice {
                timestamp,
                gas_price,
            } => {
                Self::GAS_PRICE.write(writer)?;
                timestamp.write(writer)?;
                gas_price.write(writer)
            }
            Self::GasTokenPrice(value) => {
                Self::GAS_TOKEN_PRICE.write(writer)?;
                write_gas_token_price(*value, writer)
            }
            Self::BaseFee(value) => {
                Self::BASE_FEE.write(writer)?;
                value.write(writer)
            }
            Self::GasPriceUpdateThreshold(value) => {
                Self::GAS_PRICE_UPDATE_THRESHOLD.write(writer)?;
                value.write(writer)
            }
            Self::GasPriceMargin(value) => {
                Self::GAS_PRICE_MARGIN.write(writer)?;
                value.write(writer)
            }
            Self::GasDropoffMargin(value) => {
                Self::GAS_DROPOFF_MARGIN.write(writer)?;
                value.write(writer)
            }
            Self::MaxGasDropoff(value) => {
                Self::MAX_GAS_DROPOFF.write(writer)?;
                value.write(writer)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainFeeParamUpdate {
    pub chain: u16,
    pub update: FeeParamUpdate,
}

impl Readable for ChainFeeParamUpdate {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        Ok(Self {
            chain: Readable::read(reader)?,
            update: Readable::read(reader)?,
        })
    }
}

impl Writeable for ChainFeeParamUpdate {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.chain.write(writer)?;
        self.update.write(writer)
    }
}
