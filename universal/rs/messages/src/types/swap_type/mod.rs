mod evm;
pub use evm::*;

mod jupiter_v6;
pub use jupiter_v6::*;

use std::io;

use crate::wire::{invalid_data, Readable, Writeable};

/// Destination execution venue for a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapType {
    UniswapV3(EvmSwapParameters),
    TraderJoe(EvmSwapParameters),
    JupiterV6(JupiterV6SwapParameters),
}

impl SwapType {
    const UNISWAP_V3: u8 = 1;
    const TRADER_JOE: u8 = 2;
    const JUPITER_V6: u8 = 16;

    pub fn written_size(&self) -> usize {
        match self {
            Self::UniswapV3(parameters) | Self::TraderJoe(parameters) => parameters.written_size(),
            Self::JupiterV6(parameters) => parameters.written_size(),
        }
        .saturating_add(1)
    }
}

impl Readable for SwapType {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        match u8::read(reader)? {
            Self::UNISWAP_V3 => Readable::read(reader).map(Self::UniswapV3),
            Self::TRADER_JOE => Readable::read(reader).map(Self::TraderJoe),
            Self::JUPITER_V6 => Readable::read(reader).map(Self::JupiterV6),
            _ => Err(invalid_data("Invalid SwapType")),
        }
    }
}

impl Writeable for SwapType {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Self::UniswapV3(parameters) => {
                Self::UNISWAP_V3.write(writer)?;
                parameters.write(writer)
            }
            Self::TraderJoe(parameters) => {
                Self::TRADER_JOE.write(writer)?;
                parameters.write(writer)
            }
            Self::JupiterV6(parameters) => {
                Self::JUPITER_V6.write(writer)?;
                parameters.write(writer)
            }
        }
    }
}
