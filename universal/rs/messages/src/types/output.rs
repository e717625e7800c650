use std::io;

use crate::{
    types::{SwapType, UniversalAddress},
    wire::{invalid_data, Readable, Writeable},
};

/// Asset the recipient ends up with on the destination chain.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum OutputToken {
    #[default]
    Usdc,
    Gas(OutputSwap),
    Other {
        address: UniversalAddress,
        swap: OutputSwap,
    },
}

impl OutputToken {
    const USDC: u8 = 0;
    const GAS: u8 = 1;
    const OTHER: u8 = 2;

    pub fn swap(&self) -> Option<&OutputSwap> {
        match self {
            Self::Usdc => None,
            Self::Gas(swap) | Self::Other { swap, .. } => Some(swap),
        }
    }

    pub fn written_size(&self) -> usize {
        match self {
            Self::Usdc => 1,
            Self::Gas(swap) => swap.written_size().saturating_add(1),
            Self::Other { swap, .. } => swap
                .written_size()
                .saturating_add(UniversalAddress::LEN)
                .saturating_add(1),
        }
    }
}

impl Readable for OutputToken {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        match u8::read(reader)? {
            Self::USDC => Ok(Self::Usdc),
            Self::GAS => Readable::read(reader).map(Self::Gas),
            Self::OTHER => Ok(Self::Other {
                address: Readable::read(reader)?,
                swap: Readable::read(reader)?,
            }),
            _ => Err(invalid_data("Invalid OutputToken")),
        }
    }
}

impl Writeable for OutputToken {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Self::Usdc => Self::USDC.write(writer),
            Self::Gas(swap) => {
                Self::GAS.write(writer)?;
                swap.write(writer)
            }
            Self::Other { address, swap } => {
                Self::OTHER.write(writer)?;
                address.write(writer)?;
                swap.write(writer)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSwap {
    pub deadline: u32,
    pub limit_amount: u128,
    pub swap_type: SwapType,
}

impl OutputSwap {
    pub fn written_size(&self) -> usize {
        const FIXED: usize = 4 // deadline
            + 16; // limit_amount

        self.swap_type.written_size().saturating_add(FIXED)
    }
}

impl Readable for OutputSwap {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        Ok(Self {
            deadline: Readable::read(reader)?,
            limit_amount: Readable::read(reader)?,
            swap_type: Readable::read(reader)?,
        })
    }
}

impl Writeable for OutputSwap {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.deadline.write(writer)?;
        self.limit_amount.write(writer)?;
        self.swap_type.write(writer)
    }
}
