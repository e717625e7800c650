use std::io;

use crate::wire::{invalid_data, Readable, Writeable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubQuery {
    Current,
    Proposed,
    UnlockTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmutableType {
    Wormhole,
    Usdc,
    Weth,
    Permit2,
    UniswapRouter,
    LiquidityLayer,
    MajorDelay,
    MinorDelay,
}

/// Read-only question about the program's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    FeeParams { chain: u16 },
    Endpoint { sub_query: SubQuery, chain: u16 },
    Immutable { immutable: ImmutableType },
    AdminCanUpgradeContract,
    Assistant,
    Owner { sub_query: SubQuery },
    Admin { sub_query: SubQuery },
    FeeRecipient { sub_query: SubQuery },
    Implementation { sub_query: SubQuery },
}

impl SubQuery {
    fn from_tag(tag: u8) -> io::Result<Self> {
        match tag {
            0 => Ok(Self::Current),
            1 => Ok(Self::Proposed),
            2 => Ok(Self::UnlockTime),
            _ => Err(invalid_data("Invalid SubQuery")),
        }
    }

    fn tag(self) -> u8 {
        match self {
            Self::Current => 0,
            Self::Proposed => 1,
            Self::UnlockTime => 2,
        }
    }
}

impl ImmutableType {
    fn from_tag(tag: u8) -> io::Result<Self> {
        match tag {
            0 => Ok(Self::Wormhole),
            1 => Ok(Self::Usdc),
            2 => Ok(Self::Weth),
            3 => Ok(Self::Permit2),
            4 => Ok(Self::UniswapRouter),
            5 => Ok(Self::LiquidityLayer),
            6 => Ok(Self::MajorDelay),
            7 => Ok(Self::MinorDelay),
            _ => Err(invalid_data("Invalid ImmutableType")),
        }
    }

    fn tag(self) -> u8 {
        match self {
            Self::Wormhole => 0,
            Self::Usdc => 1,
            Self::Weth => 2,
            Self::Permit2 => 3,
            Self::UniswapRouter => 4,
            Self::LiquidityLayer => 5,
            Self::MajorDelay => 6,
            Self::MinorDelay => 7,
        }
    }
}

impl Readable for SubQuery {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        u8::read(reader).and_then(Self::from_tag)
    }
}

impl Writeable for SubQuery {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.tag().write(writer)
    }
}

impl Readable for ImmutableType {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        u8::read(reader).and_then(Self::from_tag)
    }
}

impl Writeable for ImmutableType {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.tag().write(writer)
    }
}

impl Query {
    const FEE_PARAMS: u8 = 0;
    const ENDPOINT: u8 = 1;
    const IMMUTABLE: u8 = 2;
    const ADMIN_CAN_UPGRADE_CONTRACT: u8 = 3;
    const ASSISTANT: u8 = 4;
    const OWNER: u8 = 5;
    const ADMIN: u8 = 6;
    const FEE_RECIPIENT: u8 = 7;
    const IMPLEMENTATION: u8 = 8;
}

impl Readable for Query {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        match u8::read(reader)? {
            Self::FEE_PARAMS => Ok(Self::FeeParams {
                chain: Readable::read(reader)?,
            }),
            Self::ENDPOINT => Ok(Self::Endpoint {
                sub_query: Readable::read(reader)?,
                chain: Readable::read(reader)?,
            }),
            Self::IMMUTABLE => Ok(Self::Immutable {
                immutable: Readable::read(reader)?,
            }),
            Self::ADMIN_CAN_UPGRADE_CONTRACT => Ok(Self::AdminCanUpgradeContract),
            Self::ASSISTANT => Ok(Self::Assistant),
            Self::OWNER => Readable::read(reader).map(|sub_query| Self::Owner { sub_query }),
            Self::ADMIN => Readable::read(reader).map(|sub_query| Self::Admin { sub_query }),
            Self::FEE_RECIPIENT => {
                Readable::read(reader).map(|sub_query| Self::FeeRecipient { sub_query })
            }
            Self::IMPLEMENTATION => {
                Readable::read(reader).map(|sub_query| Self::Implementation { sub_query })
            }
            _ => Err(invalid_data("Invalid Query")),
        }
    }
}

impl Writeable for Query {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Self::FeeParams { chain } => {
                Self::FEE_PARAMS.write(writer)?;
                chain.write(writer)
            }
            Self::Endpoint { sub_query, chain } => {
                Self::ENDPOINT.write(writer)?;
                sub_query.write(writer)?;
                chain.write(writer)
            }
            Self::Immutable { immutable } => {
                Self::IMMUTABLE.write(writer)?;
                immutable.write(writer)
            }
            Self::AdminCanUpgradeContract => Self::ADMIN_CAN_UPGRADE_CONTRACT.write(writer),
            Self::Assistant => Self::ASSISTANT.write(writer),
            Self::Owner { sub_query } => {
                Self::OWNER.write(writer)?;
                sub_query.write(writer)
            }
            Self::Admin { sub_query } => {
                Self::ADMIN.write(writer)?;
                sub_query.write(writer)
            }
            Self::FeeRecipient { sub_query } => {
                Self::FEE_RECIPIENT.write(writer)?;
                sub_query.write(writer)
            }
            Self::Implementation { sub_query } => {
                Self::IMPLEMENTATION.write(writer)?;
                sub_query.write(writer)
            }
        }
    }
}
