use std::io;

use crate::{
    types::{GasDropoff, UniversalAddress, Uint48},
    wire::{invalid_data, Readable, Writeable, WriteableBytes},
};

/// How the destination releases a fill, as carried in a swap message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum RedeemMode {
    #[default]
    Direct,
    Payload {
        sender: UniversalAddress,
        buf: WriteableBytes<u16>,
    },
    Relay {
        gas_dropoff: GasDropoff,
        relaying_fee: Uint48,
    },
}

impl RedeemMode {
    const DIRECT: u8 = 0;
    const PAYLOAD: u8 = 1;
    const RELAY: u8 = 2;

    pub fn is_relay(&self) -> bool {
        matches!(self, Self::Relay { .. })
    }

    pub fn written_size(&self) -> usize {
        match self {
            Self::Direct => 1,
            Self::Payload { sender: _, buf } => buf.len().saturating_add(
                1 // discriminant
                + UniversalAddress::LEN // sender
                + 2, // payload len
            ),
            Self::Relay { .. } => {
                const FIXED: usize = 1 // discriminant
                    + 4 // gas_dropoff
                    + Uint48::BYTES; // relaying_fee

                FIXED
            }
        }
    }
}

impl Readable for RedeemMode {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        match u8::read(reader)? {
            Self::DIRECT => Ok(Self::Direct),
            Self::PAYLOAD => Ok(Self::Payload {
                sender: Readable::read(reader)?,
                buf: Readable::read(reader)?,
            }),
            Self::RELAY => Ok(Self::Relay {
                gas_dropoff: Readable::read(reader)?,
                relaying_fee: Readable::read(reader)?,
            }),
            _ => Err(invalid_data("Invalid RedeemMode")),
        }
    }
}

impl Writeable for RedeemMode {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Self::Direct => Self::DIRECT.write(writer),
            Self::Payload { sender, buf } => {
                Self::PAYLOAD.write(writer)?;
                sender.write(writer)?;

                // Check whether length can be encoded.
                buf.try_encoded_len()?;
                buf.write(writer)
            }
            Self::Relay {
                gas_dropoff,
                relaying_fee,
            } => {
                Self::RELAY.write(writer)?;
                gas_dropoff.write(writer)?;
                relaying_fee.write(writer)
            }
        }
    }
}

/// Redeem intent supplied when staging an outbound transfer. Unlike [RedeemMode] the payload
/// has no sender yet, and a relay names the highest fee the sender accepts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum RedeemOption {
    #[default]
    Direct,
    Payload(WriteableBytes<u32>),
    Relay {
        gas_dropoff: GasDropoff,
        max_relaying_fee: Uint48,
    },
}

impl RedeemOption {
    const DIRECT: u8 = 0;
    const PAYLOAD: u8 = 1;
    const RELAY: u8 = 2;
}

impl Readable for RedeemOption {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        match u8::read(reader)? {
            Self::DIRECT => Ok(Self::Direct),
            Self::PAYLOAD => Readable::read(reader).map(Self::Payload),
            Self::RELAY => Ok(Self::Relay {
                gas_dropoff: Readable::read(reader)?,
                max_relaying_fee: Readable::read(reader)?,
            }),
            _ => Err(invalid_data("Invalid RedeemOption")),
        }
    }
}

impl Writeable for RedeemOption {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Self::Direct => Self::DIRECT.write(writer),
            Self::Payload(payload) => {
                Self::PAYLOAD.write(writer)?;
                payload.try_encoded_len()?;
                payload.write(writer)
            }
            Self::Relay {
                gas_dropoff,
                max_relaying_fee,
            } => {
                Self::RELAY.write(writer)?;
                gas_dropoff.write(writer)?;
                max_relaying_fee.write(writer)
            }
        }
    }
}
