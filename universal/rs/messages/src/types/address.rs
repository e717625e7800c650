use std::{fmt, io};

use crate::wire::{invalid_input, Readable, Writeable};

macro_rules! fixed_address {
    ($(#[$meta:meta])* $name:ident, $len:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;
            pub const ZERO: Self = Self([0; $len]);

            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn is_zero(&self) -> bool {
                self.0 == [0; $len]
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(address: $name) -> Self {
                address.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = io::Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <[u8; $len]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| invalid_input(concat!(stringify!($name), " must be ", $len, " bytes")))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl Readable for $name {
            fn read<R>(reader: &mut R) -> io::Result<Self>
            where
                Self: Sized,
                R: io::Read,
            {
                <[u8; $len]>::read(reader).map(Self)
            }
        }

        impl Writeable for $name {
            fn write<W>(&self, writer: &mut W) -> io::Result<()>
            where
                W: io::Write,
            {
                writer.write_all(&self.0)
            }
        }
    };
}

fixed_address!(
    /// Chain-agnostic 32-byte address.
    UniversalAddress,
    32
);

fixed_address!(EvmAddress, 20);

impl From<EvmAddress> for UniversalAddress {
    fn from(address: EvmAddress) -> Self {
        let mut bytes = [0; 32];
        bytes[12..].copy_from_slice(&address.0);
        Self(bytes)
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn wrong_length_is_rejected() {
        assert!(UniversalAddress::try_from(&[1u8; 31][..]).is_err());
        assert!(UniversalAddress::try_from(&[1u8; 33][..]).is_err());
        assert!(EvmAddress::try_from(&[1u8; 32][..]).is_err());
        assert_eq!(
            EvmAddress::try_from(&[7u8; 20][..]).unwrap(),
            EvmAddress::new([7; 20])
        );
    }

    #[test]
    fn evm_address_left_pads() {
        let evm = EvmAddress::new(hex!("6ca6d1e2d5347bfab1d91e883f1915560e09129d"));
        let universal = UniversalAddress::from(evm);
        assert_eq!(
            universal.0,
            hex!("0000000000000000000000006ca6d1e2d5347bfab1d91e883f1915560e09129d")
        );
        assert_eq!(evm.to_string(), "0x6ca6d1e2d5347bfab1d91e883f1915560e09129d");
    }

    #[test]
    fn zero() {
        assert!(UniversalAddress::ZERO.is_zero());
        assert!(!UniversalAddress::new([1; 32]).is_zero());
    }
}
