use std::{io, ops::Deref};

use ruint::{ToUintError, Uint};

use crate::wire::{Readable, Writeable};

macro_rules! narrow_uint {
    ($(#[$meta:meta])* $name:ident, $bits:literal, $bytes:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(Uint<$bits, 1>);

        impl $name {
            pub const ZERO: Self = Self(Uint::ZERO);
            pub const MAX: Self = Self(Uint::MAX);
            pub const BYTES: usize = $bytes;

            pub fn from_be_bytes(bytes: [u8; $bytes]) -> Self {
                let value = bytes
                    .into_iter()
                    .fold(0u64, |acc, byte| (acc << 8) | u64::from(byte));

                // At most `$bits` bits were folded in.
                Self(Uint::from_limbs([value]))
            }

            pub fn to_be_bytes(self) -> [u8; $bytes] {
                let wide = self.to_u64().to_be_bytes();
                let mut out = [0u8; $bytes];
                out.copy_from_slice(&wide[8 - $bytes..]);
                out
            }

            pub fn to_u64(self) -> u64 {
                self.0.into_limbs()[0]
            }
        }

        impl Deref for $name {
            type Target = Uint<$bits, 1>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.to_u64()
            }
        }

        impl From<u16> for $name {
            fn from(value: u16) -> Self {
                Self(Uint::from_limbs([u64::from(value)]))
            }
        }

        impl TryFrom<u64> for $name {
            type Error = ToUintError<Uint<$bits, 1>>;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                Uint::try_from(value).map(Self)
            }
        }

        impl Readable for $name {
            fn read<R>(reader: &mut R) -> io::Result<Self>
            where
                Self: Sized,
                R: io::Read,
            {
                <[u8; $bytes]>::read(reader).map(Self::from_be_bytes)
            }
        }

        impl Writeable for $name {
            fn write<W>(&self, writer: &mut W) -> io::Result<()>
            where
                W: io::Write,
            {
                writer.write_all(&self.to_be_bytes())
            }
        }
    };
}

narrow_uint!(
    /// 3-byte unsigned integer, used for EVM pool ids.
    Uint24,
    24,
    3
);

narrow_uint!(
    /// 6-byte unsigned integer, used for relaying fees.
    Uint48,
    48,
    6
);

impl TryFrom<u32> for Uint24 {
    type Error = ToUintError<Uint<24, 1>>;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Uint::try_from(value).map(Self)
    }
}

impl From<Uint24> for u32 {
    fn from(value: Uint24) -> Self {
        let [a, b, c] = value.to_be_bytes();
        u32::from_be_bytes([0, a, b, c])
    }
}

impl From<u32> for Uint48 {
    fn from(value: u32) -> Self {
        Self(Uint::from_limbs([u64::from(value)]))
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use crate::wire::{ReadableExt, WriteableExt};

    use super::*;

    #[test]
    fn uint24_be() {
        let encoded = hex!("434445");
        let value = Uint24::read_all(&encoded).unwrap();
        assert_eq!(u64::from(value), 4_408_389);
        assert_eq!(u32::from(value), 4_408_389);
        assert_eq!(value.try_to_vec().unwrap(), encoded);

        assert_eq!(Uint24::from(500u16).to_be_bytes(), hex!("0001f4"));
    }

    #[test]
    fn uint48_be() {
        let encoded = hex!("404142434445");
        let value = Uint48::read_all(&encoded).unwrap();
        assert_eq!(u64::from(value), 70_649_028_756_549);
        assert_eq!(value.try_to_vec().unwrap(), encoded);

        assert_eq!(Uint48::from(1_000_000u32).to_be_bytes(), hex!("0000000f4240"));
    }

    #[test]
    fn range_checks() {
        assert!(Uint24::try_from(0x00ff_ffffu32).is_ok());
        assert!(Uint24::try_from(0x0100_0000u32).is_err());

        assert_eq!(u64::from(Uint48::MAX), (1u64 << 48) - 1);
        assert!(Uint48::try_from(1u64 << 48).is_err());
    }
}
