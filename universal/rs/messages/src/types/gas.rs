use std::io;

use crate::wire::{invalid_input, Readable, Writeable};

/// Wei per encoded gas price unit.
pub const GAS_PRICE_UNIT: u64 = 1_000_000;

/// Smallest native units (wei) per encoded gas drop-off unit.
pub const GAS_DROPOFF_UNIT: u128 = 1_000_000_000_000;

/// Gas price in units of [GAS_PRICE_UNIT] wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GasPrice(u32);

impl GasPrice {
    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Gas price in wei.
    pub fn denormalize(self) -> u64 {
        u64::from(self.0) * GAS_PRICE_UNIT
    }

    /// Truncates anything below one unit.
    pub fn normalize(wei: u64) -> io::Result<Self> {
        u32::try_from(wei / GAS_PRICE_UNIT)
            .map(Self)
            .map_err(|_| invalid_input("GasPrice does not fit u32"))
    }
}

impl From<u32> for GasPrice {
    fn from(units: u32) -> Self {
        Self(units)
    }
}

/// Native token amount delivered to the recipient, in units of [GAS_DROPOFF_UNIT].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GasDropoff(u32);

impl GasDropoff {
    pub const ZERO: Self = Self(0);

    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Drop-off in the destination's smallest native unit.
    pub fn denormalize(self) -> u128 {
        u128::from(self.0) * GAS_DROPOFF_UNIT
    }

    /// Truncates anything below one unit.
    pub fn normalize(amount: u128) -> io::Result<Self> {
        u32::try_from(amount / GAS_DROPOFF_UNIT)
            .map(Self)
            .map_err(|_| invalid_input("GasDropoff does not fit u32"))
    }
}

impl From<u32> for GasDropoff {
    fn from(units: u32) -> Self {
        Self(units)
    }
}

macro_rules! impl_u32_wire {
    ($($ty:ty),*) => {
        $(
            impl Readable for $ty {
                fn read<R>(reader: &mut R) -> io::Result<Self>
                where
                    Self: Sized,
                    R: io::Read,
                {
                    u32::read(reader).map(Self)
                }
            }

            impl Writeable for $ty {
                fn write<W>(&self, writer: &mut W) -> io::Result<()>
                where
                    W: io::Write,
                {
                    self.0.write(writer)
                }
            }
        )*
    };
}

impl_u32_wire!(GasPrice, GasDropoff);
