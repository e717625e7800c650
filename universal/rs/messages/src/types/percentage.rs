use std::io;

use crate::wire::{invalid_data, invalid_input, Readable, Writeable};

/// Two-byte fixed point percentage. The raw value packs `mantissa << 2 | negexp` and decodes to
/// `mantissa / 10^(2 + negexp)` percent, so the finest step is `0.00001%`.
///
/// The format is lossy. Only values produced by [Percentage::from_f64] round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Percentage(u16);

impl Percentage {
    pub const ZERO: Self = Self(0);

    /// 100% with the smallest exponent.
    pub const FULL: Self = Self(10_000 << 2);

    const MAX_NEGEXP: i32 = 3;
    const MIN_ENCODABLE: f64 = 1e-5;

    pub fn from_raw(raw: u16) -> io::Result<Self> {
        let value = Self(raw);

        // Only a zero exponent can express more than 100%.
        if value.negexp() == 0 && value.mantissa() > 10_000 {
            return Err(invalid_data("Percentage exceeds 100"));
        }

        Ok(value)
    }

    pub fn from_f64(percentage: f64) -> io::Result<Self> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(invalid_input("Percentage must be within [0, 100]"));
        }

        if percentage < Self::MIN_ENCODABLE {
            return Ok(Self::ZERO);
        }

        #[allow(clippy::as_conversions)]
        let mut negexp = ((-percentage.log10()).floor() as i32 + 2).clamp(0, Self::MAX_NEGEXP);

        // At most 10_000 for any percentage up to 100.
        #[allow(clippy::as_conversions)]
        let mut mantissa = (percentage * 10f64.powi(2 + negexp)).round() as u16;
        while negexp > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            negexp -= 1;
        }

        #[allow(clippy::as_conversions)]
        let raw = (mantissa << 2) | negexp as u16;

        Self::from_raw(raw)
    }

    /// Express `value / full` as a percentage.
    pub fn from_ratio(value: u64, full: u64) -> io::Result<Self> {
        if full == 0 || value > full {
            return Err(invalid_input("Ratio must be within [0, 1]"));
        }

        #[allow(clippy::as_conversions)]
        let percentage = value as f64 * 100. / full as f64;
        Self::from_f64(percentage)
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn mantissa(self) -> u16 {
        self.0 >> 2
    }

    pub fn negexp(self) -> u32 {
        u32::from(self.0 % 4)
    }

    pub fn to_f64(self) -> f64 {
        #[allow(clippy::as_conversions)]
        let exp = 2 + self.negexp() as i32;
        f64::from(self.mantissa()) / 10f64.powi(exp)
    }

    /// Apply this percentage to `full`, truncating.
    pub fn scale(self, full: u64) -> u64 {
        let scaled = u128::from(full) * u128::from(self.mantissa())
            / 10u128.pow(4 + self.negexp());

        // Never more than 100% of `full`.
        u64::try_from(scaled).unwrap_or(full)
    }
}

impl Readable for Percentage {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        u16::read(reader).and_then(Self::from_raw)
    }
}

impl Writeable for Percentage {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.0.write(writer)
    }
}
