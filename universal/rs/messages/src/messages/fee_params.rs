use std::io;

use crate::{
    types::{GasDropoff, GasPrice, Percentage},
    wire::{invalid_data, Readable, Writeable},
};

/// Packed relay pricing record for one peer, as carried by endpoint governance and returned by
/// fee queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeParams {
    pub base_fee: u32,
    pub gas_price: GasPrice,
    pub gas_price_margin: Percentage,
    pub gas_price_timestamp: u32,
    pub gas_price_update_threshold: Percentage,
    pub max_gas_dropoff: GasDropoff,
    pub gas_dropoff_margin: Percentage,

    /// Ten bytes on the wire. Anything above `u64::MAX` is rejected.
    pub gas_token_price: u64,
}

impl FeeParams {
    pub const ENCODED_SIZE: usize = 4 // base_fee
        + 4 // gas_price
        + 2 // gas_price_margin
        + 4 // gas_price_timestamp
        + 2 // gas_price_update_threshold
        + 4 // max_gas_dropoff
        + 2 // gas_dropoff_margin
        + GAS_TOKEN_PRICE_SIZE;
}

pub(crate) const GAS_TOKEN_PRICE_SIZE: usize = 10;

/// Reads the 10-byte gas token price.
pub(crate) fn read_gas_token_price<R: io::Read>(reader: &mut R) -> io::Result<u64> {
    let bytes = <[u8; GAS_TOKEN_PRICE_SIZE]>::read(reader)?;

    let (high, low) = bytes.split_at(GAS_TOKEN_PRICE_SIZE - 8);
    if high.iter().any(|byte| *byte != 0) {
        return Err(invalid_data("Gas token price exceeds u64"));
    }

    let mut low_bytes = [0u8; 8];
    low_bytes.copy_from_slice(low);
    Ok(u64::from_be_bytes(low_bytes))
}

pub(crate) fn write_gas_token_price<W: io::Write>(price: u64, writer: &mut W) -> io::Result<()> {
    [0u8; GAS_TOKEN_PRICE_SIZE - 8].write(writer)?;
    price.write(writer)
}

impl Readable for FeeParams {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        Ok(Self {
            base_fee: Readable::read(reader)?,
            gas_price: Readable::read(reader)?,
            gas_price_margin: Readable::read(reader)?,
            gas_price_timestamp: Readable::read(reader)?,
            gas_price_update_threshold: Readable::read(reader)?,
            max_gas_dropoff: Readable::read(reader)?,
            gas_dropoff_margin: Readable::read(reader)?,
            gas_token_price: read_gas_token_price(reader)?,
        })
    }
}

impl Writeable for FeeParams {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.base_fee.write(writer)?;
        self.gas_price.write(writer)?;
        self.gas_price_margin.write(writer)?;
        self.gas_price_timestamp.write(writer)?;
        self.gas_price_update_threshold.write(writer)?;
        self.max_gas_dropoff.write(writer)?;
        self.gas_dropoff_margin.write(writer)?;
        write_gas_token_price(self.gas_token_price, writer)
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use crate::wire::{ReadableExt, WriteableExt};

    use super::*;

    #[test]
    fn encoded_layout() {
        let params = FeeParams {
            base_fee: 1_500_000,
            gas_price: GasPrice::new(10_000),
            gas_price_margin: Percentage::from_f64(25.).unwrap(),
            gas_price_timestamp: 0x0102_0304,
            gas_price_update_threshold: Percentage::from_f64(10.).unwrap(),
            max_gas_dropoff: GasDropoff::new(500_000),
            gas_dropoff_margin: Percentage::from_f64(50.).unwrap(),
            gas_token_price: 200_000_000,
        };

        let encoded = params.try_to_vec().unwrap();
        assert_eq!(
            encoded,
            hex!(
                "0016e360" // base_fee
                "00002710" // gas_price
                "2710"     // gas_price_margin (2500 << 2)
                "01020304" // gas_price_timestamp
                "0fa0"     // gas_price_update_threshold (1000 << 2)
                "0007a120" // max_gas_dropoff
                "4e20"     // gas_dropoff_margin (5000 << 2)
                "0000000000000bebc200" // gas_token_price
            )
        );
        assert_eq!(encoded.len(), FeeParams::ENCODED_SIZE);
        assert_eq!(FeeParams::read_all(&encoded).unwrap(), params);
    }

    #[test]
    fn gas_token_price_above_u64() {
        let mut encoded = FeeParams::default().try_to_vec().unwrap();
        encoded[FeeParams::ENCODED_SIZE - GAS_TOKEN_PRICE_SIZE] = 1;

        let err = FeeParams::read_all(&encoded).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
