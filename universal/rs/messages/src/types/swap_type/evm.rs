use std::io;

use crate::{
    types::{EvmAddress, Uint24},
    wire::{invalid_input, Readable, Writeable},
};

/// Multi-hop path shared by the Uniswap V3 and Trader Joe venues. A route through
/// `path.len()` intermediate tokens performs `path.len() + 1` swaps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvmSwapParameters {
    pub first_pool_id: Uint24,
    pub path: Vec<EvmSwapHop>,
}

impl EvmSwapParameters {
    pub fn num_swaps(&self) -> usize {
        self.path.len().saturating_add(1)
    }

    pub fn written_size(&self) -> usize {
        const FIXED: usize = Uint24::BYTES
            + 1; // path_len

        self.path
            .len()
            .saturating_mul(EvmSwapHop::ENCODED_SIZE)
            .saturating_add(FIXED)
    }
}

impl Readable for EvmSwapParameters {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        let first_pool_id = Readable::read(reader)?;

        let path_len = u8::read(reader)?;
        let mut path = Vec::with_capacity(path_len.into());
        for _ in 0..path_len {
            path.push(Readable::read(reader)?);
        }

        Ok(Self {
            first_pool_id,
            path,
        })
    }
}

impl Writeable for EvmSwapParameters {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.first_pool_id.write(writer)?;

        let path_len =
            u8::try_from(self.path.len()).map_err(|_| invalid_input("Swap path too long"))?;
        path_len.write(writer)?;
        for hop in &self.path {
            hop.write(writer)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmSwapHop {
    pub address: EvmAddress,
    pub pool_id: Uint24,
}

impl EvmSwapHop {
    const ENCODED_SIZE: usize = EvmAddress::LEN + Uint24::BYTES;
}

impl Readable for EvmSwapHop {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        Ok(Self {
            address: Readable::read(reader)?,
            pool_id: Readable::read(reader)?,
        })
    }
}

impl Writeable for EvmSwapHop {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.address.write(writer)?;
        self.pool_id.write(writer)
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use crate::wire::{ReadableExt, WriteableExt};

    use super::*;

    #[test]
    fn single_hop() {
        let params = EvmSwapParameters {
            first_pool_id: Uint24::from(500u16),
            path: vec![EvmSwapHop {
                address: EvmAddress::new(hex!("5991a2df15a8f6a256d3ec51e99254cd3fb576a9")),
                pool_id: Uint24::from(500u16),
            }],
        };
        assert_eq!(params.num_swaps(), 2);

        let encoded = params.try_to_vec().unwrap();
        assert_eq!(
            encoded,
            hex!("0001f4015991a2df15a8f6a256d3ec51e99254cd3fb576a90001f4")
        );
        assert_eq!(params.written_size(), encoded.len());
        assert_eq!(EvmSwapParameters::read_all(&encoded).unwrap(), params);
    }

    #[test]
    fn path_count_above_byte_fails_to_encode() {
        let hop = EvmSwapHop {
            address: EvmAddress::ZERO,
            pool_id: Uint24::ZERO,
        };
        let params = EvmSwapParameters {
            first_pool_id: Uint24::ZERO,
            path: vec![hop; 256],
        };

        let err = params.try_to_vec().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn truncated_path() {
        // Declares two hops, carries one.
        let err = EvmSwapParameters::read_all(&hex!(
            "0001f4025991a2df15a8f6a256d3ec51e99254cd3fb576a90001f4"
        ))
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
