use std::io;

use crate::{
    types::UniversalAddress,
    wire::{Readable, Writeable},
};

/// Route through the Jupiter V6 aggregator, optionally pinned to one DEX program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JupiterV6SwapParameters {
    pub dex_program_id: Option<UniversalAddress>,
}

impl JupiterV6SwapParameters {
    pub fn written_size(&self) -> usize {
        match self.dex_program_id {
            Some(_) => 1 + UniversalAddress::LEN,
            None => 1,
        }
    }
}

impl Readable for JupiterV6SwapParameters {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        Ok(Self {
            dex_program_id: Readable::read(reader)?,
        })
    }
}

impl Writeable for JupiterV6SwapParameters {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.dex_program_id.write(writer)
    }
}
