//! Codec traits for swap layer wire types.
//!
//! [Readable], [Writeable], [TypePrefixedPayload] and [WriteableBytes] come from `wormhole-io`.
//! This module adds strict slice decoding, fallible encoding into a vector, and the counted
//! [Batch] used by the admin entrypoints.
//!
//! Strict decoding means a truncated buffer is [io::ErrorKind::UnexpectedEof] and leftover bytes
//! are [io::ErrorKind::InvalidData]. Values that cannot be encoded fail with
//! [io::ErrorKind::InvalidInput].

use std::io::{self, Read};

pub use wormhole_io::{Readable, TypePrefixedPayload, Writeable, WriteableBytes};

pub(crate) fn invalid_data(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

pub(crate) fn invalid_input(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn ensure_consumed(remaining: &[u8]) -> io::Result<()> {
    if remaining.is_empty() {
        Ok(())
    } else {
        Err(invalid_data("trailing bytes"))
    }
}

pub trait ReadableExt: Readable + Sized {
    /// Decode all of `buf`.
    fn read_all(buf: &[u8]) -> io::Result<Self> {
        let mut cursor = buf;
        let value = Self::read(&mut cursor)?;
        ensure_consumed(cursor)?;

        Ok(value)
    }
}

impl<T: Readable> ReadableExt for T {}

pub trait WriteableExt: Writeable + Sized {
    fn try_to_vec(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(buf)
    }
}

impl<T: Writeable> WriteableExt for T {}

pub trait TypePrefixedPayloadExt<const N: usize>: TypePrefixedPayload<N> + Sized {
    /// Decode all of `buf`, type prefix included.
    fn read_payload_all(buf: &[u8]) -> io::Result<Self> {
        let mut cursor = buf;
        if let Some(expected) = Self::TYPE {
            let mut prefix = [0u8; N];
            cursor.read_exact(&mut prefix)?;
            if prefix != expected {
                return Err(invalid_data("Invalid payload type"));
            }
        }

        let value = Self::read(&mut cursor)?;
        ensure_consumed(cursor)?;

        Ok(value)
    }

    fn try_to_payload_vec(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(TypePrefixedPayload::written_size(self).saturating_add(N));
        if let Some(prefix) = Self::TYPE {
            buf.extend_from_slice(&prefix);
        }
        self.write(&mut buf)?;

        Ok(buf)
    }
}

impl<const N: usize, T: TypePrefixedPayload<N>> TypePrefixedPayloadExt<N> for T {}

/// Array of records prefixed by a 4-byte little-endian count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Batch<T>(pub Vec<T>);

impl<T> Batch<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<Vec<T>> for Batch<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> IntoIterator for Batch<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Batch<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Readable> Readable for Batch<T> {
    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        let mut count = [0u8; 4];
        reader.read_exact(&mut count)?;

        let mut items = Vec::new();
        for _ in 0..u32::from_le_bytes(count) {
            items.push(T::read(reader)?);
        }

        Ok(Self(items))
    }
}

impl<T: Writeable> Writeable for Batch<T> {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let count = u32::try_from(self.0.len()).map_err(|_| invalid_input("batch too large"))?;
        writer.write_all(&count.to_le_bytes())?;
        for item in &self.0 {
            item.write(writer)?;
        }
        Ok(())
    }
}
