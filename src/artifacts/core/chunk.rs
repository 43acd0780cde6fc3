//! Byte composition
//!
//! Hash inputs and file contents are frequently assembled from several parts,
//! e.g. a header string followed by raw content. [`compose`] concatenates an
//! ordered list of [`Chunk`]s into one buffer.

use bytes::{Bytes, BytesMut};

/// One part of a composed buffer: raw bytes or UTF-8 text
///
/// Structured values are not chunks. Encode them with
/// [`encode`](crate::artifacts::records::codec::encode) first and pass the
/// resulting bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> Chunk<'a> {
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Chunk::Bytes(bytes) => bytes,
            Chunk::Text(text) => text.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [u8]> for Chunk<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Chunk<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Chunk<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a> From<&'a Bytes> for Chunk<'a> {
    fn from(bytes: &'a Bytes) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Chunk<'a> {
    fn from(text: &'a str) -> Self {
        Chunk::Text(text)
    }
}

impl<'a> From<&'a String> for Chunk<'a> {
    fn from(text: &'a String) -> Self {
        Chunk::Text(text)
    }
}

/// Concatenate `inputs` in order
///
/// Every input is checked before anything is copied. An absent input is an
/// error naming its position, never silently skipped.
pub fn compose<'a, I>(inputs: I) -> anyhow::Result<Bytes>
where
    I: IntoIterator<Item = Option<Chunk<'a>>>,
{
    let chunks = inputs
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            chunk.ok_or_else(|| {
                anyhow::anyhow!("Cannot concatenate an absent value (argument {index})")
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let total_length = chunks.iter().map(Chunk::len).sum();
    let mut buffer = BytesMut::with_capacity(total_length);
    for chunk in chunks {
        buffer.extend_from_slice(chunk.as_bytes());
    }

    Ok(buffer.freeze())
}
