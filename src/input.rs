//! Byte coercion: every supported input kind is resolved into a
//! [`ByteSequence`] once, at the API boundary.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Deref;

use crate::error::{Error, Result};

/// A value handed to `update` or used as an HMAC key.
///
/// Only `Text`, `Bytes` and `View` carry bytes. The remaining variants exist
/// because host bridges pass arbitrary values through; coercing them fails with
/// [`Error::TypeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// UTF-8 text, hashed as its UTF-8 bytes (no BOM, no normalization).
    Text(&'a str),
    /// A raw byte buffer, hashed in full.
    Bytes(&'a [u8]),
    /// A window of `length` bytes starting at `offset` inside `buffer`.
    View {
        buffer: &'a [u8],
        offset: usize,
        length: usize,
    },
    Number(f64),
    Bool(bool),
    Null,
}

impl<'a> Value<'a> {
    /// Builds a view over `buffer[offset..offset + length]`.
    pub fn view(buffer: &'a [u8], offset: usize, length: usize) -> Self {
        Value::View {
            buffer,
            offset,
            length,
        }
    }

    /// Name of the input kind, as reported in [`Error::TypeMismatch`].
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::View { .. } => "view",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
        }
    }

    /// Borrows the bytes this value stands for, without copying.
    pub fn as_bytes(&self) -> Result<&'a [u8]> {
        match *self {
            Value::Text(s) => Ok(s.as_bytes()),
            Value::Bytes(b) => Ok(b),
            Value::View {
                buffer,
                offset,
                length,
            } => offset
                .checked_add(length)
                .and_then(|end| buffer.get(offset..end))
                .ok_or(Error::ViewOutOfBounds {
                    offset,
                    length,
                    capacity: buffer.len(),
                }),
            _ => Err(Error::TypeMismatch { kind: self.kind() }),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(b: &'a [u8]) -> Self {
        Value::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Value<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Value::Bytes(&b[..])
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Value::Bytes(b.as_slice())
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<()> for Value<'_> {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

/// An immutable, owned run of bytes; the engine's internal currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteSequence(Vec<u8>);

impl ByteSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for ByteSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(b: &[u8]) -> Self {
        ByteSequence(b.to_vec())
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(b: Vec<u8>) -> Self {
        ByteSequence(b)
    }
}

impl TryFrom<Value<'_>> for ByteSequence {
    type Error = Error;

    fn try_from(value: Value<'_>) -> Result<Self> {
        value.as_bytes().map(ByteSequence::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_utf8() {
        let seq = ByteSequence::try_from(Value::from("h\u{e9}")).unwrap();
        assert_eq!(&seq[..], &[0x68, 0xc3, 0xa9]);
    }

    #[test]
    fn view_uses_its_own_window() {
        let backing = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let seq = ByteSequence::try_from(Value::view(&backing, 2, 3)).unwrap();
        assert_eq!(&seq[..], &[2, 3, 4]);

        let empty = ByteSequence::try_from(Value::view(&backing, 8, 0)).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn view_out_of_bounds() {
        let backing = [0u8; 4];
        assert_eq!(
            Value::view(&backing, 3, 2).as_bytes(),
            Err(Error::ViewOutOfBounds {
                offset: 3,
                length: 2,
                capacity: 4
            })
        );
        assert!(matches!(
            Value::view(&backing, usize::MAX, 1).as_bytes(),
            Err(Error::ViewOutOfBounds { .. })
        ));
    }

    #[test]
    fn non_byte_kinds_are_rejected() {
        assert_eq!(
            ByteSequence::try_from(Value::from(123)),
            Err(Error::TypeMismatch { kind: "number" })
        );
        assert_eq!(
            ByteSequence::try_from(Value::from(true)),
            Err(Error::TypeMismatch { kind: "boolean" })
        );
        assert_eq!(
            ByteSequence::try_from(Value::from(())),
            Err(Error::TypeMismatch { kind: "null" })
        );
    }
}
