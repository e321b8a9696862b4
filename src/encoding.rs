//! Output encodings for a finished digest.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// A textual representation a digest can be returned in.
///
/// `Latin1` and `Binary` are the same mapping under two names: every byte
/// becomes the `char` with the same code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Hex,
    Base64,
    Latin1,
    Binary,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "latin1" => Ok(Encoding::Latin1),
            "binary" => Ok(Encoding::Binary),
            _ => Err(Error::UnsupportedEncoding(name.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Latin1 => "latin1",
            Encoding::Binary => "binary",
        })
    }
}

/// A digest in the representation the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Raw([u8; 32]),
    Text(String),
}

impl Encoded {
    pub fn as_bytes(&self) -> Option<&[u8; 32]> {
        match self {
            Encoded::Raw(b) => Some(b),
            Encoded::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Encoded::Raw(_) => None,
            Encoded::Text(s) => Some(s),
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Encoded::Raw(_) => None,
            Encoded::Text(s) => Some(s),
        }
    }
}

/// Encodes `digest`; `None` keeps the raw bytes.
pub fn encode(digest: &[u8; 32], encoding: Option<Encoding>) -> Encoded {
    match encoding {
        None => Encoded::Raw(*digest),
        Some(Encoding::Hex) => Encoded::Text(hex::encode(digest)),
        Some(Encoding::Base64) => Encoded::Text(STANDARD.encode(digest)),
        Some(Encoding::Latin1 | Encoding::Binary) => {
            Encoded::Text(digest.iter().map(|&b| char::from(b)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: [u8; 32] = [
        0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
        0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
        0x15, 0xad,
    ];

    #[test]
    fn names() {
        for e in [
            Encoding::Hex,
            Encoding::Base64,
            Encoding::Latin1,
            Encoding::Binary,
        ] {
            assert_eq!(e.to_string().parse::<Encoding>(), Ok(e));
        }
        for bad in ["utf8", "HEX", "base64url", ""] {
            assert_eq!(
                bad.parse::<Encoding>(),
                Err(Error::UnsupportedEncoding(bad.to_string()))
            );
        }
    }

    #[test]
    fn raw() {
        assert_eq!(encode(&ABC, None).as_bytes(), Some(&ABC));
        assert_eq!(encode(&ABC, None).as_str(), None);
    }

    #[test]
    fn hex_is_lowercase() {
        assert_eq!(
            encode(&ABC, Some(Encoding::Hex)).as_str(),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn base64_is_padded_standard() {
        assert_eq!(
            encode(&ABC, Some(Encoding::Base64)).as_str(),
            Some("ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=")
        );
    }

    #[test]
    fn latin1_and_binary_agree() {
        let latin1 = encode(&ABC, Some(Encoding::Latin1)).into_string().unwrap();
        let binary = encode(&ABC, Some(Encoding::Binary)).into_string().unwrap();
        assert_eq!(latin1, binary);
        assert_eq!(latin1.chars().count(), 32);
        for (c, &b) in latin1.chars().zip(ABC.iter()) {
            assert_eq!(c as u32, b as u32);
        }
    }
}
