//! Decoding raw path bytes into text.
//!
//! Paths read from foreign filesystem metadata often arrive as bytes. A
//! [`PathDecoder`] turns them into text for the normalizer; the encoding's
//! canonical name is recorded on the resulting path.

use crate::error::{Error, Result};

/// Converts raw path bytes into text.
pub trait PathDecoder: std::fmt::Debug {
    /// Canonical name of the encoding, e.g. `utf-16-le`.
    fn encoding(&self) -> &'static str;

    /// Decode `bytes` into a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the bytes are not valid in this
    /// encoding.
    fn decode(&self, bytes: &[u8]) -> Result<String>;
}

/// UTF-8 decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder;

impl PathDecoder for Utf8Decoder {
    fn encoding(&self) -> &'static str {
        "utf-8"
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::Decode {
            encoding: self.encoding().to_string(),
            reason: e.to_string(),
        })
    }
}

/// UTF-16 decoder with a fixed byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Decoder {
    /// Little-endian code units.
    LittleEndian,
    /// Big-endian code units.
    BigEndian,
}

impl PathDecoder for Utf16Decoder {
    fn encoding(&self) -> &'static str {
        match self {
            Self::LittleEndian => "utf-16-le",
            Self::BigEndian => "utf-16-be",
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        if bytes.len() % 2 != 0 {
            return Err(Error::Decode {
                encoding: self.encoding().to_string(),
                reason: format!("odd number of bytes ({})", bytes.len()),
            });
        }

        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| match self {
                Self::LittleEndian => u16::from_le_bytes([pair[0], pair[1]]),
                Self::BigEndian => u16::from_be_bytes([pair[0], pair[1]]),
            })
            .collect();

        String::from_utf16(&units).map_err(|e| Error::Decode {
            encoding: self.encoding().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Look up a decoder by encoding name.
///
/// Names are matched case-insensitively with `_` and `-` treated alike, so
/// `utf-8`, `UTF8` and `utf_8` all select UTF-8.
///
/// # Errors
///
/// Returns [`Error::UnsupportedEncoding`] for names with no decoder.
///
/// # Examples
///
/// ```
/// use gpath::decode::decoder_for;
///
/// let decoder = decoder_for("UTF_16_LE").unwrap();
/// assert_eq!(decoder.encoding(), "utf-16-le");
/// assert_eq!(decoder.decode(&[b'h', 0, b'i', 0]).unwrap(), "hi");
///
/// assert!(decoder_for("latin-1").is_err());
/// ```
pub fn decoder_for(name: &str) -> Result<Box<dyn PathDecoder>> {
    let key = name.trim().to_ascii_lowercase().replace('_', "-");
    match key.as_str() {
        "utf-8" | "utf8" => Ok(Box::new(Utf8Decoder)),
        "utf-16-le" | "utf-16le" | "utf16le" | "utf16-le" => {
            Ok(Box::new(Utf16Decoder::LittleEndian))
        }
        "utf-16-be" | "utf-16be" | "utf16be" | "utf16-be" => Ok(Box::new(Utf16Decoder::BigEndian)),
        _ => Err(Error::UnsupportedEncoding {
            encoding: name.to_string(),
        }),
    }
}
