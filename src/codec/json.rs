//! JSON entry points.
//!
//! Thin wrappers over `serde_json` that apply [`CodecOptions`] on the way out
//! and turn `serde_json` failures into [`KindedError`] on the way in.
//!
//! ```rust
//! use kinded::{Optional, Outcome, codec::json};
//!
//! let text = json::to_string(&Outcome::<Optional<i32>, String>::ok(Optional::some(5)))?;
//! assert_eq!(text, r#"{"Kind":"Ok","Ok":{"Kind":"Some","Some":5}}"#);
//!
//! let back: Outcome<Optional<i32>, String> = json::from_str(&text)?;
//! assert_eq!(back.transpose(), Optional::some(Outcome::ok(5)));
//! # Ok::<(), kinded::KindedError>(())
//! ```

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{CompactFormatter, PrettyFormatter};

use super::CodecOptions;
use crate::error::{KindedError, Result};

/// Serializes `value` with the default options.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_string_with(value, &CodecOptions::default())
}

/// Serializes `value` into a `String`.
pub fn to_string_with<T: Serialize + ?Sized>(value: &T, options: &CodecOptions) -> Result<String> {
    let mut buf = Vec::with_capacity(64);
    to_writer_with(&mut buf, value, options)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Serializes `value` into `writer`.
pub fn to_writer_with<W, T>(mut writer: W, value: &T, options: &CodecOptions) -> Result<()>
where
    W: io::Write,
    T: Serialize + ?Sized,
{
    if options.is_pretty() {
        let indent = vec![b' '; options.indent_width()];
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut ser)?;
    } else {
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, CompactFormatter);
        value.serialize(&mut ser)?;
    }

    if options.has_trailing_newline() {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Deserializes a value from JSON text.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(KindedError::from)
}

/// Deserializes a value from UTF-8 JSON bytes.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(KindedError::from)
}

/// Deserializes a value from a reader.
pub fn from_reader<R: io::Read, T: DeserializeOwned>(reader: R) -> Result<T> {
    serde_json::from_reader(reader).map_err(KindedError::from)
}
