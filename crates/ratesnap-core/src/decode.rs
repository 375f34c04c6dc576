//! Feed decoding.
//!
//! The feed is an XML document rooted at `ValCurs` with zero or more
//! `Valute` entries. The document may declare any charset the WHATWG
//! registry knows (central-bank feeds commonly use `windows-1251`), so the
//! bytes are transcoded to UTF-8 before the structure is deserialized.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::{DecodeError, RawRecord};

const ROOT_ELEMENT: &str = "ValCurs";

#[derive(Debug, Deserialize)]
struct FeedDocument {
    #[serde(rename = "Valute", default)]
    entries: Vec<RawRecord>,
}

/// Reads and decodes the feed at `path`, preserving document order.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, DecodeError> {
    let bytes = read_source(path.as_ref())?;
    decode_bytes(&bytes)
}

/// Decodes an in-memory feed document.
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<RawRecord>, DecodeError> {
    let text = transcode(bytes)?;
    expect_root(&text)?;

    let document: FeedDocument = quick_xml::de::from_str(&text)?;
    ensure_populated(&document.entries)?;
    Ok(document.entries)
}

/// Resolves the charset the document is encoded in.
///
/// A byte-order mark wins over any declaration. Without one, the label of
/// the XML declaration is looked up; documents without a declaration are
/// UTF-8. A UTF-16 label on a declaration that was itself readable as
/// ASCII is treated as UTF-8, the same way the WHATWG encoding sniffing
/// rules do.
pub fn declared_encoding(bytes: &[u8]) -> Result<&'static Encoding, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Ok(encoding);
    }

    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let Event::Decl(decl) = reader.read_event_into(&mut buf)? else {
        return Ok(UTF_8);
    };
    let Some(label) = decl.encoding() else {
        return Ok(UTF_8);
    };
    let label = label.map_err(|error| DecodeError::Declaration(error.to_string()))?;

    match Encoding::for_label(&label) {
        Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => Ok(UTF_8),
        Some(encoding) => Ok(encoding),
        None => Err(DecodeError::UnknownCharset {
            label: String::from_utf8_lossy(&label).into_owned(),
        }),
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>, DecodeError> {
    let read_error = |source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut bytes = Vec::new();
    let read = file.read_to_end(&mut bytes);

    // A failed close outranks a failed read.
    release(file).map_err(|source| DecodeError::Release {
        path: path.to_path_buf(),
        source,
    })?;
    read.map_err(read_error)?;
    Ok(bytes)
}

#[cfg(unix)]
fn release(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    nix::unistd::close(file.into_raw_fd()).map_err(io::Error::from)
}

#[cfg(not(unix))]
fn release(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}

fn transcode(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    let encoding = declared_encoding(bytes)?;
    let body = match Encoding::for_bom(bytes) {
        Some((_, bom_len)) => &bytes[bom_len..],
        None => bytes,
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(DecodeError::Charset {
            charset: encoding.name(),
        })
}

fn expect_root(text: &str) -> Result<(), DecodeError> {
    let mut reader = Reader::from_str(text);

    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = element.name();
                if name.as_ref() == ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(DecodeError::UnexpectedRoot {
                    expected: ROOT_ELEMENT,
                    found: String::from_utf8_lossy(name.as_ref()).into_owned(),
                });
            }
            Event::Eof => return Err(DecodeError::MissingRoot),
            _ => {}
        }
    }
}

fn ensure_populated(entries: &[RawRecord]) -> Result<(), DecodeError> {
    for (position, entry) in entries.iter().enumerate() {
        let index = position + 1;
        if entry.alpha_code.trim().is_empty() {
            return Err(DecodeError::EmptyField {
                index,
                field: "CharCode",
            });
        }
        if entry.raw_value.trim().is_empty() {
            return Err(DecodeError::EmptyField {
                index,
                field: "Value",
            });
        }
    }

    Ok(())
}
