//! Decoding raw file bytes under the configured encoding.
//!
//! Encodings resolve to the decoders a browser file reader picks for their
//! WHATWG labels: `ISO-8859-1` and `ASCII` both map to windows-1252, and a
//! byte order mark overrides the configured encoding.
//! Malformed input is replaced with U+FFFD rather than rejected.

use crate::config::TextEncoding;
use crate::error::{IngestError, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::sync::Arc;
use tracing::{debug, warn};

/// The decoder a browser picks for the encoding's label.
fn resolve(encoding: TextEncoding) -> &'static Encoding {
    match encoding {
        TextEncoding::Utf8 => UTF_8,
        TextEncoding::Iso8859_1 | TextEncoding::Ascii => WINDOWS_1252,
    }
}

/// Decodes `bytes` into text. Never fails: malformed input is replaced.
pub fn decode_bytes(bytes: &[u8], encoding: TextEncoding) -> String {
    let requested = resolve(encoding);
    let (text, used, had_errors) = requested.decode(bytes);

    if used != requested {
        debug!(
            requested = requested.name(),
            used = used.name(),
            "Byte order mark overrides configured encoding"
        );
    }
    if had_errors {
        warn!(
            encoding = used.name(),
            "Malformed byte sequences replaced while decoding"
        );
    }

    text.into_owned()
}

/// Decodes on the blocking thread pool so large files do not stall the
/// runtime.
///
/// # Errors
///
/// Returns [`IngestError::UnreadableFile`] if the decode task panics or is
/// cancelled.
pub async fn decode_in_background(bytes: Arc<[u8]>, encoding: TextEncoding) -> Result<String> {
    tokio::task::spawn_blocking(move || decode_bytes(&bytes, encoding))
        .await
        .map_err(|e| IngestError::UnreadableFile(format!("decode task failed: {e}")))
}
