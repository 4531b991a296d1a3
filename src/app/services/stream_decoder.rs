//! Shift_JIS stream decoding.
//!
//! The download endpoint serves CSV in the legacy Shift_JIS encoding, both
//! over the wire and in files saved from the site. This adapter re-encodes
//! a raw byte stream to UTF-8 before parsing. Decoding is strict: an
//! invalid byte sequence is reported as an error rather than replaced with
//! a substitution character, so a garbled download fails loudly instead of
//! producing phantom station names.

use encoding_rs::{DecoderResult, SHIFT_JIS};
use std::io::Read;
use tracing::debug;

use crate::{Error, Result};

/// Read buffer size for incremental decoding
const CHUNK_SIZE: usize = 8 * 1024;

/// Decode a Shift_JIS byte stream to a UTF-8 string
///
/// Reads the stream to completion. Full-width characters used in station
/// names pass through exactly. Read failures surface as transport errors;
/// invalid byte sequences, including a multi-byte sequence truncated at end
/// of input, surface as decode errors carrying the byte offset.
pub fn decode_stream<R: Read>(mut reader: R) -> Result<String> {
    let mut decoder = SHIFT_JIS.new_decoder();
    let mut output = String::with_capacity(CHUNK_SIZE);
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut offset = 0usize;

    loop {
        let filled = reader
            .read(&mut buffer)
            .map_err(|e| Error::transport("failed to read source stream", e))?;
        let last = filled == 0;
        let mut position = 0;

        loop {
            let pending = filled - position;
            if let Some(needed) = decoder.max_utf8_buffer_length_without_replacement(pending) {
                output.reserve(needed);
            }

            let (result, read) =
                decoder.decode_to_string_without_replacement(&buffer[position..filled], &mut output, last);
            position += read;
            offset += read;

            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(..) => {
                    return Err(Error::decode(format!(
                        "invalid Shift_JIS byte sequence near offset {offset}"
                    )));
                }
            }
        }

        if last {
            debug!("decoded {} bytes to {} UTF-8 chars", offset, output.len());
            return Ok(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let decoded = decode_stream("10001,20001,20200201,1".as_bytes()).unwrap();
        assert_eq!(decoded, "10001,20001,20200201,1");
    }

    #[test]
    fn test_full_width_station_names_round_trip() {
        let text = "成田,八王子,さいたま市,千代田区";
        let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
        assert!(!had_errors);

        let decoded = decode_stream(bytes.as_ref()).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_invalid_trail_byte_is_a_decode_error() {
        // 0x81 opens a two-byte sequence; 0x39 is outside the trail range
        let bytes: &[u8] = b"abc\x81\x39def";
        let err = decode_stream(bytes).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn test_truncated_sequence_at_eof_is_a_decode_error() {
        let bytes: &[u8] = b"ok,\x90";
        let err = decode_stream(bytes).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn test_empty_stream_decodes_to_empty_string() {
        let decoded = decode_stream(&b""[..]).unwrap();
        assert!(decoded.is_empty());
    }
}
