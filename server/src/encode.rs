use std::io::Write;

use base64::{prelude::BASE64_STANDARD, write::EncoderStringWriter};

/// Input is fed to the encoder in slices of this size so arbitrarily
/// large buffers never materialize an intermediate copy.
pub const ENCODE_CHUNK_BYTES: usize = 32768;

/// Standard (RFC 4648) base64 of `bytes`. Empty input encodes to `""`.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    let mut encoder = EncoderStringWriter::new(&BASE64_STANDARD);

    for chunk in bytes.chunks(ENCODE_CHUNK_BYTES) {
        // the String-backed writer cannot fail
        let _ = encoder.write_all(chunk);
    }

    encoder.into_inner()
}
