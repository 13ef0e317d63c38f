// src/png.rs

//! Minimal PNG container writer.
//!
//! Emits exactly the stream the OSD pipeline needs: signature, IHDR (8-bit
//! RGBA, no interlace), a single IDAT holding the zlib-compressed scanlines
//! with filter type 0 on every row, and IEND. Every chunk carries a big-endian
//! length prefix and a CRC-32 over tag plus payload.

use crate::error::RenderError;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

/// The 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Append one chunk: length, tag, payload, CRC-32(tag + payload).
fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(payload);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

/// Encode a row-major RGBA8 buffer as a complete PNG byte stream.
///
/// Fails with [`RenderError::SizeMismatch`] when the buffer length is not
/// `width * height * 4`.
pub fn encode_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(RenderError::SizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    // IHDR: dimensions, bit depth 8, color type 6 (RGBA), compression 0,
    // filter method 0, no interlace.
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

    // Scanlines, each prefixed with filter type 0 (no per-row filtering).
    let stride = width as usize * 4;
    let mut raw = Vec::with_capacity(expected + height as usize);
    for row in rgba.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&raw)?;
    let idat = encoder.finish()?;

    let mut out = Vec::with_capacity(idat.len() + 64);
    out.extend_from_slice(&SIGNATURE);
    push_chunk(&mut out, b"IHDR", &ihdr);
    push_chunk(&mut out, b"IDAT", &idat);
    push_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}
