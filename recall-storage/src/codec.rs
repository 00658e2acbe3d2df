//! Packed embedding encoding: `D` little-endian `f32`s, no header.
//!
//! Exact bit round-trip; a blob whose length disagrees with its declared
//! dimension is corrupt.

/// Convert an f32 slice to bytes (little-endian).
pub fn encode_embedding(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to an f32 vector of the declared dimension.
pub fn decode_embedding(bytes: &[u8], dimensions: usize) -> Result<Vec<f32>, String> {
    if bytes.len() % 4 != 0 {
        return Err(format!("blob length {} is not a multiple of 4", bytes.len()));
    }
    if bytes.len() / 4 != dimensions {
        return Err(format!(
            "blob holds {} floats, row declares {dimensions}",
            bytes.len() / 4
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
