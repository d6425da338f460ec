//! Binary snapshot framing.
//!
//! Layout:
//!
//! ```text
//! [magic: 4 bytes][version: u32 LE][payload_len: u64 LE][payload: bincode]
//! ```
//!
//! Stores choose their own magic and version; derived indexes are never part
//! of the payload and are rebuilt on decode.

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

const HEADER_LEN: usize = 4 + 4 + 8;

pub fn encode<T: Serialize>(magic: &[u8; 4], version: u32, value: &T) -> Result<Vec<u8>> {
    let payload = bincode::serialize(value).context("serialize snapshot payload")?;

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(magic);
    out.extend_from_slice(&version.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

pub fn decode<T: DeserializeOwned>(magic: &[u8; 4], version: u32, bytes: &[u8]) -> Result<T> {
    if bytes.len() < HEADER_LEN || &bytes[0..4] != magic {
        return Err(anyhow!(
            "invalid snapshot (expected magic {:?})",
            String::from_utf8_lossy(magic)
        ));
    }

    let found = u32::from_le_bytes(bytes[4..8].try_into()?);
    if found != version {
        return Err(anyhow!(
            "unsupported snapshot version {found} (expected {version})"
        ));
    }

    let len = u64::from_le_bytes(bytes[8..16].try_into()?) as usize;
    let payload = bytes
        .get(HEADER_LEN..HEADER_LEN.saturating_add(len))
        .ok_or_else(|| anyhow!("truncated snapshot: payload declares {len} bytes"))?;
    bincode::deserialize(payload).context("deserialize snapshot payload")
}
