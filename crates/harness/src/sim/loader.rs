//! Raw program loading.
//!
//! Programs are flat little-endian images with no header: byte `i` of the file lands at bus
//! address `i`. A trailing partial word is zero-padded.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::HarnessError;
use crate::dut::SimulatedCore;
use crate::sim::DesignHarness;

/// Packs a little-endian byte image into words, zero-padding the last one.
pub fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

/// Reads a raw binary from disk as words.
///
/// # Errors
///
/// Returns `HarnessError::Io` if the file cannot be read.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u32>, HarnessError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "program loaded");
    Ok(words_from_bytes(&bytes))
}

/// Preloads `words` at address 0. Call before `reset`.
pub fn load_into<C: SimulatedCore>(harness: &mut DesignHarness<C>, words: &[u32]) {
    harness.write_words(0, words.iter().copied());
}
