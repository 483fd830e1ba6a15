// File:    generator.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Generates files of a requested size filled with random bytes from the OS randomness source.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;
use rand::{rngs::OsRng, TryRngCore};
use std::fs::File;
use std::io::Write;

/// The number of bytes in one megabyte as this tool counts them (MiB, 2^20).
pub const BYTES_PER_MEGABYTE: usize = 1024 * 1024;

/// Fills a freshly allocated buffer of `len` bytes from the operating
/// system's randomness source.
///
/// # Errors
///
/// This function will return an error if the randomness source fails to
/// produce `len` bytes.
pub fn random_bytes(len: usize) -> std::io::Result<Vec<u8>> {
    let mut rng = OsRng;
    let mut buffer = vec![0u8; len];
    // Use the failable `try_fill_bytes` and map the error to an `io::Error`.
    rng.try_fill_bytes(&mut buffer)
        .map_err(std::io::Error::other)?;
    Ok(buffer)
}

/// Writes `size_megabytes` MiB of random bytes to the file at `path`,
/// creating the file if it is absent and truncating it if it is present.
///
/// The whole payload is held in memory at once and written in a single
/// operation, so peak memory is proportional to the requested size. Use
/// [`generate_chunked`] to bound peak memory instead.
///
/// # Arguments
///
/// * `path` - The path where the file will be created.
/// * `size_megabytes` - The size of the file in megabytes (MiB). A size of
///   zero produces an empty file.
///
/// # Returns
///
/// A `std::io::Result<()>` which is `Ok(())` on success and `Err` on failure.
///
/// # Errors
///
/// This function will return an error if the randomness source fails or if
/// the file cannot be created, written, or flushed. A partially written
/// file is left as-is.
pub fn generate(path: &str, size_megabytes: usize) -> std::io::Result<()> {
    let total_bytes = size_megabytes * BYTES_PER_MEGABYTE;
    debug!("Generating {total_bytes} random bytes for '{path}'.");
    let buffer = random_bytes(total_bytes)?;

    let mut file = File::create(path)?;
    file.write_all(&buffer)?;
    file.flush()?;

    Ok(())
}

/// Like [`generate`], but produces and writes the payload in blocks of
/// `chunk_size` bytes so that peak memory stays bounded regardless of the
/// requested size. The resulting file is observably identical to one
/// produced by [`generate`]: same length, same kind of random content.
///
/// # Errors
///
/// This function will return an `InvalidInput` error if `chunk_size` is
/// zero, and otherwise fails for the same reasons as [`generate`].
pub fn generate_chunked(
    path: &str,
    size_megabytes: usize,
    chunk_size: usize,
) -> std::io::Result<()> {
    if chunk_size == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "chunk size must be at least one byte",
        ));
    }

    let total_bytes = size_megabytes * BYTES_PER_MEGABYTE;
    debug!("Generating {total_bytes} random bytes for '{path}' in blocks of {chunk_size}.");
    let mut file = File::create(path)?;
    let mut written = 0;
    while written < total_bytes {
        // The final block may be shorter than `chunk_size`.
        let n = chunk_size.min(total_bytes - written);
        let chunk = random_bytes(n)?;
        file.write_all(&chunk)?;
        written += n;
    }
    file.flush()?;

    Ok(())
}
