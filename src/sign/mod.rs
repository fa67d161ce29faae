//! Boot sector signer.

mod boot_block;

pub use boot_block::{BootBlock, BOOT_BLOCK_SIZE, MAX_PAYLOAD_SIZE, SIGNATURE};

use super::{utils, Error, Result};
use std::{fs::OpenOptions, io::Write, path::Path};
use tracing::debug;

#[cfg(unix)]
/// Permission bits for a newly created image.
const IMAGE_MODE: u32 = 0o644;

/// Rewrites the file at `path` as a signed 512-byte boot block.
///
/// The size check happens before the file is opened for writing, so an
/// oversized input is left untouched.
pub fn sign_file<P: AsRef<Path>>(path: P) -> Result<BootBlock> {
    let path = path.as_ref();
    let data = utils::read_file(path)?;
    let block = BootBlock::new(&data)?;

    eprintln!(
        "boot block is {} bytes (max {MAX_PAYLOAD_SIZE})",
        block.payload_len()
    );

    write_image(path, block.as_bytes()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), size = block.payload_len(), "signed boot block");
    Ok(block)
}

fn write_image(path: &Path, image: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(IMAGE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(image)?;
    file.sync_all()
}
