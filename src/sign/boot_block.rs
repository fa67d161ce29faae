use super::{Error, Result};

pub const BOOT_BLOCK_SIZE: usize = 512;
pub const MAX_PAYLOAD_SIZE: usize = BOOT_BLOCK_SIZE - SIGNATURE.len();
pub const SIGNATURE: [u8; 2] = [0x55, 0xAA];

/// A 512-byte boot sector: payload, zero padding, then `0x55 0xAA`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BootBlock {
    buf: [u8; BOOT_BLOCK_SIZE],
    payload_len: usize,
}

impl BootBlock {
    pub fn new(payload: &[u8]) -> Result<Self> {
        let size = payload.len();
        if size > MAX_PAYLOAD_SIZE {
            return Err(Error::TooLarge {
                size,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        let mut buf = [0u8; BOOT_BLOCK_SIZE];
        buf[..size].copy_from_slice(payload);
        buf[MAX_PAYLOAD_SIZE..].copy_from_slice(&SIGNATURE);

        Ok(Self {
            buf,
            payload_len: size,
        })
    }

    pub fn as_bytes(&self) -> &[u8; BOOT_BLOCK_SIZE] {
        &self.buf
    }

    pub fn payload_len(&self) -> usize {
        self.payload_len
    }
}
