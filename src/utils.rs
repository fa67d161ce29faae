use super::{Error, Result};
use bytes::Bytes;
use std::{fs, io::BufRead, path::Path};

/// Reads every line from `r`, dropping the `\n` or `\r\n` terminator.
/// A trailing `\r` on an unterminated final line is dropped too.
/// Lines are raw bytes; no encoding is assumed.
pub fn read_lines<R: BufRead>(r: &mut R) -> Result<Vec<Vec<u8>>> {
    let mut lines = vec![];
    let mut buf = vec![];

    while r.read_until(b'\n', &mut buf)? > 0 {
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        lines.push(std::mem::take(&mut buf));
    }

    Ok(lines)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Bytes> {
    let path = path.as_ref();
    fs::read(path).map(Bytes::from).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
