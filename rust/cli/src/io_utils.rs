//! File helpers shared by the commands.
//!
//! Paths ending in `.zst` are read and written through Zstandard; anything
//! else is plain UTF-8. A leading byte order mark is dropped on read.

use std::fs;
use std::io;
use std::path::Path;

const ZSTD_LEVEL: i32 = 3;

fn is_zst(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// Reads a text file, decompressing `.zst` input.
///
/// # Example
///
/// ```rust,no_run
/// # use pokersim_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("hands.jsonl".as_ref()).unwrap();
/// let packed = read_text_auto("hands.jsonl.zst".as_ref()).unwrap();
/// ```
pub fn read_text_auto(path: &Path) -> io::Result<String> {
    let mut content = if is_zst(path) {
        let comp = fs::read(path)?;
        let dec = zstd::stream::decode_all(comp.as_slice())?;
        String::from_utf8(dec).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    } else {
        fs::read_to_string(path)?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Writes `text` to `path`, compressing when the path ends in `.zst`.
/// Missing parent directories are created.
pub fn write_text_auto(path: &Path, text: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    if is_zst(path) {
        let comp = zstd::stream::encode_all(text.as_bytes(), ZSTD_LEVEL)?;
        fs::write(path, comp)
    } else {
        fs::write(path, text)
    }
}

pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
