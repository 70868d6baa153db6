//! Sample text loading
//!
//! The sample text is optional. A missing, oversized, or unreadable file
//! leaves the editor empty and is only logged.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::debug;

/// Path of `file_name` next to the running executable
pub fn sample_text_path(file_name: &str) -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(file_name))
}

/// Load a sample text file smaller than `max_bytes`
pub fn load_sample_text(path: &Path, max_bytes: u64) -> Option<String> {
    match read_sample_text(path, max_bytes) {
        Ok(text) => {
            debug!("Loaded sample text from {} ({} chars)", path.display(), text.chars().count());
            Some(text)
        }
        Err(e) => {
            debug!("Skipping sample text: {:#}", e);
            None
        }
    }
}

fn read_sample_text(path: &Path, max_bytes: u64) -> anyhow::Result<String> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let metadata = file.metadata().with_context(|| format!("cannot stat {}", path.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }

    // The stat length is not trusted; read at most `max_bytes`
    let mut bytes = Vec::new();
    file.take(max_bytes)
        .read_to_end(&mut bytes)
        .with_context(|| format!("cannot read {}", path.display()))?;
    if bytes.len() as u64 >= max_bytes {
        bail!("{} reaches the {} byte limit", path.display(), max_bytes);
    }
    Ok(decode_text(&bytes))
}

/// Decode UTF-8 (BOM optional) or BOM-marked UTF-16
fn decode_text(bytes: &[u8]) -> String {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SAMPLE_TEXT_BYTES;
    use std::fs;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fontscope-sample-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_small_utf8_file() {
        let path = temp_file("small.txt", "Sphinx of black quartz\n".as_bytes());
        assert_eq!(
            load_sample_text(&path, MAX_SAMPLE_TEXT_BYTES).as_deref(),
            Some("Sphinx of black quartz\n")
        );
    }

    #[test]
    fn test_oversized_file_is_skipped() {
        let path = temp_file("large.txt", &vec![b'a'; 70000]);
        assert_eq!(load_sample_text(&path, MAX_SAMPLE_TEXT_BYTES), None);
    }

    #[test]
    fn test_limit_is_exclusive() {
        let path = temp_file("exact.txt", &vec![b'a'; 16]);
        assert_eq!(load_sample_text(&path, 16), None);
        assert!(load_sample_text(&path, 17).is_some());
    }

    #[test]
    fn test_read_stops_at_limit() {
        let path = temp_file("bounded.txt", &vec![b'a'; 1 << 20]);
        let err = read_sample_text(&path, 8).unwrap_err();
        assert!(format!("{:#}", err).contains("reaches the 8 byte limit"));

        let path = temp_file("under.txt", b"1234567");
        assert_eq!(read_sample_text(&path, 8).unwrap(), "1234567");
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let path = std::env::temp_dir().join("fontscope-definitely-missing.txt");
        assert_eq!(load_sample_text(&path, MAX_SAMPLE_TEXT_BYTES), None);
    }

    #[test]
    fn test_directory_is_skipped() {
        assert_eq!(load_sample_text(&std::env::temp_dir(), MAX_SAMPLE_TEXT_BYTES), None);
    }

    #[test]
    fn test_bom_variants_decode() {
        assert_eq!(decode_text(&[0xEF, 0xBB, 0xBF, b'h', b'i']), "hi");
        assert_eq!(decode_text(&[0xFF, 0xFE, b'h', 0, b'i', 0]), "hi");
        assert_eq!(decode_text(&[0xFE, 0xFF, 0, b'h', 0, b'i']), "hi");
        assert_eq!(decode_text(&[b'a', 0xFF, b'b']), "a\u{FFFD}b");
    }

    #[test]
    fn test_path_is_beside_executable() {
        let path = sample_text_path("sampletext.txt").expect("executable path");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("sampletext.txt"));
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(path.parent(), Some(exe_dir.as_path()));
    }
}
