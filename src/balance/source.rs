//! Capped source file loading.
//!
//! The balance stage never needs a whole source file, only a character
//! prefix, and it has to survive partial corpora. Reads are therefore capped
//! and every failure degrades to an empty string with a warning.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::warn;

/// Resolve `dir/name`, falling back to `dir/name.gz`.
pub fn resolve(dir: &Path, name: &str) -> PathBuf {
    let plain = dir.join(name);
    if plain.exists() {
        return plain;
    }
    let gz = dir.join(format!("{}.gz", name));
    if gz.exists() {
        gz
    } else {
        plain
    }
}

/// Read up to `max_chars` characters from `path` (`None` means the whole
/// file).
///
/// The cap counts Unicode scalar values, not bytes. A missing or unreadable
/// file yields an empty string and a warning, so one absent source never
/// aborts the run.
pub fn read_capped(path: &Path, max_chars: Option<usize>) -> String {
    match try_read(path, max_chars) {
        Ok(text) => text,
        Err(e) => {
            warn!("could not read {:?}: {}", path, e);
            String::new()
        }
    }
}

/// Open `path`, transparently decoding gzip when the extension says so.
pub fn open_reader(path: &Path) -> std::io::Result<Box<dyn Read>> {
    let f = File::open(path)?;
    if path.extension().map_or(false, |e| e == "gz") {
        Ok(Box::new(MultiGzDecoder::new(f)))
    } else {
        Ok(Box::new(f))
    }
}

fn try_read(path: &Path, max_chars: Option<usize>) -> std::io::Result<String> {
    let mut reader = BufReader::new(open_reader(path)?);

    let mut out = String::new();
    let mut remaining = match max_chars {
        Some(n) => n,
        None => {
            reader.read_to_string(&mut out)?;
            return Ok(out);
        }
    };

    // Line-buffered so the crawl files (tens of millions of chars) are never
    // loaded past the cap.
    let mut line = String::new();
    while remaining > 0 {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let chars = line.chars().count();
        if chars <= remaining {
            out.push_str(&line);
            remaining -= chars;
        } else {
            out.extend(line.chars().take(remaining));
            remaining = 0;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    #[test]
    fn reads_whole_file_without_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "first line\nsecond line\n").unwrap();

        assert_eq!(read_capped(&path, None), "first line\nsecond line\n");
    }

    #[test]
    fn cap_cuts_mid_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "abcdef\nghijkl\n").unwrap();

        // 7 chars covers the first line + newline, then 2 of the second.
        assert_eq!(read_capped(&path, Some(9)), "abcdef\ngh");
    }

    #[test]
    fn cap_counts_chars_not_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "héllo wörld").unwrap();

        let text = read_capped(&path, Some(5));
        assert_eq!(text, "héllo");
        assert_eq!(text.chars().count(), 5);
    }

    #[test]
    fn zero_cap_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "something").unwrap();

        assert_eq!(read_capped(&path, Some(0)), "");
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_capped(&dir.path().join("nope.txt"), Some(100)), "");
    }

    #[test]
    fn reads_gzip_transparently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all("compressed content\n".as_bytes()).unwrap();
        enc.finish().unwrap();

        assert_eq!(read_capped(&path, Some(10)), "compressed");
        assert_eq!(read_capped(&path, None), "compressed content\n");
    }

    #[test]
    fn resolve_prefers_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x.txt"), "plain").unwrap();
        std::fs::write(dir.path().join("x.txt.gz"), "gz").unwrap();

        assert_eq!(resolve(dir.path(), "x.txt"), dir.path().join("x.txt"));
    }

    #[test]
    fn resolve_falls_back_to_gz() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("y.txt.gz"), "gz").unwrap();

        assert_eq!(resolve(dir.path(), "y.txt"), dir.path().join("y.txt.gz"));
    }
}
