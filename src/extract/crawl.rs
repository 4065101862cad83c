//! Crawl export capping.
//!
//! Streams documents out of raw per-language crawl exports and writes at
//! most `limit` characters per language, one document per line, truncating
//! the final document at the boundary. The output feeds the balance stage
//! as `oscar_<lang>_50M.txt`.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rayon::prelude::*;
use serde::Deserialize;

use crate::balance::source::open_reader;
use crate::error::Error;

/// Default per-language character cap.
pub const DEFAULT_CAP: u64 = 50_000_000;

/// Raw exports are either JSONL documents or plain one-document-per-line
/// text, each optionally gzipped.
const EXPORT_EXTENSIONS: [&str; 4] = ["jsonl.gz", "jsonl", "txt.gz", "txt"];

#[derive(Debug, Deserialize)]
struct CrawlDocument {
    #[serde(alias = "text")]
    content: String,
}

/// Chars and documents written for one language.
#[derive(Debug, Default, Clone, Copy)]
pub struct CapStats {
    pub chars: u64,
    pub docs: u64,
}

fn find_export(src: &Path, lang: &str) -> Option<PathBuf> {
    EXPORT_EXTENSIONS
        .iter()
        .map(|ext| src.join(format!("{}.{}", lang, ext)))
        .find(|p| p.exists())
}

/// Cap one language's export into `<dst>/oscar_<lang>_50M.txt`.
pub fn cap_language(src: &Path, dst: &Path, lang: &str, limit: u64) -> Result<CapStats, Error> {
    let export = match find_export(src, lang) {
        Some(p) => p,
        None => {
            warn!("[{}] no crawl export under {:?}", lang, src);
            return Ok(CapStats::default());
        }
    };
    let jsonl = export
        .file_name()
        .map_or(false, |n| n.to_string_lossy().contains(".jsonl"));

    let reader = BufReader::new(open_reader(&export)?);
    let out_path = dst.join(format!("oscar_{}_50M.txt", lang));
    let mut out = BufWriter::new(File::create(&out_path)?);

    let mut stats = CapStats::default();
    for line in reader.lines() {
        let line = line?;
        let text = if jsonl {
            match serde_json::from_str::<CrawlDocument>(&line) {
                Ok(doc) => doc.content,
                Err(e) => {
                    warn!("[{}] bad JSONL line: {}", lang, e);
                    continue;
                }
            }
        } else {
            line
        };

        // One document per line: inner newlines collapse to spaces, which
        // keeps the character count unchanged.
        let text = text.trim().replace('\n', " ");
        if text.is_empty() {
            continue;
        }

        let remaining = limit - stats.chars;
        if remaining == 0 {
            break;
        }

        let chars = text.chars().count() as u64;
        if chars > remaining {
            let truncated: String = text.chars().take(remaining as usize).collect();
            writeln!(out, "{}", truncated)?;
            stats.chars += remaining;
            stats.docs += 1;
            break;
        }

        writeln!(out, "{}", text)?;
        stats.chars += chars;
        stats.docs += 1;
    }
    out.flush()?;

    info!(
        "[{}] wrote {} chars over {} documents -> {:?}",
        lang, stats.chars, stats.docs, out_path
    );
    Ok(stats)
}

/// Cap every requested language in parallel.
///
/// A language that fails is logged and skipped; the others still run.
pub fn cap_all(src: &Path, dst: &Path, langs: &[String], limit: u64) -> Result<(), Error> {
    std::fs::create_dir_all(dst)?;

    langs.par_iter().for_each(|lang| {
        if let Err(e) = cap_language(src, dst, lang, limit) {
            error!("[{}] capping failed, skipping: {:?}", lang, e);
        }
    });
    Ok(())
}
