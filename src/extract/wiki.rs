//! WikiExtractor output processing.
//!
//! Consumes the JSON produced by WikiExtractor (one `{"title", "text"}`
//! object per line inside `wiki_*` shard files), filters junk pages and
//! writes per-language article files in the intermediate `TITLE:`/`TEXT:`
//! record format.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rayon::prelude::*;
use serde::Deserialize;

use crate::error::Error;

/// Record boundary written between articles.
const SEPARATOR_WIDTH: usize = 80;

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: String,
    #[serde(default)]
    text: String,
}

/// Page filter: drops stubs, disambiguation pages and list articles.
fn keep(title: &str, text: &str) -> bool {
    if title.is_empty() || text.is_empty() {
        return false;
    }
    if text.chars().count() <= 100 {
        return false;
    }
    if title.to_lowercase().ends_with("disambiguation") {
        return false;
    }
    if title.starts_with("List of") {
        return false;
    }
    let head: String = text.chars().take(200).collect::<String>().to_lowercase();
    if head.contains("may refer to:") {
        return false;
    }
    true
}

/// Counts for one processed language.
#[derive(Debug, Default, Clone, Copy)]
pub struct WikiStats {
    pub kept: u64,
    pub dropped: u64,
}

/// Process one language's WikiExtractor tree into `<dst>/<lang>_articles.txt`.
///
/// Shard files are discovered under `<src>/<lang>/**/wiki_*`. Lines that do
/// not parse as JSON are logged and skipped.
pub fn process_language(src: &Path, dst: &Path, lang: &str) -> Result<WikiStats, Error> {
    let pattern = format!("{}/{}/**/wiki_*", src.display(), lang);
    let shards: Vec<PathBuf> = glob::glob(&pattern)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();

    if shards.is_empty() {
        warn!("[{}] no wiki_* shards under {:?}", lang, src.join(lang));
        return Ok(WikiStats::default());
    }

    let out_path = dst.join(format!("{}_articles.txt", lang));
    let mut out = BufWriter::new(File::create(&out_path)?);
    let mut stats = WikiStats::default();

    for shard in shards {
        let reader = BufReader::new(File::open(&shard)?);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let article: Article = match serde_json::from_str(&line) {
                Ok(a) => a,
                Err(e) => {
                    warn!("[{}] bad JSON line in {:?}: {}", lang, shard, e);
                    stats.dropped += 1;
                    continue;
                }
            };

            let title = article.title.trim();
            let text = article.text.trim();
            if keep(title, text) {
                write!(
                    out,
                    "TITLE: {}\nTEXT: {}\n{}\n\n",
                    title,
                    text,
                    "=".repeat(SEPARATOR_WIDTH)
                )?;
                stats.kept += 1;
            } else {
                stats.dropped += 1;
            }
        }
    }
    out.flush()?;

    info!(
        "[{}] kept {} articles ({} dropped) -> {:?}",
        lang, stats.kept, stats.dropped, out_path
    );
    Ok(stats)
}

/// Process every requested language in parallel.
///
/// A language that fails is logged and skipped; the others still run.
pub fn extract_all(src: &Path, dst: &Path, langs: &[String]) -> Result<(), Error> {
    std::fs::create_dir_all(dst)?;

    let total: u64 = langs
        .par_iter()
        .filter_map(|lang| match process_language(src, dst, lang) {
            Ok(stats) => Some(stats.kept),
            Err(e) => {
                error!("[{}] extraction failed, skipping: {:?}", lang, e);
                None
            }
        })
        .sum();

    info!("extracted {} articles over {} languages", total, langs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_junk_pages() {
        let long = "word ".repeat(50);
        assert!(keep("Lagos", &long));
        assert!(!keep("", &long));
        assert!(!keep("Lagos", ""));
        assert!(!keep("Lagos", "too short"));
        assert!(!keep("Mercury (disambiguation)", &long));
        assert!(!keep("Pluto Disambiguation", &long));
        assert!(!keep("List of rivers", &long));

        let referral = format!("Mercury may refer to: {}", long);
        assert!(!keep("Mercury", &referral));
        // The referral marker only counts near the top of the page.
        let late = format!("{} may refer to: late mention", "x".repeat(300));
        assert!(keep("Mercury", &late));
    }

    #[test]
    fn processes_shards_into_records() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let shard_dir = src.path().join("yo").join("AA");
        std::fs::create_dir_all(&shard_dir).unwrap();

        let body = "b".repeat(150);
        let lines = format!(
            "{}\n{}\nnot json at all\n",
            serde_json::json!({"title": "Kept page", "text": body}),
            serde_json::json!({"title": "Stub", "text": "tiny"}),
        );
        std::fs::write(shard_dir.join("wiki_00"), lines).unwrap();

        let stats = process_language(src.path(), dst.path(), "yo").unwrap();
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.dropped, 2);

        let out = std::fs::read_to_string(dst.path().join("yo_articles.txt")).unwrap();
        assert!(out.starts_with("TITLE: Kept page\nTEXT: "));
        assert!(out.contains(&"=".repeat(80)));
    }

    #[test]
    fn missing_language_dir_is_empty_not_fatal() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        let stats = process_language(src.path(), dst.path(), "sw").unwrap();
        assert_eq!(stats.kept, 0);
        assert!(!dst.path().join("sw_articles.txt").exists());
    }
}
