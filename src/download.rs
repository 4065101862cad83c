//! Remote corpus retrieval.
//!
//! Fetches the raw per-language source files (crawl exports, dump shards)
//! listed in a paths file, one absolute url per line. Bodies are streamed
//! to disk so large exports never sit in memory.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bytes::Buf;
use futures_util::StreamExt;
use log::{debug, log_enabled, Level};
use reqwest::Url;

use crate::error::Error;

/// Holds urls to download and the concurrency budget for the requests.
pub struct Downloader {
    urls: Vec<Url>,
    n_tasks: usize,
}

impl Downloader {
    /// Construct the url list from a paths file (one url per line).
    ///
    /// Unreadable lines and unparsable urls are reported and dropped rather
    /// than failing the whole batch.
    pub fn from_paths_file(paths_file: &File, n_tasks: usize) -> Result<Self, Error> {
        let f = BufReader::new(paths_file);

        // get all lines and partition by result state
        let (lines, failures): (Vec<_>, Vec<_>) = f.lines().partition(Result::is_ok);

        if log_enabled!(Level::Debug) {
            debug!(
                "Got {valid}/{total} valid lines",
                valid = lines.len(),
                total = lines.len() + failures.len()
            )
        }

        for failure in failures {
            eprintln!("{:?}", failure.unwrap_err());
        }

        // in the same fashion, attempt to parse urls and collect failures
        let (urls, failures): (Vec<_>, Vec<_>) = lines
            .into_iter()
            .map(|line| Url::parse(line.unwrap().trim()))
            .partition(Result::is_ok);

        if log_enabled!(Level::Debug) {
            debug!(
                "Got {valid}/{total} valid URLs",
                valid = urls.len(),
                total = urls.len() + failures.len()
            )
        }

        for failure in failures {
            eprintln!("{:?}", failure.unwrap_err());
        }

        let urls = urls.into_iter().map(Result::unwrap).collect();

        Ok(Downloader { urls, n_tasks })
    }

    /// Number of urls queued for download.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Download everything into `dst`, skipping the first `offset` urls.
    ///
    /// Up to `n_tasks` requests run concurrently. Each entry of the returned
    /// vector is the outcome of one url, failures included.
    pub async fn download(&self, dst: &Path, offset: Option<usize>) -> Vec<Result<PathBuf, Error>> {
        let client = reqwest::Client::new();

        futures_util::stream::iter(
            self.urls
                .iter()
                .skip(offset.unwrap_or(0))
                .enumerate()
                .map(|(id, url)| save_url(&client, url, dst, id)),
        )
        .buffer_unordered(self.n_tasks)
        .collect()
        .await
    }
}

/// Stream one url into `dst`, naming the file after the last path segment.
async fn save_url(
    client: &reqwest::Client,
    url: &Url,
    dst: &Path,
    id: usize,
) -> Result<PathBuf, Error> {
    debug!("downloading {}", url);
    let resp = client.get(url.clone()).send().await?.error_for_status()?;

    let name = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{}.txt", id));
    let path = dst.join(name);

    let mut file = File::create(&path)?;
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        std::io::copy(&mut chunk.reader(), &mut file)?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::io::{Seek, Write};

    use super::*;

    #[test]
    fn parses_paths_file() {
        let mut f = tempfile::tempfile().unwrap();
        writeln!(f, "https://example.org/exports/sw.jsonl.gz").unwrap();
        writeln!(f, "not a url at all").unwrap();
        writeln!(f, "https://example.org/exports/yo.jsonl.gz").unwrap();
        f.rewind().unwrap();

        let dl = Downloader::from_paths_file(&f, 4).unwrap();
        assert_eq!(dl.len(), 2);
    }

    #[test]
    fn empty_paths_file() {
        let f = tempfile::tempfile().unwrap();
        let dl = Downloader::from_paths_file(&f, 4).unwrap();
        assert!(dl.is_empty());
    }
}
