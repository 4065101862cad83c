//! Article flattening.
//!
//! Turns the intermediate `TITLE:`/`TEXT:` record files into the final
//! one-article-per-line files the balance stage reads. Titles are dropped
//! and newlines inside an article collapse to spaces.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{error, info};

use crate::error::Error;

/// Flatten one record file into `dst`, returning the article count.
pub fn flatten_file(src: &Path, dst: &Path) -> Result<u64, Error> {
    let reader = BufReader::new(File::open(src)?);
    let mut out = BufWriter::new(File::create(dst)?);

    let mut articles = 0u64;
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.starts_with("TITLE:") {
            continue;
        } else if let Some(rest) = line.strip_prefix("TEXT:") {
            text = rest.trim().to_string();
        } else if line.starts_with('=') {
            articles += flush(&mut out, &mut text)?;
        } else {
            text.push(' ');
            text.push_str(line);
        }
    }
    // Trailing article without a closing separator.
    articles += flush(&mut out, &mut text)?;
    out.flush()?;

    Ok(articles)
}

fn flush(out: &mut impl Write, text: &mut String) -> Result<u64, Error> {
    let flat = text.trim();
    let written = if flat.is_empty() {
        0
    } else {
        writeln!(out, "{}", flat)?;
        1
    };
    text.clear();
    Ok(written)
}

/// Flatten every `*.txt` in `src` into a same-named file under `dst`.
pub fn flatten_dir(src: &Path, dst: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(dst)?;

    let mut total = 0u64;
    let mut files = 0u64;
    for entry in std::fs::read_dir(src)? {
        let path = entry?.path();
        if path.extension().map_or(true, |e| e != "txt") {
            continue;
        }
        let name = match path.file_name() {
            Some(n) => n.to_owned(),
            None => continue,
        };
        match flatten_file(&path, &dst.join(&name)) {
            Ok(count) => {
                info!("{:?}: {} articles", name, count);
                total += count;
                files += 1;
            }
            Err(e) => error!("{:?}: flattening failed, skipping: {:?}", name, e),
        }
    }

    info!("flattened {} articles over {} files", total, files);
    Ok(())
}
