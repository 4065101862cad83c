//! # Equicorpus
//!
//! Equicorpus prepares a language-balanced multilingual text corpus for
//! tokenizer training. Extraction subcommands turn Wikipedia dumps and
//! web-crawl exports into per-language text files; the `balance` subcommand
//! merges them into fixed-budget output files where every language
//! contributes the identical number of characters, plus a statistics CSV.
//!
//! ## Getting started
//!
//! ```sh
//! equicorpus 0.1.0
//! balanced multilingual corpus preparation tool.
//!
//! USAGE:
//!     equicorpus <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     balance         Build the balanced output files and their statistics
//!     cap-crawl       Cap per-language crawl exports at a character limit
//!     download        Download corpus files from a paths file
//!     extract-wiki    Extract article text from WikiExtractor JSON output
//!     flatten         Flatten extracted articles into one-line-per-article files
//!     help            Prints this message or the help of the given subcommand(s)
//! ```
use std::fs::File;
use std::io::Write;

use structopt::StructOpt;

use equicorpus::download::Downloader;
use equicorpus::error::Error;
use equicorpus::extract::{crawl, flatten, wiki};
use equicorpus::lang::TABLE;
use equicorpus::pipelines::{BalanceCorpus, Pipeline};

#[macro_use]
extern crate log;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Equicorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Equicorpus::Balance(b) => {
            let p = BalanceCorpus::new(b.wiki_dir, b.crawl_dir, b.output_dir, b.seed);
            p.run()?;
        }

        cli::Equicorpus::ExtractWiki(e) => {
            wiki::extract_all(&e.src, &e.dst, &langs_or_default(e.langs))?;
        }

        cli::Equicorpus::Flatten(f) => {
            flatten::flatten_dir(&f.src, &f.dst)?;
        }

        cli::Equicorpus::CapCrawl(c) => {
            crawl::cap_all(&c.src, &c.dst, &langs_or_default(c.langs), c.limit)?;
        }

        cli::Equicorpus::Download(d) => {
            let paths = File::open(d.paths_file)?;
            let dl = Downloader::from_paths_file(&paths, d.n_tasks.unwrap_or(4))?;
            let results = dl.download(&d.dst, d.offset).await;

            let mut error_file = File::create("errors.txt")?;

            // write eventual download errors
            for failure in results.iter().filter(|result| result.is_err()) {
                error!("Error during download:\n {:?}", failure);
                if let Err(Error::Download(e)) = failure {
                    if let Some(url) = e.url() {
                        writeln!(error_file, "{}", url)?;
                    }
                }
            }
        }
    };
    Ok(())
}

/// Requested language codes, or the built-in list when none were given.
fn langs_or_default(requested: Vec<String>) -> Vec<String> {
    if requested.is_empty() {
        TABLE.codes().map(str::to_owned).collect()
    } else {
        requested
    }
}
