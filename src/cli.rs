//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "equicorpus", about = "balanced multilingual corpus preparation tool.")]
/// Holds every command that is callable by the `equicorpus` command.
pub enum Equicorpus {
    #[structopt(about = "Build the balanced output files and their statistics")]
    Balance(Balance),
    #[structopt(about = "Extract article text from WikiExtractor JSON output")]
    ExtractWiki(ExtractWiki),
    #[structopt(about = "Flatten extracted articles into one-line-per-article files")]
    Flatten(Flatten),
    #[structopt(about = "Cap per-language crawl exports at a character limit")]
    CapCrawl(CapCrawl),
    #[structopt(about = "Download corpus files from a paths file")]
    Download(Download),
}

#[derive(Debug, StructOpt)]
/// Balance command and parameters.
pub struct Balance {
    #[structopt(
        parse(from_os_str),
        long = "wiki-dir",
        help = "directory holding <lang>_articles.txt files"
    )]
    pub wiki_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "crawl-dir",
        help = "directory holding oscar_<lang>_50M.txt files"
    )]
    pub crawl_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output-dir",
        help = "destination of balanced files and statistics"
    )]
    pub output_dir: PathBuf,
    #[structopt(long = "seed", default_value = "42", help = "block shuffle seed")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
/// ExtractWiki command and parameters.
pub struct ExtractWiki {
    #[structopt(
        parse(from_os_str),
        help = "WikiExtractor output root (one folder per language)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of <lang>_articles.txt files")]
    pub dst: PathBuf,
    #[structopt(
        long = "langs",
        help = "language codes to process. Default is the built-in language list."
    )]
    pub langs: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Flatten command and parameters.
pub struct Flatten {
    #[structopt(parse(from_os_str), help = "directory of TITLE/TEXT record files")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of flattened article files")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// CapCrawl command and parameters.
pub struct CapCrawl {
    #[structopt(parse(from_os_str), help = "directory of raw per-language crawl exports")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of capped oscar_<lang>_50M.txt files")]
    pub dst: PathBuf,
    #[structopt(
        long = "limit",
        default_value = "50000000",
        help = "maximum characters per language"
    )]
    pub limit: u64,
    #[structopt(
        long = "langs",
        help = "language codes to process. Default is the built-in language list."
    )]
    pub langs: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
pub struct Download {
    #[structopt(parse(from_os_str), help = "path to file listing one url per line")]
    pub paths_file: PathBuf,
    #[structopt(parse(from_os_str), help = "download destination")]
    pub dst: PathBuf,
    #[structopt(short = "t", help = "number of concurrent downloads. Default is 4.")]
    pub n_tasks: Option<usize>,
    #[structopt(short = "o", help = "number of urls to skip. Default is 0.")]
    pub offset: Option<usize>,
}
