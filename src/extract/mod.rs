/*! Extraction glue.

Everything that turns raw upstream data into the per-language text files the
balance stage consumes:

- [wiki]: WikiExtractor JSON shards -> `TITLE:`/`TEXT:` record files,
- [flatten]: record files -> one-article-per-line files,
- [crawl]: raw crawl exports -> capped `oscar_<lang>_50M.txt` files.
!*/
pub mod crawl;
pub mod flatten;
pub mod wiki;
