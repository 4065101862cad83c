//! Corpus balancing pipeline.
//!
//! Wires budget derivation, per-split assembly and reporting into one run:
//! derive the baseline budget, build every configured split inside its own
//! error boundary, then print the report and write the statistics CSV over
//! whatever splits succeeded.
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::balance::{assemble_split, derive_budget, Allocator, SplitConfig, DEFAULT_SPLITS};
use crate::error::Error;
use crate::lang::{LanguageTable, TABLE};
use crate::pipelines::pipeline::Pipeline;
use crate::report;

/// Builds every configured balanced split and its statistics.
pub struct BalanceCorpus {
    wiki_dir: PathBuf,
    crawl_dir: PathBuf,
    output_dir: PathBuf,
    seed: u64,
    table: LanguageTable,
    splits: Vec<SplitConfig>,
}

impl BalanceCorpus {
    pub fn new(wiki_dir: PathBuf, crawl_dir: PathBuf, output_dir: PathBuf, seed: u64) -> Self {
        Self {
            wiki_dir,
            crawl_dir,
            output_dir,
            seed,
            table: TABLE.clone(),
            splits: DEFAULT_SPLITS.to_vec(),
        }
    }

    /// Replace the default language table.
    pub fn with_table(mut self, table: LanguageTable) -> Self {
        self.table = table;
        self
    }

    /// Replace the default split configuration.
    pub fn with_splits(mut self, splits: Vec<SplitConfig>) -> Self {
        self.splits = splits;
        self
    }

    fn check_source_dir(dir: &Path, role: &str) -> Result<(), Error> {
        if dir.is_dir() {
            Ok(())
        } else {
            Err(Error::MissingConfig(format!(
                "{} directory {:?} does not exist",
                role, dir
            )))
        }
    }
}

impl Pipeline<()> for BalanceCorpus {
    fn run(&self) -> Result<(), Error> {
        // Pre-flight: both source roots must exist before anything is
        // written.
        Self::check_source_dir(&self.wiki_dir, "wiki source")?;
        Self::check_source_dir(&self.crawl_dir, "crawl source")?;

        let budget = derive_budget(&self.table, &self.splits)?;
        info!(
            "baseline language: {} ({} chars available)",
            budget.baseline_lang, budget.baseline_total
        );
        for plan in &budget.plans {
            info!(
                "split {}: {} chars per language -> {}",
                plan.name, plan.target_chars_per_language, plan.filename
            );
        }

        fs::create_dir_all(&self.output_dir)?;

        let allocator = Allocator::new(&self.wiki_dir, &self.crawl_dir);
        // One generator for the whole run keeps block order reproducible
        // across every split.
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut files = Vec::with_capacity(budget.plans.len());
        for plan in &budget.plans {
            match assemble_split(
                plan,
                &self.table,
                &allocator,
                &self.output_dir,
                budget.baseline_lang,
                &mut rng,
            ) {
                Ok(file) => files.push(file),
                Err(e) => error!("[{}] split failed, skipping: {:?}", plan.name, e),
            }
        }

        report::print_report(&files);
        report::write_csv(&files, &self.output_dir.join("balanced_statistics.csv"))?;

        Ok(())
    }
}
