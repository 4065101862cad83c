//! Split assembly: allocate per language, wrap, shuffle, write.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::balance::allocate::{AllocationResult, Allocator};
use crate::balance::baseline::SplitPlan;
use crate::error::Error;
use crate::lang::LanguageTable;

/// Summary of one written balanced file.
///
/// `actual_total_chars` counts block bodies only; the file on disk is larger
/// by the per-block label overhead, which stays out of the balance math.
#[derive(Debug, Clone)]
pub struct BalancedFile {
    pub filename: String,
    pub target_chars_per_language: u64,
    pub target_total_chars: u64,
    pub actual_total_chars: u64,
    pub baseline_lang: &'static str,
    pub results: Vec<AllocationResult>,
    pub block_order: Vec<&'static str>,
}

/// Build one balanced output file.
///
/// Languages are allocated in table order, wrapped as labeled blocks, then
/// the block order is shuffled with the caller's generator before writing.
/// Languages that contributed nothing produce no block but still get a
/// result row, so the statistics stay complete.
pub fn assemble_split(
    plan: &SplitPlan,
    table: &LanguageTable,
    allocator: &Allocator,
    out_dir: &Path,
    baseline_lang: &'static str,
    rng: &mut StdRng,
) -> Result<BalancedFile, Error> {
    info!(
        "[{}] assembling {} ({} chars per language)",
        plan.name, plan.filename, plan.target_chars_per_language
    );

    let mut results = Vec::with_capacity(table.len());
    let mut blocks: Vec<(&'static str, String)> = Vec::with_capacity(table.len());

    for profile in table.iter() {
        let (text, result) = allocator.allocate(profile, plan.target_chars_per_language);
        debug!("[{}] {} chars collected", profile.code, result.total_chars);
        if result.total_chars > 0 {
            blocks.push((profile.code, text));
        }
        results.push(result);
    }

    blocks.shuffle(rng);

    let path = out_dir.join(plan.filename);
    let mut out = File::create(&path)?;
    let mut block_order = Vec::with_capacity(blocks.len());
    let mut actual_total_chars = 0u64;
    for (code, text) in &blocks {
        actual_total_chars += text.chars().count() as u64;
        write!(out, "# Language: {}\n{}\n\n", code.to_uppercase(), text)?;
        block_order.push(*code);
    }

    info!(
        "[{}] wrote {:?}: {} chars of body text over {} blocks",
        plan.name,
        path,
        actual_total_chars,
        block_order.len()
    );

    Ok(BalancedFile {
        filename: plan.filename.to_string(),
        target_chars_per_language: plan.target_chars_per_language,
        target_total_chars: plan.target_chars_per_language * table.len() as u64,
        actual_total_chars,
        baseline_lang,
        results,
        block_order,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use crate::lang::{LanguageProfile, LanguageTable};

    use super::*;

    fn plan() -> SplitPlan {
        SplitPlan {
            name: "test",
            target_chars_per_language: 1000,
            filename: "out.txt",
        }
    }

    #[test]
    fn writes_labeled_blocks() {
        let wiki_dir = tempfile::tempdir().unwrap();
        let crawl_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        std::fs::write(wiki_dir.path().join("xx_articles.txt"), "w".repeat(1000)).unwrap();

        let table = LanguageTable::new(vec![LanguageProfile::new("xx", 1000, 0)]);
        let allocator = Allocator::new(wiki_dir.path(), crawl_dir.path());
        let mut rng = StdRng::seed_from_u64(42);

        let file = assemble_split(&plan(), &table, &allocator, out_dir.path(), "xx", &mut rng).unwrap();

        assert_eq!(file.actual_total_chars, 1000);
        assert_eq!(file.block_order, vec!["xx"]);

        let written = std::fs::read_to_string(out_dir.path().join("out.txt")).unwrap();
        assert_eq!(written, format!("# Language: XX\n{}\n\n", "w".repeat(1000)));
    }

    #[test]
    fn empty_language_gets_row_but_no_block() {
        let wiki_dir = tempfile::tempdir().unwrap();
        let crawl_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        std::fs::write(wiki_dir.path().join("aa_articles.txt"), "a".repeat(1000)).unwrap();

        let table = LanguageTable::new(vec![
            LanguageProfile::new("aa", 1000, 0),
            LanguageProfile::new("zz", 500, 500),
        ]);
        let allocator = Allocator::new(wiki_dir.path(), crawl_dir.path());
        let mut rng = StdRng::seed_from_u64(42);

        let file = assemble_split(&plan(), &table, &allocator, out_dir.path(), "zz", &mut rng).unwrap();

        // zz has no files on disk, so no block, but its result is present.
        assert_eq!(file.block_order, vec!["aa"]);
        assert_eq!(file.results.len(), 2);
        let zz = file.results.iter().find(|r| r.language == "zz").unwrap();
        assert_eq!(zz.total_chars, 0);
        assert_eq!(zz.target_chars, 1000);
    }

    #[test]
    fn same_seed_same_bytes() {
        let wiki_dir = tempfile::tempdir().unwrap();
        let crawl_dir = tempfile::tempdir().unwrap();
        for code in ["aa", "bb", "cc", "dd"] {
            std::fs::write(
                wiki_dir.path().join(format!("{}_articles.txt", code)),
                code.repeat(600),
            )
            .unwrap();
            std::fs::write(
                crawl_dir.path().join(format!("oscar_{}_50M.txt", code)),
                code.repeat(600),
            )
            .unwrap();
        }
        let table = LanguageTable::new(vec![
            LanguageProfile::new("aa", 1200, 1200),
            LanguageProfile::new("bb", 1200, 1200),
            LanguageProfile::new("cc", 1200, 1200),
            LanguageProfile::new("dd", 1200, 1200),
        ]);
        let allocator = Allocator::new(wiki_dir.path(), crawl_dir.path());

        let out_a = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let file_a = assemble_split(&plan(), &table, &allocator, out_a.path(), "aa", &mut rng).unwrap();

        let out_b = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let file_b = assemble_split(&plan(), &table, &allocator, out_b.path(), "aa", &mut rng).unwrap();

        assert_eq!(file_a.block_order, file_b.block_order);
        assert_eq!(
            std::fs::read(out_a.path().join("out.txt")).unwrap(),
            std::fs::read(out_b.path().join("out.txt")).unwrap()
        );
    }
}
