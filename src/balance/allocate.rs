//! Per-language source allocation.
//!
//! Decides how many characters of a language's budget come from Wikipedia
//! and how many from the crawl export, then loads and merges the two
//! prefixes. Planning is a pure function so every boundary can be unit
//! tested; execution is the only part that touches the filesystem.
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::balance::interleave::{interleave, CHUNK_SIZE};
use crate::balance::source::{read_capped, resolve};
use crate::lang::LanguageProfile;

/// Characters to request from each source for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPlan {
    pub wiki_chars: u64,
    pub crawl_chars: u64,
}

impl AllocationPlan {
    pub fn total(&self) -> u64 {
        self.wiki_chars + self.crawl_chars
    }
}

/// Split `chars_needed` across the two sources.
///
/// Prefers an even split, with the odd remainder going to crawl. The even
/// split only applies when crawl can also absorb that remainder; otherwise
/// the side with surplus covers the shortfall. When neither side alone can
/// cover the budget, both are drained in wiki-then-crawl order, which still
/// reaches the budget whenever the combined availability does.
pub fn plan_allocation(
    chars_needed: u64,
    wiki_available: u64,
    crawl_available: u64,
) -> AllocationPlan {
    if crawl_available == 0 {
        return AllocationPlan {
            wiki_chars: chars_needed.min(wiki_available),
            crawl_chars: 0,
        };
    }
    if wiki_available == 0 {
        return AllocationPlan {
            wiki_chars: 0,
            crawl_chars: chars_needed.min(crawl_available),
        };
    }

    let half = chars_needed / 2;
    if half <= wiki_available && chars_needed - half <= crawl_available {
        return AllocationPlan {
            wiki_chars: half,
            crawl_chars: chars_needed - half,
        };
    }

    if wiki_available >= chars_needed {
        let crawl_chars = crawl_available.min(half);
        AllocationPlan {
            wiki_chars: chars_needed - crawl_chars,
            crawl_chars,
        }
    } else if crawl_available >= chars_needed {
        let wiki_chars = wiki_available.min(half);
        AllocationPlan {
            wiki_chars,
            crawl_chars: chars_needed - wiki_chars,
        }
    } else {
        let wiki_chars = wiki_available.min(chars_needed);
        AllocationPlan {
            wiki_chars,
            crawl_chars: crawl_available.min(chars_needed - wiki_chars),
        }
    }
}

/// Provenance of one language's contribution to a split.
#[derive(Debug, Clone)]
pub struct AllocationResult {
    pub language: &'static str,
    pub target_chars: u64,
    pub wiki_chars: u64,
    pub crawl_chars: u64,
    pub total_chars: u64,
}

/// Executes allocations against the source directories.
pub struct Allocator {
    wiki_dir: PathBuf,
    crawl_dir: PathBuf,
}

impl Allocator {
    pub fn new(wiki_dir: &Path, crawl_dir: &Path) -> Self {
        Self {
            wiki_dir: wiki_dir.to_path_buf(),
            crawl_dir: crawl_dir.to_path_buf(),
        }
    }

    /// Gather `chars_needed` characters for `profile`, mixing both sources.
    ///
    /// A source whose file is absent counts as zero availability, so the
    /// budget shifts to the other source instead of failing. The result
    /// reflects the characters actually loaded; a file shorter than the
    /// table claims shows up as a shortfall in the report, never as an
    /// error.
    pub fn allocate(
        &self,
        profile: &LanguageProfile,
        chars_needed: u64,
    ) -> (String, AllocationResult) {
        let wiki_path = resolve(&self.wiki_dir, &format!("{}_articles.txt", profile.code));
        let crawl_path = resolve(&self.crawl_dir, &format!("oscar_{}_50M.txt", profile.code));

        let wiki_available = if profile.wiki_available > 0 && !wiki_path.exists() {
            warn!("[{}] wiki source missing: {:?}", profile.code, wiki_path);
            0
        } else {
            profile.wiki_available
        };
        let crawl_available = if profile.crawl_available > 0 && !crawl_path.exists() {
            warn!("[{}] crawl source missing: {:?}", profile.code, crawl_path);
            0
        } else {
            profile.crawl_available
        };

        let plan = plan_allocation(chars_needed, wiki_available, crawl_available);
        debug!(
            "[{}] plan: {} wiki + {} crawl of {} needed",
            profile.code, plan.wiki_chars, plan.crawl_chars, chars_needed
        );

        let wiki_text = if plan.wiki_chars > 0 {
            read_capped(&wiki_path, Some(plan.wiki_chars as usize))
        } else {
            String::new()
        };
        let crawl_text = if plan.crawl_chars > 0 {
            read_capped(&crawl_path, Some(plan.crawl_chars as usize))
        } else {
            String::new()
        };

        let wiki_chars = wiki_text.chars().count() as u64;
        let crawl_chars = crawl_text.chars().count() as u64;
        let mut total_chars = wiki_chars + crawl_chars;

        let mut merged = interleave(&wiki_text, &crawl_text, CHUNK_SIZE);

        // Safety net: the plan never requests more than chars_needed, but a
        // merged overshoot must not leak into the output file.
        if total_chars > chars_needed {
            warn!(
                "[{}] loaded {} chars, truncating to {}",
                profile.code, total_chars, chars_needed
            );
            merged = merged.chars().take(chars_needed as usize).collect();
            total_chars = chars_needed;
        }

        let result = AllocationResult {
            language: profile.code,
            target_chars: chars_needed,
            wiki_chars,
            crawl_chars,
            total_chars,
        };
        (merged, result)
    }
}
