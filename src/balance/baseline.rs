//! Split budget derivation.
//!
//! Every output file gets the same per-language character budget, capped by
//! the scarcest language so that perfect balance is reachable.
use crate::error::Error;
use crate::lang::LanguageTable;

/// One configured output split: a fraction of the baseline budget and the
/// file it writes to.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    pub name: &'static str,
    pub ratio: f64,
    pub filename: &'static str,
}

/// Splits produced by a default run.
pub const DEFAULT_SPLITS: [SplitConfig; 3] = [
    SplitConfig {
        name: "small",
        ratio: 0.9,
        filename: "final_balanced_small.txt",
    },
    SplitConfig {
        name: "medium",
        ratio: 1.0,
        filename: "final_balanced_medium.txt",
    },
    SplitConfig {
        name: "large",
        ratio: 1.0,
        filename: "final_balanced_large.txt",
    },
];

/// Character budget for one output file, identical for every language.
#[derive(Debug, Clone, Copy)]
pub struct SplitPlan {
    pub name: &'static str,
    pub target_chars_per_language: u64,
    pub filename: &'static str,
}

/// The baseline language and the split plans derived from it.
#[derive(Debug, Clone)]
pub struct Budget {
    pub baseline_lang: &'static str,
    pub baseline_total: u64,
    pub plans: Vec<SplitPlan>,
}

/// Derive per-split budgets from the scarcest language in `table`.
///
/// `target = floor(baseline_total * ratio)` for each configured split. An
/// empty table has no minimum and is rejected before any output is written.
pub fn derive_budget(table: &LanguageTable, splits: &[SplitConfig]) -> Result<Budget, Error> {
    let baseline = table
        .scarcest()
        .ok_or_else(|| Error::MissingConfig("language table is empty".to_string()))?;
    let baseline_total = baseline.total_available();

    let plans = splits
        .iter()
        .map(|split| SplitPlan {
            name: split.name,
            target_chars_per_language: (baseline_total as f64 * split.ratio) as u64,
            filename: split.filename,
        })
        .collect();

    Ok(Budget {
        baseline_lang: baseline.code,
        baseline_total,
        plans,
    })
}

#[cfg(test)]
mod tests {
    use crate::lang::{LanguageProfile, LanguageTable, TABLE};

    use super::*;

    #[test]
    fn default_table_baseline() {
        let budget = derive_budget(&TABLE, &DEFAULT_SPLITS).unwrap();
        assert_eq!(budget.baseline_lang, "yo");
        assert_eq!(budget.baseline_total, 12_664_842);

        assert_eq!(budget.plans.len(), 3);
        assert_eq!(budget.plans[0].target_chars_per_language, 11_398_357);
        assert_eq!(budget.plans[1].target_chars_per_language, 12_664_842);
        assert_eq!(budget.plans[2].target_chars_per_language, 12_664_842);
        assert_eq!(budget.plans[0].filename, "final_balanced_small.txt");
    }

    #[test]
    fn target_monotonic_in_ratio() {
        let table = LanguageTable::new(vec![
            LanguageProfile::new("aa", 700, 300),
            LanguageProfile::new("bb", 5000, 5000),
        ]);
        let splits = [
            SplitConfig {
                name: "tiny",
                ratio: 0.25,
                filename: "tiny.txt",
            },
            SplitConfig {
                name: "half",
                ratio: 0.5,
                filename: "half.txt",
            },
            SplitConfig {
                name: "full",
                ratio: 1.0,
                filename: "full.txt",
            },
        ];

        let budget = derive_budget(&table, &splits).unwrap();
        let targets: Vec<u64> = budget
            .plans
            .iter()
            .map(|p| p.target_chars_per_language)
            .collect();
        assert_eq!(targets, vec![250, 500, 1000]);
        assert!(targets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ratio_floors_fractional_targets() {
        let table = LanguageTable::new(vec![LanguageProfile::new("aa", 999, 0)]);
        let splits = [SplitConfig {
            name: "s",
            ratio: 0.9,
            filename: "s.txt",
        }];

        let budget = derive_budget(&table, &splits).unwrap();
        // 999 * 0.9 = 899.1
        assert_eq!(budget.plans[0].target_chars_per_language, 899);
    }

    #[test]
    fn empty_table_is_a_configuration_error() {
        let table = LanguageTable::new(vec![]);
        match derive_budget(&table, &DEFAULT_SPLITS) {
            Err(Error::MissingConfig(_)) => {}
            other => panic!("expected MissingConfig, got {:?}", other),
        }
    }
}
