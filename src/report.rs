//! Balance statistics reporting.
//!
//! Purely observational: renders the console report and the
//! `balanced_statistics.csv` rows from the per-split summaries without
//! touching any previously computed number.
use std::path::Path;

use serde::Serialize;

use crate::balance::{AllocationResult, BalancedFile};
use crate::error::Error;

/// One `balanced_statistics.csv` row. Field order is the column order.
#[derive(Debug, Serialize)]
pub struct StatRow {
    pub file: String,
    pub language: String,
    pub is_baseline: &'static str,
    pub target_chars: u64,
    pub wiki_chars: u64,
    pub oscar_chars: u64,
    pub total_chars: u64,
    pub wiki_percentage: f64,
    pub oscar_percentage: f64,
}

impl StatRow {
    fn new(file: &BalancedFile, r: &AllocationResult) -> Self {
        Self {
            file: file.filename.clone(),
            language: r.language.to_string(),
            is_baseline: if r.language == file.baseline_lang {
                "YES"
            } else {
                "NO"
            },
            target_chars: r.target_chars,
            wiki_chars: r.wiki_chars,
            oscar_chars: r.crawl_chars,
            total_chars: r.total_chars,
            wiki_percentage: round2(percentage(r.wiki_chars, r.total_chars)),
            oscar_percentage: round2(percentage(r.crawl_chars, r.total_chars)),
        }
    }
}

/// Write one row per (file, language) pair to `dst`.
pub fn write_csv(files: &[BalancedFile], dst: &Path) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    if files.is_empty() {
        // serialize() emits the header lazily, so an empty run needs it
        // written by hand.
        out.write_record([
            "file",
            "language",
            "is_baseline",
            "target_chars",
            "wiki_chars",
            "oscar_chars",
            "total_chars",
            "wiki_percentage",
            "oscar_percentage",
        ])?;
    }
    for file in files {
        for result in &file.results {
            out.serialize(StatRow::new(file, result))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render the file summary and per-language breakdown tables on stdout.
pub fn print_report(files: &[BalancedFile]) {
    println!("\n{}", "=".repeat(80));
    println!("BALANCED CORPUS REPORT");
    println!("{}", "=".repeat(80));

    if let Some(first) = files.first() {
        println!("\nBaseline language: {}", first.baseline_lang.to_uppercase());
    }

    println!("\n{:^80}", "FILE SUMMARY");
    println!("{}", "-".repeat(80));
    println!(
        "{:<25} {:<15} {:<15} {:<15}",
        "File", "Per Language", "Total", "Perfect Balance"
    );
    println!("{}", "-".repeat(80));
    for file in files {
        let flag = if file.actual_total_chars == file.target_total_chars {
            "✓ YES"
        } else {
            "✗ NO"
        };
        println!(
            "{:<25} {:>14} {:>14} {:<15}",
            file.filename,
            group_digits(file.target_chars_per_language),
            group_digits(file.actual_total_chars),
            flag
        );
    }

    for file in files {
        println!("\n{:^80}", format!("LANGUAGE BREAKDOWN - {}", file.filename));
        println!("{}", "-".repeat(80));
        println!(
            "{:<6} {:>11} {:>11} {:>11} {:>11} {:>7} {:>7}",
            "Lang", "Target", "Wiki", "OSCAR", "Total", "Wiki%", "OSCAR%"
        );
        println!("{}", "-".repeat(80));

        let mut total_wiki = 0u64;
        let mut total_crawl = 0u64;
        let mut total_all = 0u64;
        for r in &file.results {
            let display = if r.language == file.baseline_lang {
                format!("{}*", r.language.to_uppercase())
            } else {
                r.language.to_uppercase()
            };
            println!(
                "{:<6} {:>11} {:>11} {:>11} {:>11} {:>6.1}% {:>6.1}%",
                display,
                group_digits(r.target_chars),
                group_digits(r.wiki_chars),
                group_digits(r.crawl_chars),
                group_digits(r.total_chars),
                percentage(r.wiki_chars, r.total_chars),
                percentage(r.crawl_chars, r.total_chars),
            );
            total_wiki += r.wiki_chars;
            total_crawl += r.crawl_chars;
            total_all += r.total_chars;
        }

        println!("{}", "-".repeat(80));
        println!(
            "{:<6} {:<11} {:>11} {:>11} {:>11} {:>6.1}% {:>6.1}%",
            "TOTAL",
            "",
            group_digits(total_wiki),
            group_digits(total_crawl),
            group_digits(total_all),
            percentage(total_wiki, total_all),
            percentage(total_crawl, total_all),
        );
        println!("* = Baseline language");
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
