//! Language inventory and per-language source availability.
//!
//! The corpus covers a fixed set of languages. For each one we track how many
//! characters the two sources (Wikipedia articles and the web crawl export)
//! can provide, since the balancing budget is derived from the scarcest
//! language.
use lazy_static::lazy_static;

/// Character availability of one language across both sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub wiki_available: u64,
    pub crawl_available: u64,
}

impl LanguageProfile {
    pub const fn new(code: &'static str, wiki_available: u64, crawl_available: u64) -> Self {
        Self {
            code,
            wiki_available,
            crawl_available,
        }
    }

    pub fn total_available(&self) -> u64 {
        self.wiki_available + self.crawl_available
    }
}

/// Ordered, immutable set of language profiles for one run.
///
/// Iteration order is the configured language order and drives every
/// per-language loop in the balance pipeline, so reports and CSV rows come
/// out in a stable order.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    profiles: Vec<LanguageProfile>,
}

impl LanguageTable {
    pub fn new(profiles: Vec<LanguageProfile>) -> Self {
        Self { profiles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.iter()
    }

    /// Language codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(|p| p.code)
    }

    pub fn get(&self, code: &str) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|p| p.code == code)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The profile with the least total data. Ties keep the earliest entry.
    pub fn scarcest(&self) -> Option<&LanguageProfile> {
        self.profiles.iter().fold(None, |best, p| match best {
            Some(b) if b.total_available() <= p.total_available() => Some(b),
            _ => Some(p),
        })
    }
}

lazy_static! {

    /// Languages prepared for tokenizer training, with character counts
    /// measured on the extracted per-language source files.
    pub static ref TABLE: LanguageTable = LanguageTable::new(vec![
        LanguageProfile::new("yo", 12_646_633, 18_209),
        LanguageProfile::new("ar", 1_326_903_243, 50_000_000),
        LanguageProfile::new("zh", 730_233_254, 50_000_000),
        LanguageProfile::new("ru", 4_569_290_658, 50_000_000),
        LanguageProfile::new("hi", 218_280_173, 50_000_000),
        LanguageProfile::new("ja", 1_423_270_470, 50_000_000),
        LanguageProfile::new("sw", 61_130_713, 8_428_241),
        LanguageProfile::new("bn", 368_019_974, 50_000_000),
        LanguageProfile::new("tr", 728_714_011, 50_000_000),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_sources() {
        let p = LanguageProfile::new("yo", 12_646_633, 18_209);
        assert_eq!(p.total_available(), 12_664_842);
    }

    #[test]
    fn scarcest_default_table() {
        let min = TABLE.scarcest().unwrap();
        assert_eq!(min.code, "yo");
    }

    #[test]
    fn scarcest_tie_keeps_first() {
        let table = LanguageTable::new(vec![
            LanguageProfile::new("aa", 100, 0),
            LanguageProfile::new("bb", 50, 50),
            LanguageProfile::new("cc", 0, 100),
        ]);
        assert_eq!(table.scarcest().unwrap().code, "aa");
    }

    #[test]
    fn scarcest_empty_table() {
        let table = LanguageTable::new(vec![]);
        assert!(table.scarcest().is_none());
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(TABLE.get("sw").unwrap().crawl_available, 8_428_241);
        assert!(TABLE.get("xx").is_none());
    }
}
