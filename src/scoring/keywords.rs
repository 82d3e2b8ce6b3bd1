//! Static keyword tables and the substring matcher built over them

use crate::error::Result;
use aho_corasick::AhoCorasick;

/// ATS-friendly action verbs that improve discoverability
pub const ATS_KEYWORDS: &[&str] = &[
    "experience", "years", "developed", "implemented", "managed", "led", "created",
    "designed", "built", "optimized", "improved", "achieved", "delivered", "maintained",
];

/// Phrases that signal a junior or hedged profile
pub const RED_FLAGS: &[&str] = &[
    "no experience", "beginner", "learning", "student", "entry level", "fresher",
    "basic knowledge", "familiar with", "exposure to", "limited experience",
];

pub const EXPERIENCE_INDICATORS: &[&str] = &["years", "experience", "led", "managed", "senior", "lead"];

pub const ACHIEVEMENT_WORDS: &[&str] = &["achieved", "improved", "increased", "reduced", "delivered", "implemented"];

pub const REQUIRED_SECTIONS: &[&str] = &["experience", "skills", "education"];

pub const CONTACT_MARKERS: &[&str] = &["email", "@", "phone"];

pub const PROFESSIONAL_WORDS: &[&str] = &["professional", "responsible", "dedicated", "experienced", "skilled"];

pub const WEAK_WORDS: &[&str] = &["think", "try", "hope", "maybe", "some", "a little"];

pub const ACTION_VERBS: &[&str] = &["developed", "created", "implemented", "managed", "led", "designed", "built"];

/// Substring matcher over a fixed keyword list.
///
/// A keyword counts once no matter how often it occurs, and overlapping
/// occurrences are all seen ("led" inside "skilled" still counts).
pub struct KeywordSet {
    keywords: &'static [&'static str],
    matcher: AhoCorasick,
}

impl KeywordSet {
    pub fn new(keywords: &'static [&'static str]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)?;

        Ok(Self { keywords, matcher })
    }

    /// Distinct keywords present in `text`, in table order
    pub fn matches(&self, text: &str) -> Vec<&'static str> {
        let mut seen = vec![false; self.keywords.len()];
        for mat in self.matcher.find_overlapping_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }

        self.keywords
            .iter()
            .zip(seen)
            .filter_map(|(keyword, hit)| hit.then_some(*keyword))
            .collect()
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.matches(text).len()
    }

    /// Keywords from the table that do not occur in `text`
    pub fn missing(&self, text: &str) -> Vec<&'static str> {
        let found = self.matches(text);
        self.keywords
            .iter()
            .copied()
            .filter(|keyword| !found.contains(keyword))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
