//! ATS (Applicant Tracking System) keyword scoring

use crate::error::Result;
use crate::scoring::feedback::{CategoryScore, Tip};
use crate::scoring::keywords::{KeywordSet, ATS_KEYWORDS, RED_FLAGS};

const BASELINE: i32 = 50;
const FLOOR: i32 = 20;
const POINTS_PER_VERB: i32 = 3;
const VERB_BONUS_CAP: i32 = 30;
const POINTS_PER_JOB_WORD: i32 = 2;
const JOB_WORD_BONUS_CAP: i32 = 20;
const RED_FLAG_PENALTY: i32 = 15;
/// Job description words must be longer than this, in UTF-16 code units
const MIN_JOB_WORD_UNITS: usize = 4;

pub struct AtsAnalyzer {
    action_verbs: KeywordSet,
    red_flags: KeywordSet,
}

/// Raw counts behind an ATS score, kept for detailed output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtsSignals {
    pub verb_matches: usize,
    pub job_keyword_matches: usize,
    pub red_flags: Vec<&'static str>,
}

impl AtsAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            action_verbs: KeywordSet::new(ATS_KEYWORDS)?,
            red_flags: KeywordSet::new(RED_FLAGS)?,
        })
    }

    /// Count the signals in lowercased resume text and job description
    pub fn signals(&self, text: &str, job_description: &str) -> AtsSignals {
        let job_keyword_matches = significant_job_words(job_description)
            .filter(|word| text.contains(word))
            .count();

        AtsSignals {
            verb_matches: self.action_verbs.count_matches(text),
            job_keyword_matches,
            red_flags: self.red_flags.matches(text),
        }
    }

    pub fn analyze(&self, text: &str, job_description: &str) -> CategoryScore {
        let signals = self.signals(text, job_description);

        let mut score = BASELINE;
        score += (signals.verb_matches as i32 * POINTS_PER_VERB).min(VERB_BONUS_CAP);
        score += (signals.job_keyword_matches as i32 * POINTS_PER_JOB_WORD).min(JOB_WORD_BONUS_CAP);
        score -= signals.red_flags.len() as i32 * RED_FLAG_PENALTY;

        let mut tips = Vec::with_capacity(3);

        if signals.verb_matches < 3 {
            tips.push(Tip::improve(
                "Add more action verbs like 'developed', 'implemented', 'managed' to improve ATS scoring",
            ));
        } else {
            tips.push(Tip::good("Good use of ATS-friendly action verbs"));
        }

        if signals.job_keyword_matches < 5 {
            tips.push(Tip::improve(
                "Include more keywords from the job description to improve relevance matching",
            ));
        } else {
            tips.push(Tip::good("Strong keyword alignment with job requirements"));
        }

        if !signals.red_flags.is_empty() {
            tips.push(Tip::improve(
                "Remove weak language like 'basic knowledge' or 'familiar with' - use confident statements",
            ));
        }

        CategoryScore::clamped(score, FLOOR, tips)
    }
}

/// Whitespace tokens of the job description longer than four UTF-16 units.
/// Repeated words are kept, each occurrence counts.
fn significant_job_words(job_description: &str) -> impl Iterator<Item = &str> {
    job_description
        .split_whitespace()
        .filter(|word| word.encode_utf16().count() > MIN_JOB_WORD_UNITS)
}
