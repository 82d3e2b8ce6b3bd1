//! Tone and style: confident, professional language

use crate::error::Result;
use crate::scoring::feedback::{CategoryScore, Tip};
use crate::scoring::keywords::{KeywordSet, ACTION_VERBS, PROFESSIONAL_WORDS, WEAK_WORDS};

const BASELINE: i32 = 65;
const FLOOR: i32 = 35;
const POINTS_PER_PROFESSIONAL_WORD: i32 = 3;
const WEAK_WORD_PENALTY: i32 = 10;
const STRONG_VERB_THRESHOLD: usize = 3;

pub struct ToneAnalyzer {
    professional: KeywordSet,
    weak: KeywordSet,
    action_verbs: KeywordSet,
}

impl ToneAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            professional: KeywordSet::new(PROFESSIONAL_WORDS)?,
            weak: KeywordSet::new(WEAK_WORDS)?,
            action_verbs: KeywordSet::new(ACTION_VERBS)?,
        })
    }

    pub fn weak_words(&self, text: &str) -> Vec<&'static str> {
        self.weak.matches(text)
    }

    pub fn analyze(&self, text: &str) -> CategoryScore {
        let professional_matches = self.professional.count_matches(text) as i32;
        let weak_matches = self.weak_words(text).len() as i32;
        let action_matches = self.action_verbs.count_matches(text);

        let score = BASELINE + professional_matches * POINTS_PER_PROFESSIONAL_WORD
            - weak_matches * WEAK_WORD_PENALTY;
        let mut tips = Vec::with_capacity(2);

        if weak_matches > 0 {
            tips.push(Tip::improve("Use more confident language").explained(
                "Replace tentative words like 'think' or 'try' with confident statements about your abilities.",
            ));
        } else {
            tips.push(Tip::good("Confident professional tone").explained(
                "Your resume uses strong, confident language that effectively sells your capabilities.",
            ));
        }

        if action_matches >= STRONG_VERB_THRESHOLD {
            tips.push(Tip::good("Strong use of action verbs").explained(
                "Excellent use of action verbs that clearly communicate your contributions.",
            ));
        } else {
            tips.push(Tip::improve("Add more action verbs").explained(
                "Start bullet points with strong action verbs to make your achievements more impactful.",
            ));
        }

        CategoryScore::clamped(score, FLOOR, tips)
    }
}
