//! Content depth and achievement orientation

use crate::error::Result;
use crate::scoring::feedback::{CategoryScore, Tip};
use crate::scoring::keywords::{KeywordSet, ACHIEVEMENT_WORDS, EXPERIENCE_INDICATORS};

const BASELINE: i32 = 50;
const FLOOR: i32 = 25;
const POINTS_PER_INDICATOR: i32 = 5;
const POINTS_PER_ACHIEVEMENT: i32 = 3;
const BRIEF_PENALTY: i32 = 30;
/// Length thresholds, in UTF-16 code units
const BRIEF_BELOW_UNITS: usize = 100;
const COMPREHENSIVE_ABOVE_UNITS: usize = 500;

pub struct ContentAnalyzer {
    experience: KeywordSet,
    achievements: KeywordSet,
}

impl ContentAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            experience: KeywordSet::new(EXPERIENCE_INDICATORS)?,
            achievements: KeywordSet::new(ACHIEVEMENT_WORDS)?,
        })
    }

    pub fn analyze(&self, text: &str) -> CategoryScore {
        let experience_matches = self.experience.count_matches(text) as i32;
        let achievement_matches = self.achievements.count_matches(text) as i32;
        let length = text.encode_utf16().count();

        let mut score = BASELINE
            + experience_matches * POINTS_PER_INDICATOR
            + achievement_matches * POINTS_PER_ACHIEVEMENT;
        let mut tips = Vec::with_capacity(2);

        if length < BRIEF_BELOW_UNITS {
            score -= BRIEF_PENALTY;
            tips.push(Tip::improve("Resume content is too brief").explained(
                "Your resume needs more detailed descriptions of your experience and achievements.",
            ));
        } else if length > COMPREHENSIVE_ABOVE_UNITS {
            tips.push(Tip::good("Comprehensive content").explained(
                "Your resume provides good detail about your experience and qualifications.",
            ));
        }

        if achievement_matches < 2 {
            tips.push(Tip::improve("Add more achievement-focused content").explained(
                "Focus on what you accomplished in your roles rather than just listing responsibilities.",
            ));
        } else {
            tips.push(Tip::good("Achievement-oriented descriptions").explained(
                "Good focus on accomplishments and results in your experience descriptions.",
            ));
        }

        CategoryScore::clamped(score, FLOOR, tips)
    }
}
