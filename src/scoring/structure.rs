//! Section completeness and contact information

use crate::error::Result;
use crate::scoring::feedback::{CategoryScore, Tip};
use crate::scoring::keywords::{KeywordSet, CONTACT_MARKERS, REQUIRED_SECTIONS};

const BASELINE: i32 = 70;
const FLOOR: i32 = 30;
const MISSING_SECTION_PENALTY: i32 = 15;
const MISSING_CONTACT_PENALTY: i32 = 20;

pub struct StructureAnalyzer {
    sections: KeywordSet,
    contact: KeywordSet,
}

impl StructureAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sections: KeywordSet::new(REQUIRED_SECTIONS)?,
            contact: KeywordSet::new(CONTACT_MARKERS)?,
        })
    }

    pub fn missing_sections(&self, text: &str) -> Vec<&'static str> {
        self.sections.missing(text)
    }

    pub fn analyze(&self, text: &str) -> CategoryScore {
        let missing = self.missing_sections(text);
        let mut score = BASELINE - missing.len() as i32 * MISSING_SECTION_PENALTY;
        let mut tips = Vec::with_capacity(2);

        if missing.is_empty() {
            tips.push(Tip::good("Complete resume structure").explained(
                "Your resume includes all essential sections for a comprehensive overview.",
            ));
        } else {
            tips.push(Tip::improve("Add missing resume sections").explained(format!(
                "Consider adding these sections: {} to create a more complete resume.",
                missing.join(", ")
            )));
        }

        if self.contact.count_matches(text) == 0 {
            score -= MISSING_CONTACT_PENALTY;
            tips.push(Tip::improve("Add clear contact information").explained(
                "Ensure your email, phone number, and location are prominently displayed.",
            ));
        } else {
            tips.push(
                Tip::good("Contact information present")
                    .explained("Your contact details are included and accessible."),
            );
        }

        CategoryScore::clamped(score, FLOOR, tips)
    }
}
