//! Skill coverage scoring against the weighted taxonomy

use crate::scoring::feedback::{CategoryScore, Tip};
use crate::scoring::taxonomy::SkillCategory;

const BASELINE: f64 = 30.0;
const FLOOR: i32 = 15;
const RELEVANCE_POINTS: f64 = 70.0;
const QUANTIFIED_BONUS: f64 = 15.0;

/// Coverage of one taxonomy group
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroupCoverage {
    pub name: &'static str,
    pub matched: Vec<&'static str>,
    pub total: usize,
    pub weight: f64,
}

impl SkillGroupCoverage {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched.len() as f64 / self.total as f64
        }
    }
}

/// Per-group keyword coverage of lowercased resume text
pub fn coverage(text: &str, taxonomy: &[SkillCategory]) -> Vec<SkillGroupCoverage> {
    taxonomy
        .iter()
        .map(|category| SkillGroupCoverage {
            name: category.name,
            matched: category
                .keywords
                .iter()
                .copied()
                .filter(|keyword| text.contains(keyword))
                .collect(),
            total: category.keywords.len(),
            weight: category.weight,
        })
        .collect()
}

/// Weighted share of taxonomy keywords found, in `[0, 1]`
pub fn relevance(groups: &[SkillGroupCoverage]) -> f64 {
    let total_weight: f64 = groups.iter().map(|g| g.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let matched_weight: f64 = groups.iter().map(|g| g.weight * g.fraction()).sum();
    matched_weight / total_weight
}

pub fn has_quantified_results(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub fn analyze(text: &str, taxonomy: &[SkillCategory]) -> CategoryScore {
    let groups = coverage(text, taxonomy);
    let mut score = BASELINE + relevance(&groups) * RELEVANCE_POINTS;
    let mut tips = Vec::with_capacity(2);

    if has_quantified_results(text) {
        score += QUANTIFIED_BONUS;
        tips.push(Tip::good("Quantified achievements detected").explained(
            "You've included specific numbers and metrics, which strengthens your impact statements.",
        ));
    } else {
        tips.push(Tip::improve("Add quantifiable achievements").explained(
            "Include specific numbers, percentages, or metrics to demonstrate the impact of your work.",
        ));
    }

    // Bracket feedback is keyed on the score before clamping
    tips.push(if score < 40.0 {
        Tip::improve("Your skills need significant improvement").explained(
            "Consider learning more relevant technologies for your target role and gaining hands-on experience through projects.",
        )
    } else if score < 60.0 {
        Tip::improve("Expand your technical skill set").explained(
            "You have some relevant skills but would benefit from learning additional technologies mentioned in the job requirements.",
        )
    } else if score < 80.0 {
        Tip::good("Solid technical foundation")
            .explained("You have good technical skills that align well with the role requirements.")
    } else {
        Tip::good("Excellent technical expertise").explained(
            "Your technical skills are highly relevant and demonstrate strong expertise in the field.",
        )
    });

    CategoryScore::clamped(score.round() as i32, FLOOR, tips)
}
