//! Combines category scores into the final feedback report

use crate::scoring::feedback::{CategoryScore, FeedbackReport, TipKind};

pub const ATS_WEIGHT: f64 = 0.25;
pub const SKILLS_WEIGHT: f64 = 0.3;
pub const CONTENT_WEIGHT: f64 = 0.25;
pub const STRUCTURE_WEIGHT: f64 = 0.1;
pub const TONE_WEIGHT: f64 = 0.1;

/// Number of strengths and improvements surfaced in the summary
pub const MAX_HIGHLIGHTS: usize = 4;

pub fn overall_score(
    ats: &CategoryScore,
    skills: &CategoryScore,
    content: &CategoryScore,
    structure: &CategoryScore,
    tone: &CategoryScore,
) -> u8 {
    let weighted = (ats.score as f64 * ATS_WEIGHT)
        + (skills.score as f64 * SKILLS_WEIGHT)
        + (content.score as f64 * CONTENT_WEIGHT)
        + (structure.score as f64 * STRUCTURE_WEIGHT)
        + (tone.score as f64 * TONE_WEIGHT);

    weighted.round().clamp(0.0, 100.0) as u8
}

pub fn compatibility_message(overall_score: u8) -> &'static str {
    match overall_score {
        85..=u8::MAX => "Excellent match for the position - your resume strongly aligns with the requirements",
        70..=84 => "Good match for the position with some areas for improvement",
        55..=69 => "Moderate match - consider strengthening key areas before applying",
        _ => "Significant improvements needed to be competitive for this position",
    }
}

/// First tips of `kind`, scanning categories in canonical order
pub fn highlights(report: &FeedbackReport, kind: TipKind) -> Vec<String> {
    report
        .categories()
        .into_iter()
        .flat_map(|(_, category)| category.tips.iter())
        .filter(|tip| tip.kind == kind)
        .map(|tip| tip.tip.clone())
        .take(MAX_HIGHLIGHTS)
        .collect()
}

/// Recompute the summary fields from the category scores already in place
pub fn refresh_summary(report: &mut FeedbackReport) {
    report.strengths = highlights(report, TipKind::Good);
    report.improvements = highlights(report, TipKind::Improve);
    report.compatibility = compatibility_message(report.overall_score).to_string();
}

pub fn aggregate(
    ats: CategoryScore,
    skills: CategoryScore,
    content: CategoryScore,
    structure: CategoryScore,
    tone: CategoryScore,
) -> FeedbackReport {
    let overall = overall_score(&ats, &skills, &content, &structure, &tone);

    let mut report = FeedbackReport {
        overall_score: overall,
        strengths: Vec::new(),
        improvements: Vec::new(),
        compatibility: String::new(),
        ats,
        tone_and_style: tone,
        content,
        structure,
        skills,
    };
    refresh_summary(&mut report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::feedback::Tip;

    fn category(score: u8, tips: Vec<Tip>) -> CategoryScore {
        CategoryScore { score, tips }
    }

    #[test]
    fn test_weighted_overall() {
        let report = aggregate(
            category(80, vec![]),
            category(60, vec![]),
            category(70, vec![]),
            category(50, vec![]),
            category(90, vec![]),
        );
        // 20 + 18 + 17.5 + 5 + 9 = 69.5
        assert_eq!(report.overall_score, 70);
        assert_eq!(report.compatibility, compatibility_message(70));
    }

    #[test]
    fn test_compatibility_thresholds() {
        assert!(compatibility_message(100).starts_with("Excellent"));
        assert!(compatibility_message(85).starts_with("Excellent"));
        assert!(compatibility_message(84).starts_with("Good"));
        assert!(compatibility_message(70).starts_with("Good"));
        assert!(compatibility_message(69).starts_with("Moderate"));
        assert!(compatibility_message(55).starts_with("Moderate"));
        assert!(compatibility_message(54).starts_with("Significant"));
        assert!(compatibility_message(0).starts_with("Significant"));
    }

    #[test]
    fn test_highlights_follow_scan_order_and_limit() {
        let report = aggregate(
            category(50, vec![Tip::good("ats-good"), Tip::improve("ats-improve")]),
            category(50, vec![Tip::good("skills-good-1"), Tip::good("skills-good-2")]),
            category(50, vec![Tip::improve("content-improve")]),
            category(50, vec![Tip::good("structure-good"), Tip::improve("structure-improve")]),
            category(50, vec![Tip::good("tone-good")]),
        );

        assert_eq!(
            report.strengths,
            vec!["ats-good", "skills-good-1", "skills-good-2", "structure-good"]
        );
        assert_eq!(
            report.improvements,
            vec!["ats-improve", "content-improve", "structure-improve"]
        );
    }
}
