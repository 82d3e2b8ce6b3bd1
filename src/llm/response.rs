//! Coercion of raw LLM replies into a `FeedbackReport`

use crate::config::AnalysisConfig;
use crate::error::{Result, ResumeReviewError};
use crate::scoring::aggregator;
use crate::scoring::feedback::{CategoryScore, FeedbackReport, Tip, TipKind};
use log::{debug, warn};
use regex::Regex;
use serde_json::{Map, Value};

/// Score assumed when the model omits one
const MISSING_SCORE: i64 = 50;

/// How a single category is read out of the reply
struct CategoryRule {
    key: &'static str,
    /// Headroom above the adjusted overall score
    cap_offset: i64,
    explained: bool,
    default_tip: (&'static str, Option<&'static str>),
}

const ATS: CategoryRule = CategoryRule {
    key: "ATS",
    cap_offset: 10,
    explained: false,
    default_tip: ("Add more relevant keywords from the job description", None),
};

const TONE: CategoryRule = CategoryRule {
    key: "toneAndStyle",
    cap_offset: 5,
    explained: true,
    default_tip: ("Use more confident language", Some("Replace weak phrases with strong action verbs")),
};

const CONTENT: CategoryRule = CategoryRule {
    key: "content",
    cap_offset: 0,
    explained: true,
    default_tip: (
        "Add more detailed descriptions",
        Some("Include specific achievements and quantifiable results"),
    ),
};

const STRUCTURE: CategoryRule = CategoryRule {
    key: "structure",
    cap_offset: 10,
    explained: true,
    default_tip: (
        "Improve formatting consistency",
        Some("Ensure consistent spacing and section organization"),
    ),
};

const SKILLS: CategoryRule = CategoryRule {
    key: "skills",
    cap_offset: 0,
    explained: true,
    default_tip: (
        "Expand technical skill set",
        Some("Learn more technologies relevant to your target role"),
    ),
};

/// Parse a model reply and bring it into the shared report shape.
///
/// Strengths and improvements come only from tips the model wrote itself,
/// scanned in reply order (ATS, tone, content, structure, skills). Default
/// tips filled in for empty categories never reach the summary.
pub fn parse_llm_feedback(raw: &str, company_name: &str, analysis: &AnalysisConfig) -> Result<FeedbackReport> {
    let reply = extract_json_object(raw)?;

    let reported = read_score(reply.get("overallScore")).unwrap_or(MISSING_SCORE);
    let overall = if analysis.realism_adjustments {
        adjust_overall(reported, analysis.is_top_tier_company(company_name))
    } else {
        reported
    }
    .clamp(0, 100);

    if overall != reported {
        debug!("Adjusted LLM overall score from {} to {}", reported, overall);
    }

    let cap = analysis.realism_adjustments.then_some(overall);
    let (ats, ats_from_reply) = read_category(&reply, &ATS, cap);
    let (tone_and_style, tone_from_reply) = read_category(&reply, &TONE, cap);
    let (content, content_from_reply) = read_category(&reply, &CONTENT, cap);
    let (structure, structure_from_reply) = read_category(&reply, &STRUCTURE, cap);
    let (skills, skills_from_reply) = read_category(&reply, &SKILLS, cap);

    let scanned = [
        (&ats, ats_from_reply),
        (&tone_and_style, tone_from_reply),
        (&content, content_from_reply),
        (&structure, structure_from_reply),
        (&skills, skills_from_reply),
    ];
    let strengths = reply_highlights(&scanned, TipKind::Good);
    let improvements = reply_highlights(&scanned, TipKind::Improve);

    Ok(FeedbackReport {
        overall_score: overall as u8,
        strengths,
        improvements,
        compatibility: aggregator::compatibility_message(overall as u8).to_string(),
        ats,
        tone_and_style,
        content,
        structure,
        skills,
    })
}

/// First reply-authored tips of `kind`, skipping categories that were defaulted
fn reply_highlights(categories: &[(&CategoryScore, bool)], kind: TipKind) -> Vec<String> {
    categories
        .iter()
        .filter_map(|&(category, from_reply)| from_reply.then_some(category))
        .flat_map(|category| category.tips.iter())
        .filter(|tip| tip.kind == kind)
        .map(|tip| tip.tip.clone())
        .take(aggregator::MAX_HIGHLIGHTS)
        .collect()
}

/// Damp scores models tend to inflate: 30% off strong scores at top-tier
/// companies, 20% off anything above 80 elsewhere.
pub fn adjust_overall(score: i64, top_tier_company: bool) -> i64 {
    if score > 75 && top_tier_company {
        (score as f64 * 0.7).round() as i64
    } else if score > 80 {
        (score as f64 * 0.8).round() as i64
    } else {
        score
    }
}

/// Pull the JSON object out of a reply that may be fenced or chatty
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>> {
    let fence = Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)\s*```")
        .map_err(|e| ResumeReviewError::LlmResponse(e.to_string()))?;

    let mut candidates: Vec<&str> = Vec::with_capacity(3);
    if let Some(body) = fence.captures(raw).and_then(|c| c.get(1)) {
        candidates.push(body.as_str());
    }
    candidates.push(raw.trim());
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            candidates.push(&raw[start..=end]);
        }
    }

    candidates
        .into_iter()
        .find_map(|candidate| match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        })
        .ok_or_else(|| {
            let preview: String = raw.chars().take(120).collect();
            ResumeReviewError::LlmResponse(format!("No JSON object found in reply: {}", preview))
        })
}

fn read_score(value: Option<&Value>) -> Option<i64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then(|| number.round() as i64)
}

/// Returns the category and whether its tips came from the reply
fn read_category(reply: &Map<String, Value>, rule: &CategoryRule, cap: Option<i64>) -> (CategoryScore, bool) {
    let section = reply.get(rule.key);

    let mut score = read_score(section.and_then(|s| s.get("score"))).unwrap_or(MISSING_SCORE);
    if let Some(overall) = cap {
        score = score.min(overall + rule.cap_offset);
    }

    let mut tips = read_tips(section.and_then(|s| s.get("tips")), rule.explained);
    let from_reply = !tips.is_empty();
    if !from_reply {
        warn!("LLM reply has no usable '{}' tips, using default", rule.key);
        let (tip, explanation) = rule.default_tip;
        let mut default = Tip::improve(tip);
        default.explanation = explanation.map(str::to_string);
        tips.push(default);
    }

    let category = CategoryScore {
        score: score.clamp(0, 100) as u8,
        tips,
    };
    (category, from_reply)
}

fn read_tips(value: Option<&Value>, explained: bool) -> Vec<Tip> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let kind = match item.get("type")?.as_str()?.trim().to_ascii_lowercase().as_str() {
                "good" => TipKind::Good,
                "improve" => TipKind::Improve,
                _ => return None,
            };
            let text = item.get("tip")?.as_str()?.trim();
            if text.is_empty() {
                return None;
            }

            let explanation = explained
                .then(|| item.get("explanation").and_then(Value::as_str))
                .flatten()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string);

            Some(Tip {
                kind,
                tip: text.to_string(),
                explanation,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = r#"{
        "overallScore": 62,
        "ATS": {"score": 80, "tips": [{"type": "good", "tip": "Clear headers", "explanation": "ignored"}]},
        "toneAndStyle": {"score": 60, "tips": [{"type": "improve", "tip": "Fewer buzzwords", "explanation": "Be concrete"}]},
        "content": {"score": "58", "tips": [{"type": "good", "tip": "Metrics present", "explanation": "Numbers help"}]},
        "structure": {"score": 70, "tips": [{"type": "improve", "tip": "Shorter summary", "explanation": "Two lines"}]},
        "skills": {"score": 55, "tips": [{"type": "bogus", "tip": "dropped"}, {"type": "IMPROVE", "tip": "Add Kafka", "explanation": "Listed in posting"}]}
    }"#;

    fn adjusted() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    fn raw_scores() -> AnalysisConfig {
        AnalysisConfig {
            realism_adjustments: false,
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn test_full_reply() {
        let report = parse_llm_feedback(FULL_REPLY, "Initech", &adjusted()).unwrap();

        assert_eq!(report.overall_score, 62);
        // ATS capped at overall + 10
        assert_eq!(report.ats.score, 72);
        assert_eq!(report.ats.tips[0].explanation, None);
        assert_eq!(report.tone_and_style.score, 60);
        assert_eq!(report.content.score, 58);
        assert_eq!(report.structure.score, 70);
        assert_eq!(report.skills.score, 55);
        assert_eq!(report.skills.tips.len(), 1);
        assert_eq!(report.skills.tips[0].tip, "Add Kafka");

        assert_eq!(report.strengths, vec!["Clear headers", "Metrics present"]);
        assert_eq!(report.improvements, vec!["Fewer buzzwords", "Shorter summary", "Add Kafka"]);
        assert!(report.compatibility.starts_with("Moderate"));
    }

    #[test]
    fn test_fenced_reply() {
        let raw = format!("Here is the analysis:\n```json\n{}\n```\nGood luck!", FULL_REPLY);
        let report = parse_llm_feedback(&raw, "Initech", &adjusted()).unwrap();
        assert_eq!(report.overall_score, 62);
    }

    #[test]
    fn test_chatty_reply_without_fence() {
        let raw = "Sure! {\"overallScore\": 40} Hope this helps.";
        let report = parse_llm_feedback(raw, "", &adjusted()).unwrap();
        assert_eq!(report.overall_score, 40);
        // Missing categories default to 50, then get capped by the overall score
        assert_eq!(report.ats.score, 50);
        assert_eq!(report.content.score, 40);
        assert_eq!(report.skills.tips[0].tip, "Expand technical skill set");
        // Defaulted tips stay out of the summary
        assert!(report.strengths.is_empty());
        assert!(report.improvements.is_empty());
        assert!(report.compatibility.starts_with("Significant"));
    }

    #[test]
    fn test_summary_ignores_default_tips() {
        let raw = r#"{
            "overallScore": 72,
            "ATS": {"score": 70, "tips": [{"type": "good", "tip": "Keywords match the posting"}]},
            "skills": {"score": 60, "tips": []}
        }"#;
        let report = parse_llm_feedback(raw, "", &adjusted()).unwrap();

        assert_eq!(report.strengths, vec!["Keywords match the posting"]);
        assert_eq!(report.improvements, Vec::<String>::new());
        // Every category still carries a tip
        assert_eq!(report.skills.tips[0].tip, "Expand technical skill set");
        assert_eq!(report.tone_and_style.tips[0].kind, TipKind::Improve);
        assert!(report.compatibility.starts_with("Good"));
    }

    #[test]
    fn test_summary_follows_reply_order() {
        let raw = r#"{
            "overallScore": 60,
            "ATS": {"score": 60, "tips": [{"type": "improve", "tip": "ats fix"}]},
            "toneAndStyle": {"score": 60, "tips": [{"type": "improve", "tip": "tone fix", "explanation": "x"}]},
            "content": {"score": 60, "tips": [{"type": "improve", "tip": "content fix", "explanation": "x"}]},
            "structure": {"score": 60, "tips": [{"type": "improve", "tip": "structure fix", "explanation": "x"}]},
            "skills": {"score": 60, "tips": [{"type": "improve", "tip": "skills fix", "explanation": "x"}]}
        }"#;
        let report = parse_llm_feedback(raw, "", &adjusted()).unwrap();

        assert_eq!(report.improvements, vec!["ats fix", "tone fix", "content fix", "structure fix"]);
        assert!(report.strengths.is_empty());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            parse_llm_feedback("I cannot help with that.", "", &adjusted()),
            Err(ResumeReviewError::LlmResponse(_))
        ));
        assert!(parse_llm_feedback("[1, 2, 3]", "", &adjusted()).is_err());
    }

    #[test]
    fn test_realism_adjustment() {
        assert_eq!(adjust_overall(90, true), 63);
        assert_eq!(adjust_overall(90, false), 72);
        assert_eq!(adjust_overall(78, true), 55);
        assert_eq!(adjust_overall(78, false), 78);
        assert_eq!(adjust_overall(75, true), 75);

        let report = parse_llm_feedback(r#"{"overallScore": 90}"#, "Google", &adjusted()).unwrap();
        assert_eq!(report.overall_score, 63);
    }

    #[test]
    fn test_adjustments_disabled() {
        let raw = r#"{"overallScore": 95, "ATS": {"score": 99}}"#;
        let report = parse_llm_feedback(raw, "Google", &raw_scores()).unwrap();
        assert_eq!(report.overall_score, 95);
        assert_eq!(report.ats.score, 99);
    }

    #[test]
    fn test_scores_are_clamped() {
        let raw = r#"{"overallScore": 140, "ATS": {"score": -20}, "skills": {"score": "abc"}}"#;
        let report = parse_llm_feedback(raw, "", &raw_scores()).unwrap();
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.ats.score, 0);
        assert_eq!(report.skills.score, 50);
    }
}
