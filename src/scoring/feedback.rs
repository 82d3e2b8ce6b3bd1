//! Feedback data model shared by every analysis source

use serde::{Deserialize, Serialize};

/// The request a review is computed for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub file_name: String,
    pub job_title: String,
    pub job_description: String,
    pub company_name: String,
}

impl AnalysisInput {
    pub fn new(
        file_name: impl Into<String>,
        job_title: impl Into<String>,
        job_description: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            job_title: job_title.into(),
            job_description: job_description.into(),
            company_name: company_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Good,
    Improve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub tip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Tip {
    pub fn good(tip: impl Into<String>) -> Self {
        Self {
            kind: TipKind::Good,
            tip: tip.into(),
            explanation: None,
        }
    }

    pub fn improve(tip: impl Into<String>) -> Self {
        Self {
            kind: TipKind::Improve,
            tip: tip.into(),
            explanation: None,
        }
    }

    pub fn explained(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn is_good(&self) -> bool {
        self.kind == TipKind::Good
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    pub tips: Vec<Tip>,
}

impl CategoryScore {
    /// Clamp a raw score into `[floor, 100]` and freeze it with its tips
    pub fn clamped(raw: i32, floor: i32, tips: Vec<Tip>) -> Self {
        Self {
            score: raw.clamp(floor, 100) as u8,
            tips,
        }
    }
}

/// Final review handed to renderers and storage.
///
/// Field order and names follow the JSON layout consumers already parse,
/// so the heuristic and LLM-backed paths are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub compatibility: String,
    #[serde(rename = "ATS")]
    pub ats: CategoryScore,
    pub tone_and_style: CategoryScore,
    pub content: CategoryScore,
    pub structure: CategoryScore,
    pub skills: CategoryScore,
}

impl FeedbackReport {
    /// Categories in canonical scan order: ATS, skills, content, structure, tone
    pub fn categories(&self) -> [(&'static str, &CategoryScore); 5] {
        [
            ("ATS", &self.ats),
            ("Skills", &self.skills),
            ("Content", &self.content),
            ("Structure", &self.structure),
            ("Tone & Style", &self.tone_and_style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_respects_floor_and_ceiling() {
        assert_eq!(CategoryScore::clamped(5, 30, vec![]).score, 30);
        assert_eq!(CategoryScore::clamped(140, 30, vec![]).score, 100);
        assert_eq!(CategoryScore::clamped(-40, 20, vec![]).score, 20);
        assert_eq!(CategoryScore::clamped(64, 20, vec![]).score, 64);
    }

    #[test]
    fn test_tip_serialization_shape() {
        let ats_tip = serde_json::to_value(Tip::good("Good use of verbs")).unwrap();
        assert_eq!(ats_tip["type"], "good");
        assert!(ats_tip.get("explanation").is_none());

        let tip = serde_json::to_value(Tip::improve("Add metrics").explained("Numbers help")).unwrap();
        assert_eq!(tip["type"], "improve");
        assert_eq!(tip["explanation"], "Numbers help");
    }

    #[test]
    fn test_report_uses_consumer_field_names() {
        let empty = CategoryScore { score: 50, tips: vec![] };
        let report = FeedbackReport {
            overall_score: 50,
            strengths: vec![],
            improvements: vec![],
            compatibility: String::new(),
            ats: empty.clone(),
            tone_and_style: empty.clone(),
            content: empty.clone(),
            structure: empty.clone(),
            skills: empty,
        };

        let value = serde_json::to_value(&report).unwrap();
        for key in ["overallScore", "strengths", "improvements", "compatibility", "ATS", "toneAndStyle", "content", "structure", "skills"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
