//! Prompt construction for LLM-backed resume review

/// Response layout the model is asked to fill, mirroring `FeedbackReport`
pub const RESPONSE_FORMAT: &str = r#"
      interface Feedback {
      overallScore: number; //max 100
      ATS: {
        score: number; //rate based on ATS suitability
        tips: {
          type: "good" | "improve";
          tip: string; //give 3-4 tips
        }[];
      };
      toneAndStyle: {
        score: number; //max 100
        tips: {
          type: "good" | "improve";
          tip: string; //make it a short "title" for the actual explanation
          explanation: string; //explain in detail here
        }[]; //give 3-4 tips
      };
      content: {
        score: number; //max 100
        tips: {
          type: "good" | "improve";
          tip: string; //make it a short "title" for the actual explanation
          explanation: string; //explain in detail here
        }[]; //give 3-4 tips
      };
      structure: {
        score: number; //max 100
        tips: {
          type: "good" | "improve";
          tip: string; //make it a short "title" for the actual explanation
          explanation: string; //explain in detail here
        }[]; //give 3-4 tips
      };
      skills: {
        score: number; //max 100
        tips: {
          type: "good" | "improve";
          tip: string; //make it a short "title" for the actual explanation
          explanation: string; //explain in detail here
        }[]; //give 3-4 tips
      };
    }"#;

const REVIEW_TEMPLATE: &str = r#"You are a brutally honest technical recruiter with 15+ years of experience. Your reputation depends on giving REALISTIC assessments that reflect actual hiring standards, not encouraging feedback.

CRITICAL SCORING REALITY CHECK:
- Most candidates score 30-60 (this is NORMAL and REALISTIC)
- Only exceptional candidates score 70+ (top 10% of applicants)
- Scores above 80 are EXTREMELY rare (top 3% - elite candidates)
- New graduates typically score 25-45 for most positions
- Career changers often score 20-40 initially

REALISTIC COMPONENT SCORING:
- ATS: Most resumes score 40-70 (not 80+)
- Skills: Score based on actual market demand and proficiency evidence
- Content: Harshly judge if no quantifiable achievements
- Structure: Most are average (50-70 range)
- Tone: Most need improvement (45-65 range)

JOB ANALYSIS:
Position: {job_title}
Requirements: {job_description}

BE ESPECIALLY HARSH FOR:
- Competitive companies (Google, Meta, Amazon, Apple, Microsoft)
- Senior roles without leadership evidence
- Missing key technical skills for the role
- No quantifiable impact or achievements
- Generic resumes without role-specific optimization

EVALUATION MANDATE:
1. Does this candidate realistically get hired for this specific role?
2. Are their skills truly competitive for this position?
3. Do they have evidence of real impact, not just responsibilities?

Use this format: {format}
Return as JSON only, no other text.

RESUME CONTENT TO ANALYZE:
{resume}"#;

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams<'a> {
    pub job_title: &'a str,
    pub job_description: &'a str,
    pub resume_text: &'a str,
}

/// Render the review instructions followed by the resume content block
pub fn build_review_prompt(params: &PromptParams<'_>) -> String {
    // Resume goes last so user text cannot rewrite the other placeholders
    REVIEW_TEMPLATE
        .replace("{job_title}", params.job_title.trim())
        .replace("{job_description}", params.job_description.trim())
        .replace("{format}", RESPONSE_FORMAT)
        .replace("{resume}", params.resume_text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_inputs() {
        let prompt = build_review_prompt(&PromptParams {
            job_title: "Backend Engineer",
            job_description: "Build Rust services on Kubernetes.",
            resume_text: "Software Engineer with Python experience at Tech Corp.",
        });

        assert!(prompt.contains("Position: Backend Engineer"));
        assert!(prompt.contains("Requirements: Build Rust services on Kubernetes."));
        assert!(prompt.ends_with("Software Engineer with Python experience at Tech Corp."));
        assert!(prompt.contains("interface Feedback"));
        assert!(prompt.contains("Return as JSON only"));
    }

    #[test]
    fn test_resume_placeholders_are_left_alone() {
        let prompt = build_review_prompt(&PromptParams {
            job_title: "QA",
            job_description: "Testing",
            resume_text: "I wrote {job_title} in my resume",
        });

        assert!(prompt.ends_with("I wrote {job_title} in my resume"));
    }

    #[test]
    fn test_format_lists_every_category() {
        for key in ["overallScore", "ATS", "toneAndStyle", "content", "structure", "skills"] {
            assert!(RESPONSE_FORMAT.contains(key), "format is missing {}", key);
        }
    }
}
