//! Job category classification and the weighted skill taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A group of related skills and its relative importance for a role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobCategory {
    Frontend,
    Backend,
    Data,
    Mobile,
    Default,
}

/// Classification order; the first category whose trigger matches wins.
const CLASSIFICATION_ORDER: &[(JobCategory, &[&str])] = &[
    (JobCategory::Frontend, &["frontend", "ui", "react", "angular", "vue"]),
    (JobCategory::Backend, &["backend", "api", "server", "node"]),
    (JobCategory::Data, &["data", "analyst", "scientist", "ml", "ai"]),
    (JobCategory::Mobile, &["mobile", "ios", "android", "react native", "flutter"]),
];

const FRONTEND_SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Core Frontend",
        keywords: &["javascript", "typescript", "html", "css", "react", "vue", "angular"],
        weight: 0.4,
    },
    SkillCategory {
        name: "Modern Frameworks",
        keywords: &["next.js", "nuxt", "gatsby", "svelte", "remix"],
        weight: 0.3,
    },
    SkillCategory {
        name: "Styling",
        keywords: &["tailwind", "sass", "styled-components", "material-ui", "bootstrap"],
        weight: 0.2,
    },
    SkillCategory {
        name: "Tools",
        keywords: &["webpack", "vite", "git", "npm", "yarn"],
        weight: 0.1,
    },
];

const BACKEND_SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        keywords: &["python", "java", "node.js", "php", "c#", "go", "rust"],
        weight: 0.4,
    },
    SkillCategory {
        name: "Frameworks",
        keywords: &["express", "django", "spring", "flask", "fastapi", "laravel"],
        weight: 0.3,
    },
    SkillCategory {
        name: "Databases",
        keywords: &["mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
        weight: 0.2,
    },
    SkillCategory {
        name: "Cloud & DevOps",
        keywords: &["aws", "azure", "docker", "kubernetes", "jenkins"],
        weight: 0.1,
    },
];

const DATA_SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming",
        keywords: &["python", "r", "sql", "scala", "julia"],
        weight: 0.3,
    },
    SkillCategory {
        name: "Data Science",
        keywords: &["pandas", "numpy", "scikit-learn", "tensorflow", "pytorch"],
        weight: 0.3,
    },
    SkillCategory {
        name: "Visualization",
        keywords: &["tableau", "power bi", "matplotlib", "seaborn", "d3.js"],
        weight: 0.2,
    },
    SkillCategory {
        name: "Big Data",
        keywords: &["spark", "hadoop", "kafka", "airflow", "snowflake"],
        weight: 0.2,
    },
];

const MOBILE_SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Native Development",
        keywords: &["swift", "kotlin", "java", "objective-c"],
        weight: 0.4,
    },
    SkillCategory {
        name: "Cross-platform",
        keywords: &["react native", "flutter", "xamarin", "ionic"],
        weight: 0.3,
    },
    SkillCategory {
        name: "Tools",
        keywords: &["xcode", "android studio", "firebase", "cocoapods"],
        weight: 0.2,
    },
    SkillCategory {
        name: "Testing",
        keywords: &["jest", "detox", "espresso", "xctest"],
        weight: 0.1,
    },
];

const DEFAULT_SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical Skills",
        keywords: &["programming", "software", "development", "coding"],
        weight: 0.4,
    },
    SkillCategory {
        name: "Problem Solving",
        keywords: &["analysis", "troubleshooting", "debugging", "optimization"],
        weight: 0.3,
    },
    SkillCategory {
        name: "Collaboration",
        keywords: &["teamwork", "communication", "leadership", "project management"],
        weight: 0.2,
    },
    SkillCategory {
        name: "Learning",
        keywords: &["self-motivated", "continuous learning", "adaptable", "innovative"],
        weight: 0.1,
    },
];

impl JobCategory {
    pub const ALL: [JobCategory; 5] = [
        JobCategory::Frontend,
        JobCategory::Backend,
        JobCategory::Data,
        JobCategory::Mobile,
        JobCategory::Default,
    ];

    /// Classify a free-text job title. Never fails: unmatched titles are `Default`.
    pub fn classify(job_title: &str) -> Self {
        let title = job_title.to_lowercase();
        CLASSIFICATION_ORDER
            .iter()
            .find(|(_, triggers)| triggers.iter().any(|t| title.contains(t)))
            .map(|(category, _)| *category)
            .unwrap_or(JobCategory::Default)
    }

    /// Weighted skill groups evaluated for this category; never empty
    pub fn skills(self) -> &'static [SkillCategory] {
        match self {
            JobCategory::Frontend => FRONTEND_SKILLS,
            JobCategory::Backend => BACKEND_SKILLS,
            JobCategory::Data => DATA_SKILLS,
            JobCategory::Mobile => MOBILE_SKILLS,
            JobCategory::Default => DEFAULT_SKILLS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobCategory::Frontend => "frontend",
            JobCategory::Backend => "backend",
            JobCategory::Data => "data",
            JobCategory::Mobile => "mobile",
            JobCategory::Default => "default",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        JobCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown job category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_substring() {
        assert_eq!(JobCategory::classify("Senior Frontend Engineer"), JobCategory::Frontend);
        assert_eq!(JobCategory::classify("API Platform Engineer"), JobCategory::Backend);
        assert_eq!(JobCategory::classify("Data Scientist"), JobCategory::Data);
        assert_eq!(JobCategory::classify("iOS Developer"), JobCategory::Mobile);
        assert_eq!(JobCategory::classify("Office Manager"), JobCategory::Default);
    }

    #[test]
    fn test_classification_priority() {
        assert_eq!(JobCategory::classify("Frontend / Backend Developer"), JobCategory::Frontend);
        assert_eq!(JobCategory::classify("Backend Data Engineer"), JobCategory::Backend);
        // "react" triggers frontend before mobile gets a chance
        assert_eq!(JobCategory::classify("React Native Developer"), JobCategory::Frontend);
    }

    #[test]
    fn test_empty_title_is_default() {
        assert_eq!(JobCategory::classify(""), JobCategory::Default);
    }

    #[test]
    fn test_every_category_has_skills() {
        for category in JobCategory::ALL {
            let skills = category.skills();
            assert!(!skills.is_empty());
            assert!(skills.iter().all(|s| s.weight > 0.0 && !s.keywords.is_empty()));
        }
    }

    #[test]
    fn test_round_trip_names() {
        for category in JobCategory::ALL {
            assert_eq!(category.to_string().parse::<JobCategory>().unwrap(), category);
        }
        assert!("plumbing".parse::<JobCategory>().is_err());
    }
}
