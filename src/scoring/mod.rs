//! Heuristic resume scoring: taxonomy, category analyzers and aggregation

pub mod aggregator;
pub mod ats;
pub mod content;
pub mod feedback;
pub mod keywords;
pub mod scorer;
pub mod skills;
pub mod structure;
pub mod taxonomy;
pub mod tone;

pub use feedback::{AnalysisInput, CategoryScore, FeedbackReport, Tip, TipKind};
pub use scorer::HeuristicScorer;
pub use taxonomy::{JobCategory, SkillCategory};
