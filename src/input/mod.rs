//! Input processing module
//! Handles file detection, text extraction and document loading

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::{DocumentLoader, LoadedDocument};
