//! OCR output normalization and confidence scoring.
//!
//! Takes text recognized by an OCR engine, classifies its language, runs a
//! fixed sequence of correction stages over it and reports which stages
//! changed the text together with a confidence estimate.
//!
//! ```
//! let report = ocr_enhance::enhance("hello.   world");
//! assert_eq!(report.enhanced, "Hello. World");
//! assert_eq!(report.improvements.len(), 2);
//! ```

pub mod confidence;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod recognition;
pub mod report;
pub mod rules;
pub mod stages;

#[cfg(feature = "python")]
mod python;

pub use config::EnhancerConfig;
pub use error::{EnhanceError, Result};
pub use language::{LanguageVerdict, classify};
pub use pipeline::{Enhancer, enhance};
pub use recognition::{RawRecognition, RecognizedText, ScanOutcome};
pub use report::{EnhancementReport, ReportStats};
pub use stages::{Stage, StageResult};
