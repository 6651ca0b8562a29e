//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::EnhanceError;
use crate::language;
use crate::pipeline::Enhancer;
use crate::report::EnhancementReport;

fn to_py_err(err: EnhanceError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Enhancement report as seen from Python
#[pyclass]
#[derive(Clone)]
struct EnhancementResult {
    #[pyo3(get)]
    original: String,
    #[pyo3(get)]
    enhanced: String,
    #[pyo3(get)]
    improvements: Vec<String>,
    #[pyo3(get)]
    confidence: u8,
    #[pyo3(get)]
    detected_language: String,
    #[pyo3(get)]
    word_count: usize,
    #[pyo3(get)]
    character_count: usize,
    #[pyo3(get)]
    avg_chars_per_word: f64,
    #[pyo3(get)]
    reduction_percentage: i64,
}

impl From<EnhancementReport> for EnhancementResult {
    fn from(report: EnhancementReport) -> Self {
        Self {
            detected_language: report.detected_language.label().to_string(),
            reduction_percentage: report.stats.reduction_percentage,
            original: report.original,
            enhanced: report.enhanced,
            improvements: report.improvements,
            confidence: report.confidence,
            word_count: report.word_count,
            character_count: report.character_count,
            avg_chars_per_word: report.avg_chars_per_word,
        }
    }
}

/// Enhance one OCR text
#[pyfunction]
fn enhance_text(text: String) -> PyResult<EnhancementResult> {
    let report = Enhancer::default().run(&text).map_err(to_py_err)?;
    Ok(report.into())
}

/// Enhance one OCR text and return the report as JSON
#[pyfunction]
fn enhance_text_json(text: String) -> PyResult<String> {
    let report = Enhancer::default().run(&text).map_err(to_py_err)?;
    serde_json::to_string(&report).map_err(|e| to_py_err(e.into()))
}

/// Enhance many texts in parallel
#[pyfunction]
fn enhance_batch(texts: Vec<String>) -> PyResult<Vec<EnhancementResult>> {
    Enhancer::default()
        .run_batch(&texts)
        .into_iter()
        .map(|result| result.map(EnhancementResult::from).map_err(to_py_err))
        .collect()
}

/// Classify text as turkish, english, mixed or unknown
#[pyfunction]
fn detect_language(text: String) -> PyResult<String> {
    Ok(language::classify(&text).label().to_string())
}

#[pymodule]
fn ocr_enhance(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(enhance_text, m)?)?;
    m.add_function(wrap_pyfunction!(enhance_text_json, m)?)?;
    m.add_function(wrap_pyfunction!(enhance_batch, m)?)?;
    m.add_function(wrap_pyfunction!(detect_language, m)?)?;
    m.add_class::<EnhancementResult>()?;
    Ok(())
}
