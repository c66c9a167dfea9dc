//! Gesture classifier interface.
//!
//! The model itself lives outside this workspace. Anything that maps a feature
//! vector to a label can be plugged in, including plain closures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier failed: {0}")]
    Failed(String),
    #[error("feature vector has {got} values, expected {expected}")]
    BadInput { got: usize, expected: usize },
}

/// Raw classifier output. The label is resolved to a gesture downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Optional model confidence; recorded in event logs only.
    pub confidence: Option<f32>,
}

impl Classification {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// Feature vector -> label.
pub trait GestureClassifier {
    fn classify(&self, features: &[f32]) -> Result<Classification, ClassifierError>;
}

impl<F> GestureClassifier for F
where
    F: Fn(&[f32]) -> Result<Classification, ClassifierError>,
{
    fn classify(&self, features: &[f32]) -> Result<Classification, ClassifierError> {
        self(features)
    }
}

/// Always returns the same label (test/demo stub).
#[derive(Debug, Clone)]
pub struct FixedLabelClassifier {
    pub label: String,
}

impl FixedLabelClassifier {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl GestureClassifier for FixedLabelClassifier {
    fn classify(&self, features: &[f32]) -> Result<Classification, ClassifierError> {
        if features.len() != rps_features::FEATURE_LEN {
            return Err(ClassifierError::BadInput {
                got: features.len(),
                expected: rps_features::FEATURE_LEN,
            });
        }
        Ok(Classification::new(self.label.clone()))
    }
}

/// Classifier for sessions driven only through [`crate::Session::play_label`],
/// where the host classifies frames itself. Every call fails, so a stray
/// `play_round` records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassifier;

impl GestureClassifier for NoClassifier {
    fn classify(&self, _features: &[f32]) -> Result<Classification, ClassifierError> {
        Err(ClassifierError::Failed("no classifier attached".to_string()))
    }
}
