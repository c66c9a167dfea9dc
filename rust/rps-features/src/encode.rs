//! Feature encoding implementation for FeatureSchema v1.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::schema::{HandJoint, FEATURE_LEN, JOINT_COUNT};

/// Classifier input. Slot meaning is fixed by [`crate::schema`].
pub type FeatureVector = [f32; FEATURE_LEN];

/// One skeletal landmark: joint, normalized location, detector confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkObservation {
    pub joint: HandJoint,
    /// Normalized [0, 1] image coordinates.
    pub x: f32,
    pub y: f32,
    /// Detector confidence in [0, 1].
    pub confidence: f32,
}

impl LandmarkObservation {
    pub fn new(joint: HandJoint, x: f32, y: f32, confidence: f32) -> Self {
        Self {
            joint,
            x,
            y,
            confidence,
        }
    }

    /// Build from a joint name or capture key; `None` for joints outside the vocabulary.
    pub fn named(name: &str, x: f32, y: f32, confidence: f32) -> Option<Self> {
        HandJoint::from_name(name).map(|joint| Self::new(joint, x, y, confidence))
    }
}

/// Wire form of an observation as delivered by a landmark source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedObservation {
    pub joint: String,
    pub x: f32,
    pub y: f32,
    pub confidence: f32,
}

impl NamedObservation {
    pub fn resolve(&self) -> Option<LandmarkObservation> {
        LandmarkObservation::named(&self.joint, self.x, self.y, self.confidence)
    }
}

fn passes(o: &LandmarkObservation, confidence_threshold: f32) -> bool {
    o.confidence.is_finite() && o.confidence > confidence_threshold
}

/// Total order used to pick among repeated observations of one joint:
/// higher confidence first, then smaller (x, y).
fn rank(a: &LandmarkObservation, b: &LandmarkObservation) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.x.total_cmp(&b.x))
        .then_with(|| a.y.total_cmp(&b.y))
}

/// Encode a frame's landmarks into the canonical feature vector.
///
/// For each joint in slot order, emit the (x, y) of its observation when
/// `confidence > confidence_threshold`, else (0, 0). The result depends only on
/// the set of observations, never on their order.
pub fn build_vector(
    observations: &[LandmarkObservation],
    confidence_threshold: f32,
) -> FeatureVector {
    let mut best: [Option<&LandmarkObservation>; JOINT_COUNT] = [None; JOINT_COUNT];
    for o in observations {
        if !passes(o, confidence_threshold) {
            continue;
        }
        let slot = &mut best[o.joint.index()];
        match slot {
            Some(cur) if rank(o, cur) != Ordering::Less => {}
            _ => *slot = Some(o),
        }
    }

    let mut out = [0.0f32; FEATURE_LEN];
    for (k, seen) in best.iter().enumerate() {
        if let Some(o) = seen {
            out[2 * k] = o.x;
            out[2 * k + 1] = o.y;
        }
    }
    out
}
