//! rps-features: Joint vocabulary + canonical landmark encoding.

pub mod encode;
pub mod schema;

pub use encode::{build_vector, FeatureVector, LandmarkObservation, NamedObservation};
pub use schema::{HandJoint, FEATURE_LEN, FEATURE_SCHEMA_ID, JOINT_COUNT};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn feature_len_is_two_per_joint() {
        assert_eq!(FEATURE_LEN, 2 * JOINT_COUNT);
        assert_eq!(HandJoint::ALL.len(), JOINT_COUNT);
    }
}
