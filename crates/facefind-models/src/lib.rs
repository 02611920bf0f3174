//! Shared data models for the face service client.
//!
//! This crate provides Serde-serializable types for:
//! - Detected faces and their bounding rectangles
//! - Find-similar matches and match modes
//! - Person groups, training status and identification results

pub mod face;
pub mod person;

// Re-export common types
pub use face::{DetectedFace, FaceId, FaceRectangle, FindSimilarMatchMode, SimilarFace};
pub use person::{IdentifyCandidate, IdentifyResult, Person, TrainingStatus, TrainingStatusType};
