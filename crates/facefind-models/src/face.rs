//! Face detection and similarity models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a face detected by the remote service.
///
/// Face IDs are issued by the service and are only meaningful within it;
/// they are never parsed or interpreted locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceId(pub String);

impl FaceId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FaceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FaceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Pixel-space region locating a face within its source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRectangle {
    /// X coordinate of the left edge
    pub left: u32,
    /// Y coordinate of the top edge
    pub top: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl FaceRectangle {
    /// Create a new rectangle.
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self { left, top, width, height }
    }
}

/// A face found by the detect operation.
///
/// The ID is absent when the caller asked the service not to return one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFace {
    pub face_id: Option<FaceId>,
    pub face_rectangle: FaceRectangle,
}

/// A candidate face returned by the find-similar operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarFace {
    pub face_id: FaceId,
    pub face_rectangle: FaceRectangle,
    /// Service-assigned similarity confidence, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Matching strategy for the find-similar operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindSimilarMatchMode {
    /// Match faces of the same person (the service default).
    MatchPerson,
    /// Match visually similar faces regardless of person.
    MatchFace,
}

impl FindSimilarMatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindSimilarMatchMode::MatchPerson => "matchPerson",
            FindSimilarMatchMode::MatchFace => "matchFace",
        }
    }
}

impl fmt::Display for FindSimilarMatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_face_deserializes_wire_shape() {
        let json = r#"{
            "faceId": "c5c24a82-6845-4031-9d5d-978df9175426",
            "faceRectangle": {"left": 78, "top": 108, "width": 98, "height": 98}
        }"#;
        let face: DetectedFace = serde_json::from_str(json).unwrap();
        assert_eq!(
            face.face_id.unwrap().as_str(),
            "c5c24a82-6845-4031-9d5d-978df9175426"
        );
        assert_eq!(face.face_rectangle, FaceRectangle::new(78, 108, 98, 98));
    }

    #[test]
    fn detected_face_tolerates_missing_id() {
        let json = r#"{"faceRectangle": {"left": 0, "top": 0, "width": 10, "height": 10}}"#;
        let face: DetectedFace = serde_json::from_str(json).unwrap();
        assert!(face.face_id.is_none());
    }

    #[test]
    fn similar_face_tolerates_missing_confidence() {
        let json = r#"{
            "faceId": "m-1",
            "faceRectangle": {"left": 10, "top": 20, "width": 30, "height": 40}
        }"#;
        let similar: SimilarFace = serde_json::from_str(json).unwrap();
        assert!(similar.confidence.is_none());
        assert_eq!(similar.face_rectangle.height, 40);
    }

    #[test]
    fn match_mode_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&FindSimilarMatchMode::MatchPerson).unwrap(),
            "\"matchPerson\""
        );
        assert_eq!(FindSimilarMatchMode::MatchFace.as_str(), "matchFace");
    }
}
