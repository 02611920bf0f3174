//! Face service request/response types.

use serde::{Deserialize, Serialize};

use facefind_models::{FaceId, FindSimilarMatchMode};

/// JSON body for operations that take a remotely hosted image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Options for the detect operation.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Ask the service to issue a face ID for each detected face.
    pub return_face_id: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self { return_face_id: true }
    }
}

/// Request body for the find-similar operation.
///
/// The probe is optional so an upstream detection failure can flow through
/// to the service unaltered instead of being gated locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindSimilarRequest {
    /// Probe face to search with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<FaceId>,
    /// Candidate pool of face IDs from another detect call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<FaceId>>,
    /// Server-side face list to search instead of `face_ids`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_face_list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_of_candidates_returned: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<FindSimilarMatchMode>,
}

impl FindSimilarRequest {
    /// Request carrying just a probe face, the shape the quickstart issues.
    pub fn probe(face_id: impl Into<Option<FaceId>>) -> Self {
        Self {
            face_id: face_id.into(),
            ..Default::default()
        }
    }

    /// Restrict the search to a candidate pool of face IDs.
    pub fn with_candidates(mut self, face_ids: Vec<FaceId>) -> Self {
        self.face_ids = Some(face_ids);
        self
    }

    /// Set the matching strategy.
    pub fn with_mode(mut self, mode: FindSimilarMatchMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Request body for person group and person creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

/// Response to person creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonResponse {
    pub person_id: String,
}

/// Response to registering a face against a person.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFaceResponse {
    pub persisted_face_id: String,
}

/// Request body for the identify operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyRequest {
    pub face_ids: Vec<FaceId>,
    pub person_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_of_candidates_returned: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<f64>,
}
