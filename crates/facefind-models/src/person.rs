//! Person group and identification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::face::FaceId;

/// A person registered within a person group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

/// Training state of a person group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatusType {
    Notstarted,
    Running,
    Succeeded,
    Failed,
}

impl TrainingStatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingStatusType::Notstarted => "notstarted",
            TrainingStatusType::Running => "running",
            TrainingStatusType::Succeeded => "succeeded",
            TrainingStatusType::Failed => "failed",
        }
    }

    /// True once training has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrainingStatusType::Succeeded | TrainingStatusType::Failed)
    }
}

impl fmt::Display for TrainingStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Training status record for a person group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatus {
    pub status: TrainingStatusType,
    pub created_date_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action_date_time: Option<DateTime<Utc>>,
    /// Failure detail when training did not succeed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Identification candidates for one probe face.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResult {
    pub face_id: FaceId,
    pub candidates: Vec<IdentifyCandidate>,
}

/// A person the service considers a match for a probe face.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyCandidate {
    pub person_id: String,
    pub confidence: f64,
}
