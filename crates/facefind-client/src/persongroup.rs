//! Person group operations.
//!
//! A person group is a server-side collection of persons with registered
//! faces. Once trained, it can be used to identify faces detected in other
//! images.

use tracing::debug;

use facefind_models::{IdentifyResult, Person, TrainingStatus};

use crate::client::{FaceClient, SUBSCRIPTION_KEY_HEADER};
use crate::error::FaceResult;
use crate::types::{
    AddFaceResponse, CreatePersonGroupRequest, CreatePersonResponse, IdentifyRequest, ImageUrl,
};

impl FaceClient {
    /// Create an empty person group.
    ///
    /// The group ID must be lower case, alphanumeric, and/or with '-', '_';
    /// the service enforces this, the client does not.
    pub async fn create_person_group(&self, group_id: &str, name: &str) -> FaceResult<()> {
        let url = self.api_url(&format!("persongroups/{}", group_id));

        debug!("Creating person group {}", group_id);

        let response = self
            .http
            .put(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .json(&CreatePersonGroupRequest {
                name: name.to_string(),
                user_data: None,
            })
            .send()
            .await?;

        self.expect_no_content(response).await
    }

    /// Delete a person group and everything registered under it.
    pub async fn delete_person_group(&self, group_id: &str) -> FaceResult<()> {
        let url = self.api_url(&format!("persongroups/{}", group_id));

        let response = self
            .http
            .delete(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .send()
            .await?;

        self.expect_no_content(response).await
    }

    /// Register a new person within a group.
    pub async fn create_person(&self, group_id: &str, name: &str) -> FaceResult<Person> {
        let url = self.api_url(&format!("persongroups/{}/persons", group_id));

        debug!("Creating person {:?} in group {}", name, group_id);

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .json(&CreatePersonGroupRequest {
                name: name.to_string(),
                user_data: None,
            })
            .send()
            .await?;

        let created: CreatePersonResponse = self.parse_json(response).await?;
        Ok(Person {
            person_id: created.person_id,
            name: name.to_string(),
            user_data: None,
        })
    }

    /// Register a face image against a person, returning the persisted face ID.
    pub async fn add_person_face_from_url(
        &self,
        group_id: &str,
        person_id: &str,
        image_url: &str,
    ) -> FaceResult<String> {
        let url = self.api_url(&format!(
            "persongroups/{}/persons/{}/persistedFaces",
            group_id, person_id
        ));

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .json(&ImageUrl {
                url: image_url.to_string(),
            })
            .send()
            .await?;

        let added: AddFaceResponse = self.parse_json(response).await?;
        Ok(added.persisted_face_id)
    }

    /// Start training a person group.
    pub async fn train_person_group(&self, group_id: &str) -> FaceResult<()> {
        let url = self.api_url(&format!("persongroups/{}/train", group_id));

        debug!("Training person group {}", group_id);

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .send()
            .await?;

        self.expect_no_content(response).await
    }

    /// Get the training status of a person group.
    pub async fn get_training_status(&self, group_id: &str) -> FaceResult<TrainingStatus> {
        let url = self.api_url(&format!("persongroups/{}/training", group_id));

        let response = self
            .http
            .get(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .send()
            .await?;

        self.parse_json(response).await
    }

    /// Identify detected faces against a trained person group.
    pub async fn identify(&self, request: &IdentifyRequest) -> FaceResult<Vec<IdentifyResult>> {
        let url = self.api_url("identify");

        debug!(
            "Identifying {} face(s) against group {}",
            request.face_ids.len(),
            request.person_group_id
        );

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .json(request)
            .send()
            .await?;

        self.parse_json(response).await
    }
}
