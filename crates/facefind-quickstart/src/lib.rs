//! Find-similar quickstart flow.
//!
//! Sequencing and reporting for the three-call demonstration: detect a face
//! in each of two images, then ask the service for faces similar to the one
//! found in the first image. Each call isolates its own failure; the flow
//! always runs to completion and reports through the supplied writer.

use std::io::{self, Write};

use tracing::debug;

use facefind_client::{DetectOptions, FaceClient, FaceResult, FindSimilarRequest};
use facefind_models::{DetectedFace, FaceId};

/// First image: a single-person portrait.
pub const FIRST_IMAGE_URL: &str =
    "https://www.biography.com/.image/t_share/MTQ1MzAyNzYzOTgxNTE0NTEz/john-f-kennedy---mini-biography.jpg";

/// Second image: expected to contain a face similar to the one in the first.
pub const SECOND_IMAGE_URL: &str =
    "https://www.biography.com/.image/t_share/MTQ1NDY3OTIxMzExNzM3NjE3/john-f-kennedy---debating-richard-nixon.jpg";

/// Run the full quickstart sequence, writing report lines to `out`.
///
/// Remote failures never escape: each call reports its own diagnostic and
/// the sequence continues. Only writer errors are returned.
pub async fn run_find_similar<W: Write>(
    client: &FaceClient,
    first_image_url: &str,
    second_image_url: &str,
    out: &mut W,
) -> io::Result<()> {
    let options = DetectOptions::default();

    // The two detections are independent and run concurrently.
    let (first, second) = tokio::join!(
        client.detect_with_url(first_image_url, &options),
        client.detect_with_url(second_image_url, &options),
    );

    let first_id = match first_face_id(first) {
        Ok(id) => {
            writeln!(out, "Face ID found in 1st image: {}.", id)?;
            Some(id)
        }
        Err(message) => {
            writeln!(out, "No faces detected in 1st image:{}", first_image_url)?;
            writeln!(out, "{}", message)?;
            None
        }
    };

    match first_face_id(second) {
        Ok(id) => writeln!(out, "Face ID found in 2nd image: {}", id)?,
        Err(message) => {
            writeln!(out, "No faces detected in 2nd image: {}.", second_image_url)?;
            writeln!(out, "{}", message)?;
        }
    }

    // The probe is passed through ungated: a failed first detection still
    // dispatches the request, carrying no face ID for the service to accept.
    debug!(probe = ?first_id, "Dispatching find-similar");
    match client.find_similar(&FindSimilarRequest::probe(first_id)).await {
        Ok(similars) => {
            writeln!(out, "Similar faces found in 2nd image:")?;
            for similar in similars {
                writeln!(out, "Face ID: {}.", similar.face_id)?;
                writeln!(out, "Face rectangle:")?;
                writeln!(out, "Left:{}", similar.face_rectangle.left)?;
                writeln!(out, "Top:{}", similar.face_rectangle.top)?;
                writeln!(out, "Width:{}", similar.face_rectangle.width)?;
                writeln!(out, "Height:{}", similar.face_rectangle.height)?;
            }
        }
        Err(e) => {
            writeln!(out, "No similar face found in 2nd image: {}.", second_image_url)?;
            writeln!(out, "{}", e)?;
        }
    }

    Ok(())
}

/// Extract the first detected face ID, or the failure text to report.
fn first_face_id(result: FaceResult<Vec<DetectedFace>>) -> Result<FaceId, String> {
    match result {
        Ok(faces) => faces
            .into_iter()
            .next()
            .and_then(|face| face.face_id)
            .ok_or_else(|| "no face ID in detection response".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facefind_models::FaceRectangle;

    #[test]
    fn first_face_id_takes_the_first_face() {
        let faces = vec![
            DetectedFace {
                face_id: Some(FaceId::from("abc-1")),
                face_rectangle: FaceRectangle::new(0, 0, 10, 10),
            },
            DetectedFace {
                face_id: Some(FaceId::from("abc-2")),
                face_rectangle: FaceRectangle::new(5, 5, 10, 10),
            },
        ];
        assert_eq!(first_face_id(Ok(faces)).unwrap().as_str(), "abc-1");
    }

    #[test]
    fn first_face_id_reports_empty_response() {
        let message = first_face_id(Ok(vec![])).unwrap_err();
        assert_eq!(message, "no face ID in detection response");
    }

    #[test]
    fn first_face_id_reports_missing_id() {
        let faces = vec![DetectedFace {
            face_id: None,
            face_rectangle: FaceRectangle::new(0, 0, 10, 10),
        }];
        assert!(first_face_id(Ok(faces)).is_err());
    }
}
