//! Client for the cloud face service.
//!
//! This crate provides a typed async client for the remote face-detection
//! service: detection, find-similar and person-group operations. Detection,
//! feature extraction and similarity ranking all happen on the service side;
//! the client owns only the HTTP surface and its error mapping.

pub mod client;
pub mod error;
pub mod persongroup;
pub mod types;

pub use client::{FaceClient, FaceClientConfig};
pub use error::{FaceError, FaceResult};
pub use types::{DetectOptions, FindSimilarRequest, IdentifyRequest};
