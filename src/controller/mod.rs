//! HTTP request handlers for the moderator API.
//!
//! Controllers validate access via the session, convert DTOs to service
//! parameters, and map domain models back to response DTOs. Business logic
//! lives in the service layer.

pub mod auth;
pub mod review;
