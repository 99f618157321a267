//! # Quill Shared
//!
//! Wire types shared between the API server and its clients: the
//! success/failure envelopes and the post request/response DTOs.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, FailureResponse, SearchResponse};
