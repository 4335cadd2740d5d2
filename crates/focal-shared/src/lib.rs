//! # Focal Shared
//!
//! Form and page-payload types shared between the web server and its tests.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
