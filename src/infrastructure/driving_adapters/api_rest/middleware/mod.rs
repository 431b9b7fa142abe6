//! API Middleware
//!
//! Request correlation and error status handling for the REST API.

pub mod error_status;
pub mod request_id;

pub use error_status::apply_error_status_policy;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
