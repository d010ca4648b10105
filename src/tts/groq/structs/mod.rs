pub mod error_response;
pub mod speech_request;
pub mod speech_response;
