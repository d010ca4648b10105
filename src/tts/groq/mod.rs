#[allow(clippy::module_inception)]
pub mod groq;
pub mod structs;
