pub mod groq;
pub mod invoker;
pub mod synthesizer;
