//! Enhancement client for the generative image API.

mod client;
mod prompts;
mod response;

pub use client::GeminiClient;
pub use prompts::prompt_for;
