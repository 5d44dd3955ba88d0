//! Content generation pipeline: Normalizer → Analysis → Prompt Builder →
//! Generation, driven by the orchestrator. Stateless per request.

pub mod analysis;
pub mod generate;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod platforms;
pub mod prompts;

#[cfg(test)]
pub mod test_support;
