//! Pipeline Orchestrator — sequences the full generation run.
//!
//! Flow: normalize → analyze → build platform prompt → generate → assemble.
//!
//! The ordering is a hard data dependency chain, not a convenience: each
//! stage's prompt is built from the prior stage's concrete output, so no
//! stage is invoked speculatively or in parallel. The orchestrator holds no
//! state across requests.

use tracing::info;

use crate::llm_client::ModelProvider;
use crate::pipeline::analysis::analyze;
use crate::pipeline::generate::generate;
use crate::pipeline::models::{
    GeneratedContent, PipelineError, SelectionParameters, Submission,
};
use crate::pipeline::normalize::normalize;
use crate::pipeline::platforms::build_prompt;

/// Runs one complete generation request.
///
/// Returns either a complete `GeneratedContent` (possibly with empty fields
/// where the model's output was malformed) or a single error — never a
/// half-populated result.
pub async fn run_pipeline(
    provider: &dyn ModelProvider,
    submission: &Submission,
    selection: &SelectionParameters,
) -> Result<GeneratedContent, PipelineError> {
    let normalized = normalize(provider, submission, selection).await?;
    info!(
        "normalized submission to {} chars for {}",
        normalized.len(),
        selection.platform.as_str()
    );

    let analysis = analyze(provider, &normalized, selection).await?;
    info!(
        "analysis complete: {} tone labels, audience '{}'",
        analysis.tone.len(),
        analysis.audience
    );

    let prompt = build_prompt(&normalized, selection, &analysis);

    let content = generate(provider, &prompt, selection.platform).await?;
    info!("generation complete for {}", selection.platform.as_str());

    Ok(GeneratedContent { analysis, content })
}
