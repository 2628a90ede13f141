use tracing::info;

use crate::{
    error::Error,
    llm::CompletionBackend,
    prompt,
    registry::CaseRegistry,
    source::OpinionSource,
    treatment::{self, NegativeTreatment},
};

/// Run the extraction pipeline for one case identifier.
///
/// Strictly linear: resolve → fetch → prompt → complete → parse. An
/// unknown identifier fails before any network call; every later error
/// aborts the run. Writing the result file is the caller's job.
pub async fn run(
    registry: &CaseRegistry,
    source: &dyn OpinionSource,
    backend: &dyn CompletionBackend,
    case_id: &str,
) -> Result<Vec<NegativeTreatment>, Error> {
    let case = registry.resolve(case_id)?;

    info!(case_id, case_name = case.case_name, "fetching opinion text");
    let opinion_text = source.fetch_opinion(case).await?;
    info!(
        case_id,
        opinion_len = opinion_text.len(),
        "opinion text retrieved"
    );

    let prompt = prompt::build_prompt(&opinion_text);

    info!(case_id, prompt_len = prompt.len(), "requesting completion");
    let response = backend.complete(&prompt).await?;
    info!(
        case_id,
        response_len = response.len(),
        "completion received"
    );

    let records = treatment::parse_treatments(&response)?;
    info!(case_id, record_count = records.len(), "response parsed");

    Ok(records)
}
