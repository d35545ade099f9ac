//! Run orchestration
//!
//! Drives discovery, extraction, and collection for one immutable request.
//! Documents are processed strictly one at a time, and a malformed document
//! is turned into a failure outcome instead of aborting its siblings.

use super::collect::collect;
use super::discovery::discover;
use super::error::Result;
use super::extract::prepare;
use super::models::{DocumentOutcome, ItemizeRequest, RunSummary};

/// Itemize every document the request's discovery step finds.
///
/// Only discovery errors propagate; per-document failures are recorded in
/// the summary and the run continues.
pub fn run(request: &ItemizeRequest) -> Result<RunSummary> {
    let documents = discover(&request.search_root, request.recursive, &request.formats)?;

    let mut summary = RunSummary::default();
    for document in documents {
        match prepare(&document, &request.save_root) {
            Ok(record) => {
                let components = collect(&record, &request.categories, request.keep_excess);
                for failure in &components.failures {
                    eprintln!("warning: {}: {failure}", document.display());
                }
                summary
                    .outcomes
                    .push(DocumentOutcome::success(document, components));
            }
            Err(err) => {
                eprintln!("error: {}: {err}", document.display());
                summary.outcomes.push(DocumentOutcome::failure(document, &err));
            }
        }
    }

    Ok(summary)
}
