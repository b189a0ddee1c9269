//! Traceability matrix section
//!
//! Static table mapping each sample requirement to its implementing
//! artifacts, plus the headline coverage metrics from a full analysis run.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::models::{sample_records, CoverageSummary, TraceRecord};

/// File names cited by a record, for the artifacts column
///
/// Evidence spans are "path:start-end"; the matrix shows only the file
/// names. Records with no evidence get an em dash, matching the convention
/// for an empty cell.
fn artifact_names(record: &TraceRecord) -> String {
    if !record.has_evidence() {
        return "—".to_string();
    }
    record
        .evidence
        .iter()
        .map(|span| {
            let path = span.rsplit_once(':').map_or(span.as_str(), |(path, _)| path);
            path.rsplit('/').next().unwrap_or(path)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Matrix section: coverage stat cards and the requirement table
#[component]
pub fn MatrixSection() -> impl IntoView {
    let records = sample_records();
    let summary = CoverageSummary::from_records(&records);

    let rows = records
        .into_iter()
        .map(|record| view! { <MatrixRow record=record /> })
        .collect::<Vec<_>>();

    let caption = format!(
        "Sample rows shown above: {} fully implemented, {} partially implemented, {} missing.",
        summary.fully_implemented, summary.partially_implemented, summary.missing
    );

    view! {
        <section id="matrix" class="section section-alt">
            <div class="section-inner">
                <h2 class="section-title">"Traceability Matrix & Coverage Metrics"</h2>
                <p class="section-lead">
                    "The system generates comprehensive traceability matrices that map each \
                     requirement to its implementing code artifacts, providing quantitative \
                     coverage metrics and risk visibility."
                </p>

                <div class="stat-grid">
                    <div class="stat-card">
                        <div class="stat-value">"94.7%"</div>
                        <div class="stat-name">"Overall Coverage"</div>
                        <div class="stat-bar-track">
                            <div class="stat-bar-fill" style="width: 94.7%;"></div>
                        </div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value stat-value-positive">"142"</div>
                        <div class="stat-name">"Fully Implemented"</div>
                        <div class="stat-note">"Complete satisfaction of acceptance criteria"</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value stat-value-negative">"8"</div>
                        <div class="stat-name">"Missing Requirements"</div>
                        <div class="stat-note">"No implementation evidence found"</div>
                    </div>
                </div>

                <div class="matrix-table-wrap">
                    <table class="matrix-table">
                        <thead>
                            <tr>
                                <th>"Req ID"</th>
                                <th>"Description"</th>
                                <th>"Status"</th>
                                <th>"Artifacts"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
                <p class="matrix-caption">{caption}</p>
            </div>
        </section>
    }
}

/// One requirement row in the matrix table
#[component]
fn MatrixRow(record: TraceRecord) -> impl IntoView {
    let artifacts = artifact_names(&record);

    view! {
        <tr>
            <td class="matrix-id">{record.id.clone()}</td>
            <td class="matrix-description">{record.context.clone()}</td>
            <td>
                <StatusBadge status=record.status />
            </td>
            <td class="matrix-artifacts">{artifacts}</td>
        </tr>
    }
}
