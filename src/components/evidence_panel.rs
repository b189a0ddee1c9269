//! Rotating evidence inspection panel
//!
//! Cycles through the trace catalog on a fixed interval, showing one record
//! at a time. The active card is keyed by the rotation phase: each tick
//! unmounts the old card and mounts a fresh one, which restarts the staged
//! reveal animations in the order defined by [`RevealStage`].

use std::time::Duration;

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::reveal::{RevealStage, ROTATION_PERIOD_MS};
use crate::components::status_badge::StatusBadge;
use crate::error::SiteError;
use crate::models::{sample_records, TraceRecord};
use crate::state::EvidenceRotation;

/// Placeholder shown when the active record cites no evidence spans
pub const EVIDENCE_EMPTY_PLACEHOLDER: &str = "No implementation artifacts found";

/// Panel frame styles, shared by the rotating and the disabled branch
const PANEL_CHROME_CSS: &str = r#"
.evidence-panel {
    background: #f9fafb;
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    padding: 1.5rem;
    font-family: ui-monospace, 'SF Mono', 'Cascadia Code', monospace;
    text-align: left;
}

.evidence-panel-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.25rem;
}

.evidence-panel-title {
    font-size: 0.7rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: #6b7280;
    font-weight: 600;
}

.evidence-panel-disabled .evidence-panel-empty {
    color: #9ca3af;
    font-style: italic;
    font-size: 0.8rem;
}
"#;

/// Styles for the rotating branch: phase dots, record card, reveal animation
const RECORD_CARD_CSS: &str = r#"
.phase-dots {
    display: flex;
    gap: 0.375rem;
}

.phase-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #d1d5db;
    transition: background 0.3s ease;
}

.phase-dot-active {
    background: #111827;
}

.record-card {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.record-label {
    display: block;
    font-size: 0.65rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: #9ca3af;
    margin-bottom: 0.25rem;
}

.record-id {
    font-weight: 600;
    font-size: 0.9rem;
    color: #111827;
}

.record-context {
    font-size: 0.8rem;
    color: #374151;
}

.evidence-list {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.evidence-span {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 4px;
    padding: 0.5rem 0.625rem;
    font-size: 0.75rem;
    color: #111827;
}

.evidence-empty {
    color: #9ca3af;
    font-style: italic;
    font-size: 0.75rem;
}

.record-reasoning {
    font-size: 0.75rem;
    line-height: 1.6;
    color: #374151;
    margin: 0;
}

.confidence-row {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.confidence-track {
    flex: 1;
    background: #e5e7eb;
    border-radius: 4px;
    height: 8px;
    overflow: hidden;
}

.confidence-fill {
    height: 100%;
    border-radius: 4px;
}

.confidence-value {
    font-size: 0.75rem;
    font-weight: 600;
    color: #111827;
}

.reveal {
    opacity: 0;
    animation: reveal-in 0.45s ease-out forwards;
}

@keyframes reveal-in {
    from {
        opacity: 0;
        transform: translateY(6px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
"#;

/// Evidence inspection panel
///
/// Owns the rotation state and the interval that advances it. An empty
/// catalog never reaches the rotating card: the panel falls back to a
/// disabled placeholder instead of rendering with no active record. The
/// panel chrome is styled here so both branches receive it.
#[component]
pub fn EvidencePanel(
    #[prop(default = sample_records())] records: Vec<TraceRecord>,
    #[prop(default = ROTATION_PERIOD_MS)] period_ms: u64,
) -> impl IntoView {
    let body = match EvidenceRotation::new(records) {
        Ok(rotation) => {
            Either::Left(view! { <RotatingCard rotation=rotation period_ms=period_ms /> })
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("evidence panel disabled: {err}").into());
            Either::Right(view! { <DisabledPanel /> })
        }
    };

    view! {
        <>
            {body}
            <style>{PANEL_CHROME_CSS}</style>
        </>
    }
}

/// The live panel: interval wiring, phase dots, and the active record card
#[component]
fn RotatingCard(rotation: EvidenceRotation, period_ms: u64) -> impl IntoView {
    let record_count = rotation.len();
    let rotation = RwSignal::new(rotation);

    // The interval lives exactly as long as the component: cleanup always
    // clears the handle, even if the panel unmounts mid-cycle.
    match set_interval_with_handle(
        move || rotation.update(EvidenceRotation::tick),
        Duration::from_millis(period_ms),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            let err = SiteError::TimerUnavailable(format!("{err:?}"));
            web_sys::console::warn_1(&err.to_string().into());
        }
    }

    view! {
        <div class="evidence-panel">
            <div class="evidence-panel-header">
                <span class="evidence-panel-title">"Live Trace Inspection"</span>
                <div class="phase-dots">
                    {(0..record_count)
                        .map(|i| {
                            view! {
                                <span class=move || {
                                    if rotation.with(|r| r.phase()) == i {
                                        "phase-dot phase-dot-active"
                                    } else {
                                        "phase-dot"
                                    }
                                }></span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <ActiveRecord rotation=rotation />

            <style>{RECORD_CARD_CSS}</style>
        </div>
    }
}

/// Keyed host for the active record card
///
/// CSS animations with a `forwards` fill replay only when their node is
/// freshly inserted. Keying the card on the rotation phase makes every tick
/// unmount the old card and mount a new subtree, so each record stages in
/// from the start instead of inheriting finished animations.
#[component]
fn ActiveRecord(rotation: RwSignal<EvidenceRotation>) -> impl IntoView {
    view! {
        <For
            each=move || rotation.with(|r| r.current().cloned().map(|record| (r.phase(), record)))
            key=|(phase, _)| *phase
            children=move |(_, record)| {
                view! {
                    <RecordCard record=record />
                }
            }
        />
    }
}

/// One record, fields staggered by the reveal schedule
#[component]
fn RecordCard(record: TraceRecord) -> impl IntoView {
    let percent = record.confidence_percent();
    let status = record.status;

    let evidence = if record.has_evidence() {
        Either::Left(
            record
                .evidence
                .iter()
                .map(|span| view! { <div class="evidence-span">{span.clone()}</div> })
                .collect::<Vec<_>>(),
        )
    } else {
        Either::Right(view! { <div class="evidence-empty">{EVIDENCE_EMPTY_PLACEHOLDER}</div> })
    };

    view! {
        <div class="record-card">
            <div class="record-field reveal" style=RevealStage::RecordId.delay_style()>
                <span class="record-label">"Requirement ID"</span>
                <span class="record-id">{record.id.clone()}</span>
            </div>
            <div class="record-field reveal" style=RevealStage::Context.delay_style()>
                <span class="record-label">"Context"</span>
                <span class="record-context">{record.context.clone()}</span>
            </div>
            <div class="record-field reveal" style=RevealStage::Evidence.delay_style()>
                <span class="record-label">"Evidence"</span>
                <div class="evidence-list">{evidence}</div>
            </div>
            <div class="record-field reveal" style=RevealStage::Reasoning.delay_style()>
                <span class="record-label">"Reasoning"</span>
                <p class="record-reasoning">{record.reasoning.clone()}</p>
            </div>
            <div class="record-field reveal" style=RevealStage::Confidence.delay_style()>
                <span class="record-label">"Confidence"</span>
                <div class="confidence-row">
                    <div class="confidence-track">
                        <div
                            class="confidence-fill"
                            style=format!(
                                "width: {}%; background-color: {};",
                                percent,
                                status.color()
                            )
                        ></div>
                    </div>
                    <span class="confidence-value">{format!("{percent:.0}%")}</span>
                </div>
            </div>
            <div class="record-field reveal" style=RevealStage::Classification.delay_style()>
                <span class="record-label">"Classification"</span>
                <StatusBadge status=status />
            </div>
        </div>
    }
}

/// Fallback card shown when there are no records to rotate
#[component]
fn DisabledPanel() -> impl IntoView {
    view! {
        <div class="evidence-panel evidence-panel-disabled">
            <div class="evidence-panel-header">
                <span class="evidence-panel-title">"Live Trace Inspection"</span>
            </div>
            <p class="evidence-panel-empty">"No records available for inspection."</p>
        </div>
    }
}
