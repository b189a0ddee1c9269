//! Landing page for the traceability framework
//!
//! Single-page marketing site: every section is static markup except the
//! evidence panel embedded in the explainability section.

use leptos::prelude::*;

use crate::components::{EvidencePanel, MatrixSection, StatusBadge};
use crate::models::ImplementationStatus;

/// Technology chips shown in the stack section
const STACK: [&str; 8] = [
    "Rust",
    "Leptos",
    "WebAssembly",
    "FastAPI",
    "Large Language Models",
    "Retrieval-Augmented Generation",
    "Vector Databases",
    "Python",
];

/// Full landing page
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <main class="landing">
            <Hero />
            <ProblemSection />
            <SolutionSection />
            <AgentsSection />
            <PipelineSection />
            <ExplainabilitySection />
            <MatrixSection />
            <ApplicabilitySection />
            <StackSection />
            <SiteFooter />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="section-inner">
                <span class="hero-badge">"AI-Powered Requirements Engineering"</span>
                <h1 class="hero-title">
                    "An Agentic RAG-Based Framework for Automated Requirements Traceability"
                </h1>
                <p class="hero-lead">
                    "A multi-agent AI system that automatically maps Software Requirements \
                     Specifications (SRS) to source code artifacts using Retrieval-Augmented \
                     Generation (RAG) and Large Language Model (LLM) reasoning, providing \
                     comprehensive traceability matrices and implementation coverage metrics."
                </p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href="#inspection">
                        "Explore System"
                    </a>
                    <a class="btn btn-secondary" href="#architecture">
                        "View Architecture"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProblemSection() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section-inner section-narrow">
                <h2 class="section-title">"The Engineering Problem"</h2>
                <p class="section-text">
                    "Manual requirements traceability in modern software systems is inherently \
                     fragmented and error-prone. As codebases evolve across distributed \
                     repositories, maintaining accurate mappings between Software Requirements \
                     Specifications and implementation artifacts becomes increasingly complex."
                </p>
                <p class="section-text">
                    "Engineering teams face persistent challenges: requirements may be partially \
                     implemented across multiple modules, silently deprecated without \
                     documentation updates, or entirely unimplemented while marked as complete. \
                     Traditional static analysis tools lack the semantic understanding required \
                     to bridge natural language requirements and programmatic logic."
                </p>
                <p class="section-text">
                    "This gap introduces significant risk in regulated domains, quality \
                     assurance processes, and large-scale system audits where requirements \
                     coverage verification is mandatory but manually prohibitive."
                </p>
            </div>
        </section>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <section class="section section-alt">
            <div class="section-inner">
                <h2 class="section-title">"The AI-Driven Solution"</h2>
                <div class="two-column">
                    <div>
                        <h3 class="column-title">"System Inputs"</h3>
                        <div class="card-stack">
                            <InfoCard
                                title="Software Requirements Specifications"
                                body="Structured SRS documents containing functional and \
                                      non-functional requirements with unique identifiers and \
                                      acceptance criteria."
                            />
                            <InfoCard
                                title="Git-Based Source Repositories"
                                body="Multi-language codebases with support for Python, Java, \
                                      JavaScript, TypeScript, and C++, including configuration \
                                      files and design artifacts."
                            />
                        </div>
                    </div>
                    <div>
                        <h3 class="column-title">"System Outputs"</h3>
                        <div class="card-stack">
                            <InfoCard
                                title="Traceability Matrix"
                                body="Comprehensive requirement-to-code mappings with explicit \
                                      file paths, line references, and semantic evidence for \
                                      each traced relationship."
                            />
                            <InfoCard
                                title="Coverage Metrics & Risk Analysis"
                                body="Quantitative implementation coverage percentages, missing \
                                      requirement detection, and partial implementation \
                                      identification."
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AgentsSection() -> impl IntoView {
    view! {
        <section id="architecture" class="section">
            <div class="section-inner">
                <h2 class="section-title">"Agentic RAG Architecture"</h2>
                <p class="section-lead">
                    "A coordinated multi-agent system where specialized AI agents handle \
                     distinct aspects of the traceability pipeline, from requirement extraction \
                     to explainability generation."
                </p>
                <div class="card-grid card-grid-3">
                    <InfoCard
                        title="Requirement Extraction Agent"
                        body="Parses SRS documents to extract structured requirement records \
                              with IDs, descriptions, acceptance criteria, and priority \
                              classifications using NLP techniques."
                    />
                    <InfoCard
                        title="Semantic Retrieval Agent (RAG)"
                        body="Embeds requirements and code artifacts into vector space, \
                              performing similarity-based retrieval to identify semantically \
                              relevant code segments for each requirement."
                    />
                    <InfoCard
                        title="LLM Reasoning Agent"
                        body="Analyzes retrieved code context using large language models to \
                              determine implementation status, reasoning strictly over provided \
                              evidence without hallucination."
                    />
                    <InfoCard
                        title="Explainability Agent (XAI)"
                        body="Generates human-readable justifications with explicit code \
                              references, file paths, and line numbers to support AI-generated \
                              traceability decisions."
                    />
                    <InfoCard
                        title="Metrics & Reporting Agent"
                        body="Computes requirement coverage percentages, identifies missing and \
                              partial implementations, and generates audit-ready traceability \
                              matrices."
                    />
                    <InfoCard
                        title="Repository Analysis Agent"
                        body="Traverses Git repositories to extract source code, configuration \
                              files, and design artifacts across multiple programming languages \
                              and frameworks."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PipelineSection() -> impl IntoView {
    view! {
        <section class="section section-alt">
            <div class="section-inner section-mid">
                <h2 class="section-title section-title-center">"RAG + LLM Reasoning Pipeline"</h2>
                <div class="step-stack">
                    <PipelineStep
                        number="1"
                        title="Vector Embedding Generation"
                        body="Requirements and code artifacts are transformed into \
                              high-dimensional vector embeddings using pre-trained language \
                              models, capturing semantic meaning beyond keyword matching."
                    />
                    <PipelineStep
                        number="2"
                        title="Semantic Similarity Retrieval"
                        body="For each requirement, the system performs k-nearest neighbor \
                              search in vector space to retrieve the most semantically relevant \
                              code segments from the indexed repository."
                    />
                    <PipelineStep
                        number="3"
                        title="Context-Grounded LLM Reasoning"
                        body="Retrieved code context is provided to the LLM with strict \
                              instructions to reason exclusively over supplied evidence, \
                              preventing hallucination and ensuring traceable conclusions."
                    />
                    <PipelineStep
                        number="4"
                        title="Implementation Status Classification"
                        body="Based on reasoning analysis, each requirement is classified into \
                              one of three states with supporting evidence and confidence \
                              scores."
                    >
                        <div class="status-legend">
                            <StatusBadge status=ImplementationStatus::FullyImplemented />
                            <StatusBadge status=ImplementationStatus::PartiallyImplemented />
                            <StatusBadge status=ImplementationStatus::Missing />
                        </div>
                    </PipelineStep>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExplainabilitySection() -> impl IntoView {
    view! {
        <section id="inspection" class="section">
            <div class="section-inner">
                <div class="two-column two-column-center">
                    <div>
                        <h2 class="section-title">"Explainability & Transparency"</h2>
                        <p class="section-text">
                            "Every traceability decision generated by the system is accompanied \
                             by explicit, human-readable justifications grounded in concrete \
                             code evidence, so auditors and engineers can independently verify \
                             AI conclusions."
                        </p>
                        <p class="section-text">
                            "Justifications include direct file paths, line number ranges, \
                             relevant code snippets, and natural language explanations of how \
                             retrieved artifacts satisfy requirement criteria."
                        </p>
                        <div class="feature-list">
                            <FeatureItem
                                title="Evidence-Based Decisions"
                                body="All conclusions cite specific code artifacts"
                            />
                            <FeatureItem
                                title="Explicit Code References"
                                body="File paths and line numbers for every trace"
                            />
                            <FeatureItem
                                title="Human-Readable Justifications"
                                body="Natural language explanations for reviewers"
                            />
                        </div>
                    </div>
                    <EvidencePanel />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ApplicabilitySection() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title section-title-center">"Real-World Applicability"</h2>
                <div class="card-grid card-grid-4">
                    <InfoCard
                        title="Software Audits"
                        body="Accelerate compliance verification in regulated industries by \
                              automatically generating audit-ready traceability documentation."
                    />
                    <InfoCard
                        title="Compliance Verification"
                        body="Ensure adherence to industry standards (ISO 26262, DO-178C) \
                              through comprehensive requirement-to-code traceability."
                    />
                    <InfoCard
                        title="Quality Assurance"
                        body="Identify gaps in requirement coverage early in development \
                              cycles, reducing technical debt and rework costs."
                    />
                    <InfoCard
                        title="Large-Scale Systems"
                        body="Maintain traceability in evolving enterprise codebases with \
                              thousands of requirements across distributed teams."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StackSection() -> impl IntoView {
    view! {
        <section class="section section-alt">
            <div class="section-inner">
                <h2 class="section-title section-title-center">"Technology Stack"</h2>
                <div class="stack-chips">
                    {STACK
                        .iter()
                        .map(|name| view! { <span class="stack-chip">{*name}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="section-inner">
                <h3 class="footer-title">
                    "An Agentic RAG-Based Framework for Automated Requirements Traceability \
                     in Software Systems"
                </h3>
                <p class="footer-subtitle">"Major Project – Computer Science & Engineering"</p>
                <p class="footer-copyright">{format!("© {year}")}</p>
            </div>
        </footer>
    }
}

/// Generic titled card used by the solution, agent, and applicability grids
#[component]
fn InfoCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="info-card">
            <h4 class="info-card-title">{title}</h4>
            <p class="info-card-body">{body}</p>
        </div>
    }
}

/// Numbered pipeline step with optional extra content
#[component]
fn PipelineStep(
    number: &'static str,
    title: &'static str,
    body: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="pipeline-step">
            <div class="step-number">{number}</div>
            <div class="step-card">
                <h3 class="step-title">{title}</h3>
                <p class="step-body">{body}</p>
                {children.map(|extra| extra())}
            </div>
        </div>
    }
}

/// Short feature bullet in the explainability column
#[component]
fn FeatureItem(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="feature-item">
            <h4 class="feature-title">{title}</h4>
            <p class="feature-body">{body}</p>
        </div>
    }
}
