//! UI Components

use agent_core::{ChatOutcome, outcome::Severity};
use leptos::prelude::*;

/// Labelled form field
#[component]
pub fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            {children()}
        </div>
    }
}

/// Result of the last submit
#[component]
pub fn OutcomeBanner(outcome: ChatOutcome) -> impl IntoView {
    let class = match outcome.severity() {
        Severity::Success => "outcome outcome-success",
        Severity::Warning => "outcome outcome-warning",
        Severity::Error => "outcome outcome-error",
    };
    let heading = matches!(outcome, ChatOutcome::Answer(_))
        .then(|| view! { <p class="response-heading">"Agent Response:"</p> });

    view! {
        <div class=class>
            {heading}
            <p class="content">{outcome.display_text()}</p>
        </div>
    }
}
