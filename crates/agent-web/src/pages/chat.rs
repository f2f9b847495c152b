//! Chat Console Page

use agent_core::{
    ChatOutcome, ChatRequest,
    models::{DEFAULT_MODEL, SUPPORTED_MODELS},
};
use leptos::prelude::*;

use crate::api;
use crate::components::{Field, OutcomeBanner};

#[component]
pub fn ChatPage() -> impl IntoView {
    let (models, set_models) = signal(
        SUPPORTED_MODELS.iter().map(ToString::to_string).collect::<Vec<_>>(),
    );
    let (system_prompt, set_system_prompt) = signal(String::new());
    let (model, set_model) = signal(DEFAULT_MODEL.to_string());
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (outcome, set_outcome) = signal(None::<ChatOutcome>);

    // Compiled-in list stays if the gateway can't be reached
    leptos::task::spawn_local(async move {
        match api::fetch_models().await {
            Ok(list) if !list.is_empty() => {
                if !list.contains(&model.get_untracked()) {
                    set_model.set(list[0].clone());
                }
                set_models.set(list);
            }
            Ok(_) => {}
            Err(e) => leptos::logging::warn!("model list unavailable: {e}"),
        }
    });

    let submit = move |_| {
        if loading.get() {
            return;
        }

        let message = input.get();
        if let Some(warning) = ChatOutcome::check_input(&message) {
            set_outcome.set(Some(warning));
            return;
        }

        let request = ChatRequest {
            model_name: model.get(),
            system_prompt: system_prompt.get(),
            messages: vec![message],
        };

        set_outcome.set(None);
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            let result = api::run_chat_turn(&request).await;
            set_outcome.set(Some(result));
            set_loading.set(false);
        });
    };

    view! {
        <div class="console">
            <h1 class="title">"AI AGENT CHATBOT"</h1>
            <p class="subtitle">"Interact with the search-enabled agent using this interface."</p>

            <Field label="Define your AI Agent:">
                <textarea
                    rows="6"
                    placeholder="Type your system prompt here..."
                    prop:value=move || system_prompt.get()
                    on:input=move |ev| set_system_prompt.set(event_target_value(&ev))
                />
            </Field>

            <Field label="Select Model:">
                <select
                    prop:value=move || model.get()
                    on:change=move |ev| set_model.set(event_target_value(&ev))
                >
                    <For
                        each=move || models.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let label = name.clone();
                            view! { <option value=name>{label}</option> }
                        }
                    />
                </select>
            </Field>

            <Field label="Enter your message(s):">
                <textarea
                    rows="6"
                    placeholder="Type your message here..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
            </Field>

            <button class="btn btn-primary" on:click=submit disabled=move || loading.get()>
                "Submit"
            </button>

            <Show when=move || loading.get()>
                <div class="spinner">"Processing... Please wait"</div>
            </Show>

            {move || outcome.get().map(|o| view! { <OutcomeBanner outcome=o /> })}
        </div>
    }
}
