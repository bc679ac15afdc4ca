//! Assistant Chat Component
//!
//! Prompt box that asks the assistant for a note. The input is disabled
//! while a request is in flight.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::AssistantOutcome;
use crate::commands;
use crate::context::use_board;

/// How long a status line stays visible
const STATUS_TIMEOUT_MS: u32 = 6_000;

#[derive(Clone, Debug, PartialEq)]
enum StatusLine {
    Info(String),
    Error(String),
}

#[component]
pub fn AssistantChat() -> impl IntoView {
    let board = use_board();

    let (input, set_input) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (status, set_status) = signal(None::<StatusLine>);

    let show_status = move |line: StatusLine| {
        set_status.try_set(Some(line.clone()));
        spawn_local(async move {
            TimeoutFuture::new(STATUS_TIMEOUT_MS).await;
            // Keep a newer status that replaced this one
            if status.try_get_untracked().flatten().as_ref() == Some(&line) {
                set_status.try_set(None);
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let prompt = input.get_untracked();
        if prompt.trim().is_empty() || busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_status.set(None);

        spawn_local(async move {
            log::info!("[ASSISTANT] Sending prompt ({} chars)", prompt.len());
            match commands::ask_assistant(&prompt).await {
                Ok(reply) => {
                    match board.apply_assistant_reply(reply) {
                        AssistantOutcome::Created { note, message } => {
                            log::info!("[ASSISTANT] Added note {}", note.id);
                            show_status(StatusLine::Info(message));
                        }
                        AssistantOutcome::Message(message) => show_status(StatusLine::Info(message)),
                        AssistantOutcome::Empty => {
                            show_status(StatusLine::Error("No content received from the assistant".to_string()))
                        }
                    }
                    set_input.try_set(String::new());
                }
                Err(failure) => {
                    log::error!("[ASSISTANT] Request failed ({}): {}", failure.status, failure.error);
                    show_status(StatusLine::Error(failure.error));
                }
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="assistant-chat">
            {move || status.get().map(|line| {
                let (class, text) = match line {
                    StatusLine::Info(text) => ("assistant-status", text),
                    StatusLine::Error(text) => ("assistant-status error", text),
                };
                view! { <div class=class>{text}</div> }
            })}
            <form class="assistant-form" on:submit=submit>
                <input
                    type="text"
                    placeholder=move || if busy.get() { "Generating note..." } else { "Ask QuillAI to create a note..." }
                    prop:value=move || input.get()
                    prop:disabled=move || busy.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "…" } else { "Ask" }}
                </button>
            </form>
        </div>
    }
}
