//! Studio sidebar listing saved versions and the session's chat log.

use leptos::prelude::*;

use crate::net::types::{ChatHistoryEntry, ChatRole, VersionEntry};

fn role_label(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "You",
        ChatRole::Assistant => "Vista",
        ChatRole::System => "System",
    }
}

#[component]
pub fn VersionHistory(
    #[prop(into)] versions: Signal<Vec<VersionEntry>>,
    #[prop(into)] chat: Signal<Vec<ChatHistoryEntry>>,
    #[prop(into)] current_version: Signal<Option<u32>>,
) -> impl IntoView {
    view! {
        <aside class="history">
            <h3 class="history__title">"Versions"</h3>
            <Show
                when=move || !versions.get().is_empty()
                fallback=|| view! { <p class="history__empty">"No saved versions yet."</p> }
            >
                <ol class="history__versions">
                    {move || {
                        let current = current_version.get();
                        versions
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let class = if current == Some(entry.version) {
                                    "history__version history__version--current"
                                } else {
                                    "history__version"
                                };
                                view! {
                                    <li class=class>
                                        <img src=entry.image_url alt={format!("Version {}", entry.version)} loading="lazy"/>
                                        <span class="history__number">{format!("v{}", entry.version)}</span>
                                        <span class="history__prompt">{entry.prompt.unwrap_or_default()}</span>
                                        <time class="history__time">{entry.created_at.unwrap_or_default()}</time>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </Show>

            <h3 class="history__title">"Conversation"</h3>
            <Show
                when=move || !chat.get().is_empty()
                fallback=|| view! { <p class="history__empty">"No messages in this session."</p> }
            >
                <ul class="history__chat">
                    {move || {
                        chat.get()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li class="history__message">
                                        <strong>{role_label(entry.role)}": "</strong>
                                        <span>{entry.content}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </aside>
    }
}
