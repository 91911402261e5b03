//! Floating scripted chatbot widget.
//!
//! Replies are chosen by keyword in `util::chat_script` and delivered after
//! a fixed delay so the exchange reads like a conversation.

use leptos::prelude::*;

use crate::state::chat::{ChatAuthor, ChatState};

/// Deliver `reply` once the scripted delay has elapsed.
fn schedule_reply(chat: RwSignal<ChatState>, reply: &'static str) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::util::chat_script::REPLY_DELAY_MS).await;
            if chat.try_update(|c| c.deliver_reply(reply)).is_none() {
                log::debug!("chatbot: widget disposed before reply was delivered");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        chat.update(|c| c.deliver_reply(reply));
    }
}

fn message_class(author: ChatAuthor) -> &'static str {
    match author {
        ChatAuthor::User => "chatbot__message chatbot__message--user",
        ChatAuthor::Bot => "chatbot__message chatbot__message--bot",
    }
}

#[component]
pub fn Chatbot() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let send = move || {
        if let Some(reply) = chat.try_update(ChatState::submit).flatten() {
            schedule_reply(chat, reply);
        }
    };

    let panel = move || {
        chat.get().open.then(|| {
            view! {
                <div class="chatbot__panel" role="dialog" aria-label="Vista assistant">
                    <header class="chatbot__header">
                        <span>"Vista assistant"</span>
                        <button class="chatbot__close" aria-label="Close chat" on:click=move |_| chat.update(ChatState::toggle)>
                            "×"
                        </button>
                    </header>
                    <ul class="chatbot__messages">
                        <For each=move || chat.get().messages key=|m| m.id let:message>
                            <li class=message_class(message.author)>{message.text}</li>
                        </For>
                        <Show when=move || chat.get().awaiting_reply>
                            <li class="chatbot__message chatbot__message--typing">"..."</li>
                        </Show>
                    </ul>
                    <form
                        class="chatbot__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            class="chatbot__input"
                            type="text"
                            placeholder="Ask about staging, pricing, voice..."
                            prop:value=move || chat.get().draft
                            on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                        />
                        <button class="chatbot__send" type="submit" disabled=move || chat.get().awaiting_reply>
                            "Send"
                        </button>
                    </form>
                </div>
            }
        })
    };

    view! {
        <div class="chatbot">
            {panel}
            <button
                class="chatbot__launcher"
                aria-label="Open chat"
                on:click=move |_| chat.update(ChatState::toggle)
            >
                "💬"
            </button>
        </div>
    }
}
