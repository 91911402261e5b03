#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::util::chat_script;

/// State for the floating chatbot widget.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    /// A scripted reply is scheduled and not yet delivered.
    pub awaiting_reply: bool,
    next_id: u32,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self {
            open: false,
            messages: Vec::new(),
            draft: String::new(),
            awaiting_reply: false,
            next_id: 0,
        };
        state.push(ChatAuthor::Bot, chat_script::GREETING.to_owned());
        state
    }
}

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub author: ChatAuthor,
    pub text: String,
}

impl ChatState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Send the current draft. Returns the scripted reply to deliver after
    /// the delay, or `None` when nothing was sent (blank draft, or a reply
    /// is still pending).
    pub fn submit(&mut self) -> Option<&'static str> {
        let text = self.draft.trim().to_owned();
        if text.is_empty() || self.awaiting_reply {
            return None;
        }
        self.draft.clear();
        self.push(ChatAuthor::User, text);
        self.awaiting_reply = true;
        self.messages.last().map(|m| chat_script::reply_for(&m.text))
    }

    /// Append the delayed reply and clear the pending flag.
    pub fn deliver_reply(&mut self, reply: &str) {
        self.push(ChatAuthor::Bot, reply.to_owned());
        self.awaiting_reply = false;
    }

    fn push(&mut self, author: ChatAuthor, text: String) {
        self.messages.push(ChatMessage { id: self.next_id, author, text });
        self.next_id += 1;
    }
}
