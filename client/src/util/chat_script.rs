//! Scripted replies for the landing-page chatbot.
//!
//! There is no language model behind the widget: a reply is picked by
//! keyword and delivered after a fixed delay so the exchange feels live.

#[cfg(test)]
#[path = "chat_script_test.rs"]
mod chat_script_test;

/// Delay before the scripted reply is appended.
pub const REPLY_DELAY_MS: u32 = 1_200;

/// First message shown when the widget opens.
pub const GREETING: &str = "Hi! I'm the Vista assistant. Ask me about virtual staging, voice design, or your seller dashboard.";

const FALLBACK: &str = "Good question! A Vista specialist can walk you through that. Meanwhile, try the before/after slider above to see staging in action.";

struct Topic {
    /// Whole words that select this topic.
    words: &'static [&'static str],
    /// Word stems that select this topic (`stag` matches `staging`).
    stems: &'static [&'static str],
    reply: &'static str,
}

/// Checked in order. Greetings come last so a question that opens with
/// "hi" still gets its answer.
const TOPICS: &[Topic] = &[
    Topic {
        words: &["ai"],
        stems: &["stag", "furni", "decor"],
        reply: "Virtual staging turns an empty room photo into a furnished one in under a minute. Pick a style, describe the look, and compare versions side by side.",
    },
    Topic {
        words: &["cost", "plan", "plans"],
        stems: &["pric", "subscri"],
        reply: "Plans start with a free trial that includes five staged rooms. Paid tiers add unlimited versions and team seats.",
    },
    Topic {
        words: &["voice", "say", "talk", "speak"],
        stems: &["microph"],
        reply: "With voice design you just say what you want, like \"make the sofa navy\", and Vista updates the staged image.",
    },
    Topic {
        words: &["dashboard", "stats", "leads", "views"],
        stems: &["analytic", "listing"],
        reply: "Your seller dashboard tracks listing views, leads, and staged rooms week over week. Open it from the top navigation.",
    },
    Topic {
        words: &["hello", "hi", "hey", "howdy"],
        stems: &[],
        reply: "Hello! What would you like to know about Vista?",
    },
];

/// Pick the scripted reply for a user message.
#[must_use]
pub fn reply_for(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    TOPICS
        .iter()
        .find(|topic| {
            tokens.iter().any(|token| {
                topic.words.iter().any(|word| *word == *token)
                    || topic.stems.iter().any(|stem| token.starts_with(*stem))
            })
        })
        .map_or(FALLBACK, |topic| topic.reply)
}
