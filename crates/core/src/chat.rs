use crate::models::ChatRule;

pub const CHAT_FALLBACK: &str =
    "⚠️ Sorry, I don’t understand. Please ask about symptoms, diet, gluten, etc.";

/// Ordered trigger table. Earlier rules win: the first trigger found
/// anywhere in the input decides the reply, even when a later trigger is
/// longer or more specific.
#[derive(Debug, Clone, Default)]
pub struct ChatRules {
    rules: Vec<ChatRule>,
}

impl ChatRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: ChatRule) {
        self.rules.push(rule);
    }

    pub fn first_match(&self, user_text: &str) -> Option<&ChatRule> {
        let lower = user_text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lower.contains(rule.trigger.as_str()))
    }

    pub fn respond(&self, user_text: &str) -> String {
        chat_reply(self.first_match(user_text))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub fn chat_reply(matched: Option<&ChatRule>) -> String {
    matched
        .map(|rule| rule.reply.clone())
        .unwrap_or_else(|| CHAT_FALLBACK.to_string())
}

impl FromIterator<ChatRule> for ChatRules {
    fn from_iter<I: IntoIterator<Item = ChatRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
