//! Tag dispatch table for plain-text rendering.

mod plaintext;
mod rule;

pub use plaintext::plaintext_rules;
pub use rule::Rule;

use indexmap::IndexMap;
use tracing::trace;

/// Mapping from lowercase tag name to rendering [`Rule`]
#[derive(Debug, Clone)]
pub struct Rules {
    table: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in table
    pub fn new() -> Self {
        Self {
            table: plaintext_rules()
                .into_iter()
                .map(|(tag, rule)| (tag.to_string(), rule))
                .collect(),
        }
    }

    /// Map a tag to a rule, replacing any existing entry.
    pub fn add(&mut self, tag: &str, rule: Rule) {
        self.table.insert(tag.to_lowercase(), rule);
    }

    /// Find the rule for a tag; unknown tags are transparent.
    pub fn for_tag(&self, tag: &str) -> Rule {
        match self.table.get(tag) {
            Some(rule) => *rule,
            None => {
                trace!(tag, "no rule for tag, rendering children only");
                Rule::Transparent
            }
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
