//! `${VAR}` placeholder substitution for message text.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").unwrap());

/// Substitutes `${NAME}` placeholders from a set of runtime variables.
///
/// Lookup is case-sensitive. Unknown placeholders stay in the output as
/// written so a typo shows up in the delivered message. Values are inserted
/// as-is and never scanned for further placeholders.
#[derive(Debug, Clone, Copy)]
pub struct MessageFormatter<'a> {
    vars: &'a HashMap<String, String>,
}

impl<'a> MessageFormatter<'a> {
    #[must_use]
    pub const fn new(vars: &'a HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Format `template`; an absent template formats to an empty string.
    #[must_use]
    pub fn format(&self, template: Option<&str>) -> String {
        let Some(template) = template else {
            return String::new();
        };

        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| match self.vars.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
