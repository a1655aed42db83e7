use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use tracing::error;
use tracing::info;

/// Built-in catalog, used when no file is given or a key is missing from it
pub static DEFAULT: Lazy<Messages> = Lazy::new(Messages::default);

/// Reply templates
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub start: String,
    pub help: String,
    pub invalid_format: String,
    pub out_of_range: String,
    pub roll_result: String,
    pub error: String,
    pub log_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            start: "**Welcome!** Roll some dice with `/roll 2d6+3`, or type `/help`.".to_owned(),
            help: concat!(
                "`/roll [expression]` rolls dice, `1d20` when no expression is given\n",
                "`NdS` rolls *N* dice with *S* sides, `N` defaults to 1\n",
                "`+N` / `-N` adds a flat modifier\n",
                "`/start` `/help` `/quit`"
            )
            .to_owned(),
            invalid_format: "**error** *invalid format*, try something like `2d6+3`".to_owned(),
            out_of_range: "**error** *{reason}*".to_owned(),
            roll_result: "*rolling* `{dice_expression}`\n[{results_str}]{modifier_str} = **{total}**"
                .to_owned(),
            error: "**error** *something went wrong while rolling*".to_owned(),
            log_error: "Error processing /roll command".to_owned(),
        }
    }
}

impl Messages {
    /// Load a catalog, falling back to the built-in one on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match ron::from_str::<Messages>(&raw) {
                Ok(messages) => {
                    info!("Loaded messages from `{}`", path.display());
                    messages
                }
                Err(err) => {
                    error!("Decoding error in `{}`: {}", path.display(), err);
                    DEFAULT.clone()
                }
            },
            Err(err) => {
                error!("Could not read `{}`: {}", path.display(), err);
                DEFAULT.clone()
            }
        }
    }
}

/// Replace every `{key}` placeholder of `template` with its value
///
/// Substituted values are copied as is, placeholders inside them are not expanded.
/// Unknown placeholders are left in place.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let value = tail.find('}').and_then(|close| {
            let key = &tail[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
