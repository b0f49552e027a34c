//! Utility functions for the CLI.

use super::OutputArgs;
use crate::collapse::Value;
use crate::logger::Logger;
use std::io;

/// Builds the logger every subcommand shares.
#[must_use]
pub fn build_logger(options: &OutputArgs) -> Logger {
    Logger::from_config(options.to_config())
}

/// Turns message words into arguments. Plain words form one space-joined
/// text; with `json`, each word that parses as JSON becomes its own structured value.
#[must_use]
pub fn message_values(words: &[String], json: bool) -> Vec<Value> {
    if !json {
        return if words.is_empty() {
            Vec::new()
        } else {
            vec![Value::from(words.join(" "))]
        };
    }
    words
        .iter()
        .map(|word| {
            serde_json::from_str::<serde_json::Value>(word)
                .map_or_else(|_| Value::from(word), Value::from)
        })
        .collect()
}

/// Single-threaded runtime for `art` and `pause`.
///
/// # Errors
/// Returns an error if the runtime cannot be created.
pub fn runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn plain_words_join_into_one_text() {
        let values = message_values(&words(&["disk", "42", "{\"a\":1}"]), false);
        assert_eq!(values, vec![Value::from("disk 42 {\"a\":1}")]);
        assert!(message_values(&[], false).is_empty());
    }

    #[test]
    fn json_flag_parses_what_it_can() {
        let values = message_values(&words(&["{\"a\":1}", "not json"]), true);
        assert_eq!(values[0], Value::Structured(serde_json::json!({"a": 1})));
        assert_eq!(values[1], Value::from("not json"));
    }
}
