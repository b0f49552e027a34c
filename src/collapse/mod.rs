//! Turns a heterogeneous argument list into one printable, newline-joined string.
//!
//! Arguments are tagged up front as [`Value`]s: plain text, structured data
//! (anything `serde` can describe) or an error. Structured values and errors
//! are pretty-printed with tab indentation; text passes through untouched.
//! Collapsing never fails. A value that refuses to serialize degrades to
//! its error text.

use serde::Serialize;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::Write as _;

/// One logger argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Scalars and strings, printed as-is.
    Text(String),
    /// Objects, arrays and other data; pretty-printed.
    Structured(serde_json::Value),
    /// A captured error; pretty-printed as `{name, message, stack?}`.
    Error(ErrorValue),
}

impl Value {
    /// Tags any serializable value; serialization failures degrade to text.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        serde_json::to_value(value).map_or_else(|e| Self::Text(e.to_string()), Self::Structured)
    }

    /// Tags an error, capturing its name, message and source chain.
    pub fn error<E: std::error::Error + 'static>(error: &E) -> Self {
        Self::Error(ErrorValue::from_error(error))
    }

    /// Text form used when the value stands alone, ignoring stack settings.
    #[must_use]
    pub fn render(&self, options: CollapseOptions) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Structured(value) => render_structured(value),
            Self::Error(error) => error.render(options.show_error_stack),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

impl From<ErrorValue> for Value {
    fn from(error: ErrorValue) -> Self {
        Self::Error(error)
    }
}

macro_rules! text_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Text(v.to_string())
                }
            }
        )*
    };
}

text_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// The parts of an error worth printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorValue {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorValue {
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    #[must_use]
    pub fn stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Name is the error's short type name. The stack starts with `name: message`,
    /// lists the `source()` chain and appends a backtrace when `RUST_BACKTRACE` enables one.
    pub fn from_error<E: std::error::Error + 'static>(error: &E) -> Self {
        let name = short_type_name(std::any::type_name::<E>());
        let message = error.to_string();

        let mut stack = format!("{name}: {message}");
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(stack, "\n    caused by: {cause}");
            source = cause.source();
        }
        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            let _ = write!(stack, "\n{backtrace}");
        }

        Self {
            name,
            message,
            stack: Some(stack),
        }
    }

    /// Pretty-printed object; `stack` is left out unless asked for.
    #[must_use]
    pub fn render(&self, show_stack: bool) -> String {
        let shown = Self {
            name: self.name.clone(),
            message: self.message.clone(),
            stack: if show_stack { self.stack.clone() } else { None },
        };
        match serde_json::to_value(&shown) {
            Ok(value) => render_structured(&value),
            Err(_) => format!("{}: {}", self.name, self.message),
        }
    }
}

/// `std::io::error::Error` → `Error`, `Foo<Bar>` → `Foo`.
fn short_type_name(full: &str) -> String {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

/// Settings that change how values collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollapseOptions {
    pub show_error_stack: bool,
}

/// Renders every value and joins the fragments with `\n`, preserving order.
#[must_use]
pub fn collapse(values: &[Value], options: CollapseOptions) -> String {
    values
        .iter()
        .map(|value| value.render(options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scalars print bare; objects, arrays and null are pretty-printed with tab indentation.
fn render_structured(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => pretty(value),
    }
}

fn pretty(value: &serde_json::Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Builds a `[Value; N]` from heterogeneous arguments, converting each with `Value::from`.
///
/// ```
/// use conlog::{Value, values};
///
/// let args = values!["answer:", 42, serde_json::json!({ "ok": true })];
/// assert!(matches!(args[2], Value::Structured(_)));
/// ```
#[macro_export]
macro_rules! values {
    () => {{
        let empty: [$crate::Value; 0] = [];
        empty
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_passes_through() {
        let out = collapse(&[Value::from("hello"), Value::from(3)], CollapseOptions::default());
        assert_eq!(out, "hello\n3");
    }

    #[test]
    fn objects_use_tab_indentation() {
        let out = collapse(&[json!({ "a": 1 }).into()], CollapseOptions::default());
        assert_eq!(out, "{\n\t\"a\": 1\n}");
    }

    #[test]
    fn structured_scalars_are_bare() {
        let out = collapse(
            &[json!("plain").into(), json!(true).into()],
            CollapseOptions::default(),
        );
        assert_eq!(out, "plain\ntrue");
    }

    #[test]
    fn null_is_printed_as_json() {
        let out = collapse(&[serde_json::Value::Null.into()], CollapseOptions::default());
        assert_eq!(out, "null");
    }

    #[test]
    fn short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(short_type_name("my::Wrapper<alloc::string::String>"), "Wrapper");
    }

    #[test]
    fn every_integer_width_is_a_bare_scalar() {
        let args = values![7u8, -3i16, u128::MAX, -1isize];
        let out = collapse(&args, CollapseOptions::default());
        assert_eq!(out, format!("7\n-3\n{}\n-1", u128::MAX));
    }

    #[test]
    fn empty_values_macro_is_empty() {
        let args = values![];
        assert!(args.is_empty());
    }
}
