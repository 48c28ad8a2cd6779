//! Output format selection and renderer dispatch.

use crate::diff::DiffNode;
use crate::json::render_json;
use crate::plain::render_plain;
use crate::stylish::render_stylish;
use std::fmt;

/// The supported output renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Stylish,
    Plain,
    Json,
}

impl Format {
    /// Resolve a format by name. Unknown names fall back to [`Format::Stylish`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "plain" => Format::Plain,
            "json" => Format::Json,
            _ => Format::Stylish,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Stylish => "stylish",
            Format::Plain => "plain",
            Format::Json => "json",
        }
    }
}

impl From<&str> for Format {
    fn from(name: &str) -> Self {
        Format::from_name(name)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a diff with the chosen format.
pub fn render(nodes: &[DiffNode], format: Format) -> String {
    match format {
        Format::Stylish => render_stylish(nodes),
        Format::Plain => render_plain(nodes),
        Format::Json => render_json(nodes),
    }
}
