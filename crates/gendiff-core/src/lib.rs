//! # gendiff-core
//!
//! Structural diff engine for JSON and YAML configuration documents.
//!
//! Two documents are normalized into canonical trees, compared key by key in
//! sorted order, and rendered as a nested brace block (`stylish`), one
//! sentence per change (`plain`), or a machine-readable change log (`json`).
//!
//! ## Quick start
//!
//! ```rust
//! use gendiff_core::{compare_str, Format, SourceFormat};
//!
//! let old = r#"{"host":"hexlet.io","timeout":50}"#;
//! let new = r#"{"host":"hexlet.io","timeout":20}"#;
//! let out = compare_str(old, new, SourceFormat::Json, Format::Plain).unwrap();
//! assert_eq!(out, "Property 'timeout' was updated. From 50 to 20");
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `GenericValue`, the value model parsed documents convert into
//! - [`parser`] — file extension sniffing and JSON/YAML deserialization
//! - [`tree`] — Tree Builder (`GenericValue` mapping → `TreeNode`)
//! - [`diff`] — Diff Engine (`TreeNode` × `TreeNode` → `DiffNode`s)
//! - [`stylish`], [`plain`], [`json`] — the three renderers
//! - [`format`] — `Format` selection and renderer dispatch
//! - [`compare`] — one-call façade over the whole pipeline
//! - [`error`] — error types for parse failures

pub mod compare;
pub mod diff;
pub mod error;
pub mod format;
pub mod json;
pub mod parser;
pub mod plain;
pub mod stylish;
pub mod tree;
pub mod types;

pub use compare::{compare_documents, compare_str, gen_diff};
pub use diff::{diff, Change, DiffNode, Status};
pub use error::{DiffError, ParseCause};
pub use format::{render, Format};
pub use parser::{parse_file, parse_str, SourceFormat};
pub use tree::{build_tree, TreeNode};
pub use types::{GenericValue, Mapping};
