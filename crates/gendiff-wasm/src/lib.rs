//! WASM bindings for gendiff-core.
//!
//! Exposes in-memory comparison as a `#[wasm_bindgen]` function callable from
//! JavaScript/TypeScript. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p gendiff-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/gendiff_wasm.wasm
//! ```

use gendiff_core::{Format, SourceFormat};
use wasm_bindgen::prelude::*;

/// Compare two documents given as text and render the difference.
///
/// `source_format` is `"json"`, `"yaml"` or `"yml"` and applies to both
/// inputs. `format` is `"stylish"`, `"plain"` or `"json"`; anything else
/// renders as stylish. Throws a JS error for an unknown source format or
/// malformed input.
#[wasm_bindgen]
pub fn compare(
    a: &str,
    b: &str,
    source_format: &str,
    format: &str,
) -> std::result::Result<String, JsValue> {
    let source = SourceFormat::from_name(source_format).ok_or_else(|| {
        JsValue::from_str(&format!("Unsupported source format: '{}'", source_format))
    })?;
    gendiff_core::compare_str(a, b, source, Format::from_name(format))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
