use jotmark_core::{LinkTable, Options};
use wasm_bindgen::prelude::*;

/// Renders `source` with default options and no seeded links.
#[wasm_bindgen]
pub fn render_html(source: &str) -> String {
    jotmark_core::to_html(source)
}

/// Renders `source` with a links object (`{ name: url }`) and an options
/// object using camelCase keys (`{ indentBlocks: false, linkStyle: "windowOpen" }`).
/// Either may be `null` or `undefined`.
#[wasm_bindgen]
pub fn render_html_with_options(
    source: &str,
    links: JsValue,
    options: JsValue,
) -> Result<String, JsValue> {
    let mut links = links_from_js(links)?;
    let options = options_from_js(options)?;
    Ok(jotmark_core::parse(source, Some(&mut links), Some(&options)))
}

fn links_from_js(value: JsValue) -> Result<LinkTable, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(LinkTable::new());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn options_from_js(value: JsValue) -> Result<Options, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(Options::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
