//! `.vscode/extensions.json`

use serde_json::json;

use super::{EXTENSIONS_JSON, to_json};
use crate::error::TraycraftResult;

const RECOMMENDATIONS: [&str; 2] = ["rust-lang.rust-analyzer", "tauri-apps.tauri-vscode"];

pub fn derive() -> TraycraftResult<String> {
    to_json(EXTENSIONS_JSON, &json!({ "recommendations": RECOMMENDATIONS }))
}
