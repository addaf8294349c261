//! Native sources: `src-tauri/src/main.rs` and `src-tauri/build.rs`.
//!
//! Both are static. The specification never reaches them; only the source
//! formatter touches the text.

const MAIN_SOURCE: &str = include_str!("../../../templates/tray_main.rs.in");
const BUILD_SOURCE: &str = include_str!("../../../templates/build.rs.in");

/// Tray bootstrap: one "Quit" item, left click toggles the main window,
/// focus loss hides it.
pub fn main_source() -> &'static str {
    MAIN_SOURCE
}

pub fn build_source() -> &'static str {
    BUILD_SOURCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_source_wires_the_tray() {
        let src = main_source();
        assert!(src.contains("CustomMenuItem::new(\"quit\".to_string(), \"Quit\")"));
        assert!(src.contains("SystemTrayEvent::LeftClick"));
        assert!(src.contains("WindowEvent::Focused(false)"));
        assert!(src.contains("generate_context!()"));
    }

    #[test]
    fn build_source_calls_tauri_build() {
        assert!(build_source().contains("tauri_build::build()"));
    }
}
