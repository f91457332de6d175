use indexmap::IndexMap;
use serde::Serialize;

/// Name of the global the inline script assigns. Fixed contract with
/// the client-side updater that redraws diagrams on value changes.
pub const DIAGRAMS_GLOBAL: &str = "__MERMAID_DIAGRAMS__";

/// Per-diagram record exposed to client-side code. `index` is the
/// block's document-order position among all mermaid blocks on the
/// page, counting blocks that carried no placeholders.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramPayload {
    pub index: usize,
    pub mappings: IndexMap<String, String>,
    #[serde(rename = "originalSource")]
    pub original_source: String,
}

/// Build the inline `<script>` fragment that carries every collected
/// payload entry, for prepending to the page.
pub fn build_inline_script(payloads: &[DiagramPayload]) -> String {
    let json = serde_json::to_string(payloads).unwrap_or_else(|_| "[]".to_string());
    format!("<script>\nwindow.{DIAGRAMS_GLOBAL} = {json};\n</script>\n")
}
