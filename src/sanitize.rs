use htmlize::escape_attribute;
use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::pattern::{MERMAID_BLOCK_RE, PLACEHOLDER_SPAN_ALT_RE, PLACEHOLDER_SPAN_RE};
use crate::payload::{build_inline_script, DiagramPayload};

/// Placeholder name -> current display value, in left-to-right scan
/// order of the block's source.
pub type Mappings = IndexMap<String, String>;

/// Replace every placeholder span in one diagram's source with its
/// literal text value, recording name -> value as it goes. A later
/// span with the same name overwrites an earlier one.
pub fn sanitize_diagram_source(source: &str) -> (String, Mappings) {
    let mut mappings = Mappings::new();
    let cleaned = strip_spans(&PLACEHOLDER_SPAN_RE, source, &mut mappings);
    let cleaned = strip_spans(&PLACEHOLDER_SPAN_ALT_RE, &cleaned, &mut mappings);
    (cleaned, mappings)
}

fn strip_spans(re: &Regex, source: &str, mappings: &mut Mappings) -> String {
    re.replace_all(source, |caps: &Captures| {
        let value = caps[2].to_string();
        mappings.insert(caps[1].to_string(), value.clone());
        value
    })
    .into_owned()
}

/// Sanitize every mermaid block in a rendered page.
///
/// Two phases: the first rewrites each block in place (spans replaced
/// by their text, annotated opening tag) while collecting one payload
/// entry per block that carried at least one placeholder; the second
/// prepends the inline data script when anything was collected.
///
/// Total over all inputs. Text that fails to match the block or span
/// patterns passes through verbatim, so a malformed page can never
/// fail the build.
pub fn sanitize_page(html: &str) -> String {
    let mut payloads: Vec<DiagramPayload> = Vec::new();
    let mut index = 0usize;

    let result = MERMAID_BLOCK_RE.replace_all(html, |caps: &Captures| {
        let pre_open = &caps[1];
        // Captures 2..4 carry a <code>-wrapped interior, capture 5 a bare one.
        let code_open = caps.get(2).map_or("", |m| m.as_str());
        let content = caps
            .get(3)
            .or_else(|| caps.get(5))
            .map_or("", |m| m.as_str());
        let code_close = caps.get(4).map_or("", |m| m.as_str());
        let pre_close = &caps[6];

        let (cleaned, mappings) = sanitize_diagram_source(content);

        let pre_open = if mappings.is_empty() {
            pre_open.to_string()
        } else {
            let annotated = annotate_pre_open(pre_open, &mappings, &cleaned);
            payloads.push(DiagramPayload {
                index,
                mappings,
                original_source: cleaned.clone(),
            });
            annotated
        };
        index += 1;

        format!("{pre_open}{code_open}{cleaned}{code_close}{pre_close}")
    });

    if payloads.is_empty() {
        result.into_owned()
    } else {
        format!("{}{}", build_inline_script(&payloads), result)
    }
}

/// Splice the serialized mapping and the cleaned source into the
/// opening tag as data attributes. Skipped when the mappings attribute
/// is already present, so reprocessing an annotated page cannot stack
/// duplicates.
fn annotate_pre_open(pre_open: &str, mappings: &Mappings, cleaned: &str) -> String {
    if pre_open.contains("data-placeholder-mappings") {
        return pre_open.to_string();
    }
    let mappings_json =
        serde_json::to_string(mappings).unwrap_or_else(|_| "{}".to_string());
    pre_open.replacen(
        r#"class="mermaid""#,
        &format!(
            r#"class="mermaid" data-placeholder-mappings="{}" data-mermaid-source="{}""#,
            escape_attribute(mappings_json.as_str()),
            escape_attribute(cleaned),
        ),
        1,
    )
}
