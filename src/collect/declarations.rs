//! Declaration collection.
//!
//! Walks a source file line by line and attaches doc-comment directive
//! markers to the declaration that follows them. A contiguous block of
//! comment lines belongs to the first non-blank, non-comment line after it;
//! a blank line breaks the chain, so a detached comment block applies to
//! nothing. Trailing comment blocks at end of file are dropped.
//!
//! The walker deliberately does not parse the host language. API type files
//! are treated as lines of text: it only needs to know which lines are
//! comments and which line a comment block precedes. Byte offsets are
//! tracked throughout so every marker span points into the original buffer.

use crate::markers::{MarkerSet, Registry, Span, parse_marker};

/// Declaration-line keywords skipped when guessing a declaration name.
const DECLARATION_KEYWORDS: &[&str] = &[
    "type", "struct", "func", "var", "const", "pub", "fn", "class", "def", "interface",
];

/// One declaration with its attached markers.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Best-effort identifier from the declaration line, for diagnostics.
    pub name: String,
    /// 1-based line number of the declaration line.
    pub line: usize,
    /// The declaration line text, for diagnostic context.
    pub text: String,
    /// Every directive parsed from the attached comment block.
    pub markers: MarkerSet,
}

/// Collect all declarations (and their markers) from one file.
///
/// `comment_markup` lists the line-comment openers to recognize, e.g.
/// `//` and `#`. The registry must already contain every identifier the
/// enabled rules care about; boundary resolution consults it per directive.
pub fn collect_declarations(
    source: &str,
    registry: &Registry,
    comment_markup: &[String],
) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    // Pending comment block: (text, span) per comment line
    let mut block: Vec<(&str, Span)> = Vec::new();

    let mut offset = 0;
    let mut line_number = 0;
    for raw_line in source.split_inclusive('\n') {
        line_number += 1;
        let line_start = offset;
        offset += raw_line.len();

        let content = raw_line.trim_end_matches(['\n', '\r']);
        let span = Span::new(line_start, line_start + content.len());

        if is_comment_line(content, comment_markup) {
            block.push((content, span));
            continue;
        }
        if content.trim().is_empty() {
            // Blank line: the pending block attaches to nothing
            block.clear();
            continue;
        }

        let mut markers = MarkerSet::new();
        for (comment, comment_span) in block.drain(..) {
            if let Some(marker) = parse_marker(comment, comment_span, registry) {
                markers.insert(marker);
            }
        }
        declarations.push(Declaration {
            name: declaration_name(content),
            line: line_number,
            text: content.to_string(),
            markers,
        });
    }

    declarations
}

fn is_comment_line(line: &str, comment_markup: &[String]) -> bool {
    let trimmed = line.trim_start();
    comment_markup.iter().any(|markup| trimmed.starts_with(markup.as_str()))
}

/// Best-effort declaration name: the first token that is not a declaration
/// keyword, trimmed to its leading identifier characters.
fn declaration_name(line: &str) -> String {
    line.split_whitespace()
        .find(|token| !DECLARATION_KEYWORDS.contains(token))
        .map(|token| {
            token
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn markup() -> Vec<String> {
        vec!["//".to_string(), "#".to_string()]
    }

    fn collect(source: &str, registry: &Registry) -> Vec<Declaration> {
        collect_declarations(source, registry, &markup())
    }

    // ============================================================
    // Block attachment
    // ============================================================

    #[test]
    fn test_markers_attach_to_following_declaration() {
        let registry = Registry::new();
        registry.register(["optional", "kubebuilder:validation:MaxLength"]);
        let source = "\
// Replicas is the desired replica count.
// +optional
// +kubebuilder:validation:MaxLength=10
Replicas int32
";
        let declarations = collect(source, &registry);

        assert_eq!(declarations.len(), 1);
        let decl = &declarations[0];
        assert_eq!(decl.name, "Replicas");
        assert_eq!(decl.line, 4);
        assert!(decl.markers.has("optional"));
        assert!(decl.markers.has("kubebuilder:validation:MaxLength"));
        assert_eq!(decl.markers.len(), 2);
    }

    #[test]
    fn test_blank_line_breaks_the_chain() {
        let registry = Registry::new();
        registry.register(["optional"]);
        let source = "\
// +optional

Replicas int32
";
        let declarations = collect(source, &registry);

        assert_eq!(declarations.len(), 1);
        assert!(declarations[0].markers.is_empty());
    }

    #[test]
    fn test_trailing_block_is_dropped() {
        let registry = Registry::new();
        registry.register(["optional"]);
        let source = "Replicas int32\n// +optional\n";
        let declarations = collect(source, &registry);

        assert_eq!(declarations.len(), 1);
        assert!(declarations[0].markers.is_empty());
    }

    #[test]
    fn test_non_directive_comments_are_skipped() {
        let registry = Registry::new();
        let source = "\
// Replicas is the desired replica count.
// It defaults to 1.
Replicas int32
";
        let declarations = collect(source, &registry);
        assert!(declarations[0].markers.is_empty());
    }

    #[test]
    fn test_multiple_declarations() {
        let registry = Registry::new();
        registry.register(["optional", "required"]);
        let source = "\
// +optional
Replicas int32

// +required
Image string
";
        let declarations = collect(source, &registry);

        assert_eq!(declarations.len(), 2);
        assert!(declarations[0].markers.has("optional"));
        assert!(!declarations[0].markers.has("required"));
        assert!(declarations[1].markers.has("required"));
        assert_eq!(declarations[1].name, "Image");
    }

    #[test]
    fn test_hash_comment_markup() {
        let registry = Registry::new();
        registry.register(["optional"]);
        let source = "# +optional\nreplicas: 1\n";
        let declarations = collect(source, &registry);

        assert_eq!(declarations.len(), 1);
        assert!(declarations[0].markers.has("optional"));
        assert_eq!(declarations[0].name, "replicas");
    }

    // ============================================================
    // Span fidelity
    // ============================================================

    #[test]
    fn test_marker_spans_point_into_the_source() {
        let registry = Registry::new();
        registry.register(["optional", "kubebuilder:validation:MaxLength"]);
        let source = "\
// +optional
// +kubebuilder:validation:MaxLength=10
Replicas int32
";
        let declarations = collect(source, &registry);
        let markers = &declarations[0].markers;

        let optional = &markers.get("optional")[0];
        assert_eq!(optional.span.slice(source), "// +optional");

        let max_length = &markers.get("kubebuilder:validation:MaxLength")[0];
        assert_eq!(
            max_length.span.slice(source),
            "// +kubebuilder:validation:MaxLength=10"
        );
    }

    #[test]
    fn test_indented_comment_span_covers_whole_line() {
        let registry = Registry::new();
        registry.register(["optional"]);
        let source = "\ttype Spec struct {\n\t// +optional\n\tReplicas int32\n\t}\n";
        let declarations = collect(source, &registry);

        // The `+optional` block attaches to the Replicas field line
        let field = declarations
            .iter()
            .find(|d| d.name == "Replicas")
            .expect("field declaration");
        let marker = &field.markers.get("optional")[0];
        assert_eq!(marker.span.slice(source), "\t// +optional");
    }

    #[test]
    fn test_crlf_lines() {
        let registry = Registry::new();
        registry.register(["optional"]);
        let source = "// +optional\r\nReplicas int32\r\n";
        let declarations = collect(source, &registry);

        let marker = &declarations[0].markers.get("optional")[0];
        assert_eq!(marker.span.slice(source), "// +optional");
    }

    // ============================================================
    // End-to-end scenario
    // ============================================================

    #[test]
    fn test_repeated_directive_collects_both_occurrences() {
        let registry = Registry::new();
        registry.register(["optional", "kubebuilder:validation:MinLength"]);
        let source = "\
// +optional
// +kubebuilder:validation:MinLength:=1
// +kubebuilder:validation:MinLength:=1
Name string
";
        let declarations = collect(source, &registry);
        let markers = &declarations[0].markers;

        assert!(markers.has("optional"));
        let occurrences = markers.get("kubebuilder:validation:MinLength");
        assert_eq!(occurrences.len(), 2);
        assert!(occurrences[0].is_duplicate_of(&occurrences[1]));
    }

    // ============================================================
    // Declaration names
    // ============================================================

    #[test]
    fn test_declaration_name_skips_keywords() {
        assert_eq!(declaration_name("type FooSpec struct {"), "FooSpec");
        assert_eq!(declaration_name("Replicas int32 `json:\"replicas\"`"), "Replicas");
        assert_eq!(declaration_name("replicas: 1"), "replicas");
        assert_eq!(declaration_name("}"), "");
    }
}
