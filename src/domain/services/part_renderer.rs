//! Part rendering
//!
//! Maps one message part to a framework-agnostic display node. Components in
//! `app::components::part_view` turn these nodes into markup.

use crate::domain::models::Part;

/// Fallback alt text for images without a filename
pub const DEFAULT_IMAGE_ALT: &str = "image";

/// What a single part looks like on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    /// Inline text, whitespace and newlines preserved
    Text { content: String },
    /// Preformatted block marking non-final reasoning
    Reasoning { content: String },
    /// Embedded image
    Image { src: String, alt: String },
    /// Hyperlink
    Link { href: String, label: String },
    /// Plain label, used for documents and for parts too malformed to link
    Label { content: String },
}

/// Render a part with the default image alt text
pub fn render_part(part: &Part) -> Option<DisplayNode> {
    render_part_with_alt(part, DEFAULT_IMAGE_ALT)
}

/// Render a part, or `None` for tags this view does not know
pub fn render_part_with_alt(part: &Part, default_alt: &str) -> Option<DisplayNode> {
    match part {
        Part::Text { text } => Some(DisplayNode::Text {
            content: text.clone(),
        }),
        Part::Reasoning { text } => Some(DisplayNode::Reasoning {
            content: text.clone(),
        }),
        Part::File {
            media_type,
            url,
            filename,
        } => Some(render_file(
            media_type.as_deref(),
            url.as_deref(),
            filename.as_deref(),
            default_alt,
        )),
        Part::SourceUrl {
            source_id,
            url,
            title,
        } => Some(render_source_url(
            url.as_deref(),
            title.as_deref(),
            source_id.as_deref(),
        )),
        Part::SourceDocument {
            source_id, title, ..
        } => {
            let name = match (non_empty(title.as_deref()), non_empty(source_id.as_deref())) {
                (Some(title), _) => title.to_string(),
                (None, Some(id)) => format!("Document {}", id),
                (None, None) => "Document".to_string(),
            };
            Some(DisplayNode::Label {
                content: format!("Document: {}", name),
            })
        }
        Part::Unknown => None,
    }
}

/// Render every part of a message in order, dropping the ones that produce nothing
pub fn render_parts<'a>(
    parts: impl IntoIterator<Item = &'a Part>,
    default_alt: &str,
) -> Vec<DisplayNode> {
    parts
        .into_iter()
        .filter_map(|part| render_part_with_alt(part, default_alt))
        .collect()
}

fn render_file(
    media_type: Option<&str>,
    url: Option<&str>,
    filename: Option<&str>,
    default_alt: &str,
) -> DisplayNode {
    let filename = non_empty(filename);

    let Some(url) = non_empty(url) else {
        let content = filename
            .or(non_empty(media_type))
            .unwrap_or("File")
            .to_string();
        return DisplayNode::Label { content };
    };

    let is_image = media_type.is_some_and(|media_type| media_type.starts_with("image/"));
    if is_image {
        DisplayNode::Image {
            src: url.to_string(),
            alt: filename.unwrap_or(default_alt).to_string(),
        }
    } else {
        DisplayNode::Link {
            href: url.to_string(),
            label: filename.unwrap_or(url).to_string(),
        }
    }
}

fn render_source_url(url: Option<&str>, title: Option<&str>, source_id: Option<&str>) -> DisplayNode {
    match non_empty(url) {
        Some(href) => {
            let label = match non_empty(title) {
                Some(title) => title.to_string(),
                None => hostname(href).unwrap_or_else(|| href.to_string()),
            };
            DisplayNode::Link {
                href: href.to_string(),
                label,
            }
        }
        None => DisplayNode::Label {
            content: non_empty(title)
                .or(non_empty(source_id))
                .unwrap_or("Source")
                .to_string(),
        },
    }
}

/// Host part of an absolute URL, `None` when the URL does not parse or has no host
pub fn hostname(raw: &str) -> Option<String> {
    url::Url::parse(raw)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keeps_newlines() {
        let node = render_part(&Part::text("line one\nline two")).unwrap();
        assert_eq!(
            node,
            DisplayNode::Text {
                content: "line one\nline two".to_string()
            }
        );
    }

    #[test]
    fn test_reasoning_renders_as_distinct_block() {
        let node = render_part(&Part::reasoning("thinking...")).unwrap();
        assert!(matches!(node, DisplayNode::Reasoning { .. }));
    }

    #[test]
    fn test_unknown_part_renders_nothing() {
        assert_eq!(render_part(&Part::Unknown), None);
    }

    #[test]
    fn test_image_file_renders_image_with_filename_alt() {
        let part = Part::file("image/png", "data:image/png;base64,AAAA", Some("cat.png".into()));
        assert_eq!(
            render_part(&part).unwrap(),
            DisplayNode::Image {
                src: "data:image/png;base64,AAAA".to_string(),
                alt: "cat.png".to_string(),
            }
        );
    }

    #[test]
    fn test_image_file_without_filename_uses_default_alt() {
        let part = Part::file("image/jpeg", "https://cdn.test/x.jpg", None);
        assert_eq!(
            render_part_with_alt(&part, "picture").unwrap(),
            DisplayNode::Image {
                src: "https://cdn.test/x.jpg".to_string(),
                alt: "picture".to_string(),
            }
        );
    }

    #[test]
    fn test_non_image_file_renders_link() {
        let part = Part::file("application/pdf", "https://cdn.test/report.pdf", None);
        assert_eq!(
            render_part(&part).unwrap(),
            DisplayNode::Link {
                href: "https://cdn.test/report.pdf".to_string(),
                label: "https://cdn.test/report.pdf".to_string(),
            }
        );
    }

    #[test]
    fn test_file_without_media_type_falls_back_to_link() {
        let part = Part::File {
            media_type: None,
            url: Some("https://cdn.test/a.bin".to_string()),
            filename: Some("a.bin".to_string()),
        };
        assert_eq!(
            render_part(&part).unwrap(),
            DisplayNode::Link {
                href: "https://cdn.test/a.bin".to_string(),
                label: "a.bin".to_string(),
            }
        );
    }

    #[test]
    fn test_file_without_url_degrades_to_label() {
        let part = Part::File {
            media_type: Some("image/png".to_string()),
            url: None,
            filename: Some("cat.png".to_string()),
        };
        assert_eq!(
            render_part(&part).unwrap(),
            DisplayNode::Label {
                content: "cat.png".to_string()
            }
        );
    }

    #[test]
    fn test_source_url_label_prefers_title_then_hostname() {
        let titled = Part::source_url("https://docs.rs/dioxus/latest", Some("Dioxus docs".into()));
        let untitled = Part::source_url("https://docs.rs/dioxus/latest", None);

        assert_eq!(
            render_part(&titled).unwrap(),
            DisplayNode::Link {
                href: "https://docs.rs/dioxus/latest".to_string(),
                label: "Dioxus docs".to_string(),
            }
        );
        assert_eq!(
            render_part(&untitled).unwrap(),
            DisplayNode::Link {
                href: "https://docs.rs/dioxus/latest".to_string(),
                label: "docs.rs".to_string(),
            }
        );
    }

    #[test]
    fn test_source_url_with_unparseable_url_uses_raw_url() {
        let part = Part::source_url("not a url", None);
        assert_eq!(
            render_part(&part).unwrap(),
            DisplayNode::Link {
                href: "not a url".to_string(),
                label: "not a url".to_string(),
            }
        );
    }

    #[test]
    fn test_source_document_label() {
        let titled = Part::SourceDocument {
            source_id: Some("7".to_string()),
            title: Some("Handbook".to_string()),
            media_type: None,
        };
        let untitled = Part::SourceDocument {
            source_id: Some("7".to_string()),
            title: None,
            media_type: None,
        };

        assert_eq!(
            render_part(&titled).unwrap(),
            DisplayNode::Label {
                content: "Document: Handbook".to_string()
            }
        );
        assert_eq!(
            render_part(&untitled).unwrap(),
            DisplayNode::Label {
                content: "Document: Document 7".to_string()
            }
        );
    }

    #[test]
    fn test_render_parts_skips_unknown_and_keeps_order() {
        let parts = vec![
            Part::reasoning("plan"),
            Part::Unknown,
            Part::text("answer"),
        ];
        let nodes = render_parts(&parts, DEFAULT_IMAGE_ALT);

        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0], DisplayNode::Reasoning { .. }));
        assert!(matches!(nodes[1], DisplayNode::Text { .. }));
    }
}
