//! Plain text outline of a render tree, for previews and logs.

use std::fmt::Write;

use crate::layout::{Body, HeaderStyle, RenderTree};

/// Describe a render tree as indented plain text.
pub fn to_text(tree: &RenderTree) -> String {
    let mut out = String::new();
    let palette = &tree.background.palette;

    let _ = writeln!(
        out,
        "canvas {}x{} ({:?}, {} mode, {} font)",
        tree.canvas.width, tree.canvas.height, tree.direction, palette.mode, tree.font
    );
    let _ = writeln!(
        out,
        "background {} -> {} accent {}{}{}",
        palette.from,
        palette.to,
        palette.accent,
        if tree.background.decorations.show_pattern { " +pattern" } else { "" },
        if tree.background.decorations.show_glow { " +glow" } else { "" },
    );

    let style = match tree.header.style {
        HeaderStyle::Pill => "pill",
        HeaderStyle::Split => "split",
    };
    let _ = write!(
        out,
        "header[{}] {} @{}px",
        style, tree.header.title.text, tree.header.title.font_px
    );
    if let Some(badge) = &tree.header.badge {
        let _ = write!(out, "  × {}", badge.text);
    }
    out.push('\n');

    match &tree.body {
        Body::Single(body) => {
            let _ = writeln!(
                out,
                "body[{:?}] @{}px x{}",
                body.arrangement, body.text.font_px, body.line_height
            );
            push_indented(&mut out, &body.text.text, 2);
            if let Some(detail) = &body.detail {
                let _ = writeln!(out, "  detail @{}px", detail.font_px);
                for text in [&detail.benefit, &detail.count_description].into_iter().flatten() {
                    push_indented(&mut out, text, 4);
                }
            }
        }
        Body::List(list) => {
            let _ = writeln!(
                out,
                "body[list] {} columns @{}px x{}",
                list.columns.len(),
                list.font_px,
                list.line_height
            );
            for (i, column) in list.columns.iter().enumerate() {
                let _ = writeln!(out, "  column {}", i + 1);
                for entry in &column.entries {
                    let badge = entry
                        .badge
                        .as_deref()
                        .map(|b| format!(" × {}", b))
                        .unwrap_or_default();
                    let _ = writeln!(out, "    {}.{}", entry.position + 1, badge);
                    push_indented(&mut out, &entry.text, 6);
                }
            }
        }
    }

    let footer = &tree.footer;
    for (label, block) in [
        ("watermark", &footer.watermark),
        ("benefit", &footer.benefit),
        ("count", &footer.count_description),
    ] {
        if let Some(block) = block {
            let _ = writeln!(out, "footer.{} @{}px: {}", label, block.font_px, block.text);
        }
    }

    out.trim_end().to_string()
}

fn push_indented(out: &mut String, text: &str, indent: usize) {
    for line in text.lines() {
        out.push_str(&" ".repeat(indent));
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{create_design_with, DesignOverrides, Template};
    use crate::layout::{compute_layout, DisplayOptions};
    use crate::model::ContentItem;

    #[test]
    fn test_to_text_single() {
        let design = create_design_with(3, &DesignOverrides::new().with_template(Template::Frame));
        let items = [ContentItem::new("line one\nline two").with_benefit("good")];
        let tree = compute_layout(&design, "Morning", &items, &DisplayOptions::default(), 1080)
            .unwrap();

        let text = to_text(&tree);
        assert!(text.starts_with("canvas 1080x1920"));
        assert!(text.contains("header[pill] Morning @32px"));
        assert!(text.contains("  line two"));
        assert!(text.contains("footer.benefit @22px: good"));
    }

    #[test]
    fn test_to_text_list() {
        let design = create_design_with(3, &DesignOverrides::new().with_template(Template::List));
        let items = [
            ContentItem::new("a").with_count(3u32),
            ContentItem::new("b"),
        ];
        let options = DisplayOptions::new().with_columns(2);
        let tree = compute_layout(&design, "T", &items, &options, 1080).unwrap();

        let text = to_text(&tree);
        assert!(text.contains("body[list] 2 columns"));
        assert!(text.contains("1. × 3"));
        assert!(text.contains("column 2"));
    }
}
