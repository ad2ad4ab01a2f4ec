//! Layout engine: design + items + options → render tree.

use crate::design::{Design, Template};
use crate::error::{Error, Result};
use crate::model::ContentItem;

use super::columns::partition_columns;
use super::options::DisplayOptions;
use super::sizing::{
    canvas_height, list_font_px, list_line_height, main_font_px, scale_for, scaled_px,
    MAIN_LINE_HEIGHT,
};
use super::tree::{
    Arrangement, Background, Body, Canvas, Column, DetailBlock, Footer, Header, HeaderStyle,
    ListBody, ListEntry, RenderTree, SingleBody, TextBlock, TextDirection,
};

// Fixed block sizes at the reference width.
const PADDING_PX: f64 = 72.0;
const SPLIT_TITLE_PX: f64 = 40.0;
const SPLIT_BADGE_PX: f64 = 28.0;
const PILL_TITLE_PX: f64 = 32.0;
const PILL_BADGE_PX: f64 = 24.0;
const DETAIL_PX: f64 = 28.0;
const FOOTER_PX: f64 = 22.0;

/// Compute the render tree for `items` under `design`.
///
/// A single item uses the autosized arrangements; a `list` template or more
/// than one item (after truncation to `max_items`) uses the column layout.
pub fn compute_layout(
    design: &Design,
    title: &str,
    items: &[ContentItem],
    options: &DisplayOptions,
    canvas_width: u32,
) -> Result<RenderTree> {
    LayoutEngine::new(design, options, canvas_width)?.layout(title, items)
}

/// Layout engine bound to one design, one set of options and one canvas.
///
/// Holds no state between calls; every `layout` builds a fresh tree.
pub struct LayoutEngine<'a> {
    design: &'a Design,
    options: &'a DisplayOptions,
    canvas_width: u32,
    scale: f64,
}

impl<'a> LayoutEngine<'a> {
    /// Create an engine for a canvas of `canvas_width` pixels.
    pub fn new(design: &'a Design, options: &'a DisplayOptions, canvas_width: u32) -> Result<Self> {
        if canvas_width == 0 {
            return Err(Error::Render("canvas width must be positive".to_string()));
        }
        Ok(Self {
            design,
            options,
            canvas_width,
            scale: scale_for(canvas_width),
        })
    }

    /// Lay out `items` under `title`.
    pub fn layout(&self, title: &str, items: &[ContentItem]) -> Result<RenderTree> {
        let limit = self.options.effective_max_items();
        let effective = &items[..items.len().min(limit)];
        let first = effective.first().ok_or(Error::EmptyInput("item list"))?;

        if items.len() > effective.len() {
            log::debug!(
                "dropping {} items beyond max_items={}",
                items.len() - effective.len(),
                limit
            );
        }

        let list_mode = self.design.template == Template::List || effective.len() > 1;
        let (header, body, footer) = if list_mode {
            self.list_layout(title, effective)
        } else {
            self.single_layout(title, first)
        };

        Ok(RenderTree {
            canvas: Canvas {
                width: self.canvas_width,
                height: canvas_height(self.canvas_width),
                scale: self.scale,
                padding_px: self.px(PADDING_PX),
            },
            direction: text_direction(&first.text),
            background: Background {
                palette: self.design.background,
                decorations: self.design.decorations,
            },
            font: self.design.font,
            header,
            body,
            footer,
        })
    }

    fn single_layout(&self, title: &str, item: &ContentItem) -> (Header, Body, Footer) {
        let arrangement = match self.design.template {
            Template::Frame => Arrangement::Frame,
            Template::Split => Arrangement::Split,
            Template::Stack => Arrangement::Stack,
            Template::Center | Template::List | Template::Paper => Arrangement::Center,
        };

        let benefit = self.visible_benefit(item);
        let description = self.visible_description(item);

        let detail = if arrangement == Arrangement::Stack
            && (benefit.is_some() || description.is_some())
        {
            Some(DetailBlock {
                font_px: self.px(DETAIL_PX),
                benefit: benefit.map(str::to_string),
                count_description: description.map(str::to_string),
            })
        } else {
            None
        };

        let font_px = main_font_px(item.text_len(), self.canvas_width);
        log::debug!(
            "single layout: {:?}, {} chars at {}px",
            arrangement,
            item.text_len(),
            font_px
        );

        let body = Body::Single(SingleBody {
            arrangement,
            text: TextBlock::new(item.text.clone(), font_px),
            line_height: MAIN_LINE_HEIGHT,
            detail,
        });

        let mut footer = self.footer();
        if arrangement != Arrangement::Stack {
            footer.benefit = benefit.map(|b| TextBlock::new(b, self.px(FOOTER_PX)));
            footer.count_description =
                description.map(|d| TextBlock::new(d, self.px(FOOTER_PX)));
        }

        (self.header(title, self.visible_badge(item)), body, footer)
    }

    fn list_layout(&self, title: &str, items: &[ContentItem]) -> (Header, Body, Footer) {
        let font_px = list_font_px(self.options.base_font_size, self.canvas_width);
        let line_height = list_line_height(self.options.line_height);

        let entries: Vec<ListEntry> = items
            .iter()
            .enumerate()
            .map(|(position, item)| ListEntry {
                position,
                text: item.text.clone(),
                badge: self.visible_badge(item),
                benefit: self.visible_benefit(item).map(str::to_string),
                count_description: self.visible_description(item).map(str::to_string),
            })
            .collect();

        let columns: Vec<Column> = partition_columns(&entries, self.options.effective_columns())
            .into_iter()
            .map(|slice| Column {
                entries: slice.to_vec(),
            })
            .collect();

        log::debug!(
            "list layout: {} items in {} columns at {}px",
            entries.len(),
            columns.len(),
            font_px
        );

        let body = Body::List(ListBody {
            font_px,
            line_height,
            columns,
        });

        (self.header(title, None), body, self.footer())
    }

    fn header(&self, title: &str, badge: Option<String>) -> Header {
        let (style, title_px, badge_px) = if self.design.template == Template::Split {
            (HeaderStyle::Split, SPLIT_TITLE_PX, SPLIT_BADGE_PX)
        } else {
            (HeaderStyle::Pill, PILL_TITLE_PX, PILL_BADGE_PX)
        };
        Header {
            style,
            title: TextBlock::new(title.trim(), self.px(title_px)),
            badge: badge.map(|b| TextBlock::new(b, self.px(badge_px))),
        }
    }

    fn footer(&self) -> Footer {
        let watermark = if self.options.show_watermark {
            let text = self.options.watermark_text.trim();
            (!text.is_empty()).then(|| TextBlock::new(text, self.px(FOOTER_PX)))
        } else {
            None
        };
        Footer {
            watermark,
            ..Default::default()
        }
    }

    fn visible_badge(&self, item: &ContentItem) -> Option<String> {
        if self.options.show_count {
            item.count_label()
        } else {
            None
        }
    }

    fn visible_benefit<'i>(&self, item: &'i ContentItem) -> Option<&'i str> {
        if self.options.show_benefit {
            item.benefit_text()
        } else {
            None
        }
    }

    fn visible_description<'i>(&self, item: &'i ContentItem) -> Option<&'i str> {
        if self.options.show_count {
            item.count_description_text()
        } else {
            None
        }
    }

    fn px(&self, reference_px: f64) -> u32 {
        scaled_px(reference_px, self.scale)
    }
}

/// Base direction from the first strong character; neutral text is
/// treated as right-to-left.
fn text_direction(text: &str) -> TextDirection {
    match unicode_bidi::get_base_direction(text) {
        unicode_bidi::Direction::Ltr => TextDirection::Ltr,
        _ => TextDirection::Rtl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{create_design, create_design_with, DesignOverrides};

    fn design(template: Template) -> Design {
        create_design_with(1, &DesignOverrides::new().with_template(template))
    }

    fn full_item() -> ContentItem {
        ContentItem::new("سبحان الله وبحمده")
            .with_benefit("من قالها مائة مرة")
            .with_count(100u32)
            .with_count_description("مائة مرة")
    }

    #[test]
    fn test_empty_items_rejected() {
        let d = create_design(1);
        let result = compute_layout(&d, "t", &[], &DisplayOptions::default(), 1080);
        assert!(matches!(result, Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_zero_width_rejected() {
        let d = create_design(1);
        let items = [full_item()];
        assert!(compute_layout(&d, "t", &items, &DisplayOptions::default(), 0).is_err());
    }

    #[test]
    fn test_frame_footer_details() {
        let items = [full_item()];
        let tree =
            compute_layout(&design(Template::Frame), "t", &items, &DisplayOptions::default(), 1080)
                .unwrap();

        let Body::Single(body) = &tree.body else {
            panic!("expected single body");
        };
        assert_eq!(body.arrangement, Arrangement::Frame);
        assert_eq!(body.text.font_px, 96);
        assert!(body.detail.is_none());
        assert_eq!(tree.footer.benefit.as_ref().unwrap().font_px, 22);
        assert!(tree.footer.count_description.is_some());
        assert_eq!(tree.header.badge.as_ref().unwrap().text, "100");
        assert_eq!(tree.header.style, HeaderStyle::Pill);
        assert_eq!(tree.direction, TextDirection::Rtl);
    }

    #[test]
    fn test_stack_moves_details_into_body() {
        let items = [full_item()];
        let tree =
            compute_layout(&design(Template::Stack), "t", &items, &DisplayOptions::default(), 1080)
                .unwrap();

        let Body::Single(body) = &tree.body else {
            panic!("expected single body");
        };
        let detail = body.detail.as_ref().unwrap();
        assert_eq!(detail.font_px, 28);
        assert!(detail.benefit.is_some());
        assert!(tree.footer.benefit.is_none());
        assert!(tree.footer.count_description.is_none());
    }

    #[test]
    fn test_stack_without_details_has_no_block() {
        let items = [ContentItem::new("x")];
        let tree =
            compute_layout(&design(Template::Stack), "t", &items, &DisplayOptions::default(), 1080)
                .unwrap();
        let Body::Single(body) = &tree.body else {
            panic!("expected single body");
        };
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_split_header() {
        let items = [full_item()];
        let tree =
            compute_layout(&design(Template::Split), "t", &items, &DisplayOptions::default(), 1080)
                .unwrap();
        assert_eq!(tree.header.style, HeaderStyle::Split);
        assert_eq!(tree.header.title.font_px, 40);
        assert_eq!(tree.header.badge.as_ref().unwrap().font_px, 28);
    }

    #[test]
    fn test_visibility_flags_independent() {
        let items = [full_item()];
        let options = DisplayOptions::new()
            .with_benefit(false)
            .with_count(true)
            .with_watermark(false);
        let tree = compute_layout(&design(Template::Center), "t", &items, &options, 1080).unwrap();
        assert!(tree.footer.benefit.is_none());
        assert!(tree.footer.count_description.is_some());
        assert!(tree.footer.watermark.is_none());
        assert!(tree.header.badge.is_some());

        let options = DisplayOptions::new().with_count(false);
        let tree = compute_layout(&design(Template::Center), "t", &items, &options, 1080).unwrap();
        assert!(tree.header.badge.is_none());
        assert!(tree.footer.count_description.is_none());
        assert!(tree.footer.benefit.is_some());
        assert!(tree.footer.watermark.is_some());
    }

    #[test]
    fn test_list_mode_for_many_items() {
        let items: Vec<ContentItem> = (0..7).map(|i| ContentItem::new(format!("item {i}"))).collect();
        let options = DisplayOptions::new().with_columns(2).with_max_items(7);
        let tree = compute_layout(&design(Template::Frame), "t", &items, &options, 1080).unwrap();

        let Body::List(list) = &tree.body else {
            panic!("expected list body");
        };
        assert_eq!(list.columns.len(), 2);
        assert_eq!(list.columns[0].entries.len(), 4);
        assert_eq!(list.columns[1].entries.len(), 3);
        assert_eq!(list.columns[1].entries[0].position, 4);
        assert_eq!(list.font_px, 36);
        assert!(tree.header.badge.is_none());
        assert_eq!(tree.direction, TextDirection::Ltr);
    }

    #[test]
    fn test_max_items_truncates() {
        let items: Vec<ContentItem> = (0..10).map(|i| ContentItem::new(format!("{i}"))).collect();
        let options = DisplayOptions::new().with_max_items(3);
        let tree = compute_layout(&design(Template::List), "t", &items, &options, 1080).unwrap();
        assert_eq!(tree.item_count(), 3);

        let options = DisplayOptions::new().with_max_items(1);
        let tree = compute_layout(&design(Template::Frame), "t", &items, &options, 1080).unwrap();
        assert!(!tree.is_list());
    }

    #[test]
    fn test_list_template_single_item() {
        let items = [full_item()];
        let tree =
            compute_layout(&design(Template::List), "t", &items, &DisplayOptions::default(), 1080)
                .unwrap();
        assert!(tree.is_list());
        assert_eq!(tree.item_count(), 1);
        assert!(tree.footer.benefit.is_none());
    }

    #[test]
    fn test_scaled_canvas() {
        let items = [full_item()];
        let tree =
            compute_layout(&design(Template::Split), "t", &items, &DisplayOptions::default(), 540)
                .unwrap();
        assert_eq!(tree.canvas.height, 960);
        assert_eq!(tree.canvas.padding_px, 36);
        assert_eq!(tree.header.title.font_px, 20);
    }
}
