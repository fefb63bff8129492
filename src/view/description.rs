// Markdown descriptions, flattened into blocks of styled spans

use eframe::egui;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading(Vec<Span>),
    Paragraph(Vec<Span>),
    Bullet(Vec<Span>),
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    strong: usize,
    emphasis: usize,
}

impl Builder {
    fn push(&mut self, text: &str, code: bool) {
        let strong = self.strong > 0;
        let emphasis = self.emphasis > 0;
        if let Some(last) = self.spans.last_mut() {
            if last.strong == strong && last.emphasis == emphasis && last.code == code {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span {
            text: text.to_string(),
            strong,
            emphasis,
            code,
        });
    }

    fn flush(&mut self, make: fn(Vec<Span>) -> Block) {
        if let Some(last) = self.spans.last_mut() {
            let trimmed = last.text.trim_end().len();
            last.text.truncate(trimmed);
        }
        self.spans.retain(|s| !s.text.is_empty());
        if !self.spans.is_empty() {
            self.blocks.push(make(std::mem::take(&mut self.spans)));
        }
    }
}

/// Parse a markdown description into renderable blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut builder = Builder::default();
    let mut item_depth = 0usize;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Strong) => builder.strong += 1,
            Event::End(TagEnd::Strong) => builder.strong = builder.strong.saturating_sub(1),
            Event::Start(Tag::Emphasis) => builder.emphasis += 1,
            Event::End(TagEnd::Emphasis) => {
                builder.emphasis = builder.emphasis.saturating_sub(1)
            }
            Event::Start(Tag::Item) => {
                // a nested list closes the parent item's text
                if item_depth > 0 {
                    builder.flush(Block::Bullet);
                }
                item_depth += 1;
            }
            Event::End(TagEnd::Item) => {
                builder.flush(Block::Bullet);
                item_depth = item_depth.saturating_sub(1);
            }
            Event::End(TagEnd::Heading(_)) => builder.flush(Block::Heading),
            Event::End(TagEnd::Paragraph) if item_depth == 0 => builder.flush(Block::Paragraph),
            Event::Text(text) => builder.push(&text, false),
            Event::Code(code) => builder.push(&code, true),
            Event::SoftBreak | Event::HardBreak => builder.push(" ", false),
            _ => {}
        }
    }
    builder.flush(Block::Paragraph);
    builder.blocks
}

fn layout(
    spans: &[Span],
    size: f32,
    color: egui::Color32,
    strong_color: egui::Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    for span in spans {
        let font_id = if span.code {
            egui::FontId::monospace(size)
        } else {
            egui::FontId::proportional(size)
        };
        job.append(
            &span.text,
            0.0,
            egui::TextFormat {
                font_id,
                color: if span.strong { strong_color } else { color },
                italics: span.emphasis,
                ..Default::default()
            },
        );
    }
    job
}

pub fn render(ui: &mut egui::Ui, blocks: &[Block], body_size: f32) {
    let color = ui.visuals().text_color();
    let strong_color = ui.visuals().strong_text_color();
    let width = ui.available_width();
    for block in blocks {
        let job = match block {
            Block::Heading(spans) => {
                layout(spans, body_size + 4.0, strong_color, strong_color, width)
            }
            Block::Paragraph(spans) => layout(spans, body_size, color, strong_color, width),
            Block::Bullet(spans) => {
                let mut bulleted = vec![Span {
                    text: "•  ".to_string(),
                    ..Default::default()
                }];
                bulleted.extend(spans.iter().cloned());
                layout(&bulleted, body_size, color, strong_color, width)
            }
        };
        ui.label(job);
        ui.add_space(4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> Span {
        Span {
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_paragraphs() {
        let blocks = parse("first line\ncontinues\n\nsecond");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![plain("first line continues")]),
                Block::Paragraph(vec![plain("second")]),
            ]
        );
    }

    #[test]
    fn test_bullets_with_strong_text() {
        let blocks = parse("Intro:\n\n- a **red** node\n- root\n");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![plain("Intro:")]),
                Block::Bullet(vec![
                    plain("a "),
                    Span {
                        text: "red".to_string(),
                        strong: true,
                        ..Default::default()
                    },
                    plain(" node"),
                ]),
                Block::Bullet(vec![plain("root")]),
            ]
        );
    }

    #[test]
    fn test_inline_code() {
        let blocks = parse("call `insert(k)` first");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                plain("call "),
                Span {
                    text: "insert(k)".to_string(),
                    code: true,
                    ..Default::default()
                },
                plain(" first"),
            ])]
        );
    }

    #[test]
    fn test_red_black_description() {
        let catalog = Catalog::builtin();
        let entry = catalog.get("red-black-tree").expect("entry exists");
        let blocks = parse(entry.description);
        let bullets = blocks
            .iter()
            .filter(|b| matches!(b, Block::Bullet(_)))
            .count();
        assert_eq!(bullets, 5);
        assert!(matches!(blocks.first(), Some(Block::Paragraph(_))));
    }

    #[test]
    fn test_every_builtin_description_parses() {
        for entry in Catalog::builtin().list() {
            assert!(!parse(entry.description).is_empty(), "{}", entry.route);
        }
    }
}
