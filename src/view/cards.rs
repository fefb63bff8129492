// Catalog cards: title, description, video link and collapsible listing

use super::code::CodeHighlighter;
use super::description::{self, Block};
use super::layout::{show_tracked, FrameGeometry};
use crate::catalog::Catalog;
use crate::locale::Locale;
use crate::message::Message;
use crate::model::AlgorithmEntry;
use crate::state::NavigationState;
use crate::style::{self, Theme};
use eframe::egui;

/// Everything a card needs besides the entry itself.
pub struct CardContext<'a> {
    pub state: &'a NavigationState,
    pub locale: Locale,
    pub theme: Theme,
    pub body_size: f32,
    pub descriptions: &'a [Vec<Block>],
}

/// Render every card inside a vertical scroll area.
///
/// Records each card's rect into `geometry` and returns the scroll offset
/// egui settled on this frame.
pub fn render_cards(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    context: &CardContext,
    geometry: &mut FrameGeometry,
    highlighter: &mut CodeHighlighter,
    messages: &mut Vec<Message>,
) -> f32 {
    let scroll_area = egui::ScrollArea::vertical()
        .id_salt("catalog_scroll")
        .auto_shrink([false, false]);
    show_tracked(ui, scroll_area, geometry, |ui, geometry| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(style::CARD_MAX_WIDTH.min(ui.available_width()));
            for (idx, entry) in catalog.list().iter().enumerate() {
                let blocks = context.descriptions.get(idx).map(Vec::as_slice).unwrap_or(&[]);
                let rect = render_card(ui, entry, blocks, context, highlighter, messages);
                geometry.record(entry.route, rect);
                if geometry.take_scroll_request(entry.route) {
                    ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                }
                ui.add_space(style::CARD_SPACING);
            }
        });
    })
}

fn render_card(
    ui: &mut egui::Ui,
    entry: &AlgorithmEntry,
    blocks: &[Block],
    context: &CardContext,
    highlighter: &mut CodeHighlighter,
    messages: &mut Vec<Message>,
) -> egui::Rect {
    let is_active = context.state.is_active(entry.route);
    let mut frame = egui::Frame::group(ui.style()).inner_margin(style::CARD_PADDING);
    if is_active {
        frame = frame.stroke(egui::Stroke::new(1.5, context.theme.accent()));
    }

    frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                ui.label(
                    egui::RichText::new(entry.name)
                        .size(style::TITLE_SIZE)
                        .strong(),
                );
                ui.add_space(6.0);
                description::render(ui, blocks, context.body_size);
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    let label = context
                        .locale
                        .toggle_label(context.state.toggle_label(entry.route));
                    if ui.button(label).clicked() {
                        messages.push(Message::ToggleCode(entry.route.to_string()));
                    }
                    if ui
                        .button(context.locale.watch_video())
                        .on_hover_text(entry.video_url)
                        .clicked()
                    {
                        messages.push(Message::OpenVideo(entry.route.to_string()));
                    }
                });

                if context.state.is_expanded(entry.route) {
                    ui.add_space(6.0);
                    let job = highlighter.layout(
                        entry.route,
                        entry.code,
                        entry.code_extension(),
                        context.theme,
                    );
                    egui::Frame::NONE
                        .fill(ui.visuals().extreme_bg_color)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            egui::ScrollArea::horizontal()
                                .id_salt(("listing", entry.route))
                                .show(ui, |ui| {
                                    ui.add(egui::Label::new(job).extend());
                                });
                        });
                }
            });
        })
        .response
        .rect
}
