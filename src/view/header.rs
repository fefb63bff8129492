// Navigation header: one item per catalog entry, active one highlighted

use crate::catalog::Catalog;
use crate::locale::Locale;
use crate::message::Message;
use crate::state::NavigationState;
use crate::style::{self, Theme};
use eframe::egui;
use egui_extras::{Size, StripBuilder};

pub fn render_header(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    state: &NavigationState,
    locale: Locale,
    theme: Theme,
    messages: &mut Vec<Message>,
) {
    ui.horizontal_centered(|ui| {
        ui.label(egui::RichText::new(locale.title()).strong().size(18.0));
        ui.separator();

        StripBuilder::new(ui)
            .sizes(
                Size::remainder().at_least(style::NAV_ITEM_MIN_WIDTH),
                catalog.len(),
            )
            .size(Size::exact(32.0))
            .horizontal(|mut strip| {
                for entry in catalog.list() {
                    strip.cell(|ui| {
                        let is_active = state.is_active(entry.route);
                        let mut text = egui::RichText::new(entry.name);
                        if is_active {
                            text = text.color(theme.accent()).strong().underline();
                        }
                        let response =
                            style::truncated_label_with_sense(ui, text, egui::Sense::click())
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() {
                            messages.push(Message::ScrollTo(entry.route.to_string()));
                        }
                    });
                }
                strip.cell(|ui| {
                    let icon = match theme {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    };
                    if ui.button(icon).clicked() {
                        messages.push(Message::ToggleTheme);
                    }
                });
            });
    });
}
