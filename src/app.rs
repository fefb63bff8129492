use crate::catalog::Catalog;
use crate::config::Config;
use crate::message::Message;
use crate::state::{NavigationState, UIState};
use crate::style::{self, Theme};
use crate::subscription::{self, ScrollEvent, ScrollSignal};
use crate::tracker::{SectionGeometry, ViewportTracker};
use crate::video::TrustedVideoUrl;
use crate::view::{render_cards, render_header, CardContext, CodeHighlighter, FrameGeometry};
use crate::view::description::{self, Block};
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub struct Arbor {
    // Content
    catalog: Catalog,
    descriptions: Vec<Vec<Block>>,

    // Settings
    config: Config,
    /// Where theme changes are written; `None` when nothing may be saved.
    config_path: Option<PathBuf>,
    ui_state: UIState,
    applied_theme: Option<Theme>,

    // Navigation
    nav: NavigationState,
    scroll_signal: ScrollSignal,
    tracker: ViewportTracker,
    geometry: FrameGeometry,
    last_viewport_height: f32,

    // Rendering caches
    highlighter: CodeHighlighter,
}

impl Arbor {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        config_path: Option<PathBuf>,
    ) -> Self {
        let app = Self::with_config(Catalog::builtin(), config).with_config_path(config_path);
        cc.egui_ctx.set_visuals(app.ui_state.theme.visuals());
        app
    }

    pub fn with_config(catalog: Catalog, config: Config) -> Self {
        let descriptions = catalog
            .list()
            .iter()
            .map(|entry| description::parse(entry.description))
            .collect();
        let theme = Theme::from_mode(&config.theme.mode);
        let mut scroll_signal = ScrollSignal::new();
        let tracker = ViewportTracker::new(&mut scroll_signal);

        info!(entries = catalog.len(), ?theme, locale = ?config.ui.locale, "catalog loaded");

        Self {
            descriptions,
            ui_state: UIState::new(theme, config.ui.locale),
            applied_theme: None,
            nav: NavigationState::new(),
            scroll_signal,
            tracker,
            geometry: FrameGeometry::new(),
            last_viewport_height: 0.0,
            highlighter: CodeHighlighter::new(config.font.code_size),
            catalog,
            config,
            config_path: None,
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn title(&self) -> String {
        match self.nav.active_section().and_then(|r| self.catalog.get(r)) {
            Some(entry) => format!("{} - {}", self.ui_state.locale.title(), entry.name),
            None => self.ui_state.locale.title().to_string(),
        }
    }

    pub fn update_message(&mut self, message: Message) {
        debug!(?message, "handling message");
        match message {
            Message::ScrollTo(route) => self.scroll_to(&route),
            Message::StepSection(delta) => {
                if let Some(route) = self.catalog.step(self.nav.active_section(), delta) {
                    self.scroll_to(route);
                }
            }
            Message::FirstSection => {
                if let Some(route) = self.catalog.first_route() {
                    self.scroll_to(route);
                }
            }
            Message::LastSection => {
                if let Some(route) = self.catalog.last_route() {
                    self.scroll_to(route);
                }
            }
            Message::ToggleCode(route) => {
                let label = self.nav.toggle_code(&route);
                let label = self.ui_state.locale.toggle_label(label);
                debug!(route = %route, label, "code listing toggled");
            }
            Message::OpenVideo(route) => self.open_video(&route),
            Message::ToggleTheme => self.toggle_theme(),
        }
    }

    fn scroll_to(&mut self, route: &str) {
        self.tracker.scroll_to(route, &mut self.geometry);
    }

    fn open_video(&mut self, route: &str) {
        let Some(entry) = self.catalog.get(route) else {
            return;
        };
        match TrustedVideoUrl::parse(entry.video_url, &self.config.video.allowed_hosts) {
            Ok(url) => {
                let target = url.browser_url();
                info!(route, url = %target, "opening video");
                self.ui_state.set_info(format!("▶ {}", target));
                if let Err(e) = open::that(&target) {
                    warn!(route, error = %e, "failed to open video");
                    self.ui_state.set_error(format!("{}: {}", target, e));
                }
            }
            Err(e) => {
                warn!(route, error = %e, "refusing to open video");
                self.ui_state
                    .set_error(format!("{}: {}", self.ui_state.locale.video_blocked(), e));
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.ui_state.theme = self.ui_state.theme.toggle();
        self.config.theme.mode = self.ui_state.theme.mode().to_string();
        let Some(path) = &self.config_path else {
            debug!("theme preference not saved");
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            warn!(path = %path.display(), error = %e, "failed to save theme preference");
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.ui_state.theme) {
            ctx.set_visuals(self.ui_state.theme.visuals());
            self.applied_theme = Some(self.ui_state.theme);
        }
    }

    /// Feed this frame's scroll offset to the signal and let the tracker
    /// catch up. Returns true when the active section changed.
    fn track_scroll(&mut self, offset: f32) -> bool {
        self.scroll_signal.observe(offset);

        // a resize moves sections without scrolling
        let height = self.geometry.viewport().height();
        if height != self.last_viewport_height {
            self.last_viewport_height = height;
            self.scroll_signal.emit(ScrollEvent { offset });
        }

        let before = self.nav.active_section().map(str::to_string);
        self.tracker.process_pending(&self.geometry, &mut self.nav);
        before.as_deref() != self.nav.active_section()
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} / {}", self.active_position(), self.catalog.len()));
            if let Some((err, _)) = &self.ui_state.error_message {
                ui.colored_label(egui::Color32::RED, format!(" | {}", err));
            } else if let Some((info, _)) = &self.ui_state.info_message {
                ui.label(format!(" | {}", info));
            }
        });
    }

    fn active_position(&self) -> usize {
        self.nav
            .active_section()
            .and_then(|route| self.catalog.position(route))
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }
}

impl eframe::App for Arbor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.ui_state.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        let mut messages = subscription::handle_keys(ctx);
        let locale = self.ui_state.locale;
        let theme = self.ui_state.theme;

        // --- Navigation header ---
        egui::TopBottomPanel::top("nav_header")
            .exact_height(style::HEADER_HEIGHT)
            .show(ctx, |ui| {
                render_header(ui, &self.catalog, &self.nav, locale, theme, &mut messages);
            });

        // --- Status bar ---
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status(ui);
        });

        // --- Cards ---
        let offset = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let context = CardContext {
                    state: &self.nav,
                    locale,
                    theme,
                    body_size: self.config.font.body_size,
                    descriptions: &self.descriptions,
                };
                render_cards(
                    ui,
                    &self.catalog,
                    &context,
                    &mut self.geometry,
                    &mut self.highlighter,
                    &mut messages,
                )
            })
            .inner;

        if self.track_scroll(offset) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title()));
            ctx.request_repaint();
        }

        if !messages.is_empty() {
            for message in messages {
                self.update_message(message);
            }
            ctx.request_repaint();
        }
    }
}
