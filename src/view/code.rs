// Code listing with syntax highlighting

use crate::style::{self, Theme};
use eframe::egui;
use std::collections::HashMap;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Highlights listings with syntect and caches the resulting layout per
/// route and theme, since listings never change.
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    font_size: f32,
    cache: HashMap<(&'static str, Theme), egui::text::LayoutJob>,
}

impl CodeHighlighter {
    pub fn new(font_size: f32) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            font_size,
            cache: HashMap::new(),
        }
    }

    pub fn layout(
        &mut self,
        route: &'static str,
        code: &str,
        extension: &str,
        theme: Theme,
    ) -> egui::text::LayoutJob {
        if let Some(job) = self.cache.get(&(route, theme)) {
            return job.clone();
        }
        let job = self.highlight(code, extension, theme);
        self.cache.insert((route, theme), job.clone());
        job
    }

    fn highlight(&self, code: &str, extension: &str, theme: Theme) -> egui::text::LayoutJob {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(extension)
            .or_else(|| self.syntax_set.find_syntax_by_first_line(code))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let fallback = egui::Color32::from_gray(200);
        let mut job = egui::text::LayoutJob::default();

        let Some(syntect_theme) = self.theme_set.themes.get(theme.syntax_theme()) else {
            self.append(&mut job, code, fallback);
            return job;
        };

        let mut highlighter = HighlightLines::new(syntax, syntect_theme);
        for line in LinesWithEndings::from(code).take(style::MAX_HIGHLIGHTED_LINES) {
            let ranges = highlighter.highlight_line(line, &self.syntax_set).ok();
            self.append_line(&mut job, line, ranges, fallback);
        }
        job
    }

    /// Append one highlighted line, or the raw line in `fallback` when
    /// highlighting failed.
    fn append_line(
        &self,
        job: &mut egui::text::LayoutJob,
        line: &str,
        ranges: Option<Vec<(Style, &str)>>,
        fallback: egui::Color32,
    ) {
        let Some(ranges) = ranges else {
            self.append(job, line, fallback);
            return;
        };
        for (style, text) in ranges {
            let color = egui::Color32::from_rgb(
                style.foreground.r,
                style.foreground.g,
                style.foreground.b,
            );
            self.append(job, text, color);
        }
    }

    fn append(&self, job: &mut egui::text::LayoutJob, text: &str, color: egui::Color32) {
        job.append(
            text,
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::monospace(self.font_size),
                color,
                ..Default::default()
            },
        );
    }

    pub fn cached_listings(&self) -> usize {
        self.cache.len()
    }
}
