//! Render boundary
//!
//! Wraps a fallible render step. The first failure is logged and remembered;
//! from then on the boundary draws a static fallback in place of the wrapped
//! step until [`RenderBoundary::retry`] is called. There is no automatic retry.

use crate::events::targets;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use std::cell::RefCell;
use std::fmt::Display;

#[derive(Debug)]
pub struct RenderBoundary {
    label: &'static str,
    failure: RefCell<Option<String>>,
}

impl RenderBoundary {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            failure: RefCell::new(None),
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failure.borrow().is_some()
    }

    /// Clear a recorded failure so the next frame runs the wrapped step again.
    pub fn retry(&self) {
        if self.failure.borrow_mut().take().is_some() {
            log::info!(target: targets::CHART, "Retrying {}", self.label);
        }
    }

    /// Run `step` in `area`, or draw the fallback if it has failed before.
    pub fn render<F, E>(&self, f: &mut Frame, area: Rect, step: F)
    where
        F: FnOnce(&mut Frame, Rect) -> Result<(), E>,
        E: Display,
    {
        if let Some(message) = self.failure.borrow().as_deref() {
            render_fallback(f, area, message);
            return;
        }

        if let Err(e) = step(f, area) {
            let message = e.to_string();
            log::error!(target: targets::CHART, "{} failed to render: {}", self.label, message);
            render_fallback(f, area, &message);
            *self.failure.borrow_mut() = Some(message);
        }
    }
}

fn render_fallback(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Unable to render chart. {}", message),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[X] Retry",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title("⚠ Chart Error")
        .title_style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::uniform(1));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
