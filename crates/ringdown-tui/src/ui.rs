//! Rendering: a pure function of the engine state.
//!
//! Idle shows the play control labeled with the duration; Running shows the
//! progress ring emptying around the remaining-seconds numeral; Finished
//! shows the full ring in the alert color around the restart control.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::Frame;

use ringdown_core::{CountdownEngine, Phase};

use crate::theme::Palette;

const PLAY_GLYPH: &str = "▶";
const RESTART_GLYPH: &str = "↻";

pub fn draw(frame: &mut Frame, engine: &CountdownEngine, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let [content, hints] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    match engine.phase() {
        Phase::Idle => draw_idle(frame, engine, palette, content),
        Phase::Running => draw_running(frame, engine, palette, content),
        Phase::Finished => draw_finished(frame, palette, content),
    }
    draw_hints(frame, engine.phase(), palette, hints);
}

fn draw_idle(frame: &mut Frame, engine: &CountdownEngine, palette: &Palette, area: Rect) {
    let accent = Style::default().fg(palette.accent);
    let lines = vec![
        Line::styled(PLAY_GLYPH, accent.add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled(format!("Start {}s timer", engine.total_secs()), accent),
    ];
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(area, 24, height),
    );
}

fn draw_running(frame: &mut Frame, engine: &CountdownEngine, palette: &Palette, area: Rect) {
    frame.render_widget(
        ring(engine.ring_progress(), palette.accent, palette.background),
        ring_rect(area),
    );
    frame.render_widget(
        Paragraph::new(engine.remaining_secs().to_string())
            .style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        centered_rect(area, 8, 1),
    );
}

fn draw_finished(frame: &mut Frame, palette: &Palette, area: Rect) {
    frame.render_widget(ring(1.0, palette.alert, palette.background), ring_rect(area));
    let alert = Style::default().fg(palette.alert);
    let lines = vec![
        Line::styled(RESTART_GLYPH, alert.add_modifier(Modifier::BOLD)),
        Line::styled("restart", alert),
    ];
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(area, 12, height),
    );
}

fn draw_hints(frame: &mut Frame, phase: Phase, palette: &Palette, area: Rect) {
    let hint = match phase {
        Phase::Idle => "space start · q quit",
        Phase::Running => "q quit",
        Phase::Finished => "space restart · q quit",
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(palette.text_muted))
            .alignment(Alignment::Center),
        area,
    );
}

/// The progress ring: an arc starting at 12 o'clock sweeping clockwise,
/// drawn as short chords at three radii for stroke weight.
fn ring(progress: f64, color: Color, background: Color) -> impl Widget {
    Canvas::default()
        .background_color(background)
        .marker(Marker::Braille)
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .paint(move |ctx| {
            let sweep = (progress.clamp(0.0, 1.0) * 360.0).round() as i32;
            for radius in [0.84, 0.92, 1.0] {
                let (mut x1, mut y1) = point_at(0, radius);
                for deg in 1..=sweep {
                    let (x2, y2) = point_at(deg, radius);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    });
                    (x1, y1) = (x2, y2);
                }
            }
        })
}

fn point_at(deg: i32, radius: f64) -> (f64, f64) {
    let theta = f64::from(90 - deg).to_radians();
    (radius * theta.cos(), radius * theta.sin())
}

/// Largest centered rect that renders as a circle: terminal cells are about
/// twice as tall as wide, so the box is kept at a 2:1 width-to-height ratio.
fn ring_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    centered_rect(area, width, height)
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_starts_at_twelve_oclock() {
        let (x, y) = point_at(0, 1.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn point_at_sweeps_clockwise() {
        // A quarter sweep lands at 3 o'clock.
        let (x, y) = point_at(90, 1.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn centered_rect_clamps_to_the_area() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(area, 100, 100);
        assert_eq!(rect, area);
    }
}
