//! Frame composition for the viewfit TUI.
//!
//! One status line, the surface stage, and a key-help footer. The stage
//! draws the media surface at the rectangle the active layout dictates.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::{layout, terminal::App};

/// Draw one frame of the application.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let [status_area, stage_area, help_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(2)])
            .areas(frame.area());

    frame.render_widget(status_line(app), status_area);
    draw_stage(frame, stage_area, app);
    frame.render_widget(help_footer(), help_area);
}

fn status_line(app: &App) -> Paragraph<'static> {
    let text = format!(
        " device: {:?}   size: {}   layout: {}   updates: {}",
        app.device(),
        app.size(),
        app.policy(),
        app.updates(),
    );
    Paragraph::new(text).style(Style::default().fg(Color::Cyan))
}

fn draw_stage(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let variant = layout::variant_for(app.size(), app.policy());
    let rect = layout::surface_rect(area, variant);

    let surface = Paragraph::new("media surface")
        .centered()
        .block(Block::bordered().title(format!(" {} ", app.size())));
    frame.render_widget(surface, rect);
}

fn help_footer() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(" p/P portrait   l/L landscape   f/F flat   u unknown   r rotate"),
        Line::from(" t tap (twice quickly = double-tap)   v layout policy   q quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
}
