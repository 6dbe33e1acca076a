mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Question | Screen::Feedback { .. } => quiz::render(frame, area, app),
        Screen::Result => result::render(frame, area, app),
    }
}
