use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Screen};
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.displayed_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question.prompt());
    render_options(frame, chunks[2], question, app);
    render_feedback(frame, chunks[3], &app.screen);
    render_controls(frame, chunks[4], &app.screen);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(key: &str, is_selected: bool, screen: &Screen) -> Style {
    match screen {
        Screen::Feedback {
            chosen_key,
            outcome,
        } => {
            if key == outcome.correct_key {
                Style::default().fg(Color::Green).bold()
            } else if key == chosen_key {
                Style::default().fg(Color::Red).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            }
        }
        _ if is_selected => Style::default().fg(Color::Cyan).bold(),
        _ => Style::default().fg(Color::Gray),
    }
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options().len() * 2);

    for (index, (key, text)) in question.options().iter().enumerate() {
        let is_selected = index == app.selected_option();
        let style = option_style(key, is_selected, &app.screen);
        let marker = if is_selected && app.screen == Screen::Question {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", key.to_uppercase()), style),
            Span::styled(text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, screen: &Screen) {
    let Screen::Feedback { outcome, .. } = screen else {
        return;
    };

    let line = if outcome.correct {
        Line::from(Span::styled("Correct!", Style::default().fg(Color::Green).bold()))
    } else {
        Line::from(Span::styled(
            format!("Incorrect, the answer is {}", outcome.correct_key.to_uppercase()),
            Style::default().fg(Color::Red).bold(),
        ))
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, screen: &Screen) {
    let text = match screen {
        Screen::Feedback { .. } => "enter next  ·  q quit",
        _ => "j/k navigate  ·  enter submit  ·  q quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
