//! Draws the reading view.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use arcana_core::view::{CardView, SelectorOption};
use arcana_core::render;

use crate::app::TuiApp;

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let view = render(&app.session);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Selectors
            Constraint::Length(4), // Vibe
            Constraint::Min(6),    // Cards
            Constraint::Length(2), // Disclaimer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            view.kicker.to_uppercase(),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(view.title, Style::default().bold())),
        Line::from(Span::styled(
            view.subtitle,
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    // Selectors and draw action
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(45),
            Constraint::Percentage(15),
        ])
        .split(chunks[1]);
    frame.render_widget(selector(" Zodiac sign ", &view.signs), controls[0]);
    frame.render_widget(selector(" Reading type ", &view.modes), controls[1]);
    let draw_button = Paragraph::new(Line::from(Span::styled(
        view.draw_label,
        Style::default().fg(Color::Black).bg(Color::Magenta).bold(),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(draw_button, controls[2]);

    // Vibe box
    let vibe = Paragraph::new(view.vibe_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", view.vibe_title.to_uppercase()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(vibe, chunks[2]);

    // Cards
    if !view.cards.is_empty() {
        let constraints = vec![Constraint::Ratio(1, view.cards.len() as u32); view.cards.len()];
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[3]);
        for (card, slot) in view.cards.iter().zip(slots.iter()) {
            frame.render_widget(card_widget(card), *slot);
        }
    }

    let disclaimer = Paragraph::new(view.disclaimer)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(disclaimer, chunks[4]);

    let status_style = if app.error.is_some() {
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };
    frame.render_widget(
        Paragraph::new(app.status_hint()).style(status_style),
        chunks[5],
    );

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

/// A one-line selector showing the current option between arrows.
fn selector<'a>(title: &'a str, options: &'a [SelectorOption]) -> Paragraph<'a> {
    let current = options
        .iter()
        .find(|o| o.selected)
        .map(|o| o.label.as_str())
        .unwrap_or("");
    Paragraph::new(Line::from(vec![
        Span::styled("\u{25c2} ", Style::default().fg(Color::DarkGray)),
        Span::styled(current, Style::default().fg(Color::Yellow).bold()),
        Span::styled(" \u{25b8}", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().title(title).borders(Borders::ALL))
}

fn card_widget(card: &CardView) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(Span::styled(card.name, Style::default().bold())),
        Line::from(Span::styled(
            card.keywords,
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(card.meaning),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", card.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    )
}
