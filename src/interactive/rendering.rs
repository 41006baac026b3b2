//! TUI rendering with ratatui
//!
//! Layout: root word header, input with hint, accepted words beside recent
//! messages, score bar and key help. Alerts pop up over everything.

use super::app::{App, MessageStyle};
use crate::core::word_length;
use crate::output::formatters::{root_title, score_line};
use crate::validator::SpellChecker;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SpellChecker, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Input + hint
            Constraint::Min(6),    // Words and messages
            Constraint::Length(3), // Score bar
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Accepted words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_score(f, app, chunks[3]);
    render_help(f, chunks[4]);

    if app.alert.is_some() {
        render_alert(f, app);
    }
}

fn render_header<S: SpellChecker, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let title = app
        .state()
        .map_or_else(|| "…".to_string(), |state| root_title(state.root_word()));

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<S: SpellChecker, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::raw("> "),
        Span::styled(
            app.input_buffer.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if app.show_too_short_hint() {
        lines.push(Line::from(Span::styled(
            "word is too short",
            Style::default().fg(Color::Red),
        )));
    }

    let input = Paragraph::new(lines).block(
        Block::default()
            .title(" Enter a word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, area);
}

fn render_words<S: SpellChecker, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .state()
        .map(|state| {
            state
                .used_words()
                .iter()
                .map(|word| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:>2} ", word_length(word)),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                        Span::raw(word.as_str()),
                    ]))
                })
                .collect()
        })
        .unwrap_or_default();

    let title = format!(" Words ({}) ", items.len());
    let words = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(words, area);
}

fn render_messages<S: SpellChecker, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_score<S: SpellChecker, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let score = app.state().map_or(0, |state| state.score());

    let bar = Paragraph::new(score_line(score))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(bar, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl-R/F5: Restart | Esc: Clear/Quit | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert<S: SpellChecker, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered_rect(50, 7, f.area());
    let content = vec![
        Line::from(Span::raw(alert.message.as_str())),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle `percent_x` wide and `height` rows tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = u32::from(area.width) * u32::from(percent_x.min(100)) / 100;
    let width = u16::try_from(width).unwrap_or(area.width);
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
    use crate::interactive::app::Alert;
    use crate::session::GameSession;
    use crate::validator::{Dictionary, Rejection, WordValidator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let session = GameSession::new(
            WordValidator::new(Dictionary::new("en", ["lines", "listen"])),
            vec!["silent".to_string()],
            StdRng::seed_from_u64(1),
        );
        App::new(session).unwrap()
    }

    #[test]
    fn shows_root_word_and_score() {
        let mut app = app();
        app.input_buffer = "listen".to_string();
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("S I L E N T"));
        assert!(screen.contains("Score: 6"));
        assert!(screen.contains("listen"));
    }

    #[test]
    fn shows_too_short_hint() {
        let mut app = app();
        app.input_buffer = "tin".to_string();
        assert!(render(&app).contains("word is too short"));
    }

    #[test]
    fn shows_alert_popup() {
        let mut app = app();
        app.alert = Some(Alert::from(Rejection::NotOriginal));
        let screen = render(&app);
        assert!(screen.contains("Word used already"));
        assert!(screen.contains("[ OK ]"));
    }

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(50, 7, area);
        assert_eq!(rect, Rect::new(20, 8, 40, 7));

        let tiny = centered_rect(50, 7, Rect::new(0, 0, 10, 3));
        assert_eq!(tiny.height, 3);

        let wide = centered_rect(50, 7, Rect::new(0, 0, 1400, 40));
        assert_eq!(wide, Rect::new(350, 16, 700, 7));

        let widest = centered_rect(100, 7, Rect::new(0, 0, u16::MAX, 40));
        assert_eq!(widest.width, u16::MAX);
        assert_eq!(widest.x, 0);
    }
}
