use crate::constants::{GENERATE_LABEL, INPUT_LABEL, PAGE_TITLE};
use crate::ui::tui_state::FormState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the form: title, count input with GENERATE button, the article
/// and a help bar.
pub fn render(
    frame: &mut Frame,
    state: &FormState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new(PAGE_TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    // Input box on the left, button on the right
    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(chunks[1]);
    let input = Paragraph::new(state.input.as_str())
        .block(Block::default().borders(Borders::ALL).title(INPUT_LABEL));
    frame.render_widget(input, form[0]);
    let button = Paragraph::new(GENERATE_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, form[1]);

    // Article: one block of text per paragraph, blank line between
    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in state.article.items().iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::raw(item.as_str()));
    }
    let article_title = format!("Article ({} paragraphs)", state.article.len());
    let article = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((state.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(article_title));
    frame.render_widget(article, chunks[2]);

    let help_text = vec![
        Span::styled("Enter: Generate  ", Style::default().fg(Color::Yellow)),
        Span::styled("↑/↓ PgUp/PgDn: Scroll  ", Style::default().fg(Color::Yellow)),
        Span::styled("Ctrl+Y: Copy  ", Style::default().fg(Color::Yellow)),
        Span::styled("Esc/q: Quit", Style::default().fg(Color::Yellow)),
    ];
    let mut help_block = Block::default().borders(Borders::ALL);
    if let Some(status) = &state.status {
        help_block = help_block.title(status.as_str());
    }
    let help_bar = Paragraph::new(Line::from(help_text)).block(help_block);
    frame.render_widget(help_bar, chunks[3]);
}
