use ratatui::{prelude::*, widgets::*};

/// Renders a text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Terminal column of a byte cursor inside an input field
pub fn cursor_column(content: &str, cursor: usize) -> u16 {
    let cursor = cursor.min(content.len());
    content
        .char_indices()
        .take_while(|(i, _)| *i < cursor)
        .count() as u16
}

/// Place the terminal cursor inside a bordered input at `area`
pub fn place_cursor(f: &mut Frame, area: Rect, content: &str, cursor: usize) {
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + cursor_column(content, cursor) + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, area.y + 1));
}

/// Renders tabs
pub fn render_tabs<'a>(titles: Vec<String>, selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.into_iter().map(Line::from).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
        .divider("|")
}

/// Percentage bar with a caption
pub fn progress_gauge<'a>(title: &'a str, percent: u8) -> Gauge<'a> {
    let percent = percent.min(100);
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(score_color(percent as u32)))
        .percent(percent as u16)
        .label(format!("{}%", percent))
}

/// Score/progress color
pub fn score_color(percent: u32) -> Color {
    match percent {
        80.. => Color::Green,
        50..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Course or learner level color
pub fn level_color(level: &str) -> Color {
    match level {
        "Beginner" => Color::Green,
        "Intermediate" => Color::Yellow,
        "Advanced" => Color::Magenta,
        _ => Color::White,
    }
}

/// Password display
pub fn masked(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_counts_chars() {
        assert_eq!(cursor_column("abc", 2), 2);
        // Devanagari characters are three bytes each
        assert_eq!(cursor_column("नम", 6), 2);
        assert_eq!(cursor_column("abc", 99), 3);
    }

    #[test]
    fn test_masked() {
        assert_eq!(masked("pässword"), "********");
    }
}
