use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, has_tasks: bool, moving: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(has_tasks, moving);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(has_tasks: bool, moving: bool) -> Vec<(&'static str, &'static str)> {
    if moving {
        return vec![
            ("j/k", "move"),
            ("Enter", "drop"),
            ("Esc", "cancel"),
        ];
    }

    if has_tasks {
        vec![
            ("n", "new"),
            ("Space", "toggle"),
            ("m", "grab"),
            ("x", "delete"),
            ("c", "clear done"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![("n", "new"), ("?", "help"), ("q", "quit")]
    }
}
