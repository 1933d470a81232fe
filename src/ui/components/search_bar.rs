//! 搜索框组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染搜索框
/// is_editing: 是否正在输入（显示光标）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    is_editing: bool,
    match_count: usize,
    colors: &ThemeColors,
) {
    let mut spans = vec![
        Span::styled(" /", Style::default().fg(colors.highlight)),
        Span::styled(query, Style::default().fg(colors.text)),
    ];

    // 只在输入模式显示闪烁光标
    if is_editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // 右侧显示命中数
    if !query.is_empty() {
        let noun = if match_count == 1 { "match" } else { "matches" };
        spans.push(Span::styled(
            format!("  {} {}", match_count, noun),
            Style::default().fg(colors.muted),
        ));
    }

    let line = Line::from(spans);

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bg_secondary));

    frame.render_widget(paragraph, area);
}
