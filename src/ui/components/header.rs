use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::logo;

/// Header 总高度：1 (边框) + 6 (Logo) + 1 (下边距) + 1 (进度信息) = 9
pub const HEADER_HEIGHT: u16 = 9;

/// 渲染顶部区域（Logo + 完成进度）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    completed_count: usize,
    total_count: usize,
    colors: &ThemeColors,
) {
    // 外框
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 内部垂直布局
    let [logo_area, bottom_padding, info_area] = Layout::vertical([
        Constraint::Length(logo::LOGO_HEIGHT), // Logo
        Constraint::Length(1),                 // 下边距
        Constraint::Length(1),                 // 进度信息
    ])
    .areas(inner_area);

    // 渲染 Logo
    logo::render(frame, logo_area, colors);

    // 渲染进度信息行
    render_summary(frame, info_area, completed_count, total_count, colors);

    // 填充空白区域（防止残留）
    let empty = Paragraph::new("");
    frame.render_widget(empty, bottom_padding);
}

fn render_summary(
    frame: &mut Frame,
    area: Rect,
    completed_count: usize,
    total_count: usize,
    colors: &ThemeColors,
) {
    let left = Span::styled(
        format!(" {}", Local::now().format("%a %b %e")),
        Style::default().fg(colors.text),
    );

    // 无任务时不显示进度（和空状态提示重复）
    let right = if total_count > 0 {
        Span::styled(
            format!("{} of {} tasks completed ", completed_count, total_count),
            Style::default().fg(colors.muted),
        )
    } else {
        Span::raw("")
    };

    // 计算中间填充空格
    let total_width = area.width as usize;
    let used_width = left.width() + right.width();
    let padding_len = total_width.saturating_sub(used_width);
    let padding = " ".repeat(padding_len);

    let line = Line::from(vec![left, Span::raw(padding), right]);

    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
