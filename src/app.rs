use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::model::{Task, TaskId, TaskList};
use crate::storage::config::{self, Config, ThemeConfig};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};
use crate::ui::components::confirm_dialog::ConfirmType;
use crate::ui::components::truncate;

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Toast 里任务文本的最大展示长度
const TOAST_TEXT_LEN: usize = 24;

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表（仅存活于本次会话，不落盘）
    pub tasks: TaskList,
    /// 列表选择状态（索引指向过滤后的可见列表）
    pub list_state: ListState,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 是否显示 Add Task 弹窗
    pub show_new_task_dialog: bool,
    /// Add Task 输入内容
    pub new_task_input: String,
    /// 确认弹窗
    pub confirm_dialog: Option<ConfirmType>,
    /// 搜索输入模式
    pub search_mode: bool,
    /// 搜索关键字
    pub search_query: String,
    /// 抓取搬移模式：记录被抓任务的起始索引（Esc 时放回原位）
    pub move_origin: Option<usize>,
}

impl App {
    pub fn new() -> Self {
        let saved = config::load_config();
        let theme = Theme::from_name(&saved.theme.name);
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        Self {
            should_quit: false,
            tasks: TaskList::new(),
            list_state: ListState::default(),
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            show_help: false,
            show_new_task_dialog: false,
            new_task_input: String::new(),
            confirm_dialog: None,
            search_mode: false,
            search_query: String::new(),
            move_origin: None,
        }
    }

    // ========== 可见列表 / 选择 ==========

    /// 过滤后的可见任务（搜索生效时为匹配子集）
    pub fn visible_tasks(&self) -> Vec<&Task> {
        if self.search_query.is_empty() {
            self.tasks.tasks().iter().collect()
        } else {
            let query = self.search_query.to_lowercase();
            self.tasks
                .tasks()
                .iter()
                .filter(|t| t.text.to_lowercase().contains(&query))
                .collect()
        }
    }

    /// 是否有搜索过滤生效
    ///
    /// 过滤时可见索引和列表真实索引不再一致，reorder 被禁用。
    pub fn filter_active(&self) -> bool {
        !self.search_query.is_empty()
    }

    fn visible_len(&self) -> usize {
        self.visible_tasks().len()
    }

    /// 当前选中任务的 ID
    pub fn selected_task_id(&self) -> Option<TaskId> {
        let index = self.list_state.selected()?;
        self.visible_tasks().get(index).map(|t| t.id)
    }

    /// 确保选中项有效：列表为空清空选择，越界收回到末尾，无选择时选第一项
    pub fn ensure_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    // ========== Add Task Dialog ==========

    /// 打开 Add Task 弹窗
    pub fn open_new_task_dialog(&mut self) {
        self.new_task_input.clear();
        self.show_new_task_dialog = true;
    }

    /// 关闭 Add Task 弹窗
    pub fn close_new_task_dialog(&mut self) {
        self.show_new_task_dialog = false;
        self.new_task_input.clear();
    }

    /// Add Task 输入字符
    pub fn new_task_input_char(&mut self, c: char) {
        self.new_task_input.push(c);
    }

    /// Add Task 删除字符
    pub fn new_task_delete_char(&mut self) {
        self.new_task_input.pop();
    }

    /// 提交新任务
    pub fn submit_new_task(&mut self) {
        let Some(id) = self.tasks.add(&self.new_task_input) else {
            self.show_toast("Task text cannot be empty");
            return;
        };

        self.close_new_task_dialog();

        // 新任务追加在末尾；若匹配当前过滤则选中它
        if let Some(index) = self.visible_tasks().iter().position(|t| t.id == id) {
            self.list_state.select(Some(index));
        } else {
            self.ensure_selection();
        }
    }

    // ========== 任务操作 ==========

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.tasks.toggle(id);
    }

    /// 删除选中任务
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let text = self
            .tasks
            .position_of(id)
            .and_then(|i| self.tasks.get(i))
            .map(|t| truncate(&t.text, TOAST_TEXT_LEN))
            .unwrap_or_default();

        if self.tasks.delete(id) {
            self.show_toast(format!("Deleted: {}", text));
            self.ensure_selection();
        }
    }

    /// 请求清除所有已完成任务（弹确认框）
    pub fn request_clear_completed(&mut self) {
        let count = self.tasks.completed_count();
        if count == 0 {
            self.show_toast("No completed tasks to clear");
            return;
        }
        self.confirm_dialog = Some(ConfirmType::ClearCompleted { count });
    }

    /// 确认弹窗 - 确认
    pub fn confirm_dialog_yes(&mut self) {
        let Some(confirm_type) = self.confirm_dialog.take() else {
            return;
        };
        match confirm_type {
            ConfirmType::ClearCompleted { .. } => {
                let removed = self.tasks.clear_completed();
                let noun = if removed == 1 { "task" } else { "tasks" };
                self.show_toast(format!("Cleared {} {}", removed, noun));
                self.ensure_selection();
            }
        }
    }

    /// 确认弹窗 - 取消
    pub fn confirm_dialog_cancel(&mut self) {
        self.confirm_dialog = None;
    }

    // ========== 排序 ==========

    /// 上移选中任务一格
    pub fn move_selected_up(&mut self) {
        self.move_selected_by(-1);
    }

    /// 下移选中任务一格
    pub fn move_selected_down(&mut self) {
        self.move_selected_by(1);
    }

    fn move_selected_by(&mut self, delta: isize) {
        if self.filter_active() {
            self.show_toast("Clear search to reorder");
            return;
        }
        let Some(from) = self.list_state.selected() else {
            return;
        };
        let Some(to) = from.checked_add_signed(delta) else {
            return;
        };
        // 无过滤时可见索引即真实索引
        if self.tasks.reorder(from, to) {
            self.list_state.select(Some(to));
        }
    }

    /// 抓取选中任务，进入搬移模式
    pub fn start_move(&mut self) {
        if self.filter_active() {
            self.show_toast("Clear search to reorder");
            return;
        }
        let Some(index) = self.list_state.selected() else {
            return;
        };
        self.move_origin = Some(index);
    }

    /// 放下被抓任务（顺序已在搬移过程中实时生效）
    pub fn drop_move(&mut self) {
        self.move_origin = None;
    }

    /// 取消搬移，把任务放回起始位置
    pub fn cancel_move(&mut self) {
        let Some(origin) = self.move_origin.take() else {
            return;
        };
        let Some(current) = self.list_state.selected() else {
            return;
        };
        if self.tasks.reorder(current, origin) {
            self.list_state.select(Some(origin));
        }
    }

    /// 是否处于搬移模式
    pub fn moving(&self) -> bool {
        self.move_origin.is_some()
    }

    // ========== 搜索 ==========

    /// 进入搜索输入模式
    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// 退出搜索输入模式（保留过滤结果）
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
        self.ensure_selection();
    }

    /// 取消搜索（清空过滤）
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
        self.ensure_selection();
    }

    /// 搜索输入字符
    pub fn search_input_char(&mut self, c: char) {
        self.search_query.push(c);
        self.ensure_selection();
    }

    /// 搜索删除字符
    pub fn search_delete_char(&mut self) {
        self.search_query.pop();
        self.ensure_selection();
    }

    // ========== 主题 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        let saved = Config {
            theme: ThemeConfig {
                name: self.theme.label().to_string(),
            },
        };
        match config::save_config(&saved) {
            Ok(()) => self.show_toast(format!("Theme: {}", self.theme.label())),
            Err(e) => self.show_toast(format!("Config error: {}", e)),
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== Toast / 退出 ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::new();
        for text in texts {
            app.tasks.add(text);
        }
        app.ensure_selection();
        app
    }

    fn texts(app: &App) -> Vec<String> {
        app.tasks.tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_submit_blank_task_keeps_dialog_open() {
        let mut app = App::new();
        app.open_new_task_dialog();
        app.new_task_input = "   ".to_string();

        app.submit_new_task();

        assert!(app.show_new_task_dialog);
        assert!(app.tasks.is_empty());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_submit_task_selects_it() {
        let mut app = app_with(&["a", "b"]);
        app.open_new_task_dialog();
        app.new_task_input = "c".to_string();

        app.submit_new_task();

        assert_eq!(app.tasks.len(), 3);
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app_with(&["a", "b"]);
        app.list_state.select(Some(1));

        app.toggle_selected();

        assert!(app.tasks.get(1).unwrap().completed);
    }

    #[test]
    fn test_delete_last_clamps_selection() {
        let mut app = app_with(&["a", "b"]);
        app.list_state.select(Some(1));

        app.delete_selected();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_move_keys_follow_selection() {
        let mut app = app_with(&["a", "b", "c"]);
        app.list_state.select(Some(0));

        app.move_selected_down();
        assert_eq!(texts(&app), vec!["b", "a", "c"]);
        assert_eq!(app.list_state.selected(), Some(1));

        app.move_selected_up();
        assert_eq!(texts(&app), vec!["a", "b", "c"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_move_at_top_edge_is_noop() {
        let mut app = app_with(&["a", "b"]);
        app.list_state.select(Some(0));

        app.move_selected_up();

        assert_eq!(texts(&app), vec!["a", "b"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_grab_drop_keeps_new_order() {
        let mut app = app_with(&["a", "b", "c"]);
        app.list_state.select(Some(0));

        app.start_move();
        assert!(app.moving());
        app.move_selected_down();
        app.move_selected_down();
        app.drop_move();

        assert!(!app.moving());
        assert_eq!(texts(&app), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_grab_cancel_restores_origin() {
        let mut app = app_with(&["a", "b", "c"]);
        app.list_state.select(Some(0));

        app.start_move();
        app.move_selected_down();
        app.move_selected_down();
        app.cancel_move();

        assert!(!app.moving());
        assert_eq!(texts(&app), vec!["a", "b", "c"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_reorder_blocked_while_filtered() {
        let mut app = app_with(&["apple", "banana", "avocado"]);
        app.search_query = "a".to_string();
        app.ensure_selection();

        app.move_selected_down();
        assert_eq!(texts(&app), vec!["apple", "banana", "avocado"]);

        app.start_move();
        assert!(!app.moving());
    }

    #[test]
    fn test_filter_narrows_visible_tasks() {
        let mut app = app_with(&["apple", "banana", "avocado"]);
        app.search_query = "av".to_string();

        let visible = app.visible_tasks();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "avocado");
    }

    #[test]
    fn test_toggle_through_filtered_view() {
        let mut app = app_with(&["apple", "banana"]);
        app.search_query = "ban".to_string();
        app.ensure_selection();

        app.toggle_selected();

        // banana 在真实列表中是第 1 项
        assert!(app.tasks.get(1).unwrap().completed);
        assert!(!app.tasks.get(0).unwrap().completed);
    }

    #[test]
    fn test_clear_completed_needs_completed_tasks() {
        let mut app = app_with(&["a"]);

        app.request_clear_completed();
        assert!(app.confirm_dialog.is_none());

        app.toggle_selected();
        app.request_clear_completed();
        assert!(app.confirm_dialog.is_some());

        app.confirm_dialog_yes();
        assert!(app.tasks.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_ensure_selection_on_empty_list() {
        let mut app = App::new();
        app.ensure_selection();
        assert_eq!(app.list_state.selected(), None);
    }
}
