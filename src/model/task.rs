use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 任务唯一标识
///
/// 会话内永不复用。用 UUID v4 而非时间戳，避免同一 tick 内创建两个任务时撞 ID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// 生成新 ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 单个任务
#[derive(Debug, Clone)]
pub struct Task {
    /// 任务 ID（创建时分配，生命周期内不变）
    pub id: TaskId,
    /// 任务文本（创建时 trim，之后不可变）
    pub text: String,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间（仅用于展示，不参与排序）
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// 创建新任务，文本取 trim 后的内容
    pub fn new(text: &str) -> Self {
        Self {
            id: TaskId::new(),
            text: text.trim().to_string(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// 格式化相对时间，如 "just now" / "5m ago" / "2h ago" / "3d ago"
pub fn format_relative_time(dt: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(dt);

    let seconds = duration.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_trims_text() {
        let task = Task::new("  buy milk  ");
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("a");
        let b = Task::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(now), "just now");

        let five_min = now - chrono::Duration::minutes(5);
        assert_eq!(format_relative_time(five_min), "5m ago");

        let two_days = now - chrono::Duration::days(2);
        assert_eq!(format_relative_time(two_days), "2d ago");
    }
}
