/// Titles the task list starts with in a fresh session
pub const DEFAULT_SEED: [&str; 3] = ["GYM", "Coding", "Aptitude"];

/// A single to-do item
///
/// The `id` is opaque to callers. Seeded tasks use their 1-based position
/// ("1", "2", ...); tasks added later use the creation timestamp in
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier within the owning store
    pub id: String,
    /// Display title, never empty
    pub title: String,
    /// Whether the task has been marked as complete
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }
}

/// Issues timestamp-based task ids that never repeat within a store
///
/// Two adds inside the same millisecond (or a clock that steps backwards)
/// would produce the same timestamp; the generator bumps forward past the
/// last issued value instead.
#[derive(Debug, Default, Clone)]
pub(crate) struct TaskIdGenerator {
    last_issued: i64,
}

impl TaskIdGenerator {
    /// Next id given a timestamp in milliseconds
    pub fn next_id_at(&mut self, now_millis: i64) -> i64 {
        let id = now_millis.max(self.last_issued + 1);
        self.last_issued = id;
        id
    }
}
