use crate::error::TaskError;
use crate::todo::task::{DEFAULT_SEED, Task, TaskIdGenerator};
use chrono::Utc;

/// In-memory, ordered collection of tasks
///
/// A `Vec` is the only storage: insertion order is the display order, and
/// session-sized lists make linear lookups by id cheap enough.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    seed: Vec<String>,
    ids: TaskIdGenerator,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl TaskStore {
    /// Create an empty store with no seed
    pub fn new() -> Self {
        Self::with_seed(Vec::<String>::new())
    }

    /// Create a store pre-populated with the given titles
    ///
    /// Seeded tasks get ids "1", "2", ... in order. Blank titles are skipped
    /// so the non-empty title invariant holds for seeds too.
    pub fn with_seed<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let seed = titles
            .into_iter()
            .map(Into::into)
            .map(|t: String| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        let mut store = Self {
            tasks: Vec::new(),
            seed,
            ids: TaskIdGenerator::default(),
        };
        store.reset();
        store
    }

    /// Discard all tasks and restore the seed list
    pub fn reset(&mut self) {
        self.tasks = self
            .seed
            .iter()
            .enumerate()
            .map(|(i, title)| Task::new((i + 1).to_string(), title.clone()))
            .collect();
    }

    /// Add a task and return its id
    ///
    /// The title is trimmed; `None` means the input was blank and nothing was
    /// added.
    pub fn add(&mut self, title: &str) -> Option<String> {
        self.add_with_timestamp(title, Utc::now().timestamp_millis())
    }

    pub(crate) fn add_with_timestamp(&mut self, title: &str, now_millis: i64) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let mut id = self.ids.next_id_at(now_millis).to_string();
        while self.contains(&id) {
            id = self.ids.next_id_at(now_millis).to_string();
        }

        self.tasks.push(Task::new(id.clone(), title));
        Some(id)
    }

    /// Flip the completed flag of a task, returning the updated task
    pub fn toggle(&mut self, id: &str) -> Result<&Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        task.completed = !task.completed;
        Ok(task)
    }

    /// Remove a task, returning it
    pub fn delete(&mut self, id: &str) -> Result<Task, TaskError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        Ok(self.tasks.remove(pos))
    }

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
