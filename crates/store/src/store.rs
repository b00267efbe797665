//! The entity store.

use chrono::Utc;
use futureflow_core::{
    Goal, GoalId, NewGoal, NewNote, NewTask, Note, NoteId, Task, TaskId,
};
use tracing::{debug, trace};
use ulid::{Generator, Ulid};

use crate::{Result, StoreError, TaskFilter};

/// Holds tasks, notes and goals in memory.
///
/// Every collection is kept newest-first. Operations on unknown ids are
/// silent no-ops, since ids only ever come from the presentation layer.
pub struct EntityStore {
    tasks: Vec<Task>,
    notes: Vec<Note>,
    goals: Vec<Goal>,
    ids: Generator,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            notes: Vec::new(),
            goals: Vec::new(),
            ids: Generator::new(),
        }
    }

    fn next_ulid(&mut self) -> Result<Ulid> {
        self.ids.generate().map_err(|_| StoreError::IdExhausted)
    }

    // === Tasks ===

    /// Add a task. A blank title is rejected and nothing is inserted.
    pub fn add_task(&mut self, input: NewTask) -> Result<Task> {
        if let Err(e) = input.validate() {
            debug!("Rejected task: {}", e);
            return Err(e.into());
        }
        let id = TaskId::from_ulid(self.next_ulid()?);
        let task = Task::new(id, input, Utc::now());
        debug!("Added task {} - {}", task.id, task.title);
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Flip a task's completion flag. Returns `None` if the id is unknown.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<&Task> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            trace!("toggle_task: no task {}", id);
            return None;
        };
        task.toggle();
        debug!("Task {} completed={}", task.id, task.completed);
        Some(task)
    }

    /// Look up a task.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching a filter, in the filter's sort order.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| filter.matches(t)).collect();
        filter.sort.apply(&mut tasks);
        tasks
    }

    // === Notes ===

    /// Add a note. Blank title or content is rejected.
    pub fn add_note(&mut self, input: NewNote) -> Result<Note> {
        if let Err(e) = input.validate() {
            debug!("Rejected note: {}", e);
            return Err(e.into());
        }
        let id = NoteId::from_ulid(self.next_ulid()?);
        let note = Note::new(id, input, Utc::now());
        debug!("Added note {} - {}", note.id, note.title);
        self.notes.insert(0, note.clone());
        Ok(note)
    }

    /// Look up a note.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// All notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    // === Goals ===

    /// Add a goal. The target must parse to a positive integer; progress starts at 0.
    pub fn add_goal(&mut self, input: NewGoal) -> Result<Goal> {
        let target = match input.validate() {
            Ok(target) => target,
            Err(e) => {
                debug!("Rejected goal: {}", e);
                return Err(e.into());
            }
        };
        let id = GoalId::from_ulid(self.next_ulid()?);
        let goal = Goal::new(id, input.title, target, input.category, Utc::now());
        debug!("Added goal {} - {} (target {})", goal.id, goal.title, goal.target);
        self.goals.insert(0, goal.clone());
        Ok(goal)
    }

    /// Move a goal's progress by `delta`, clamped to `[0, target]`.
    /// Returns `None` if the id is unknown.
    pub fn adjust_goal_progress(&mut self, id: GoalId, delta: i64) -> Option<&Goal> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            trace!("adjust_goal_progress: no goal {}", id);
            return None;
        };
        let before = goal.current;
        goal.adjust(delta);
        debug!("Goal {} progress {} -> {} / {}", goal.id, before, goal.current, goal.target);
        Some(goal)
    }

    /// Look up a goal.
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// All goals, newest first.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskSort;
    use futureflow_core::{Priority, ValidationError};

    #[test]
    fn test_store_starts_empty() {
        let store = EntityStore::new();
        assert!(store.tasks().is_empty());
        assert!(store.notes().is_empty());
        assert!(store.goals().is_empty());
    }

    #[test]
    fn test_add_task_rejects_blank_title() {
        let mut store = EntityStore::new();
        assert_eq!(
            store.add_task(NewTask::new("")),
            Err(StoreError::Validation(ValidationError::EmptyTitle))
        );
        assert!(store.add_task(NewTask::new("   ")).is_err());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_task_inserts_open_task() {
        let mut store = EntityStore::new();
        let task = store
            .add_task(NewTask::new("Write report").with_priority(Priority::Medium).with_subject(""))
            .unwrap();
        assert_eq!(store.tasks().len(), 1);
        assert!(!task.completed);
        assert_eq!(store.tasks()[0], task);
    }

    #[test]
    fn test_tasks_newest_first_with_unique_ids() {
        let mut store = EntityStore::new();
        let ids: Vec<_> = (0..50)
            .map(|i| store.add_task(NewTask::new(format!("task {}", i))).unwrap().id)
            .collect();
        assert_eq!(store.tasks()[0].title, "task 49");
        assert_eq!(store.tasks()[49].title, "task 0");
        // ids are strictly increasing even within one millisecond
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_toggle_task_flips_and_ignores_unknown() {
        let mut store = EntityStore::new();
        let id = store.add_task(NewTask::new("Read")).unwrap().id;
        assert!(store.toggle_task(id).unwrap().completed);
        assert!(!store.toggle_task(id).unwrap().completed);

        let mut other = EntityStore::new();
        let stranger = other.add_task(NewTask::new("Elsewhere")).unwrap().id;
        assert!(store.toggle_task(stranger).is_none());
        assert!(!store.task(id).unwrap().completed);
    }

    #[test]
    fn test_add_note_requires_title_and_content() {
        let mut store = EntityStore::new();
        assert!(store.add_note(NewNote::new("Title", " ")).is_err());
        assert!(store.add_note(NewNote::new("", "Body")).is_err());
        assert!(store.notes().is_empty());

        let note = store.add_note(NewNote::new("Lecture", "Sorting").with_subject("CS")).unwrap();
        assert_eq!(store.note(note.id).unwrap().subject.as_deref(), Some("CS"));
    }

    #[test]
    fn test_add_goal_validates_target() {
        let mut store = EntityStore::new();
        for bad in ["-5", "abc", "0", ""] {
            let err = store.add_goal(NewGoal::new("Run", bad).with_category("Fitness")).unwrap_err();
            assert!(matches!(err, StoreError::Validation(ValidationError::InvalidTarget(_))));
        }
        assert!(store.goals().is_empty());

        let goal = store.add_goal(NewGoal::new("Run", "100").with_category("Fitness")).unwrap();
        assert_eq!(goal.current, 0);
        assert_eq!(goal.target, 100);
        assert_eq!(goal.category.as_deref(), Some("Fitness"));
    }

    #[test]
    fn test_adjust_goal_progress_clamps() {
        let mut store = EntityStore::new();
        let id = store.add_goal(NewGoal::new("Pages", "3")).unwrap().id;

        for _ in 0..3 {
            store.adjust_goal_progress(id, 1);
        }
        assert_eq!(store.goal(id).unwrap().current, 3);
        assert_eq!(store.adjust_goal_progress(id, 1).unwrap().current, 3);
        assert_eq!(store.adjust_goal_progress(id, -10).unwrap().current, 0);

        let mut other = EntityStore::new();
        let stranger = other.add_goal(NewGoal::new("x", "1")).unwrap().id;
        assert!(store.adjust_goal_progress(stranger, 1).is_none());
    }

    #[test]
    fn test_adjust_goal_progress_random_walk_stays_in_range() {
        let mut store = EntityStore::new();
        let id = store.add_goal(NewGoal::new("Walk", "7")).unwrap().id;
        let deltas = [3, -1, 9, -20, 4, 4, 1, -2, 100, -3, i64::MIN, i64::MAX, -1];
        for delta in deltas {
            let goal = store.adjust_goal_progress(id, delta).unwrap();
            assert!(goal.current <= goal.target);
        }
    }

    #[test]
    fn test_list_tasks_filter_and_sort() {
        let mut store = EntityStore::new();
        let low = store
            .add_task(NewTask::new("low").with_priority(Priority::Low).with_subject("Math"))
            .unwrap();
        let high = store
            .add_task(NewTask::new("high").with_priority(Priority::High).with_subject("math"))
            .unwrap();
        let dated = store
            .add_task(
                NewTask::new("dated")
                    .with_due_date(chrono::NaiveDate::from_ymd_opt(2026, 1, 5)),
            )
            .unwrap();
        store.toggle_task(low.id);

        let open = store.list_tasks(&TaskFilter { completed: Some(false), ..Default::default() });
        assert_eq!(open.iter().map(|t| t.id).collect::<Vec<_>>(), vec![dated.id, high.id]);

        let math = store.list_tasks(&TaskFilter { subject: Some("MATH".into()), ..Default::default() });
        assert_eq!(math.len(), 2);

        let by_priority = store.list_tasks(&TaskFilter { sort: TaskSort::Priority, ..Default::default() });
        assert_eq!(by_priority[0].id, high.id);
        assert_eq!(by_priority[2].id, low.id);

        let by_due = store.list_tasks(&TaskFilter { sort: TaskSort::DueDate, ..Default::default() });
        assert_eq!(by_due[0].id, dated.id);

        let oldest = store.list_tasks(&TaskFilter { sort: TaskSort::Oldest, ..Default::default() });
        assert_eq!(oldest[0].id, low.id);
    }
}
