use serde::Serialize;

use crate::model::task::Task;

/// Which slice of the task list to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Active,
    Completed,
    Archived,
}

impl ViewKind {
    pub fn includes(self, task: &Task) -> bool {
        match self {
            ViewKind::Active => task.is_active(),
            ViewKind::Completed => task.is_done_unarchived(),
            ViewKind::Archived => task.archived,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Active => "Tasks",
            ViewKind::Completed => "Completed Tasks",
            ViewKind::Archived => "Archived Tasks",
        }
    }

    /// Placeholder text shown when the view has no tasks
    pub fn empty_text(self) -> &'static str {
        match self {
            ViewKind::Active => "Nothing to do",
            ViewKind::Completed => "No completed tasks",
            ViewKind::Archived => "No archived tasks",
        }
    }
}

/// Tasks in a view, in list order
pub fn view(tasks: &[Task], kind: ViewKind) -> Vec<&Task> {
    tasks.iter().filter(|t| kind.includes(t)).collect()
}

/// Tasks that are neither completed nor archived
pub fn active_view(tasks: &[Task]) -> Vec<&Task> {
    view(tasks, ViewKind::Active)
}

/// Completed tasks that have not been archived
pub fn completed_view(tasks: &[Task]) -> Vec<&Task> {
    view(tasks, ViewKind::Completed)
}

/// Archived tasks, completed or not
pub fn archived_view(tasks: &[Task]) -> Vec<&Task> {
    view(tasks, ViewKind::Archived)
}

/// Sizes of the three views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewCounts {
    pub active: usize,
    pub completed: usize,
    pub archived: usize,
}

impl ViewCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let mut counts = ViewCounts::default();
        for task in tasks {
            if task.archived {
                counts.archived += 1;
            } else if task.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
        }
        counts
    }

    pub fn get(&self, kind: ViewKind) -> usize {
        match kind {
            ViewKind::Active => self.active,
            ViewKind::Completed => self.completed,
            ViewKind::Archived => self.archived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops::TaskList;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn task(id: u64, completed: bool, archived: bool) -> Task {
        let mut t = Task::new(id, format!("task {}", id));
        t.completed = completed;
        t.archived = archived;
        t
    }

    fn ids(view: &[&Task]) -> Vec<u64> {
        view.iter().map(|t| t.id).collect()
    }

    #[test]
    fn all_flag_combinations_land_in_one_view() {
        let tasks = vec![
            task(1, false, false),
            task(2, true, false),
            task(3, false, true),
            task(4, true, true),
        ];
        assert_eq!(ids(&active_view(&tasks)), vec![1]);
        assert_eq!(ids(&completed_view(&tasks)), vec![2]);
        assert_eq!(ids(&archived_view(&tasks)), vec![3, 4]);
        assert_eq!(
            ViewCounts::of(&tasks),
            ViewCounts {
                active: 1,
                completed: 1,
                archived: 2
            }
        );
    }

    #[test]
    fn views_keep_list_order() {
        let tasks = vec![task(5, false, false), task(2, false, false), task(9, false, false)];
        assert_eq!(ids(&active_view(&tasks)), vec![5, 2, 9]);
    }

    #[test]
    fn important_flag_does_not_affect_views() {
        let mut t = task(1, false, false);
        t.important = true;
        let tasks = vec![t];
        assert_eq!(active_view(&tasks).len(), 1);
    }

    #[test]
    fn buy_milk_scenario() {
        let mut list = TaskList::new();
        let id = list.add("Buy milk").unwrap().task_id;
        assert_eq!(
            list.tasks(),
            &[Task {
                id,
                text: "Buy milk".into(),
                completed: false,
                important: false,
                archived: false,
            }]
        );
        assert_eq!(ids(&active_view(list.tasks())), vec![id]);

        list.toggle_completed(id);
        assert!(active_view(list.tasks()).is_empty());
        assert_eq!(ids(&completed_view(list.tasks())), vec![id]);

        list.toggle_archived(id);
        assert!(completed_view(list.tasks()).is_empty());
        assert_eq!(archived_view(list.tasks()).len(), 1);
        assert_eq!(ViewCounts::of(list.tasks()).archived, 1);
    }

    #[test]
    fn empty_text_per_view() {
        assert_eq!(ViewKind::Completed.empty_text(), "No completed tasks");
        assert_eq!(ViewKind::Archived.empty_text(), "No archived tasks");
    }

    proptest! {
        #[test]
        fn views_partition_the_list(flags in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 0..40)) {
            let tasks: Vec<Task> = flags
                .iter()
                .enumerate()
                .map(|(i, &(completed, important, archived))| {
                    let mut t = task(i as u64 + 1, completed, archived);
                    t.important = important;
                    t
                })
                .collect();

            let active: HashSet<u64> = ids(&active_view(&tasks)).into_iter().collect();
            let completed: HashSet<u64> = ids(&completed_view(&tasks)).into_iter().collect();
            let archived: HashSet<u64> = ids(&archived_view(&tasks)).into_iter().collect();

            prop_assert!(active.is_disjoint(&completed));
            prop_assert!(active.is_disjoint(&archived));
            prop_assert!(completed.is_disjoint(&archived));

            let union: HashSet<u64> = active.union(&completed).chain(archived.iter()).copied().collect();
            let all: HashSet<u64> = tasks.iter().map(|t| t.id).collect();
            prop_assert_eq!(union, all);

            let counts = ViewCounts::of(&tasks);
            prop_assert_eq!(counts.active + counts.completed + counts.archived, tasks.len());
        }
    }
}
