use std::sync::RwLock;

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::todo::{Status, Todo};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{field} is required")]
    Validation { field: &'static str },
    #[error("no todo with id {id}")]
    NotFound { id: Uuid },
}

/// Fields a caller supplies when creating a todo. The store owns id,
/// status and timestamps.
#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub title: String,
    pub body: String,
    pub due_date: Option<NaiveDate>,
}

/// Full replacement of a todo's mutable fields. `id` and `created` stay.
#[derive(Debug, Clone)]
pub struct TodoChange {
    pub title: String,
    pub body: String,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
}

/// The authoritative todo collection. Insertion order is the list order.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<Todo> {
        self.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Result<Todo, StoreError> {
        self.read()
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    pub fn create(&self, draft: TodoDraft) -> Result<Todo, StoreError> {
        let title = required(&draft.title, "title")?;
        let body = required(&draft.body, "body")?;
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            body,
            status: Status::None,
            created: now,
            updated: now,
            due_date: draft.due_date,
        };
        self.write().push(todo.clone());
        Ok(todo)
    }

    pub fn update(&self, id: Uuid, change: TodoChange) -> Result<Todo, StoreError> {
        let title = required(&change.title, "title")?;
        let body = required(&change.body, "body")?;
        let mut todos = self.write();
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })?;
        todo.title = title;
        todo.body = body;
        todo.status = change.status;
        todo.due_date = change.due_date;
        todo.updated = Utc::now();
        Ok(todo.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut todos = self.write();
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() == before {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    /// Cycles the status per the none -> started -> done rule and stamps
    /// `updated`.
    pub fn advance(&self, id: Uuid) -> Result<Todo, StoreError> {
        let mut todos = self.write();
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })?;
        todo.advance(Utc::now());
        Ok(todo.clone())
    }

    /// Appends a copy of an existing todo as a fresh record: new id, status
    /// reset to none, new timestamps, title marked as duplicated.
    pub fn duplicate(&self, id: Uuid) -> Result<Todo, StoreError> {
        let source = self.get(id)?;
        self.create(TodoDraft {
            title: format!("{} [Duplicated]", source.title),
            body: source.body,
            due_date: source.due_date,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Todo>> {
        self.todos.read().expect("todo store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Todo>> {
        self.todos.write().expect("todo store lock poisoned")
    }
}

fn required(value: &str, field: &'static str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::{StoreError, TodoChange, TodoDraft, TodoStore};
    use crate::todo::Status;

    fn draft(title: &str, body: &str) -> TodoDraft {
        TodoDraft {
            title: title.to_string(),
            body: body.to_string(),
            due_date: None,
        }
    }

    #[test]
    fn create_assigns_id_and_defaults() {
        let store = TodoStore::new();
        let todo = store.create(draft("A", "B")).expect("create");
        assert_eq!(todo.status, Status::None);
        assert_eq!(todo.created, todo.updated);
        assert_eq!(store.get(todo.id).expect("get"), todo);
    }

    #[test]
    fn create_rejects_blank_fields() {
        let store = TodoStore::new();
        assert_eq!(
            store.create(draft("", "body")),
            Err(StoreError::Validation { field: "title" })
        );
        assert_eq!(
            store.create(draft("title", "   ")),
            Err(StoreError::Validation { field: "body" })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = TodoStore::new();
        let first = store.create(draft("first", "b")).expect("create");
        let second = store.create(draft("second", "b")).expect("create");
        let ids: Vec<Uuid> = store.list().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn update_replaces_mutable_fields_only() {
        let store = TodoStore::new();
        let created = store.create(draft("before", "body")).expect("create");
        let due = NaiveDate::from_ymd_opt(2027, 1, 15).expect("valid date");
        let updated = store
            .update(
                created.id,
                TodoChange {
                    title: "after".to_string(),
                    body: "new body".to_string(),
                    status: Status::Started,
                    due_date: Some(due),
                },
            )
            .expect("update");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created, created.created);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.status, Status::Started);
        assert_eq!(updated.due_date, Some(due));
        assert!(updated.updated >= created.updated);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = TodoStore::new();
        let id = Uuid::new_v4();
        let result = store.update(
            id,
            TodoChange {
                title: "t".to_string(),
                body: "b".to_string(),
                status: Status::None,
                due_date: None,
            },
        );
        assert_eq!(result, Err(StoreError::NotFound { id }));
    }

    #[test]
    fn update_rejects_blank_title() {
        let store = TodoStore::new();
        let created = store.create(draft("t", "b")).expect("create");
        let result = store.update(
            created.id,
            TodoChange {
                title: " ".to_string(),
                body: "b".to_string(),
                status: Status::None,
                due_date: None,
            },
        );
        assert_eq!(result, Err(StoreError::Validation { field: "title" }));
        assert_eq!(store.get(created.id).expect("get").title, "t");
    }

    #[test]
    fn delete_removes_record() {
        let store = TodoStore::new();
        let todo = store.create(draft("t", "b")).expect("create");
        store.delete(todo.id).expect("delete");
        assert_eq!(
            store.get(todo.id),
            Err(StoreError::NotFound { id: todo.id })
        );
        assert_eq!(
            store.delete(todo.id),
            Err(StoreError::NotFound { id: todo.id })
        );
    }

    #[test]
    fn advance_cycles_to_done_and_stays() {
        let store = TodoStore::new();
        let todo = store.create(draft("t", "b")).expect("create");
        assert_eq!(store.advance(todo.id).expect("advance").status, Status::Started);
        assert_eq!(store.advance(todo.id).expect("advance").status, Status::Done);

        let still_done = store.advance(todo.id).expect("advance");
        assert_eq!(still_done.status, Status::Done);
        assert!(still_done.updated >= todo.updated);
    }

    #[test]
    fn duplicate_copies_body_and_due_date() {
        let store = TodoStore::new();
        let due = NaiveDate::from_ymd_opt(2027, 3, 1).expect("valid date");
        let original = store
            .create(TodoDraft {
                title: "plan".to_string(),
                body: "details".to_string(),
                due_date: Some(due),
            })
            .expect("create");
        let advanced = store.advance(original.id).expect("advance");
        assert_eq!(advanced.status, Status::Started);

        let copy = store.duplicate(original.id).expect("duplicate");
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, "plan [Duplicated]");
        assert_eq!(copy.body, "details");
        assert_eq!(copy.due_date, Some(due));
        assert_eq!(copy.status, Status::None);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn duplicate_unknown_id_is_not_found() {
        let store = TodoStore::new();
        let id = Uuid::new_v4();
        assert_eq!(store.duplicate(id), Err(StoreError::NotFound { id }));
    }
}
