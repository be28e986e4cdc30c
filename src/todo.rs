use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    None,
    Started,
    Done,
}

impl Status {
    /// Single cycling operation: none -> started -> done, done absorbs.
    pub fn advance(self) -> Self {
        match self {
            Status::None => Status::Started,
            Status::Started => Status::Done,
            Status::Done => Status::Done,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::None => "none",
            Status::Started => "started",
            Status::Done => "done",
        }
    }
}

/// A single task record. `due_date` is a plain calendar date; absence means
/// no deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub status: Status,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Todo {
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// A todo is overtime once its due date is strictly before `today`.
    /// Due today is not overtime. Purely date-based; completion is only
    /// considered by `status_class`.
    pub fn is_overtime(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today,
            None => false,
        }
    }

    /// Whole days left until the due date, if it is strictly in the future.
    pub fn days_to_due(&self, today: NaiveDate) -> Option<i64> {
        let due = self.due_date?;
        if due > today {
            Some((due - today).num_days())
        } else {
            None
        }
    }

    /// Applies the cycling rule and stamps `updated`, also on the
    /// done -> done no-op.
    pub fn advance(&mut self, now: DateTime<Utc>) {
        self.status = self.status.advance();
        self.updated = now;
    }

    /// Border class for the list view. Done wins over overtime, so a
    /// completed-but-late todo never shows as overdue.
    pub fn status_class(&self, today: NaiveDate) -> &'static str {
        if self.is_done() {
            "border-success"
        } else if self.is_overtime(today) {
            "border-danger"
        } else {
            ""
        }
    }
}
