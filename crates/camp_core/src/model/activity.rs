//! Activity domain model.
//!
//! Activities carry no field-range rules; the only requirement is that both
//! `name` and `difficulty` are present, which the type system already holds.

/// Store-generated activity identifier.
pub type ActivityId = i64;

/// Activity that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    name: String,
    difficulty: i64,
}

impl NewActivity {
    pub fn new(name: impl Into<String>, difficulty: i64) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }

    pub(crate) fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            id,
            name: self.name,
            difficulty: self.difficulty,
        }
    }
}

/// Persisted activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    id: ActivityId,
    name: String,
    difficulty: i64,
}

impl Activity {
    pub fn new(id: ActivityId, name: impl Into<String>, difficulty: i64) -> Self {
        NewActivity::new(name, difficulty).into_activity(id)
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }
}
