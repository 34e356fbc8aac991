//! Caller identity handed in by the surrounding auth layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user account.
pub type UserId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Player,
    Director,
    Admin,
}

/// Who is performing a mutating operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Authors and administrators may change what an author owns.
    pub fn can_manage(&self, author_id: UserId) -> bool {
        self.id == author_id || self.is_admin()
    }

    /// Directors and administrators may open new tournaments.
    pub fn can_organize(&self) -> bool {
        matches!(self.role, Role::Director | Role::Admin)
    }
}
