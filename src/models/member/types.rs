use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Placeholder shown wherever a member reference no longer resolves.
pub const UNKNOWN_MEMBER: &str = "Unknown member";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub primary_role: Option<String>,
    pub secondary_role: Option<String>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Member id -> display name, for resolving proposer/seconder/speaker references.
pub fn name_map(members: &[Member]) -> HashMap<i64, String> {
    members.iter().map(|m| (m.id, m.full_name())).collect()
}

/// Form input for adding a member.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub primary_role: Option<String>,
    #[serde(default)]
    pub secondary_role: Option<String>,
}
