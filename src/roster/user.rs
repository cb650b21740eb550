use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// A user record as served by the remote list. Only `name` is required, the
/// rest is kept when present and unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            username: None,
            email: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Username,
    Email,
    Id,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Name, Self::Username, Self::Email, Self::Id];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Id => "id",
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Name => compare_text(Some(&a.name), Some(&b.name)),
            Self::Username => compare_text(a.username.as_deref(), b.username.as_deref()),
            Self::Email => compare_text(a.email.as_deref(), b.email.as_deref()),
            Self::Id => compare_missing_last(a.id, b.id),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "id" => Ok(Self::Id),
            other => Err(format!(
                "invalid sort key '{other}', expected one of: name, username, email, id"
            )),
        }
    }
}

/// Stable ascending sort. Text keys ignore case, records missing the key go last.
pub fn sort_users(users: &mut [User], key: SortKey) {
    users.sort_by(|a, b| key.compare(a, b));
}

fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare_missing_last(a.map(str::to_lowercase), b.map(str::to_lowercase))
}

fn compare_missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
