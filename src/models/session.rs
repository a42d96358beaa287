//! Session scope, profile and the persisted session record

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Which login a request or a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[serde(alias = "user")]
    Reader,
    Admin,
}

/// Path namespace served with the administrator session
const ADMIN_PREFIX: &str = "/admin";

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Reader => "reader",
            Scope::Admin => "admin",
        }
    }

    /// Infer the scope from a request path: `/admin` and everything below it
    /// is administrator traffic, all other paths are reader traffic.
    pub fn for_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.strip_prefix(ADMIN_PREFIX) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => Scope::Admin,
            _ => Scope::Reader,
        }
    }

    /// Durable storage key holding the raw token
    pub fn token_key(&self) -> &'static str {
        match self {
            Scope::Reader => "lib_token",
            Scope::Admin => "lib_admin_token",
        }
    }

    /// Durable storage key holding the JSON profile
    pub fn profile_key(&self) -> &'static str {
        match self {
            Scope::Reader => "lib_user",
            Scope::Admin => "lib_admin_user",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reader" | "user" => Ok(Scope::Reader),
            "admin" => Ok(Scope::Admin),
            _ => Err(format!("Invalid session scope: {}", s)),
        }
    }
}

/// Identity of the logged-in reader or administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub display_name: String,
    /// Reader card code, or administrator username
    pub identifier_code: String,
}

/// Stored form of a reader profile (`lib_user`)
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReaderRecord {
    user_id: i64,
    name: String,
    code: String,
}

/// Stored form of an administrator profile (`lib_admin_user`)
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminRecord {
    admin_id: i64,
    name: String,
    username: String,
}

impl Profile {
    /// Serialize in the layout the scope's storage entry uses
    pub fn to_stored_json(&self, scope: Scope) -> AppResult<String> {
        let json = match scope {
            Scope::Reader => serde_json::to_string(&ReaderRecord {
                user_id: self.id,
                name: self.display_name.clone(),
                code: self.identifier_code.clone(),
            }),
            Scope::Admin => serde_json::to_string(&AdminRecord {
                admin_id: self.id,
                name: self.display_name.clone(),
                username: self.identifier_code.clone(),
            }),
        };
        json.map_err(AppError::from)
    }

    /// Parse a stored profile; `None` when the entry is not a valid profile
    pub fn from_stored_json(scope: Scope, json: &str) -> Option<Self> {
        match scope {
            Scope::Reader => serde_json::from_str::<ReaderRecord>(json).ok().map(|r| Profile {
                id: r.user_id,
                display_name: r.name,
                identifier_code: r.code,
            }),
            Scope::Admin => serde_json::from_str::<AdminRecord>(json).ok().map(|r| Profile {
                id: r.admin_id,
                display_name: r.name,
                identifier_code: r.username,
            }),
        }
    }
}

/// A fully present login: a token never exists without its profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub profile: Profile,
}

/// Broadcast when the backend rejects a scope's token with HTTP 401
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExpired {
    pub scope: Scope,
}
