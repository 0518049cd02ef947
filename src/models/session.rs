use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Session of the current user.
///
/// Passed explicitly to the API client and the poller; nothing reads it from
/// a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthContext {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, alias = "userName")]
    pub user_name: Option<String>,
}

impl AuthContext {
    pub fn new(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            role: role.into(),
            department: None,
            user_name: None,
        }
    }

    /// Load the session file written by `hrportal login`.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::NoSession(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let ctx: AuthContext = serde_json::from_str(&content)
            .map_err(|e| AppError::NoSession(format!("{}: {e}", path.display())))?;
        if ctx.token.trim().is_empty() {
            return Err(AppError::NoSession(format!("{}: empty token", path.display())));
        }
        Ok(ctx)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
