use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::AuthContext;
use crate::ui::messages::success;

/// Handle `login`: persist the session the API client will send.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Login {
        token,
        role,
        department,
        name,
    } = cmd
    {
        if token.trim().is_empty() {
            return Err(AppError::Validation("token must not be empty".into()));
        }

        let session = AuthContext {
            token: token.trim().to_string(),
            role: role.trim().to_lowercase(),
            department: department.clone(),
            user_name: name.clone(),
        };

        let path = ctx.config.session_path();
        session.save(&path)?;
        success(format!(
            "Session stored for role '{}' in {}",
            session.role,
            path.display()
        ));
    }
    Ok(())
}
