use crate::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = &ctx.config_path;

        if path.exists() && !*force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let cfg = Config::default();
        cfg.save(path)?;

        info(format!("Config file : {}", path.display()));
        info(format!("Session file: {}", cfg.session_path().display()));
        success("hrportal initialization completed!");
    }
    Ok(())
}
