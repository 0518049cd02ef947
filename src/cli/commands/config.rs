use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", ctx.config_path.display());
            let yaml = serde_yaml::to_string(&ctx.config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        if *edit_config {
            edit(&ctx.config_path, editor.as_deref());
        }
    }

    Ok(())
}

fn edit(path: &std::path::Path, requested: Option<&str>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration edited with '{editor_to_use}'"));
            return;
        }
        _ => warning(format!(
            "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => success(format!("Configuration edited with '{default_editor}'")),
        _ => error(format!("Failed to edit configuration with '{default_editor}'")),
    }
}
