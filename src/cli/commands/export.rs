use crate::AppContext;
use crate::cli::commands::data::load_attendance;
use crate::cli::parser::Commands;
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        range,
        employee,
        format,
        dir,
        input,
        force,
    } = cmd
    {
        let range = DateRange::parse(range)?;
        let (employees, entries) =
            load_attendance(ctx, &range, employee.as_deref(), input.as_deref())?;

        let dir = dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| ctx.config.output_path());

        let req = ExportRequest {
            range,
            employee: employee.as_deref(),
            format: *format,
            dir: &dir,
            force: *force,
        };

        ExportLogic::export(&req, &employees, &entries)?;
    }
    Ok(())
}
