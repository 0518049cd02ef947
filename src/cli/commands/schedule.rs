use crate::AppContext;
use crate::cli::commands::data::load_schedules;
use crate::cli::parser::Commands;
use crate::core::range::DateRange;
use crate::core::schedule::{ScheduleGrid, schedule_grid};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::ui::table::{Column, Table};

/// Wider grids still render, they just wrap in most terminals.
const COMFORTABLE_DAYS: usize = 31;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Schedule { range, input } = cmd {
        let range = DateRange::parse(range)?;
        let (employees, entries) = load_schedules(ctx, &range, input.as_deref())?;

        let grid = schedule_grid(&employees, &entries, &range);
        if grid.days.len() > COMFORTABLE_DAYS {
            warning(format!(
                "{} days requested, the grid may not fit the terminal",
                grid.days.len()
            ));
        }

        header(format!("Schedule {range}"));
        print!("{}", render(&grid));
    }
    Ok(())
}

fn render(grid: &ScheduleGrid) -> String {
    let mut columns = vec![Column::left("ID"), Column::left("Name")];
    // "Mon 03" keeps the header short
    columns.extend(grid.days.iter().map(|d| Column::left(d.format("%a %d").to_string())));

    let mut table = Table::new(columns);
    for row in &grid.rows {
        let mut cells = vec![row.employee_id.clone(), row.name.clone()];
        cells.extend(row.cells.iter().cloned());
        table.add_row(cells);
    }
    table.render()
}
