use crate::AppContext;
use crate::cli::commands::data::{api_client, runtime};
use crate::cli::parser::Commands;
use crate::core::board::{BoardRules, TicketBoard};
use crate::errors::AppResult;
use crate::models::Ticket;
use crate::notify::TicketPoller;
use crate::ui::messages::{header, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Tickets { watch } = cmd else {
        return Ok(());
    };

    let client = api_client(ctx)?;
    let rules = BoardRules::for_role(&ctx.config.notify, client.auth())?;
    let rt = runtime()?;

    if !*watch {
        let tickets = rt.block_on(client.open_tickets())?;
        print!("{}", render(&rules.build(tickets)));
        return Ok(());
    }

    let interval = Duration::from_secs(ctx.config.notify.poll_interval_secs.max(1));
    rt.block_on(async move {
        let handle = TicketPoller::new(Arc::new(client), rules, interval).spawn();
        let mut updates = handle.subscribe();
        let mut stdin = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;

        header("Open tickets");
        info(format!(
            "Polling every {}s. Press Enter to refresh, Ctrl-C to quit.",
            interval.as_secs()
        ));

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                line = stdin.next_line(), if stdin_open => match line {
                    Ok(Some(_)) => handle.refresh(),
                    _ => stdin_open = false,
                },
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let board = updates.borrow_and_update().clone();
                    if let Some(board) = board {
                        print!("{}", render(&board));
                    }
                }
            }
        }

        handle.shutdown().await;
    });

    // a pending stdin read would otherwise block runtime teardown
    rt.shutdown_background();
    Ok(())
}

pub(crate) fn render(board: &TicketBoard) -> String {
    let mut out = String::new();
    let stamp = chrono::Local::now().format("%H:%M:%S");

    match board {
        TicketBoard::Flat(tickets) => {
            out.push_str(&format!("🔔 {} open ticket(s) at {stamp}\n", tickets.len()));
            for t in tickets {
                out.push_str(&render_ticket(t));
            }
        }
        TicketBoard::Grouped(groups) => {
            out.push_str(&format!("🔔 {} open ticket(s) at {stamp}\n", board.len()));
            for (dept, tickets) in groups {
                out.push_str(&format!("\n[{dept}] {}\n", tickets.len()));
                for t in tickets {
                    out.push_str(&render_ticket(t));
                }
            }
        }
    }

    if board.is_empty() {
        out.push_str("No open tickets.\n");
    }
    out
}

fn render_ticket(t: &Ticket) -> String {
    let first = format!("  #{} [{}] {}", t.id, t.priority.as_str().to_uppercase(), t.subject);
    let opts = textwrap::Options::new(78).subsequent_indent("      ");
    let mut out = textwrap::fill(&first, opts);
    out.push('\n');
    out.push_str(&format!(
        "      requester: {} | assignee: {} | opened: {}\n",
        t.requester.as_deref().unwrap_or("-"),
        t.assignee.as_deref().unwrap_or("-"),
        t.created_at.as_deref().unwrap_or("-"),
    ));
    out
}
