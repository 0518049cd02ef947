// src/core/board.rs

//! Which open tickets a viewer is notified about, and how they are laid out.

use crate::config::NotifyConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{AuthContext, Ticket};
use std::collections::BTreeMap;

pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

#[derive(Debug, Clone, PartialEq)]
pub enum TicketBoard {
    /// Department → tickets, for the grouping role.
    Grouped(BTreeMap<String, Vec<Ticket>>),
    Flat(Vec<Ticket>),
}

impl TicketBoard {
    pub fn len(&self) -> usize {
        match self {
            TicketBoard::Grouped(groups) => groups.values().map(Vec::len).sum(),
            TicketBoard::Flat(tickets) => tickets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Department filter and layout derived from the viewer's role.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRules {
    departments: Vec<String>,
    grouped: bool,
}

impl BoardRules {
    /// Fails with `NotAuthorized` when the role has no department mapping.
    pub fn for_role(cfg: &NotifyConfig, auth: &AuthContext) -> AppResult<Self> {
        let role = auth.role.trim();
        let departments = cfg
            .role_departments
            .iter()
            .find(|(r, _)| r.eq_ignore_ascii_case(role))
            .map(|(_, d)| d.clone())
            .ok_or_else(|| {
                AppError::NotAuthorized(format!("role '{role}' does not receive ticket notifications"))
            })?;

        Ok(Self {
            departments,
            grouped: cfg.grouping_role.eq_ignore_ascii_case(role),
        })
    }

    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    fn accepts(&self, ticket: &Ticket) -> bool {
        self.departments.iter().any(|d| {
            d == "*"
                || ticket
                    .department
                    .as_deref()
                    .is_some_and(|td| td.trim().eq_ignore_ascii_case(d.trim()))
        })
    }

    pub fn build(&self, tickets: Vec<Ticket>) -> TicketBoard {
        let visible = tickets.into_iter().filter(|t| self.accepts(t));

        if !self.grouped {
            return TicketBoard::Flat(visible.collect());
        }

        let mut groups: BTreeMap<String, Vec<Ticket>> = BTreeMap::new();
        for t in visible {
            let dept = t
                .department
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(UNASSIGNED_DEPARTMENT);
            // departments differing only in case share the first spelling seen
            let key = groups
                .keys()
                .find(|k| k.eq_ignore_ascii_case(dept))
                .cloned()
                .unwrap_or_else(|| dept.to_string());
            groups.entry(key).or_default().push(t);
        }
        TicketBoard::Grouped(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TicketPriority, TicketStatus};

    fn ticket(id: &str, dept: Option<&str>) -> Ticket {
        Ticket {
            id: id.into(),
            requester: None,
            department: dept.map(String::from),
            priority: TicketPriority::Medium,
            status: TicketStatus::Open,
            subject: format!("ticket {id}"),
            created_at: None,
            updated_at: None,
            assignee: None,
        }
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket("1", Some("IT")),
            ticket("2", Some("hr")),
            ticket("3", None),
            ticket("4", Some("it ")),
            ticket("5", Some("Payroll")),
        ]
    }

    #[test]
    fn non_grouping_role_gets_flat_filtered_list() {
        let rules = BoardRules::for_role(&NotifyConfig::default(), &AuthContext::new("t", "IT")).unwrap();
        assert!(!rules.is_grouped());

        match rules.build(sample()) {
            TicketBoard::Flat(v) => {
                let ids: Vec<_> = v.iter().map(|t| t.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "4"]);
            }
            other => panic!("expected flat board, got {other:?}"),
        }
    }

    #[test]
    fn grouping_role_sees_everything_by_department() {
        let rules =
            BoardRules::for_role(&NotifyConfig::default(), &AuthContext::new("t", "admin")).unwrap();
        let board = rules.build(sample());
        assert_eq!(board.len(), 5);

        match board {
            TicketBoard::Grouped(groups) => {
                assert_eq!(groups[UNASSIGNED_DEPARTMENT].len(), 1);
                assert_eq!(groups["IT"].len(), 2);
                assert!(!groups.contains_key("it"));
                assert_eq!(groups.len(), 4);
                assert_eq!(groups["Payroll"].len(), 1);
            }
            other => panic!("expected grouped board, got {other:?}"),
        }
    }

    #[test]
    fn unmapped_role_is_not_authorized() {
        let err = BoardRules::for_role(&NotifyConfig::default(), &AuthContext::new("t", "agent"))
            .unwrap_err();
        assert!(matches!(err, AppError::NotAuthorized(_)));
    }

    #[test]
    fn empty_board() {
        let rules = BoardRules::for_role(&NotifyConfig::default(), &AuthContext::new("t", "hr")).unwrap();
        assert!(rules.build(vec![ticket("1", Some("IT"))]).is_empty());
    }
}
