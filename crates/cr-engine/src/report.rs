//! Text rendering for runs and session summaries.

use crate::location::LocationCatalog;
use crate::role::Role;
use crate::run::Run;
use crate::stats::LocationCounts;

/// Base indentation step.
pub const INDENT: usize = 4;

/// Gap after each column of the role table.
pub const TABLE_MARGIN: usize = 4;

/// Width the scoreboard head is padded to with dashes.
pub const SCOREBOARD_WIDTH: usize = 47;

/// Marker appended to a location id when a rarity event hit that run.
pub const RARITY_MARKER: char = '*';

/// Shown when a session has no runs yet.
pub const NO_RUNS: &str = "No runs recorded this session!";

/// Multi-line report for one run.
///
/// ```text
/// Run # 1
///
/// Dungeon Selection:
///
///        Another Mount Rokkon
///
/// Role Selection:
///
///             Shin   Tank
/// ```
pub fn render_run(run: &Run, catalog: &LocationCatalog) -> String {
    let width = catalog.max_name_width();
    let name = catalog
        .get(run.location())
        .map_or(run.location(), |l| l.name.as_str());

    let mut out = format!("Run # {}\n\n", run.id());
    out.push_str(&format!(
        "Dungeon Selection:\n\n{:INDENT$}{name:^width$}\n\n",
        ""
    ));
    out.push_str("Role Selection:\n\n");

    let offset = width.div_ceil(2) + 2;
    for (member, role) in run.assignment().iter() {
        out.push_str(&format!("{member:>offset$}   {role}\n"));
    }
    out
}

/// One-line digest for the external scoreboard:
/// `Day ##   - 6, ASS, ASS, AAI*, ... ---- 4/0/2`.
///
/// `None` when there are no runs.
pub fn scoreboard_line(runs: &[Run], counts: &LocationCounts) -> Option<String> {
    if runs.is_empty() {
        return None;
    }

    let ids: Vec<String> = runs
        .iter()
        .map(|r| {
            if r.has_rarity() {
                format!("{}{RARITY_MARKER}", r.location())
            } else {
                r.location().to_string()
            }
        })
        .collect();

    let head = format!("Day ##   - {}, {} ", counts.total(), ids.join(", "));
    Some(format!("{head:-<SCOREBOARD_WIDTH$} {}", counts.slashed()))
}

/// Per-location totals with display names, followed by an overall line.
pub fn location_totals(counts: &LocationCounts, catalog: &LocationCatalog) -> String {
    let pad = INDENT * 4;
    let mut out = String::new();
    for (id, n) in counts.iter() {
        let label = format!("{}:", catalog.get(id).map_or(id, |l| l.name.as_str()));
        out.push_str(&format!("{:pad$}{label:<32}{n}\n", ""));
    }
    out.push_str(&format!("\n{:pad$}{:<32}{}\n", "", "Overall:", counts.total()));
    out
}

/// Header row of the role assignment table.
pub fn role_table_header(roles: &[Role]) -> String {
    let mut out = format!("{:1$}", "", INDENT * 4);
    for role in roles {
        out.push_str(&format!("{role}{:TABLE_MARGIN$}", ""));
    }
    out
}

/// One member's row of the role assignment table.
pub fn member_row(member: &str, counts: &[(Role, usize)]) -> String {
    let mut out = format!("{member:>10}  ");
    for (role, n) in counts {
        let width = role.width();
        out.push_str(&format!("{n:>width$}{:TABLE_MARGIN$}", ""));
    }
    out
}

/// Raw listing of every run, one JSON-like line each.
pub fn run_dump(runs: &[Run]) -> String {
    if runs.is_empty() {
        return NO_RUNS.to_string();
    }

    runs.iter()
        .map(|run| {
            let mut line = format!("{{\"dungeon\": \"{}\"", run.location());
            for (member, role) in run.assignment().iter() {
                line.push_str(&format!(", \"{member}\": \"{role}\""));
            }
            line.push('}');
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
