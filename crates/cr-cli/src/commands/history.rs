use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use cr_engine::RunLog;

pub fn run(file: &Path) -> Result<(), String> {
    let records = RunLog::new(file)
        .read()
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;

    if records.is_empty() {
        println!("  No runs recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Session", "Run", "Location", "Assignment", "Rarity"]);

    for record in &records {
        let assignment = record
            .assignment
            .iter()
            .map(|(member, role)| format!("{member}: {role}"))
            .collect::<Vec<_>>()
            .join(", ");
        let rarity = if record.rarity_count > 0 { "*" } else { "" };

        table.add_row(vec![
            record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            record.session_id.to_string(),
            record.run_id.to_string(),
            record.location.clone(),
            assignment,
            rarity.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} runs", records.len());

    Ok(())
}
