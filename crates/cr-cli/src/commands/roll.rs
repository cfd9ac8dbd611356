use colored::Colorize;

use cr_engine::Party;

use super::{SessionArgs, open_session, roll_and_log};

pub fn run(args: &SessionArgs, runs: u32, rarity: bool) -> Result<(), String> {
    let config = args.config()?;
    let party = match args.preset_party(config.party_size)? {
        Some(party) => party,
        None => Party::sample(),
    };
    let mut session = open_session(&party, config)?;
    let mut run_log = args.run_log();

    if rarity {
        session.toggle_rarity_mode();
    }

    println!(
        "  {} {runs} run{} for {}\n",
        "Rolling".bold(),
        if runs == 1 { "" } else { "s" },
        session.party()
    );

    for _ in 0..runs {
        let report = roll_and_log(&mut session, &mut run_log)?;
        println!("{report}");
    }

    if let Some(summary) = session.end() {
        println!("{summary}");
    }
    Ok(())
}
