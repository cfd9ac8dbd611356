use std::io::{self, BufRead, Write};

use colored::Colorize;

use cr_engine::party::SAMPLE_PARTY;
use cr_engine::{Party, Session};

use super::{SessionArgs, describe, open_session, roll_and_log};

const SESSION_MENU: &str = "\
    1) Start a new run
    2) View previous run
    3) View session runs
    4) End session";

/// Hidden menu entry that flips rarity mode.
const RARITY_TOGGLE: &str = "2357";

pub fn run(args: &SessionArgs) -> Result<(), String> {
    let config = args.config()?;
    let mut run_log = args.run_log();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let party = match args.preset_party(config.party_size)? {
        Some(party) => party,
        None => prompt_members(&mut reader, config.party_size)?,
    };
    let mut session = open_session(&party, config)?;

    println!("  {} (ID: {})", "Session started".bold(), session.id());
    println!("  Members: {}", session.party());
    println!("  Logging to {}\n", run_log.path().display());
    println!("{SESSION_MENU}\n");

    let mut line = String::new();
    loop {
        prompt()?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match line.trim() {
            "" => continue,
            "1" => match roll_and_log(&mut session, &mut run_log) {
                Ok(report) => println!("{report}"),
                Err(e) => println!("{}\n", e.yellow()),
            },
            "2" => println!("{}\n", session.previous_run()),
            "3" => println!("{}\n", session.run_dump()),
            "4" | "q" | "quit" => break,
            RARITY_TOGGLE => {
                let enabled = session.toggle_rarity_mode();
                let state = if enabled { "enabled" } else { "disabled" };
                println!("Secret {state}!\n");
            }
            "help" | "?" => println!("{SESSION_MENU}\n"),
            other => println!("{}\n", format!("unknown selection: {other}").yellow()),
        }
    }

    finish(&mut session);
    Ok(())
}

/// Ask for member names until a valid party is entered. An empty line picks
/// the sample party.
fn prompt_members(reader: &mut impl BufRead, size: usize) -> Result<Party, String> {
    let mut line = String::new();
    loop {
        println!("Please enter members for this session");
        prompt()?;

        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            return Err("no members entered".into());
        }

        if line.trim().is_empty() {
            println!("No input detected. Using sample party.\n");
            return Party::new(SAMPLE_PARTY, size).map_err(|e| describe(&e));
        }

        match Party::parse(&line, size) {
            Ok(party) => return Ok(party),
            Err(e) => println!("{}\n", describe(&e).yellow()),
        }
    }
}

fn finish(session: &mut Session) {
    match session.end() {
        Some(summary) => println!("\n{summary}"),
        None => println!("No runs recorded this session."),
    }
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())
}
