//! Detective Quest
//!
//! Explore the mansion, collect clues and name the most cited suspect.

use detective_quest::console;
use detective_quest::data::build_mansion;
use detective_quest::game::{Choice, Investigation};
use detective_quest::Result;

fn main() -> Result<()> {
    let map = build_mansion()?;
    let mut investigation = Investigation::begin(map);

    println!("{}", console::BANNER);

    loop {
        let Some(room) = investigation.current_room() else {
            break;
        };
        console::print_room(room);

        let choice = loop {
            let c = console::prompt_choice()?;
            match Choice::from_char(c) {
                Some(choice) => break choice,
                None => println!("{}", console::INVALID_CHOICE),
            }
        };

        investigation.step(choice);
    }

    console::print_report(&investigation.report());

    Ok(())
}
