//! Console front end
//!
//! Line-oriented prompts and reports. The only terminal trickery is the
//! single-keypress read for the path choice, done with crossterm raw mode
//! around one key event.

use crate::game::CaseReport;
use crate::Room;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};

/// Startup banner
pub const BANNER: &str = "Detective Quest - Nível Mestre\nExplore a mansão e colete pistas.";

/// Path prompt, read as a single character
pub const PROMPT: &str = "Escolha o caminho: (e) esquerda | (d) direita | (s) sair: ";

/// Printed on any character that is not a valid choice
pub const INVALID_CHOICE: &str = "Opção inválida!";

/// Announce the room the player just entered.
pub fn print_room(room: &Room) {
    println!("\nVocê está em: {}", room.name);
    if let Some(clue) = &room.clue {
        println!("Pista encontrada: {}", clue.text);
        println!("Suspeito associado: {}", clue.suspect);
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Print the path prompt and read one character, no Enter needed.
///
/// Ctrl+C reads as `s` so the player can always leave.
pub fn prompt_choice() -> io::Result<char> {
    print!("\n{PROMPT}");
    io::stdout().flush()?;

    let c = {
        let _raw = RawMode::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break 's';
                    }
                    KeyCode::Char(c) => break c,
                    _ => {}
                }
            }
        }
    };

    // Raw mode suppressed the echo.
    println!("{c}");
    Ok(c)
}

/// Print the end-of-exploration reports.
pub fn print_report(report: &CaseReport) {
    println!("\n=== Pistas Coletadas (Ordem Alfabética) ===");
    for clue in &report.clues {
        println!("- {clue}");
    }

    println!("\n=== Relações de Pistas e Suspeitos ===");
    for relation in &report.relations {
        println!("{} → {}", relation.clue, relation.suspect);
    }

    match &report.most_cited {
        Some(suspect) => {
            println!(
                "\nSuspeito mais citado: {} ({} pistas)",
                suspect.name, suspect.citations
            );
        }
        None => println!("\nNenhum suspeito encontrado!"),
    }

    println!("\nFim da investigação.");
}
