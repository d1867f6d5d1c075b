//! Core game logic and state management

use crate::data::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directional choice made at a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Left,
    Right,
    Exit,
}

impl Choice {
    /// Parse the single-character prompt input: `e` left, `d` right,
    /// `s` exit. Anything else is an invalid choice and the caller should
    /// re-prompt without touching the game state.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(Choice::Left),
            'd' => Some(Choice::Right),
            's' => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Outcome of one step of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Walk {
    /// Moved into another room; the walk goes on.
    Continue,
    /// The walk is over: the player left, or stepped off the map.
    Finished,
}

/// One collected clue, as it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discovery {
    pub id: Id,
    pub room: String,
    pub clue: String,
    pub suspect: String,
    pub found_at: DateTime<Utc>,
}

/// Running counters for the investigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationStats {
    pub rooms_visited: u32,
    pub clues_found: u32,
}

/// One clue→suspect relation, as listed in the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub clue: String,
    pub suspect: String,
}

/// The suspect cited by the most clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitedSuspect {
    pub name: String,
    pub citations: usize,
}

/// Snapshot of everything the investigation turned up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Collected clues in ascending alphabetical order.
    pub clues: Vec<String>,
    /// Every recorded relation, in ledger scan order.
    pub relations: Vec<Relation>,
    /// The most cited suspect, if any clue was collected.
    pub most_cited: Option<CitedSuspect>,
}

/// The main game state: walks the mansion per player choices and feeds each
/// discovered clue into both the sorted index and the suspect ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    map: MansionMap,
    current: Option<RoomId>,
    clues: ClueIndex,
    ledger: SuspectLedger,
    log: Vec<Discovery>,
    stats: InvestigationStats,
}

impl Investigation {
    /// Start at the mansion entrance, collecting its clue if it has one.
    pub fn begin(map: MansionMap) -> Self {
        let current = map.entrance();
        let mut investigation = Self {
            map,
            current,
            clues: ClueIndex::new(),
            ledger: SuspectLedger::new(),
            log: Vec::new(),
            stats: InvestigationStats::default(),
        };
        if current.is_some() {
            investigation.stats.rooms_visited += 1;
            investigation.collect_clue();
        }
        investigation
    }

    /// The room the player is in, or `None` once the walk has ended.
    pub fn current_room(&self) -> Option<&Room> {
        self.current.map(|id| self.map.room(id))
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Apply one directional choice.
    ///
    /// Moving through a missing door ends the walk silently; `Exit` ends it
    /// immediately. Entering a room collects its clue exactly once.
    pub fn step(&mut self, choice: Choice) -> Walk {
        let Some(at) = self.current else {
            return Walk::Finished;
        };

        let next = match choice {
            Choice::Exit => {
                self.current = None;
                return Walk::Finished;
            }
            Choice::Left => self.map.room(at).left,
            Choice::Right => self.map.room(at).right,
        };

        match next {
            Some(id) => {
                self.current = Some(id);
                self.stats.rooms_visited += 1;
                self.collect_clue();
                Walk::Continue
            }
            None => {
                self.current = None;
                Walk::Finished
            }
        }
    }

    /// Record the current room's clue in both containers and in the log.
    fn collect_clue(&mut self) {
        let Some(id) = self.current else { return };
        let room = self.map.room(id);
        let Some(clue) = room.clue.clone() else {
            return;
        };
        let room_name = room.name.clone();

        self.clues.insert(&clue.text);
        self.ledger.insert(&clue.text, &clue.suspect);
        self.log.push(Discovery {
            id: Id::new(),
            room: room_name,
            clue: clue.text,
            suspect: clue.suspect,
            found_at: Utc::now(),
        });
        self.stats.clues_found += 1;
    }

    /// Build the final case report.
    pub fn report(&self) -> CaseReport {
        CaseReport {
            clues: self.clues.in_order(),
            relations: self
                .ledger
                .entries()
                .map(|(clue, suspect)| Relation {
                    clue: clue.to_string(),
                    suspect: suspect.to_string(),
                })
                .collect(),
            most_cited: self
                .ledger
                .most_cited()
                .map(|(name, citations)| CitedSuspect { name, citations }),
        }
    }

    /// Clues collected so far, in discovery order.
    pub fn discoveries(&self) -> &[Discovery] {
        &self.log
    }

    pub fn stats(&self) -> InvestigationStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::build_mansion;

    fn play(choices: &[char]) -> Investigation {
        let mut investigation = Investigation::begin(build_mansion().unwrap());
        for &c in choices {
            let Some(choice) = Choice::from_char(c) else {
                continue;
            };
            if investigation.step(choice) == Walk::Finished {
                break;
            }
        }
        investigation
    }

    #[test]
    fn left_left_exit_collects_library_and_garden_clues() {
        let investigation = play(&['e', 'e', 's']);
        assert!(investigation.is_finished());

        let report = investigation.report();
        assert_eq!(report.clues, vec!["Livro rasgado", "Pegadas"]);

        // Both clues hash to the same bucket; the newest-first chain puts
        // Srta. Green first in the scan, so she wins the 1-1 tie.
        let most_cited = report.most_cited.unwrap();
        assert_eq!(most_cited.name, "Srta. Green");
        assert_eq!(most_cited.citations, 1);

        assert_eq!(investigation.stats().rooms_visited, 3);
        assert_eq!(investigation.stats().clues_found, 2);
    }

    #[test]
    fn right_right_exit_collects_kitchen_and_basement_clues() {
        let report = play(&['d', 'd', 's']).report();
        assert_eq!(report.clues, vec!["Chave dourada", "Faca suja"]);
        assert_eq!(
            report.relations,
            vec![
                Relation {
                    clue: "Faca suja".to_string(),
                    suspect: "Sra. White".to_string(),
                },
                Relation {
                    clue: "Chave dourada".to_string(),
                    suspect: "Coronel Mustard".to_string(),
                },
            ]
        );

        let most_cited = report.most_cited.unwrap();
        assert_eq!(most_cited.name, "Sra. White");
        assert_eq!(most_cited.citations, 1);
    }

    #[test]
    fn immediate_exit_reports_nothing() {
        let investigation = play(&['s']);
        let report = investigation.report();
        assert!(report.clues.is_empty());
        assert!(report.relations.is_empty());
        assert!(report.most_cited.is_none());
        assert!(investigation.discoveries().is_empty());
    }

    #[test]
    fn walking_off_the_map_ends_the_walk() {
        let mut investigation = Investigation::begin(build_mansion().unwrap());
        assert_eq!(investigation.step(Choice::Left), Walk::Continue);
        assert_eq!(investigation.step(Choice::Left), Walk::Continue);
        // Jardim has no left door.
        assert_eq!(investigation.step(Choice::Left), Walk::Finished);
        assert!(investigation.is_finished());
        assert_eq!(
            investigation.report().clues,
            vec!["Livro rasgado", "Pegadas"]
        );
    }

    #[test]
    fn invalid_characters_parse_to_no_choice() {
        for c in ['x', 'E', 'q', ' ', '\n', '1'] {
            assert_eq!(Choice::from_char(c), None, "char {c:?}");
        }
        assert_eq!(Choice::from_char('e'), Some(Choice::Left));
        assert_eq!(Choice::from_char('d'), Some(Choice::Right));
        assert_eq!(Choice::from_char('s'), Some(Choice::Exit));
    }

    #[test]
    fn steps_after_the_walk_ended_are_inert() {
        let mut investigation = play(&['s']);
        assert_eq!(investigation.step(Choice::Left), Walk::Finished);
        assert!(investigation.report().clues.is_empty());
    }

    #[test]
    fn discoveries_are_logged_in_visit_order() {
        let investigation = play(&['e', 'e', 's']);
        let discoveries = investigation.discoveries();
        assert_eq!(discoveries.len(), 2);
        assert_eq!(discoveries[0].room, "Biblioteca");
        assert_eq!(discoveries[0].suspect, "Sr. Black");
        assert_eq!(discoveries[1].room, "Jardim");
        assert_eq!(discoveries[1].clue, "Pegadas");
    }

    #[test]
    fn begin_on_an_empty_map_is_already_finished() {
        let investigation = Investigation::begin(MansionMap::new());
        assert!(investigation.is_finished());
        assert!(investigation.report().most_cited.is_none());
    }
}
