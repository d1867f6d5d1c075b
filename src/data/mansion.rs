//! The mansion map
//!
//! An immutable binary tree of rooms. Rooms live in an arena and point at
//! their children by id, so the map owns every room and the walk never
//! touches raw ownership chains.

use super::validated_label;
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Index of a room inside a [`MansionMap`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

/// A clue found in a room, always tied to a suspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub text: String,
    pub suspect: String,
}

impl Clue {
    pub fn new(text: &str, suspect: &str) -> Result<Self, GameError> {
        Ok(Self {
            text: validated_label(text)?,
            suspect: validated_label(suspect)?,
        })
    }
}

/// One room of the mansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub clue: Option<Clue>,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

/// The mansion: an arena of rooms wired into a binary tree.
///
/// The first room added is the entrance. The map is built once at startup
/// and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MansionMap {
    rooms: Vec<Room>,
}

impl MansionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its id.
    pub fn add_room(&mut self, name: &str, clue: Option<Clue>) -> Result<RoomId, GameError> {
        let name = validated_label(name)?;
        self.rooms.push(Room {
            name,
            clue,
            left: None,
            right: None,
        });
        Ok(RoomId(self.rooms.len() - 1))
    }

    /// Wire `child` as the left door of `parent`.
    pub fn link_left(&mut self, parent: RoomId, child: RoomId) -> Result<(), GameError> {
        self.check(child)?;
        self.check(parent)?;
        self.rooms[parent.0].left = Some(child);
        Ok(())
    }

    /// Wire `child` as the right door of `parent`.
    pub fn link_right(&mut self, parent: RoomId, child: RoomId) -> Result<(), GameError> {
        self.check(child)?;
        self.check(parent)?;
        self.rooms[parent.0].right = Some(child);
        Ok(())
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// The entrance room, if the map has any rooms at all.
    pub fn entrance(&self) -> Option<RoomId> {
        if self.rooms.is_empty() {
            None
        } else {
            Some(RoomId(0))
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn check(&self, id: RoomId) -> Result<(), GameError> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(GameError::UnknownRoomId(id.0))
        }
    }
}

/// Build the fixed five-room mansion.
///
/// Hall de Entrada branches to Biblioteca (left) and Cozinha (right);
/// Biblioteca opens on Jardim to the left, Cozinha on Porão to the right.
/// The entrance holds no clue.
pub fn build_mansion() -> Result<MansionMap, GameError> {
    let mut map = MansionMap::new();

    let hall = map.add_room("Hall de Entrada", None)?;
    let biblioteca = map.add_room("Biblioteca", Some(Clue::new("Livro rasgado", "Sr. Black")?))?;
    let cozinha = map.add_room("Cozinha", Some(Clue::new("Faca suja", "Sra. White")?))?;
    let jardim = map.add_room("Jardim", Some(Clue::new("Pegadas", "Srta. Green")?))?;
    let porao = map.add_room("Porão", Some(Clue::new("Chave dourada", "Coronel Mustard")?))?;

    map.link_left(hall, biblioteca)?;
    map.link_right(hall, cozinha)?;
    map.link_left(biblioteca, jardim)?;
    map.link_right(cozinha, porao)?;

    Ok(map)
}
