#![allow(missing_docs)]
//! serializable views of a game, for presentation layers and test fixtures
use serde::{Deserialize, Serialize};
use std::error::Error;

use crate::game::RoundState;
use crate::types::{Direction, TerminationCause};

/// Everything a presentation layer needs to draw one frame. Cells are linear
/// indices, the snake is head first.
/// ```
/// # use grid_snake::wire_representation::Snapshot;
/// # let body = r#"{"width":32,"height":24,"state":"Playing","snake":[400,401],"food":[100,200,300],"offset":7}"#;
/// let snapshot = Snapshot::from_json(body);
/// assert!(snapshot.is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u8,
    pub height: u8,
    pub state: RoundState,
    pub snake: Vec<usize>,
    pub food: Vec<usize>,
    /// derived from the snake, ignored when restoring a game
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub offset: u32,
    /// derived from the snake, ignored when restoring a game
    #[serde(default)]
    pub score: u64,
    #[serde(default)]
    pub termination: Option<TerminationCause>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string(self)?)
    }
}
