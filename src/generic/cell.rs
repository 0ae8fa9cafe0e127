use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Symbol;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Occupied { symbol: Symbol },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { symbol } => Some(*symbol),
        }
    }
}

/// Renders the cell the way the page shows it: the symbol, or nothing.
impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Occupied { symbol } => write!(f, "{}", symbol),
        }
    }
}
