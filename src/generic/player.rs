use serde::{Deserialize, Serialize};

use crate::Symbol;

/// One of the two participants of a match. Fields are private so a player
/// can't be changed after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}
