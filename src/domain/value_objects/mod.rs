//! Value objects - Immutable objects defined by their attributes

mod dice;
mod difficulty;
mod reference_tables;
mod treasure_disposition;

pub use dice::{DiceType, ParseDiceError};
pub use difficulty::{BudgetRow, DifficultyTier, ParseDifficultyError};
pub use reference_tables::{
    BudgetTable, CrXpTable, TableError, TreasureTable, MAX_CHARACTER_LEVEL, MAX_CR,
    MIN_CHARACTER_LEVEL, MIN_CR, TREASURE_BUCKET_WIDTH,
};
pub use treasure_disposition::{ParseDispositionError, TreasureDisposition, TreasureRow};
