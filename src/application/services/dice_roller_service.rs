//! Dice Roller Service - Rolls N dice of one type

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::application::dto::{DiceRollQuery, DiceRollResult, ToolError, ToolErrorKind};
use crate::application::ports::outbound::RandomPort;

pub const DEFAULT_MAX_DICE_PER_ROLL: u32 = 100;

#[derive(Clone)]
pub struct DiceRollerService {
    random: Arc<dyn RandomPort>,
    max_dice_per_roll: u32,
}

impl DiceRollerService {
    pub fn new(random: Arc<dyn RandomPort>, max_dice_per_roll: u32) -> Self {
        Self {
            random,
            max_dice_per_roll,
        }
    }

    /// Roll the requested dice. Never fails; check `DiceRollResult::error`.
    #[instrument(skip(self))]
    pub fn roll_dice(&self, query: DiceRollQuery) -> DiceRollResult {
        info!(?query, "New dice roll");

        let quantity = u32::try_from(query.quantity)
            .ok()
            .filter(|q| (1..=self.max_dice_per_roll).contains(q));

        let (Some(dice_type), Some(quantity)) = (query.dice_type, quantity) else {
            warn!(?query, max = self.max_dice_per_roll, "Invalid dice roll");
            let message = format!(
                "You must provide a dice type (d4, d6, d8, d10, d12, d20, d100) and a quantity from 1 to {}",
                self.max_dice_per_roll
            );
            return DiceRollResult {
                query,
                rolls: Vec::new(),
                total: 0,
                error: Some(ToolError::new(ToolErrorKind::InvalidQuery, message)),
            };
        };

        let rolls: Vec<u32> = (0..quantity)
            .map(|_| self.random.random_range(1, dice_type.sides()))
            .collect();
        let total = rolls.iter().map(|r| u64::from(*r)).sum();

        info!(?rolls, total, "Dice roll result");
        DiceRollResult {
            query,
            rolls,
            total,
            error: None,
        }
    }
}
