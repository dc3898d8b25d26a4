use crate::ball::Ball;
use crate::types::{Owner, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// `owners[gy][gx]`
    pub owners: [[Owner; GRID_SIZE]; GRID_SIZE],
    pub day_score: u32,
    pub night_score: u32,
    pub balls: [Ball; 2],
    pub frame: u64,
}

impl GameSnapshot {
    /// Cells owned by `owner`, counted from the grid copy.
    pub fn count(&self, owner: Owner) -> u32 {
        self.owners
            .iter()
            .flatten()
            .filter(|o| **o == owner)
            .count() as u32
    }

    /// Leader and margin, `None` on a tie.
    pub fn leader(&self) -> Option<(Owner, u32)> {
        match self.day_score.cmp(&self.night_score) {
            std::cmp::Ordering::Greater => Some((Owner::Day, self.day_score - self.night_score)),
            std::cmp::Ordering::Less => Some((Owner::Night, self.night_score - self.day_score)),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            owners: [[Owner::Day; GRID_SIZE]; GRID_SIZE],
            day_score: 0,
            night_score: 0,
            balls: Ball::initial_pair(),
            frame: 0,
        }
    }
}
