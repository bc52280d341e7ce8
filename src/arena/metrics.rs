use super::episode::MatchRecord;
use crate::game::Side;

/// Running tally over a series of matches.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    wins: [usize; 2],
    unfinished: usize,
    total_turns: usize,
    walls_placed: [usize; 2],
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &MatchRecord) {
        match record.winner {
            Some(side) => self.wins[side.index()] += 1,
            None => self.unfinished += 1,
        }
        self.total_turns += record.turns;
        for turn in &record.actions {
            if turn.action.is_wall() {
                self.walls_placed[turn.side.index()] += 1;
            }
        }
    }

    pub fn games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.unfinished
    }

    pub fn wins(&self, side: Side) -> usize {
        self.wins[side.index()]
    }

    /// Matches cut off by the turn cap or by a side with no action.
    pub fn unfinished(&self) -> usize {
        self.unfinished
    }

    pub fn win_rate(&self, side: Side) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins(side) as f32 / games as f32
    }

    pub fn average_length(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_turns as f32 / games as f32
    }

    pub fn walls_placed(&self, side: Side) -> usize {
        self.walls_placed[side.index()]
    }
}
