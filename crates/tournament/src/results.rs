//! Tournament results storage and reporting

use search_core::{SearchNode, SearchStats};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::TournamentError;

/// One of the two rated agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Result of a single game, or of the whole tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerA,
    PlayerB,
    Draw,
}

impl From<Player> for Outcome {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Outcome::PlayerA,
            Player::B => Outcome::PlayerB,
        }
    }
}

impl Outcome {
    /// Human-readable label using the configured player names
    pub fn label<'a>(&self, names: &'a PlayerNames) -> &'a str {
        match self {
            Outcome::PlayerA => names.a.as_str(),
            Outcome::PlayerB => names.b.as_str(),
            Outcome::Draw => "Draw",
        }
    }
}

/// Display names for the two players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub a: String,
    pub b: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            a: "Magnus Carlsen".to_string(),
            b: "Fabiano Caruana".to_string(),
        }
    }
}

/// A single game of the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentRecord {
    /// 0-based game index
    pub game: usize,
    /// Player who maximized (and moved first) in this game
    pub maximizer: Player,
    pub winner: Outcome,
    /// Root value of the search
    pub utility: f64,
    /// Fully materialized search tree
    pub tree: SearchNode,
    pub stats: SearchStats,
}

/// Complete tournament state
///
/// Built by the runner; everything is read-only once it is handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentState {
    starting_role: u8,
    rating_a: f64,
    rating_b: f64,
    records: Vec<TournamentRecord>,
    wins_a: u32,
    wins_b: u32,
    draws: u32,
}

impl TournamentState {
    pub(crate) fn new(starting_role: u8, rating_a: f64, rating_b: f64) -> Self {
        Self {
            starting_role,
            rating_a,
            rating_b,
            records: Vec::new(),
            wins_a: 0,
            wins_b: 0,
            draws: 0,
        }
    }

    /// Append a finished game and bump the matching counter
    pub(crate) fn add_record(&mut self, record: TournamentRecord) {
        match record.winner {
            Outcome::PlayerA => self.wins_a += 1,
            Outcome::PlayerB => self.wins_b += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.records.push(record);
    }

    pub fn starting_role(&self) -> u8 {
        self.starting_role
    }

    pub fn rating_a(&self) -> f64 {
        self.rating_a
    }

    pub fn rating_b(&self) -> f64 {
        self.rating_b
    }

    pub fn records(&self) -> &[TournamentRecord] {
        &self.records
    }

    pub fn wins_a(&self) -> u32 {
        self.wins_a
    }

    pub fn wins_b(&self) -> u32 {
        self.wins_b
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn total_games(&self) -> u32 {
        self.wins_a + self.wins_b + self.draws
    }

    /// Player with more game wins, or a draw when tied
    pub fn overall_winner(&self) -> Outcome {
        if self.wins_a > self.wins_b {
            Outcome::PlayerA
        } else if self.wins_b > self.wins_a {
            Outcome::PlayerB
        } else {
            Outcome::Draw
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    ///
    /// The win/draw counters are rebuilt from the stored records, so a file
    /// whose counters disagree with its games still loads consistently.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path)?;
        let stored: Self = serde_json::from_str(&contents)?;

        let mut state = Self::new(stored.starting_role, stored.rating_a, stored.rating_b);
        for record in stored.records {
            state.add_record(record);
        }
        if (state.wins_a, state.wins_b, state.draws) != (stored.wins_a, stored.wins_b, stored.draws)
        {
            warn!(
                path = %path.display(),
                "stored counters disagree with records, using recomputed counts"
            );
        }
        Ok(state)
    }

    /// Generate a text report
    pub fn generate_report(&self, names: &PlayerNames) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} vs {} ===\n\n", names.a, names.b));
        report.push_str(&format!(
            "Ratings: {} {:.2}, {} {:.2} (starting role {})\n\n",
            names.a, self.rating_a, names.b, self.rating_b, self.starting_role
        ));

        for record in &self.records {
            let maximizer = Outcome::from(record.maximizer);
            report.push_str(&format!(
                "Game {}: {} (Utility: {:.2})\n",
                record.game + 1,
                record.winner.label(names),
                record.utility
            ));
            report.push_str(&format!(
                "  maximizer {}, {} leaves evaluated, {} pruned\n",
                maximizer.label(names),
                record.stats.leaves_evaluated,
                record.stats.pruned_stubs
            ));
        }

        report.push_str("\nOverall Results:\n");
        report.push_str(&format!("{} Wins: {}\n", names.a, self.wins_a));
        report.push_str(&format!("{} Wins: {}\n", names.b, self.wins_b));
        report.push_str(&format!("Draws: {}\n", self.draws));
        report.push_str(&format!(
            "Overall Winner: {}\n",
            self.overall_winner().label(names)
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self, names: &PlayerNames) {
        println!("{}", self.generate_report(names));
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
