//! The table: four seats playing games of rounds until someone reaches the
//! winning score.
//!
//! ## Termination
//!
//! After every round the table checks which seats have reached the winning
//! score. One seat wins outright. When several cross in the same round the
//! game is [`GameStatus::Contested`]; [`Table::play_game`] reports that as
//! `AmbiguousWinner`, [`Table::play_game_with`] lets a [`TieBreaker`]
//! decide.
//!
//! ## Determinism
//!
//! Deals come from a stream derived from the table seed, separate from any
//! policy randomness. Same seed and same seeded policies replay the same
//! games.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{EngineError, GameRng, Result, RulesConfig, Seat, SeatMap, SeatState};
use crate::policy::{SeatPolicies, TieBreaker};

use super::round::{Round, RoundResult};
use super::stats::CardStats;

/// Where the current game stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    /// Several seats reached the winning score in the same round.
    Contested(Vec<Seat>),
}

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Game number at this table, from 1.
    pub game_number: u32,
    pub winner: Seat,
    /// Every seat at or above the winning score when the game ended.
    pub contenders: Vec<Seat>,
    pub rounds: u32,
    pub final_scores: SeatMap<i32>,
    pub round_log: Vec<RoundResult>,
}

/// Four seats, their policies, and the dealing stream.
#[derive(Debug)]
pub struct Table {
    config: RulesConfig,
    seats: SeatMap<SeatState>,
    policies: SeatMap<SeatPolicies>,
    deal_rng: GameRng,
    round_number: u32,
    game_number: u32,
    round_log: Vec<RoundResult>,
    stats: CardStats,
    total_stats: CardStats,
}

impl Table {
    /// Seat four policies under `config`, dealing from `seed`.
    ///
    /// Fails with `InvalidConfig` when the configuration is inconsistent.
    pub fn new(config: RulesConfig, policies: SeatMap<SeatPolicies>, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            seats: SeatMap::default(),
            policies,
            deal_rng: GameRng::new(seed).for_context("deal"),
            round_number: 0,
            game_number: 0,
            round_log: Vec::new(),
            stats: CardStats::new(),
            total_stats: CardStats::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn seats(&self) -> &SeatMap<SeatState> {
        &self.seats
    }

    #[must_use]
    pub fn seat(&self, seat: Seat) -> &SeatState {
        &self.seats[seat]
    }

    #[must_use]
    pub fn scores(&self) -> SeatMap<i32> {
        self.seats.map(|s| s.score)
    }

    #[must_use]
    pub fn games_won(&self) -> SeatMap<u32> {
        self.seats.map(|s| s.games_won)
    }

    /// Rounds completed in the current game.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Games started at this table.
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// Rounds of the current game.
    #[must_use]
    pub fn round_log(&self) -> &[RoundResult] {
        &self.round_log
    }

    /// Card statistics of the current game.
    #[must_use]
    pub fn stats(&self) -> &CardStats {
        &self.stats
    }

    /// Card statistics of every completed round at this table, across games.
    #[must_use]
    pub fn total_stats(&self) -> &CardStats {
        &self.total_stats
    }

    /// Start a new game: scores, round counter and per-game statistics
    /// reset; games won and the table-wide statistics are kept.
    pub fn new_game(&mut self) {
        for (_, state) in self.seats.iter_mut() {
            state.reset_game();
        }
        self.round_number = 0;
        self.round_log.clear();
        self.stats.reset();
        self.game_number += 1;
        info!(game = self.game_number, "new game");
    }

    /// Play one round of the current game.
    ///
    /// Fails with `RoundLimit` when the configured limit has been reached.
    pub fn play_round(&mut self) -> Result<RoundResult> {
        if let Some(limit) = self.config.max_rounds {
            if self.round_number >= limit {
                return Err(EngineError::RoundLimit {
                    rounds: self.round_number,
                });
            }
        }
        if self.game_number == 0 {
            self.new_game();
        }

        let number = self.round_number + 1;
        let mut round_stats = CardStats::new();
        let result = Round::new(&self.config, number).play(
            &mut self.seats,
            &mut self.policies,
            &mut self.deal_rng,
            &mut round_stats,
        )?;
        self.stats.merge(&round_stats);
        self.total_stats.merge(&round_stats);
        self.round_number = number;
        self.round_log.push(result.clone());
        Ok(result)
    }

    /// Seats at or above the winning score decide the status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let contenders: Vec<Seat> = self
            .seats
            .iter()
            .filter(|(_, s)| s.score >= self.config.winning_score)
            .map(|(seat, _)| seat)
            .collect();
        match contenders.as_slice() {
            [] => GameStatus::InProgress,
            [seat] => GameStatus::Won(*seat),
            _ => GameStatus::Contested(contenders),
        }
    }

    /// Play a fresh game to the end.
    ///
    /// A contested finish fails with `AmbiguousWinner`.
    pub fn play_game(&mut self) -> Result<GameSummary> {
        self.run_game(None)
    }

    /// Play a fresh game, letting `tie` settle a contested finish.
    ///
    /// Still fails with `AmbiguousWinner` when `tie` declines or names a
    /// seat that is not a contender.
    pub fn play_game_with(&mut self, tie: &mut dyn TieBreaker) -> Result<GameSummary> {
        self.run_game(Some(tie))
    }

    /// Play `games` games in a row, carrying games-won tallies.
    pub fn play_games(
        &mut self,
        games: u32,
        mut tie: Option<&mut (dyn TieBreaker + '_)>,
    ) -> Result<Vec<GameSummary>> {
        (0..games)
            .map(|_| self.run_game(tie.as_deref_mut()))
            .collect()
    }

    fn run_game(&mut self, mut tie: Option<&mut (dyn TieBreaker + '_)>) -> Result<GameSummary> {
        self.new_game();
        loop {
            match self.status() {
                GameStatus::InProgress => {
                    self.play_round()?;
                }
                GameStatus::Won(seat) => return Ok(self.finish(seat, vec![seat])),
                GameStatus::Contested(seats) => {
                    let scores = self.scores();
                    let pick = tie
                        .as_deref_mut()
                        .and_then(|t| t.break_tie(&seats, &scores))
                        .filter(|s| seats.contains(s));
                    match pick {
                        Some(seat) => {
                            info!(winner = %seat, contenders = ?seats, "tie broken");
                            return Ok(self.finish(seat, seats));
                        }
                        None => {
                            warn!(
                                contenders = ?seats,
                                scores = ?scores.to_vec(),
                                "ambiguous winner"
                            );
                            return Err(EngineError::AmbiguousWinner { seats });
                        }
                    }
                }
            }
        }
    }

    fn finish(&mut self, winner: Seat, contenders: Vec<Seat>) -> GameSummary {
        self.seats[winner].games_won += 1;
        let final_scores = self.scores();
        info!(
            game = self.game_number,
            %winner,
            rounds = self.round_number,
            scores = ?final_scores.to_vec(),
            "game over"
        );
        GameSummary {
            game_number: self.game_number,
            winner,
            contenders,
            rounds: self.round_number,
            final_scores,
            round_log: std::mem::take(&mut self.round_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(seed: u64) -> Table {
        let mut rng = GameRng::new(seed).for_context("policies");
        let policies = SeatMap::new(|_| SeatPolicies::random(&mut rng));
        Table::new(RulesConfig::default(), policies, seed).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RulesConfig::default().with_winning_score(-1);
        let policies = SeatMap::new(|_| SeatPolicies::heuristic());
        assert!(matches!(
            Table::new(config, policies, 1),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_status_classifies_scores() {
        let mut table = table(1);
        assert_eq!(table.status(), GameStatus::InProgress);

        table.seats[Seat::new(2)].score = 41;
        assert_eq!(table.status(), GameStatus::Won(Seat::new(2)));

        table.seats[Seat::new(0)].score = 45;
        assert_eq!(
            table.status(),
            GameStatus::Contested(vec![Seat::new(0), Seat::new(2)])
        );
    }

    #[test]
    fn test_play_round_counts_rounds() {
        let mut table = table(2);
        let number = table.play_round().unwrap().number;
        assert_eq!(number, 1);
        assert_eq!(table.round_number(), 1);
        assert_eq!(table.game_number(), 1);
        assert_eq!(table.round_log().len(), 1);
        assert_eq!(table.stats().tricks(), 13);
    }

    #[test]
    fn test_round_limit() {
        let mut rng = GameRng::new(4);
        let policies = SeatMap::new(|_| SeatPolicies::random(&mut rng));
        let config = RulesConfig::default().with_max_rounds(Some(1));
        let mut table = Table::new(config, policies, 4).unwrap();

        table.play_round().unwrap();
        assert!(matches!(
            table.play_round(),
            Err(EngineError::RoundLimit { rounds: 1 })
        ));
    }

    /// Heuristic seats bid near what they can take, so games finish.
    fn heuristic_table(seed: u64) -> Table {
        let policies = SeatMap::new(|_| SeatPolicies::heuristic());
        Table::new(RulesConfig::default(), policies, seed).unwrap()
    }

    struct FirstContender;

    impl TieBreaker for FirstContender {
        fn break_tie(&mut self, contenders: &[Seat], _scores: &SeatMap<i32>) -> Option<Seat> {
            contenders.first().copied()
        }
    }

    #[test]
    fn test_game_reaches_winning_score() {
        let mut table = heuristic_table(11);
        let summary = table.play_game_with(&mut FirstContender).unwrap();

        assert!(summary.final_scores[summary.winner] >= 41);
        assert!(summary.contenders.contains(&summary.winner));
        assert!(summary.rounds < 1000);
        assert_eq!(summary.rounds as usize, summary.round_log.len());
        assert_eq!(table.games_won()[summary.winner], 1);
        assert_eq!(table.stats().tricks(), summary.rounds * 13);
    }

    #[test]
    fn test_total_stats_span_games() {
        let mut table = heuristic_table(12);
        let games = table.play_games(2, Some(&mut FirstContender)).unwrap();
        let rounds: u32 = games.iter().map(|g| g.rounds).sum();

        assert_eq!(table.stats().tricks(), games[1].rounds * 13);
        assert_eq!(table.total_stats().tricks(), rounds * 13);

        table.new_game();
        assert_eq!(table.stats().tricks(), 0);
        assert_eq!(table.total_stats().tricks(), rounds * 13);
    }
}
