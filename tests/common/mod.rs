//! Shared helpers for integration tests: logging and scripted policies.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;

use tarneeb41::{
    BidView, BiddingPolicy, Card, GameRng, PlayPolicy, PlayView, PolicyError, RulesConfig, Seat,
    SeatMap, SeatPolicies, Suit, Table, TieBreaker,
};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// else `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(s: &str) -> Card {
    s.parse().unwrap()
}

/// Table of seeded random seats.
pub fn random_table(config: RulesConfig, seed: u64) -> Table {
    let mut rng = GameRng::new(seed).for_context("policies");
    let policies = SeatMap::new(|_| SeatPolicies::random(&mut rng));
    Table::new(config, policies, seed).unwrap()
}

/// Table of heuristic seats. Their bids track the tricks they can take,
/// so games reach the winning score.
pub fn heuristic_table(config: RulesConfig, seed: u64) -> Table {
    let policies = SeatMap::new(|_| SeatPolicies::heuristic());
    Table::new(config, policies, seed).unwrap()
}

/// Bids from a script, one entry per deal; the last entry repeats.
pub struct ScriptedBidder {
    script: Vec<u8>,
    next: usize,
}

impl ScriptedBidder {
    pub fn new(script: &[u8]) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl BiddingPolicy for ScriptedBidder {
    fn bid(&mut self, _view: &BidView<'_>) -> Result<u8, PolicyError> {
        let bid = self.script[self.next.min(self.script.len() - 1)];
        self.next += 1;
        Ok(bid)
    }
}

/// What a seat saw when asked to bid.
#[derive(Clone, Debug)]
pub struct BidRecord {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub trump: Suit,
    pub prior_bids: SeatMap<Option<u8>>,
}

pub type BidLog = Rc<RefCell<Vec<BidRecord>>>;

/// Wraps a bidder and records every view it receives.
pub struct RecordingBidder<B> {
    inner: B,
    log: BidLog,
}

impl<B> RecordingBidder<B> {
    pub fn new(inner: B, log: BidLog) -> Self {
        Self { inner, log }
    }
}

impl<B: BiddingPolicy> BiddingPolicy for RecordingBidder<B> {
    fn bid(&mut self, view: &BidView<'_>) -> Result<u8, PolicyError> {
        self.log.borrow_mut().push(BidRecord {
            seat: view.seat,
            hand: view.hand.to_vec(),
            trump: view.trump,
            prior_bids: view.prior_bids.clone(),
        });
        self.inner.bid(view)
    }
}

/// Always plays the first legal card.
pub struct FirstLegal;

impl PlayPolicy for FirstLegal {
    fn choose(&mut self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        view.legal_moves
            .first()
            .copied()
            .ok_or_else(|| PolicyError::new("no legal moves"))
    }
}

/// Always plays a card it does not hold.
pub struct PhantomCard;

impl PlayPolicy for PhantomCard {
    fn choose(&mut self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        Card::all()
            .find(|c| !view.hand.contains(c))
            .ok_or_else(|| PolicyError::new("holds the whole deck"))
    }
}

/// Fails every call.
pub struct Broken;

impl BiddingPolicy for Broken {
    fn bid(&mut self, _view: &BidView<'_>) -> Result<u8, PolicyError> {
        Err(PolicyError::new("bidder offline"))
    }
}

/// Awards contested games to the lowest-numbered contender.
pub struct FirstContender;

impl TieBreaker for FirstContender {
    fn break_tie(&mut self, contenders: &[Seat], _scores: &SeatMap<i32>) -> Option<Seat> {
        contenders.first().copied()
    }
}

/// Names a seat regardless of who is contending.
pub struct AlwaysSeat(pub Seat);

impl TieBreaker for AlwaysSeat {
    fn break_tie(&mut self, _contenders: &[Seat], _scores: &SeatMap<i32>) -> Option<Seat> {
        Some(self.0)
    }
}
