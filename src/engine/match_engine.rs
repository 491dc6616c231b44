//! Match engine: pool, hands, line, turn flag and outcome.
//!
//! The engine enforces placement legality and tile conservation. It does
//! not sequence turns on its own: the turn controller decides when to draw,
//! when to pass and when to ask for `check_terminal`.

use im::Vector;
use tracing::{debug, info, instrument};

use super::outcome::Outcome;
use super::view::{ConcealedHand, SeatView};
use crate::board::{LegalPlacements, Line, Placement};
use crate::core::{GameRng, MatchConfig, MatchError, MoveRecord, Seat, SeatMap, TurnAction};
use crate::tiles::{full_set, pip_total, Tile};

/// A tile in hand together with every placement it may take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayableTile {
    pub tile: Tile,
    pub placements: LegalPlacements,
}

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,

    /// Undealt tiles; the next draw is the last element.
    pool: Vec<Tile>,

    hands: SeatMap<Vec<Tile>>,

    line: Line,

    /// Seat whose turn it is.
    active: Seat,

    /// Seat that opened the match.
    starter: Seat,

    /// Latched once `check_terminal` finds the match over.
    outcome: Option<Outcome>,

    /// Tiles in circulation; pool + hands + line always sum to this.
    total_tiles: usize,

    turn_number: u32,
    sequence: u32,
    history: Vector<MoveRecord>,

    /// Seeds each fresh deal.
    rng: GameRng,
}

impl MatchEngine {
    /// Deal a fresh match.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, MatchError> {
        config.validate()?;

        let mut engine = Self::from_parts(
            config,
            Vec::new(),
            SeatMap::default(),
            Line::new(),
            Seat::Human,
            GameRng::new(seed),
        );
        engine.initialize();
        Ok(engine)
    }

    pub(crate) fn from_parts(
        config: MatchConfig,
        pool: Vec<Tile>,
        hands: SeatMap<Vec<Tile>>,
        line: Line,
        starter: Seat,
        rng: GameRng,
    ) -> Self {
        let total_tiles = pool.len() + hands[Seat::Human].len() + hands[Seat::Opponent].len() + line.len();
        Self {
            config,
            pool,
            hands,
            line,
            active: starter,
            starter,
            outcome: None,
            total_tiles,
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
            rng,
        }
    }

    /// Build and shuffle the pool, deal both hands, clear the line and pick
    /// the starting seat. Clears any outcome.
    #[instrument(skip(self), fields(max_pip = self.config.max_pip))]
    pub fn initialize(&mut self) {
        let deal = GameRng::new(self.rng.next_seed());
        let mut shuffle = deal.for_context("shuffle");
        let mut coin = deal.for_context("first-player");

        let mut pool = full_set(self.config.max_pip);
        shuffle.shuffle(&mut pool);

        let mut hands: SeatMap<Vec<Tile>> = SeatMap::default();
        for seat in Seat::ALL {
            let split = pool.len() - self.config.hand_size;
            hands[seat] = pool.split_off(split);
        }

        let starter = determine_starter(&hands, &mut coin);
        let rng = self.rng.clone();
        *self = Self::from_parts(self.config, pool, hands, Line::new(), starter, rng);

        info!(starter = %starter, pool = self.pool.len(), "dealt new match");
    }

    /// Throw the current match away and deal a fresh one.
    pub fn reset(&mut self) {
        self.initialize();
    }

    // === Legality ===

    /// Where `tile` could be laid on the current line.
    #[must_use]
    pub fn legal_placements(&self, tile: Tile) -> LegalPlacements {
        self.line.legal_placements(tile)
    }

    /// Tiles from `hand` with at least one legal placement, in hand order.
    #[must_use]
    pub fn playable_tiles(&self, hand: &[Tile]) -> Vec<PlayableTile> {
        hand.iter()
            .filter_map(|&tile| {
                let placements = self.legal_placements(tile);
                (!placements.is_empty()).then_some(PlayableTile { tile, placements })
            })
            .collect()
    }

    /// Playable tiles in a seat's hand.
    #[must_use]
    pub fn playable(&self, seat: Seat) -> Vec<PlayableTile> {
        self.playable_tiles(&self.hands[seat])
    }

    /// The seat holds at least one playable tile.
    #[must_use]
    pub fn has_playable(&self, seat: Seat) -> bool {
        self.hands[seat].iter().any(|&tile| self.line.accepts(tile))
    }

    // === Commands ===

    /// Lay a tile from `seat`'s hand at `placement`.
    ///
    /// Returns the tile as oriented on the line. On error nothing changes.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, seat: Seat, tile: Tile, placement: Placement) -> Result<Tile, MatchError> {
        if self.outcome.is_some() {
            return Err(MatchError::MatchOver);
        }

        let index = self.hands[seat]
            .iter()
            .position(|&held| held == tile)
            .ok_or(MatchError::NotHeld { seat, tile })?;

        let laid = self.line.place(self.hands[seat][index], placement)?;
        self.hands[seat].remove(index);
        self.record(seat, TurnAction::Place { laid, placement });

        debug!(%seat, %laid, %placement, ends = ?self.line.ends(), "placed tile");
        Ok(laid)
    }

    /// Move the next pool tile into `seat`'s hand.
    ///
    /// `Ok(None)` means the pool is exhausted.
    #[instrument(level = "debug", skip(self))]
    pub fn draw(&mut self, seat: Seat) -> Result<Option<Tile>, MatchError> {
        if self.outcome.is_some() {
            return Err(MatchError::MatchOver);
        }

        let Some(tile) = self.draw_from_pool() else {
            debug!(%seat, "pool exhausted");
            return Ok(None);
        };

        self.hands[seat].push(tile);
        self.record(seat, TurnAction::Draw(tile));
        debug!(%seat, %tile, pool = self.pool.len(), "drew tile");
        Ok(Some(tile))
    }

    fn draw_from_pool(&mut self) -> Option<Tile> {
        self.pool.pop()
    }

    /// Record that `seat` ended its turn without laying a tile.
    pub fn pass(&mut self, seat: Seat) -> Result<(), MatchError> {
        if self.outcome.is_some() {
            return Err(MatchError::MatchOver);
        }
        self.record(seat, TurnAction::Pass);
        debug!(%seat, "passed");
        Ok(())
    }

    /// Hand the turn to the other seat.
    pub fn end_turn(&mut self) {
        self.active = self.active.other();
        self.turn_number += 1;
    }

    /// Decide whether the match is over.
    ///
    /// An empty hand wins outright and is checked before the blocked rule.
    /// A terminal finding is latched; later calls return it unchanged.
    pub fn check_terminal(&mut self) -> Option<Outcome> {
        if self.outcome.is_none() {
            self.outcome = self.evaluate_terminal();
            if let Some(outcome) = &self.outcome {
                info!(%outcome, turns = self.turn_number, "match over");
            }
        }
        self.outcome.clone()
    }

    fn evaluate_terminal(&self) -> Option<Outcome> {
        for seat in Seat::ALL {
            if self.hands[seat].is_empty() {
                return Some(Outcome::domino(seat, self.pip_totals()));
            }
        }

        let blocked = self.pool.is_empty() && Seat::ALL.iter().all(|&seat| !self.has_playable(seat));
        blocked.then(|| Outcome::blocked(self.pip_totals()))
    }

    fn record(&mut self, seat: Seat, action: TurnAction) {
        let record = MoveRecord::new(seat, action, self.turn_number, self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
    }

    // === Inspection ===

    /// Configuration the match was dealt with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// A seat's hand, in the order tiles were received.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Tile] {
        &self.hands[seat]
    }

    /// The line of play.
    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Tiles left to draw.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active(&self) -> Seat {
        self.active
    }

    /// Seat that held the opening turn.
    #[must_use]
    pub fn starter(&self) -> Seat {
        self.starter
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The latched outcome, if the match is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The match has been found terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every recorded action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Pips left in a seat's hand.
    #[must_use]
    pub fn pip_total(&self, seat: Seat) -> u32 {
        pip_total(&self.hands[seat])
    }

    /// Pips left in both hands.
    #[must_use]
    pub fn pip_totals(&self) -> SeatMap<u32> {
        SeatMap::new(|seat| self.pip_total(seat))
    }

    /// Pool + both hands + line.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.pool.len() + self.hands[Seat::Human].len() + self.hands[Seat::Opponent].len() + self.line.len()
    }

    /// Tiles in circulation when the match was dealt.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.total_tiles
    }

    /// What `seat` is allowed to see: its own tiles, and only a count for
    /// the other hand and the pool.
    #[must_use]
    pub fn view(&self, seat: Seat) -> SeatView {
        SeatView {
            seat,
            hand: self.hands[seat].clone(),
            playable: self.playable(seat).into_iter().map(|p| p.tile).collect(),
            other_hand: ConcealedHand {
                count: self.hands[seat.other()].len(),
            },
            line: self.line.tiles().copied().collect(),
            ends: self.line.ends(),
            pool_size: self.pool.len(),
            active: self.active,
            outcome: self.outcome.clone(),
        }
    }
}

/// Pick the opening seat: the strictly higher best double starts; with no
/// doubles or equal best doubles the coin decides.
pub fn determine_starter(hands: &SeatMap<Vec<Tile>>, coin: &mut GameRng) -> Seat {
    let best_double = |seat: Seat| hands[seat].iter().filter(|t| t.is_double()).map(|t| t.sum()).max();

    let human = best_double(Seat::Human);
    let opponent = best_double(Seat::Opponent);

    match human.cmp(&opponent) {
        std::cmp::Ordering::Greater => Seat::Human,
        std::cmp::Ordering::Less => Seat::Opponent,
        std::cmp::Ordering::Equal => {
            if coin.gen_bool(0.5) {
                Seat::Human
            } else {
                Seat::Opponent
            }
        }
    }
}
