//! Turn sequencing over a `MatchEngine`.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::board::Placement;
use crate::core::{MatchConfig, MatchError, Seat};
use crate::engine::{MatchEngine, Outcome, SeatView};
use crate::policy::{Decision, MovePolicy};
use crate::tiles::Tile;

/// Where the match stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TurnState {
    /// The seat holds a playable tile and must lay one.
    AwaitingMove(Seat),
    /// The seat has nothing playable and must draw.
    Drawing(Seat),
    /// The match is over. Absorbing.
    Terminal(Outcome),
}

/// What one resolved step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TurnEvent {
    /// A tile from hand was laid.
    Played {
        seat: Seat,
        laid: Tile,
        placement: Placement,
    },
    /// A drawn tile fit and was laid at once.
    DrewAndPlayed {
        seat: Seat,
        laid: Tile,
        placement: Placement,
    },
    /// A drawn tile did not fit; the turn passed.
    DrewAndPassed { seat: Seat, drawn: Tile },
    /// The pool was empty; the turn passed.
    Passed { seat: Seat },
}

/// Drives a match: whose turn it is, when to draw, when it ends.
///
/// The controller exclusively owns the engine. The human-equivalent seat
/// acts through `submit` and `draw`; the opponent seat acts through
/// `run_opponent_turn`, which consults the opponent policy.
pub struct TurnController {
    engine: MatchEngine,
    opponent: Box<dyn MovePolicy>,
    state: TurnState,
}

impl TurnController {
    /// Deal a fresh match against `opponent`.
    pub fn new(
        config: MatchConfig,
        seed: u64,
        opponent: impl MovePolicy + 'static,
    ) -> Result<Self, MatchError> {
        let engine = MatchEngine::new(config, seed)?;
        Ok(Self::from_engine(engine, opponent))
    }

    /// Take over an engine, typically one built from a fixed position.
    ///
    /// A position that is already over starts in `Terminal`.
    pub fn from_engine(mut engine: MatchEngine, opponent: impl MovePolicy + 'static) -> Self {
        engine.check_terminal();
        let mut controller = Self {
            engine,
            opponent: Box::new(opponent),
            state: TurnState::AwaitingMove(Seat::Human),
        };
        controller.state = controller.settle();
        controller
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Read-only access to the engine.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// What `seat` may see.
    #[must_use]
    pub fn view(&self, seat: Seat) -> SeatView {
        self.engine.view(seat)
    }

    /// The outcome, once terminal.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            TurnState::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Name of the opponent policy.
    #[must_use]
    pub fn opponent_name(&self) -> &'static str {
        self.opponent.name()
    }

    /// Deal a fresh match, keeping the opponent policy.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.engine.check_terminal();
        self.state = self.settle();
    }

    // === Commands ===

    /// Lay `tile` from `seat`'s hand at `placement`.
    #[instrument(skip(self))]
    pub fn submit(&mut self, seat: Seat, tile: Tile, placement: Placement) -> Result<TurnEvent, MatchError> {
        match self.state {
            TurnState::Terminal(_) => return Err(MatchError::MatchOver),
            TurnState::AwaitingMove(active) | TurnState::Drawing(active) if active != seat => {
                return Err(MatchError::NotYourTurn(seat));
            }
            TurnState::Drawing(_) => return Err(MatchError::MustDraw(seat)),
            TurnState::AwaitingMove(_) => {}
        }

        let laid = self.engine.play(seat, tile, placement)?;
        self.finish_turn();
        Ok(TurnEvent::Played { seat, laid, placement })
    }

    /// Resolve `seat`'s `Drawing` state: draw one tile, lay it at its first
    /// legal placement if it fits, otherwise pass.
    #[instrument(skip(self))]
    pub fn draw(&mut self, seat: Seat) -> Result<TurnEvent, MatchError> {
        match self.state {
            TurnState::Terminal(_) => return Err(MatchError::MatchOver),
            TurnState::AwaitingMove(active) | TurnState::Drawing(active) if active != seat => {
                return Err(MatchError::NotYourTurn(seat));
            }
            TurnState::AwaitingMove(_) => return Err(MatchError::MustPlay(seat)),
            TurnState::Drawing(_) => {}
        }

        let event = match self.engine.draw(seat)? {
            None => {
                self.engine.pass(seat)?;
                TurnEvent::Passed { seat }
            }
            Some(drawn) => match self.engine.legal_placements(drawn).first().copied() {
                Some(placement) => {
                    let laid = self.engine.play(seat, drawn, placement)?;
                    TurnEvent::DrewAndPlayed { seat, laid, placement }
                }
                None => {
                    self.engine.pass(seat)?;
                    TurnEvent::DrewAndPassed { seat, drawn }
                }
            },
        };

        self.finish_turn();
        Ok(event)
    }

    /// What the opponent policy would do right now, without doing it.
    #[must_use]
    pub fn opponent_decision(&self) -> Decision {
        self.opponent
            .choose_move(self.engine.hand(Seat::Opponent), self.engine.line())
    }

    /// Resolve the opponent's turn with its policy.
    pub fn run_opponent_turn(&mut self) -> Result<TurnEvent, MatchError> {
        let seat = self.acting_seat()?;
        if seat != Seat::Opponent {
            return Err(MatchError::NotYourTurn(Seat::Opponent));
        }
        let decision = self.opponent_decision();
        self.resolve(seat, decision)
    }

    /// Resolve the current state for whichever seat is active, using
    /// `policy` to pick the move.
    pub fn step_with(&mut self, policy: &dyn MovePolicy) -> Result<TurnEvent, MatchError> {
        let seat = self.acting_seat()?;
        let decision = policy.choose_move(self.engine.hand(seat), self.engine.line());
        self.resolve(seat, decision)
    }

    /// Play to the end: the opponent seat uses its own policy, the human
    /// seat uses `human`.
    pub fn play_out(&mut self, human: &dyn MovePolicy) -> Result<Outcome, MatchError> {
        loop {
            let seat = match &self.state {
                TurnState::Terminal(outcome) => return Ok(outcome.clone()),
                TurnState::AwaitingMove(seat) | TurnState::Drawing(seat) => *seat,
            };
            match seat {
                Seat::Opponent => self.run_opponent_turn()?,
                Seat::Human => self.step_with(human)?,
            };
        }
    }

    // === Internals ===

    fn acting_seat(&self) -> Result<Seat, MatchError> {
        match self.state {
            TurnState::AwaitingMove(seat) | TurnState::Drawing(seat) => Ok(seat),
            TurnState::Terminal(_) => Err(MatchError::MatchOver),
        }
    }

    fn resolve(&mut self, seat: Seat, decision: Decision) -> Result<TurnEvent, MatchError> {
        if matches!(self.state, TurnState::Drawing(_)) {
            return self.draw(seat);
        }
        match decision {
            Decision::Play(mv) => self.submit(seat, mv.tile, mv.placement),
            Decision::Draw => self.draw(seat),
        }
    }

    /// Check for the end before handing the turn over, so a seat that
    /// just emptied the pool cannot leave both seats passing forever.
    fn finish_turn(&mut self) {
        if let Some(outcome) = self.engine.check_terminal() {
            self.state = TurnState::Terminal(outcome);
            return;
        }
        self.engine.end_turn();
        self.state = self.settle();
        debug!(state = ?self.state, "turn handed over");
    }

    fn settle(&self) -> TurnState {
        if let Some(outcome) = self.engine.outcome() {
            return TurnState::Terminal(outcome.clone());
        }
        let seat = self.engine.active();
        if self.engine.has_playable(seat) {
            TurnState::AwaitingMove(seat)
        } else {
            debug!(%seat, "no playable tile");
            TurnState::Drawing(seat)
        }
    }
}

impl std::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("state", &self.state)
            .field("opponent", &self.opponent.name())
            .field("engine", &self.engine)
            .finish()
    }
}
