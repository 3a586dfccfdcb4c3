//! The game session state machine.
//!
//! One [`Session`] drives one game: it owns the dealt deck, the flip state,
//! the resolved-pair set, scores, and turn order. All transitions are
//! synchronous methods on the session; the only temporal behavior is the
//! mismatch delay, modeled as an explicit deadline against a caller-supplied
//! millisecond clock so tests can advance time deterministically.
//!
//! Sessions are created fresh by [`crate::lobby::Lobby::start_game`] and
//! replaced, not mutated, on play-again.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::GameConfig;
use crate::core::player::{Player, Roster};
use crate::core::rng::GameRng;
use crate::deck::{build_deck, Card, FacePool, FaceValue};

/// Session lifecycle. Pre-game there is no session at all, only a
/// [`crate::lobby::Lobby`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are being accepted.
    InProgress,
    /// Every pair has been resolved.
    GameOver,
}

/// Result of one flip request, for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Invalid move: locked, already flipped, or already resolved.
    /// State is unchanged.
    Rejected,
    /// First card of a pair revealed, awaiting the second.
    Flipped,
    /// Second card matched the first. The current player keeps the turn.
    Matched {
        /// The face that was resolved.
        face: FaceValue,
        /// True when this was the final pair.
        game_over: bool,
    },
    /// Second card did not match. Both stay revealed and input stays locked
    /// until the deadline passes (see [`Session::poll`]).
    Mismatch {
        /// Clock value at which the pair auto-clears.
        resolves_at: u64,
    },
}

/// A revealed non-matching pair waiting for its display delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PendingMismatch {
    deadline_ms: u64,
}

/// One game in progress: deck, flip state, scores, turn order.
///
/// Cheap to clone (the resolved-pair set is persistent), so the presentation
/// layer can snapshot after every accepted transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    deck: Vec<Card>,
    flipped: SmallVec<[usize; 2]>,
    matched: ImHashSet<FaceValue>,
    players: Vec<Player>,
    current_player: usize,
    status: Status,
    pending: Option<PendingMismatch>,
}

impl Session {
    /// Start a session with a freshly built deck.
    ///
    /// Scores are reset to zero; player 0 moves first.
    #[must_use]
    pub fn new(config: GameConfig, roster: &Roster, pool: &FacePool, rng: &mut GameRng) -> Self {
        let deck = build_deck(pool, config.num_pairs(), rng);
        Self::with_deck(config, roster, deck)
    }

    /// Start a session over a pre-built deck.
    ///
    /// Useful for replays and scripted tests. The deck must hold exactly
    /// `2 * num_pairs` cards.
    #[must_use]
    pub fn with_deck(config: GameConfig, roster: &Roster, deck: Vec<Card>) -> Self {
        assert_eq!(
            deck.len(),
            2 * config.num_pairs(),
            "deck size must be 2 * num_pairs"
        );

        Self {
            config,
            deck,
            flipped: SmallVec::new(),
            matched: ImHashSet::new(),
            players: roster.fresh_players(),
            current_player: 0,
            status: Status::InProgress,
            pending: None,
        }
    }

    // === Transitions ===

    /// Request a flip of the card at `position`.
    ///
    /// An expired mismatch deadline is settled first, so a timer that fired
    /// before the tap is honored. The request is a silent no-op
    /// ([`FlipOutcome::Rejected`]) when the position is out of range, already
    /// face-up, already resolved, when two cards are pending resolution, or
    /// when the game is over.
    pub fn apply_flip(&mut self, position: usize, now_ms: u64) -> FlipOutcome {
        self.poll(now_ms);

        if self.status == Status::GameOver
            || position >= self.deck.len()
            || self.flipped.len() == 2
            || self.flipped.contains(&position)
            || self.matched.contains(&self.deck[position].face)
        {
            return FlipOutcome::Rejected;
        }

        self.flipped.push(position);
        if self.flipped.len() < 2 {
            return FlipOutcome::Flipped;
        }

        // Resolution: compare first and second flip in flip order.
        let first = self.flipped[0];
        let second = self.flipped[1];

        if self.deck[first].face == self.deck[second].face {
            let face = self.deck[first].face.clone();
            self.players[self.current_player].add_point();
            self.matched.insert(face.clone());
            self.flipped.clear();

            // Game over is decided from the post-insert cardinality.
            let game_over = self.matched.len() == self.config.num_pairs();
            if game_over {
                self.status = Status::GameOver;
                tracing::debug!(winners = ?self.winners(), "all pairs resolved");
            } else {
                tracing::trace!(
                    player = self.current_player,
                    face = face.ident(),
                    "pair matched"
                );
            }

            FlipOutcome::Matched { face, game_over }
        } else {
            let resolves_at = now_ms + self.config.mismatch_delay_ms();
            self.pending = Some(PendingMismatch { deadline_ms: resolves_at });
            tracing::trace!(first, second, resolves_at, "mismatch, input locked");

            FlipOutcome::Mismatch { resolves_at }
        }
    }

    /// Settle the pending mismatch if its deadline has passed.
    ///
    /// Clears the revealed pair and rotates the turn by exactly one seat.
    /// Returns true when a resolution happened. Safe to call at any time.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(PendingMismatch { deadline_ms }) if now_ms >= deadline_ms => {
                self.pending = None;
                self.flipped.clear();
                self.current_player = (self.current_player + 1) % self.players.len();
                true
            }
            _ => false,
        }
    }

    // === Scoring & outcome ===

    /// Indices of all players whose score equals the maximum.
    ///
    /// One element is a clear win, several a tie. Pure; meaningful once
    /// [`Status::GameOver`].
    #[must_use]
    pub fn winners(&self) -> Vec<usize> {
        winners_by_score(&self.scores())
    }

    // === Queries ===

    /// The dealt deck, in board order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Positions currently face-up and unresolved (0, 1, or 2).
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Faces already resolved.
    #[must_use]
    pub fn matched(&self) -> &ImHashSet<FaceValue> {
        &self.matched
    }

    /// Should the card at `position` render face-up?
    ///
    /// True for unresolved flips and for resolved pairs (which stay
    /// permanently revealed).
    #[must_use]
    pub fn is_face_up(&self, position: usize) -> bool {
        self.flipped.contains(&position)
            || self
                .deck
                .get(position)
                .is_some_and(|card| self.matched.contains(&card.face))
    }

    /// Players in seat order, with live scores.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Scores in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Session lifecycle status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Deadline of the pending mismatch, if input is currently locked.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<u64> {
        self.pending.map(|p| p.deadline_ms)
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn num_pairs(&self) -> usize {
        self.config.num_pairs()
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }
}

/// Indices of all entries holding the maximum score.
///
/// A single element is a clear win; several are a tie.
#[must_use]
pub fn winners_by_score(scores: &[u32]) -> Vec<usize> {
    let max = scores.iter().copied().max().unwrap_or(0);
    scores
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == max)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_MISMATCH_DELAY_MS;
    use crate::deck::CardId;

    /// Deck with the given face layout, one card per entry.
    fn scripted_deck(faces: &[&str]) -> Vec<Card> {
        faces
            .iter()
            .enumerate()
            .map(|(i, &f)| Card {
                id: CardId(i as u32),
                face: FaceValue::symbolic(f),
                position: i,
            })
            .collect()
    }

    fn scripted_session(faces: &[&str]) -> Session {
        let config = GameConfig::new(faces.len() / 2).unwrap();
        Session::with_deck(config, &Roster::new(), scripted_deck(faces))
    }

    #[test]
    fn test_first_flip_awaits_second() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);

        assert_eq!(session.apply_flip(0, 0), FlipOutcome::Flipped);
        assert_eq!(session.flipped(), &[0]);
        assert!(session.is_face_up(0));
        assert!(!session.is_face_up(2));
    }

    #[test]
    fn test_match_scores_and_retains_turn() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);

        session.apply_flip(0, 0);
        let outcome = session.apply_flip(2, 0);

        assert_eq!(
            outcome,
            FlipOutcome::Matched { face: FaceValue::symbolic("A"), game_over: false }
        );
        assert_eq!(session.scores(), vec![1, 0]);
        assert_eq!(session.current_player(), 0);
        assert!(session.flipped().is_empty());
        assert!(session.is_face_up(0) && session.is_face_up(2));
    }

    #[test]
    fn test_mismatch_locks_until_deadline() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);

        session.apply_flip(1, 0);
        let outcome = session.apply_flip(3, 0);
        assert_eq!(
            outcome,
            FlipOutcome::Mismatch { resolves_at: DEFAULT_MISMATCH_DELAY_MS }
        );

        // Locked: every flip is a no-op, state untouched
        assert_eq!(session.apply_flip(0, 10), FlipOutcome::Rejected);
        assert_eq!(session.apply_flip(1, 10), FlipOutcome::Rejected);
        assert_eq!(session.flipped(), &[1, 3]);
        assert_eq!(session.current_player(), 0);

        // Deadline not reached yet
        assert!(!session.poll(999));
        assert_eq!(session.flipped(), &[1, 3]);

        // Deadline passes: pair clears, turn rotates
        assert!(session.poll(1000));
        assert!(session.flipped().is_empty());
        assert_eq!(session.current_player(), 1);
        assert!(session.pending_deadline().is_none());
    }

    #[test]
    fn test_flip_after_expired_deadline_is_accepted() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);

        session.apply_flip(1, 0);
        session.apply_flip(3, 0);

        // No explicit poll: the tap itself settles the expired timer first
        assert_eq!(session.apply_flip(0, 2000), FlipOutcome::Flipped);
        assert_eq!(session.current_player(), 1);
        assert_eq!(session.flipped(), &[0]);
    }

    #[test]
    fn test_rejects_matched_and_out_of_range_positions() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);

        session.apply_flip(0, 0);
        session.apply_flip(2, 0);

        // A is resolved: both its positions are dead
        assert_eq!(session.apply_flip(0, 0), FlipOutcome::Rejected);
        assert_eq!(session.apply_flip(2, 0), FlipOutcome::Rejected);
        assert_eq!(session.apply_flip(99, 0), FlipOutcome::Rejected);

        // Re-flipping the same card is not a pair
        session.apply_flip(1, 0);
        assert_eq!(session.apply_flip(1, 0), FlipOutcome::Rejected);
        assert_eq!(session.flipped(), &[1]);
    }

    #[test]
    fn test_game_over_on_final_pair() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);

        session.apply_flip(0, 0);
        session.apply_flip(2, 0);
        session.apply_flip(1, 0);
        session.apply_flip(5, 0);
        session.apply_flip(3, 0);
        session.apply_flip(6, 0);
        session.apply_flip(4, 0);
        let last = session.apply_flip(7, 0);

        assert_eq!(
            last,
            FlipOutcome::Matched { face: FaceValue::symbolic("D"), game_over: true }
        );
        assert_eq!(session.status(), Status::GameOver);
        assert_eq!(session.matched().len(), 4);
        assert_eq!(session.apply_flip(0, 0), FlipOutcome::Rejected);
    }

    #[test]
    fn test_score_conservation_at_quiescence() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);
        let mut now = 0u64;

        // Interleave matches and mismatches
        for &(a, b) in &[(0, 1), (0, 2), (3, 4), (1, 5), (3, 6), (4, 7)] {
            session.apply_flip(a, now);
            session.apply_flip(b, now);
            now += DEFAULT_MISMATCH_DELAY_MS;
            session.poll(now);

            let total: u32 = session.scores().iter().sum();
            assert_eq!(total as usize, session.matched().len());
        }
    }

    #[test]
    fn test_winners_by_score() {
        assert_eq!(winners_by_score(&[3, 5, 5, 2]), vec![1, 2]);
        assert_eq!(winners_by_score(&[1, 0]), vec![0]);
        assert_eq!(winners_by_score(&[0, 0]), vec![0, 1]);
    }

    #[test]
    fn test_winners_after_driven_game() {
        let mut roster = Roster::new();
        roster.add("Carol").unwrap();
        roster.add("Dave").unwrap();

        let config = GameConfig::new(4).unwrap();
        let deck = scripted_deck(&["A", "B", "A", "C", "D", "B", "C", "D"]);
        let mut session = Session::with_deck(config, &roster, deck);

        session.apply_flip(0, 0);
        session.apply_flip(2, 0); // p0 matches A -> 1
        session.apply_flip(1, 0);
        session.apply_flip(3, 0); // mismatch
        session.poll(1000); // turn -> p1
        session.apply_flip(1, 1000);
        session.apply_flip(5, 1000); // p1 matches B -> 1
        session.apply_flip(3, 1000);
        session.apply_flip(6, 1000); // p1 matches C -> 2
        session.apply_flip(4, 1000);
        let last = session.apply_flip(7, 1000); // p1 matches D -> 3, game over

        assert_eq!(
            last,
            FlipOutcome::Matched { face: FaceValue::symbolic("D"), game_over: true }
        );
        assert_eq!(session.scores(), vec![1, 3, 0, 0]);
        assert_eq!(session.winners(), vec![1]);
    }

    #[test]
    fn test_serde_roundtrip_mid_game() {
        let mut session = scripted_session(&["A", "B", "A", "C", "D", "B", "C", "D"]);
        session.apply_flip(0, 0);
        session.apply_flip(2, 0);
        session.apply_flip(1, 0);
        session.apply_flip(3, 0); // pending mismatch

        let json = serde_json::to_string(&session).unwrap();
        let mut restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.scores(), session.scores());
        assert_eq!(restored.flipped(), session.flipped());
        assert_eq!(restored.pending_deadline(), session.pending_deadline());

        // Restored session resolves the pending mismatch identically
        assert!(restored.poll(1000));
        assert_eq!(restored.current_player(), 1);
    }
}
