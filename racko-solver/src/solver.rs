use super::*;

use racko_common::game::{Card, Game, MAX_CARD, is_ordered};
use racko_common::moves::Move;

use ahash::AHasher;
use thiserror::Error;

use std::{
    collections::{BinaryHeap, HashSet},
    hash::{BuildHasherDefault, Hasher},
    time::{Duration, Instant},
};

pub const DEFAULT_MAX_STATES: u32 = 1_000_000;

/// Solves a raw deck: the first `rack_size` cards become the initial rack,
/// the rest the draw pile.
pub fn solve(deck: &[Card], rack_size: usize, max_states: u32) -> Result<SolveResult, SolveError> {
    if rack_size == 0 {
        return Err(SolveError::InvalidConfiguration(
            "rack size must be at least 1".into(),
        ));
    }
    if rack_size > deck.len() {
        return Err(SolveError::InvalidConfiguration(format!(
            "rack size {rack_size} exceeds the deck length {}",
            deck.len()
        )));
    }
    let game = Game::new(
        deck[..rack_size].iter().copied().collect(),
        deck[rack_size..].to_vec(),
    );
    Solver::new(game).solve(max_states)
}

#[derive(Debug, Clone)]
pub struct Solver {
    game: Game,
}

impl Solver {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn solve(&self, max_states: u32) -> Result<SolveResult, SolveError> {
        if self.game.rack.is_empty() {
            return Err(SolveError::InvalidConfiguration(
                "rack must have at least one slot".into(),
            ));
        }
        if !self.game.is_valid() {
            return Err(SolveError::InvalidConfiguration(format!(
                "cards must be unique and between 1 and {MAX_CARD}"
            )));
        }

        let deck = &self.game.deck[..];
        let rack_size = self.game.rack_size();
        let timer = Instant::now();

        let mut open = BinaryHeap::with_capacity(1024);
        let mut closed: HashSet<u64, BuildHasherDefault<AHasher>> = HashSet::default();
        let mut states: u32 = 1;
        let mut seq: u64 = 0;

        let root = PuzzleState::root(self.game.rack.clone());
        closed.insert(state_key(&root));
        open.push(SearchNode::new(0, seq, root));

        while let Some(node) = open.pop() {
            if states >= max_states {
                break;
            }
            let state = node.state;

            if is_ordered(&state.rack) {
                return Ok(SolveResult {
                    moves: state.path.to_vec(),
                    states,
                    elapsed: timer.elapsed(),
                });
            }

            for slot in 0..rack_size {
                // Dead end once the deck is exhausted; nothing to enqueue.
                let Some(child) = state.place(deck, slot as u8) else {
                    break;
                };
                if !closed.insert(state_key(&child)) {
                    continue;
                }

                let priority = (min_replacements(&child.rack) + child.depth()) as u32;
                seq += 1;
                open.push(SearchNode::new(priority, seq, child));
                states += 1;
            }
        }

        if states >= max_states {
            Err(SolveError::StateLimit(max_states))
        } else {
            Err(SolveError::SearchExhausted { states })
        }
    }
}

// Two states agreeing on rack contents and drawn count have equal path
// length and identical subtrees, so revisits can be pruned.
fn state_key(state: &PuzzleState) -> u64 {
    let mut hasher = AHasher::default();
    for card in &state.rack {
        hasher.write_u8(card.value());
    }
    hasher.write_usize(state.drawn);
    hasher.finish()
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub moves: Vec<Move>,
    pub states: u32,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("no ordering reachable; search exhausted after {states} states")]
    SearchExhausted { states: u32 },
    #[error("unable to order the rack; reached max states {0}")]
    StateLimit(u32),
}
