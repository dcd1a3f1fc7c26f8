use racko_common::game::{Card, Rack};
use racko_common::moves::Move;

use smallvec::SmallVec;
use std::cmp::Ordering;

pub type Path = SmallVec<[Move; 64]>;

/// A node of the search graph: the rack contents, the number of cards
/// drawn so far from the shared deck, and the moves that produced it.
/// Successor operations return fresh snapshots; a state is never mutated
/// once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pub rack: Rack,
    pub drawn: usize,
    pub path: Path,
}

impl PuzzleState {
    pub fn root(rack: Rack) -> Self {
        Self {
            rack,
            drawn: 0,
            path: Path::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The cards this state has not yet drawn. `deck` is the draw pile
    /// that remained after the initial rack was dealt.
    pub fn remaining<'a>(&self, deck: &'a [Card]) -> &'a [Card] {
        &deck[self.drawn..]
    }

    /// Draws the next deck card into `slot`. Returns `None` when the deck
    /// is exhausted; such a state is a dead end with no successors.
    pub fn place(&self, deck: &[Card], slot: u8) -> Option<Self> {
        let card = deck.get(self.drawn).copied()?;
        let mut rack = self.rack.clone();
        rack[slot as usize] = card;
        let mut path = self.path.clone();
        path.push(Move::Place(slot));
        Some(Self {
            rack,
            drawn: self.drawn + 1,
            path,
        })
    }

    /// Draws the next deck card and discards it, leaving the rack
    /// untouched. Available on the state model but never generated by the
    /// default search.
    pub fn discard(&self, deck: &[Card]) -> Option<Self> {
        deck.get(self.drawn)?;
        let mut path = self.path.clone();
        path.push(Move::Discard);
        Some(Self {
            rack: self.rack.clone(),
            drawn: self.drawn + 1,
            path,
        })
    }
}

/// Heap entry for the open list. `BinaryHeap` is a max-heap, so the
/// ordering is reversed to pop the lowest priority first; equal priorities
/// pop in insertion order via the sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub priority: u32,
    pub seq: u64,
    pub state: PuzzleState,
}

impl SearchNode {
    pub fn new(priority: u32, seq: u64, state: PuzzleState) -> Self {
        SearchNode {
            priority,
            seq,
            state,
        }
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
