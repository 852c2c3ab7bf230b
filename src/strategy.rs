//! Targeting strategies used by the AI opponent.
//!
//! A strategy only picks coordinates; the owning [`AiOpponent`] keeps the
//! authoritative set of fired cells and passes it in on every call.
//!
//! [`AiOpponent`]: crate::ai::AiOpponent

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{Coord, Outcome, ShotResult};
use crate::fleet::Layout;

/// Interface implemented by the different AI difficulty levels.
pub trait Targeting: Send {
    /// Choose the next coordinate. Must not return a cell set in `fired`;
    /// `None` only when every cell has been fired.
    fn next_target(&mut self, rng: &mut SmallRng, fired: &BitGrid) -> Option<Coord>;

    /// Inform the strategy of the result of its last shot.
    fn observe(&mut self, _coord: Coord, _result: &ShotResult, _fired: &BitGrid) {}
}

fn is_fired(fired: &BitGrid, coord: Coord) -> bool {
    match coord.to_index(fired.width(), fired.height()) {
        Some((r, c)) => fired.get(r, c).unwrap_or(true),
        None => true,
    }
}

/// Uniform choice among cells that have never been fired at.
pub fn random_unfired(rng: &mut SmallRng, fired: &BitGrid) -> Option<Coord> {
    let free = fired.len() - fired.count_ones();
    if free == 0 {
        return None;
    }
    let k = rng.random_range(0..free);
    (!fired)
        .iter_set_bits()
        .nth(k)
        .map(|(r, c)| Coord::from_index(r, c))
}

/// Pure random search, ignoring results.
#[derive(Debug, Default)]
pub struct RandomSearch;

impl Targeting for RandomSearch {
    fn next_target(&mut self, rng: &mut SmallRng, fired: &BitGrid) -> Option<Coord> {
        random_unfired(rng, fired)
    }
}

/// Hunt-and-target: random search until a hit, then work through the hit's
/// neighbours until the ship sinks.
///
/// Candidates form a stack so the newest hit's neighbours are tried first.
#[derive(Debug, Default)]
pub struct HuntTarget {
    candidates: Vec<Coord>,
}

impl HuntTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding target-mode candidates, next one last.
    pub fn candidates(&self) -> &[Coord] {
        &self.candidates
    }
}

impl Targeting for HuntTarget {
    fn next_target(&mut self, rng: &mut SmallRng, fired: &BitGrid) -> Option<Coord> {
        while let Some(c) = self.candidates.pop() {
            if !is_fired(fired, c) {
                log::trace!("target mode: {}", c);
                return Some(c);
            }
        }
        random_unfired(rng, fired)
    }

    fn observe(&mut self, coord: Coord, result: &ShotResult, fired: &BitGrid) {
        match result.outcome {
            Outcome::Touched => {
                // reversed so `up` is popped first
                for n in coord.neighbours().into_iter().rev() {
                    if !is_fired(fired, n) {
                        self.candidates.retain(|c| *c != n);
                        self.candidates.push(n);
                    }
                }
            }
            Outcome::Drown | Outcome::Victory => self.candidates.clear(),
            Outcome::Missed | Outcome::Bonus => {}
        }
    }
}

/// Perfect information: fires straight at the known ship cells, one ship
/// after the other. This is the intended behaviour of the hardest level.
#[derive(Debug)]
pub struct PerfectInformation {
    queue: VecDeque<Coord>,
    fallback: HuntTarget,
}

impl PerfectInformation {
    pub fn new(layout: Layout) -> Self {
        Self {
            queue: layout.into_iter().flatten().collect(),
            fallback: HuntTarget::new(),
        }
    }
}

impl Targeting for PerfectInformation {
    fn next_target(&mut self, rng: &mut SmallRng, fired: &BitGrid) -> Option<Coord> {
        while let Some(c) = self.queue.pop_front() {
            if !is_fired(fired, c) {
                return Some(c);
            }
        }
        self.fallback.next_target(rng, fired)
    }

    fn observe(&mut self, coord: Coord, result: &ShotResult, fired: &BitGrid) {
        if self.queue.is_empty() {
            self.fallback.observe(coord, result, fired);
        }
    }
}
