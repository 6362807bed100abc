//! Collision predicates and the tagged rule set each game selects.
//!
//! The predicates read the entities they are given and return a verdict.
//! Calling them speculatively never mutates game state.

use super::shapes::{Aabb, Cell, Circle, Containment, GridSize};
use std::collections::VecDeque;
use std::f64::consts::TAU;

/// Outcome of one collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clear,
    /// Actor landed on a solid surface that pushes it back (helix ring).
    Bounce,
    /// The run is over.
    Terminal,
}

impl Verdict {
    pub fn is_terminal(self) -> bool {
        self == Verdict::Terminal
    }
}

/// When touching the playfield edge ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Only once the actor has zero overlap with the playfield.
    Exit,
    /// As soon as the actor is not fully contained.
    Touch,
}

/// Per-game rule selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionRules {
    Rectangular { edges: EdgePolicy },
    GapRing,
    SelfOccupancy { include_vacating_tail: bool },
}

/// A ring with a gap, evaluated when the actor is inside its vertical band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub y: f64,
    /// Absolute angle (radians) where the gap begins.
    pub gap_start: f64,
    pub gap_size: f64,
    /// Half-height of the band around `y` in which the ring is "hit".
    pub band: f64,
}

/// Where an actor sits relative to a ring this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingContact {
    OutsideBand,
    Gap,
    Solid,
}

/// Entity snapshot handed to [`CollisionRules::check`].
#[derive(Debug, Clone)]
pub enum Contact<'a> {
    Boxes {
        actor: Aabb,
        obstacles: Vec<Aabb>,
        field: Aabb,
    },
    Ring {
        actor: Circle,
        /// Actor angle around the ring centre.
        theta: f64,
        ring: Option<Ring>,
        field: Aabb,
    },
    Grid {
        head: Cell,
        body: &'a VecDeque<Cell>,
        grid: GridSize,
        /// The move consumes the grow trigger, so the tail stays.
        growing: bool,
    },
}

impl CollisionRules {
    /// Evaluate the contact. A contact shape that does not belong to this
    /// rule set is reported as `Clear`.
    pub fn check(&self, contact: &Contact<'_>) -> Verdict {
        match (self, contact) {
            (
                CollisionRules::Rectangular { edges },
                Contact::Boxes {
                    actor,
                    obstacles,
                    field,
                },
            ) => {
                let off_field = match edges {
                    EdgePolicy::Exit => exits_playfield(actor, field),
                    EdgePolicy::Touch => actor.containment_in(field) != Containment::Inside,
                };
                if off_field || obstacles.iter().any(|o| actor.overlaps(o)) {
                    Verdict::Terminal
                } else {
                    Verdict::Clear
                }
            }
            (
                CollisionRules::GapRing,
                Contact::Ring {
                    actor,
                    theta,
                    ring,
                    field,
                },
            ) => {
                if exits_playfield(&actor.bounds(), field) {
                    return Verdict::Terminal;
                }
                match ring.map(|r| ring_contact(actor.y, *theta, &r)) {
                    Some(RingContact::Solid) => Verdict::Bounce,
                    _ => Verdict::Clear,
                }
            }
            (
                CollisionRules::SelfOccupancy {
                    include_vacating_tail,
                },
                Contact::Grid {
                    head,
                    body,
                    grid,
                    growing,
                },
            ) => {
                if !grid.contains(*head)
                    || hits_body(*head, body, *growing, *include_vacating_tail)
                {
                    Verdict::Terminal
                } else {
                    Verdict::Clear
                }
            }
            (rules, _) => {
                log::warn!("{rules:?} given a contact it does not handle");
                Verdict::Clear
            }
        }
    }
}

/// Boundary-exit check: true iff `actor` has zero overlap with `field`.
pub fn exits_playfield(actor: &Aabb, field: &Aabb) -> bool {
    actor.containment_in(field) == Containment::Outside
}

/// Normalise an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// True iff `theta` lies in the half-open gap `[gap_start, gap_start + gap_size)`.
pub fn in_gap(theta: f64, gap_start: f64, gap_size: f64) -> bool {
    if gap_size <= 0.0 {
        return false;
    }
    if gap_size >= TAU {
        return true;
    }
    normalize_angle(theta - gap_start) < gap_size
}

/// Circular gap-passage check.
pub fn ring_contact(actor_y: f64, theta: f64, ring: &Ring) -> RingContact {
    if (actor_y - ring.y).abs() >= ring.band {
        RingContact::OutsideBand
    } else if in_gap(theta, ring.gap_start, ring.gap_size) {
        RingContact::Gap
    } else {
        RingContact::Solid
    }
}

/// Self-occupancy check for a head about to enter `head`.
///
/// `body` is the pre-move body, head first. When the move does not grow the
/// snake, the tail cell is vacated this frame and is only counted if
/// `include_vacating_tail` is set.
pub fn hits_body(
    head: Cell,
    body: &VecDeque<Cell>,
    growing: bool,
    include_vacating_tail: bool,
) -> bool {
    let checked = if growing || include_vacating_tail {
        body.len()
    } else {
        body.len().saturating_sub(1)
    };
    body.iter().take(checked).any(|&seg| seg == head)
}
