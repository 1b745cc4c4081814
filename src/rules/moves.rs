//! Move enumeration.

use im::Vector;
use tracing::trace;

use crate::core::{Move, TileSet};
use crate::sets::{difference, powerset, sum};

/// Every subset of `remaining` whose values add up to `total`.
///
/// Moves come out in powerset order and keep the board order of their
/// tiles.
pub fn possible_moves<'a, I>(remaining: I, total: u32) -> Vector<Move>
where
    I: IntoIterator<Item = &'a u32>,
{
    let tiles: Vec<u32> = remaining.into_iter().copied().collect();
    let moves: Vector<Move> = powerset(&tiles)
        .into_iter()
        .filter(|set| sum(set) == total)
        .collect();

    trace!(tiles = tiles.len(), total, moves = moves.len(), "enumerated moves");
    moves
}

/// Tiles that can still be added to `selected` without ruling out every move.
///
/// With nothing selected this is every tile in any move. Otherwise it is
/// every tile in a move containing all of `selected`, minus `selected`.
pub fn legal_choices<'a, M, S>(moves: M, selected: S) -> TileSet
where
    M: IntoIterator<Item = &'a Move>,
    S: IntoIterator<Item = &'a u32>,
{
    let chosen: TileSet = selected.into_iter().copied().collect();

    if chosen.is_empty() {
        return moves.into_iter().flatten().copied().collect();
    }

    let reachable: TileSet = moves
        .into_iter()
        .filter(|set| chosen.iter().all(|value| set.contains(value)))
        .flatten()
        .copied()
        .collect();

    difference(&reachable, &chosen)
}
