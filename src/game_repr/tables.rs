use once_cell::sync::Lazy;
use smallvec::SmallVec;

use super::Square;

pub type Targets = SmallVec<[Square; 8]>;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),   // NNE
    (2, -1),  // NNW
    (1, 2),   // NEE
    (1, -2),  // NWW
    (-1, 2),  // SEE
    (-1, -2), // SWW
    (-2, 1),  // SSE
    (-2, -1), // SSW
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),   // N
    (1, 1),   // NE
    (0, 1),   // E
    (-1, 1),  // SE
    (-1, 0),  // S
    (-1, -1), // SW
    (0, -1),  // W
    (1, -1),  // NW
];

pub const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// KNIGHT_TARGETS[square.index()] lists every on-board knight jump from that square
pub static KNIGHT_TARGETS: Lazy<Vec<Targets>> = Lazy::new(|| build(&KNIGHT_OFFSETS));

/// KING_TARGETS[square.index()] lists every on-board neighbour of that square
pub static KING_TARGETS: Lazy<Vec<Targets>> = Lazy::new(|| build(&KING_OFFSETS));

fn build(offsets: &[(i32, i32)]) -> Vec<Targets> {
    Square::all()
        .map(|sq| {
            offsets
                .iter()
                .filter_map(|&(dr, dc)| sq.offset(dr, dc))
                .collect()
        })
        .collect()
}
