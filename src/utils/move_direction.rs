//! Move direction related enums and functions.
//!
//! Directions are classified from the `(file_diff, rank_diff)` of a move, with
//! "up" meaning towards the eighth rank and "right" towards the h-file.

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum QueenLikeMoveDirection {
    Right=0, Left=1,
    Up=2, Down=3,
    UpRight=4, UpLeft=5,
    DownRight=6, DownLeft=7,
}

const ALL_QUEEN_MOVE_DIRECTIONS: [QueenLikeMoveDirection; 8] = [
    QueenLikeMoveDirection::Right, QueenLikeMoveDirection::Left,
    QueenLikeMoveDirection::Up, QueenLikeMoveDirection::Down,
    QueenLikeMoveDirection::UpRight, QueenLikeMoveDirection::UpLeft,
    QueenLikeMoveDirection::DownRight, QueenLikeMoveDirection::DownLeft,
];

impl QueenLikeMoveDirection {
    pub fn iter() -> impl Iterator<Item=QueenLikeMoveDirection> {
        ALL_QUEEN_MOVE_DIRECTIONS.iter().copied()
    }

    /// The `(file_diff, rank_diff)` of a single step in this direction.
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            QueenLikeMoveDirection::Right => (1, 0),
            QueenLikeMoveDirection::Left => (-1, 0),
            QueenLikeMoveDirection::Up => (0, 1),
            QueenLikeMoveDirection::Down => (0, -1),
            QueenLikeMoveDirection::UpRight => (1, 1),
            QueenLikeMoveDirection::UpLeft => (-1, 1),
            QueenLikeMoveDirection::DownRight => (1, -1),
            QueenLikeMoveDirection::DownLeft => (-1, -1),
        }
    }

    /// The direction seen from the other side of the board.
    pub const fn flip_vertical(&self) -> QueenLikeMoveDirection {
        match self {
            QueenLikeMoveDirection::Up => QueenLikeMoveDirection::Down,
            QueenLikeMoveDirection::Down => QueenLikeMoveDirection::Up,
            QueenLikeMoveDirection::UpRight => QueenLikeMoveDirection::DownRight,
            QueenLikeMoveDirection::DownRight => QueenLikeMoveDirection::UpRight,
            QueenLikeMoveDirection::UpLeft => QueenLikeMoveDirection::DownLeft,
            QueenLikeMoveDirection::DownLeft => QueenLikeMoveDirection::UpLeft,
            other => *other,
        }
    }

    /// Classifies a straight or diagonal displacement and measures its length.
    /// Returns `None` for a null displacement and for any shape that is neither.
    pub const fn calc_and_measure_distance(file_diff: i8, rank_diff: i8) -> Option<(QueenLikeMoveDirection, u8)> {
        if file_diff == 0 && rank_diff == 0 {
            return None;
        }

        if rank_diff == 0 {
            let direction = if file_diff > 0 { QueenLikeMoveDirection::Right } else { QueenLikeMoveDirection::Left };
            Some((direction, file_diff.unsigned_abs()))
        } else if file_diff == 0 {
            let direction = if rank_diff > 0 { QueenLikeMoveDirection::Up } else { QueenLikeMoveDirection::Down };
            Some((direction, rank_diff.unsigned_abs()))
        } else if rank_diff.unsigned_abs() == file_diff.unsigned_abs() {
            let direction = match (rank_diff > 0, file_diff > 0) {
                (true, true) => QueenLikeMoveDirection::UpRight,
                (true, false) => QueenLikeMoveDirection::UpLeft,
                (false, true) => QueenLikeMoveDirection::DownRight,
                (false, false) => QueenLikeMoveDirection::DownLeft,
            };
            Some((direction, rank_diff.unsigned_abs()))
        } else {
            None
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum KnightMoveDirection {
    OneRightTwoUp=0, TwoRightOneUp=1,
    TwoRightOneDown=2, OneRightTwoDown=3,
    OneLeftTwoUp=4, TwoLeftOneUp=5,
    TwoLeftOneDown=6, OneLeftTwoDown=7,
}

/// `(file_diff, rank_diff)` of each knight jump, indexed by `KnightMoveDirection`.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2), (-1, 2), (-2, 1), (-2, -1), (-1, -2),
];

const ALL_KNIGHT_MOVE_DIRECTIONS: [KnightMoveDirection; 8] = [
    KnightMoveDirection::OneRightTwoUp, KnightMoveDirection::TwoRightOneUp,
    KnightMoveDirection::TwoRightOneDown, KnightMoveDirection::OneRightTwoDown,
    KnightMoveDirection::OneLeftTwoUp, KnightMoveDirection::TwoLeftOneUp,
    KnightMoveDirection::TwoLeftOneDown, KnightMoveDirection::OneLeftTwoDown,
];

impl KnightMoveDirection {
    pub fn iter() -> impl Iterator<Item=KnightMoveDirection> {
        ALL_KNIGHT_MOVE_DIRECTIONS.iter().copied()
    }

    pub const fn delta(&self) -> (i8, i8) {
        KNIGHT_DELTAS[*self as usize]
    }

    /// Looks the displacement up in the knight table; `None` if it is not a knight jump.
    pub const fn calc(file_diff: i8, rank_diff: i8) -> Option<KnightMoveDirection> {
        let mut i = 0;
        while i < KNIGHT_DELTAS.len() {
            if KNIGHT_DELTAS[i].0 == file_diff && KNIGHT_DELTAS[i].1 == rank_diff {
                return Some(ALL_KNIGHT_MOVE_DIRECTIONS[i]);
            }
            i += 1;
        }
        None
    }
}
