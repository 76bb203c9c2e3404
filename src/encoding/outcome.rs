use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::CodecError;
use crate::utils::Color;

/// The result of a game, from white's point of view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Outcome {
    WhiteWins,
    Draw,
    BlackWins,
}

impl Outcome {
    pub const fn from_winner(winner: Option<Color>) -> Outcome {
        match winner {
            Some(Color::White) => Outcome::WhiteWins,
            Some(Color::Black) => Outcome::BlackWins,
            None => Outcome::Draw,
        }
    }

    pub const fn winner(&self) -> Option<Color> {
        match self {
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::Draw => None,
        }
    }

    /// The value target: +1 for a white win, 0 for a draw, -1 for a black win.
    pub const fn value(&self) -> f32 {
        match self {
            Outcome::WhiteWins => 1.,
            Outcome::Draw => 0.,
            Outcome::BlackWins => -1.,
        }
    }

    /// The outcome with the winner swapped.
    pub const fn negated(&self) -> Outcome {
        match self {
            Outcome::WhiteWins => Outcome::BlackWins,
            Outcome::Draw => Outcome::Draw,
            Outcome::BlackWins => Outcome::WhiteWins,
        }
    }
}

impl FromStr for Outcome {
    type Err = CodecError;

    /// Accepts the PGN result tokens and their spelled-out forms.
    fn from_str(result: &str) -> Result<Self, Self::Err> {
        match result.trim().to_ascii_lowercase().as_str() {
            "1-0" | "white wins" => Ok(Outcome::WhiteWins),
            "1/2-1/2" | "draw" => Ok(Outcome::Draw),
            "0-1" | "black wins" => Ok(Outcome::BlackWins),
            _ => Err(CodecError::UnknownOutcome(result.to_string())),
        }
    }
}

impl TryFrom<i8> for Outcome {
    type Error = CodecError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Outcome::WhiteWins),
            0 => Ok(Outcome::Draw),
            -1 => Ok(Outcome::BlackWins),
            _ => Err(CodecError::UnknownOutcome(value.to_string())),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Outcome::WhiteWins => "1-0",
            Outcome::Draw => "1/2-1/2",
            Outcome::BlackWins => "0-1",
        };
        write!(f, "{}", token)
    }
}
