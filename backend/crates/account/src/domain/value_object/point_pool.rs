//! Point Pool
//!
//! The three counters on a ficha that gate a spend action.

use std::fmt;

/// Spendable point pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointPool {
    /// `cartasPontosDisponiveis`: creating cards
    Cards,
    /// `cartazesPontosDisponiveis`: posting on the public board
    Posters,
    /// `pathPoints`: unlocking paths
    Paths,
}

impl PointPool {
    /// Column holding this pool in the `fichas` table
    pub const fn column(&self) -> &'static str {
        match self {
            PointPool::Cards => "card_points",
            PointPool::Posters => "poster_points",
            PointPool::Paths => "path_points",
        }
    }

    /// JSON key used by the client
    pub const fn json_key(&self) -> &'static str {
        match self {
            PointPool::Cards => "cartasPontosDisponiveis",
            PointPool::Posters => "cartazesPontosDisponiveis",
            PointPool::Paths => "pathPoints",
        }
    }

    pub const fn insufficient_message(&self) -> &'static str {
        match self {
            PointPool::Cards => "Você não possui pontos disponíveis para criar cartas.",
            PointPool::Posters => "Pontos insuficientes para criar cartaz.",
            PointPool::Paths => "Você não possui pontos de path disponíveis.",
        }
    }
}

impl fmt::Display for PointPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}
