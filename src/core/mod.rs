//! Core types: players, edges, cells, configuration, errors, RNG.
//!
//! Everything here is plain data plus pure coordinate arithmetic. The
//! stateful parts live in `board` and `rules`.

pub mod cell;
pub mod config;
pub mod edge;
pub mod error;
pub mod player;
pub mod record;
pub mod rng;

pub use cell::{CellId, Side};
pub use config::{GameConfig, DEFAULT_DIMENSION, MAX_DIMENSION};
pub use edge::{Edge, Orientation};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use record::MoveRecord;
pub use rng::GameRng;
