//! Match controller: turns, phases and the point-activation entry point.
//!
//! The renderer feeds point activations in and reads the resulting
//! `Activation` plus the `MatchState` query surface back out.
//!
//! ```
//! use rust_linegame::controller::{init_match, Activation};
//! use rust_linegame::core::Player;
//! use rust_linegame::grid::Coord;
//!
//! let mut state = init_match(4).unwrap();
//! let a = state.grid().id_at(Coord::new(0, 0)).unwrap();
//! let b = state.grid().id_at(Coord::new(0, 3)).unwrap();
//!
//! state.handle_point_activation(a);
//! let result = state.handle_point_activation(b);
//!
//! assert!(result.is_move());
//! assert_eq!(state.current_player(), Player::Two);
//! ```

mod turn;

pub use turn::{init_match, Activation};
