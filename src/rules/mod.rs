//! Game rules.
//!
//! - `actions`: validate and execute MoveUnit, ProduceUnit and FoundCity
//! - `turn`: end turns, run month-end income and territorial expansion
//! - `victory`: domination, elimination and turn-limit checks
//!
//! Rules are free functions over `GameState` plus the read-only
//! `WorldMap` and `GameConfig`. The `Game` facade owns all three.

pub mod actions;
pub mod turn;
pub mod victory;

pub use actions::{execute, validate};
pub use turn::{end_turn, find_expansion, process_month_end, TurnAdvance};
pub use victory::{declare, evaluate, GameResult, Victory, VictoryKind};
