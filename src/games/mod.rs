//! The concrete game implementations.
pub mod connect4;
pub mod ttt;
