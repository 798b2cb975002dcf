//! Static position evaluators for use with [minimax](crate::ai::minimax::minimax).
pub mod connect4;
