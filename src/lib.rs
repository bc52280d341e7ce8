//! # Quoridor AI
//!
//! A two-player wall-race board engine and a minimax/alpha-beta agent that
//! plays it. Pawns race to the opposite edge; each turn a player either steps
//! (jumping an adjacent opponent) or hangs a two-cell wall, and no wall may
//! cut either player off from their goal row.
//!
//! ## Modules
//!
//! - [`game`] — Board graph, wall legality, BFS path lengths, move generation, turn state
//! - [`ai`] — Agent trait, search engine and heuristic, minimax controller, random baseline
//! - [`arena`] — Headless turn controller and match statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
