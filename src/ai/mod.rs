mod agent;
mod controller;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use controller::AgentController;
pub use minimax::{Heuristic, PathRaceHeuristic, Position, SearchConfig, SearchEngine};
pub use random::RandomAgent;
