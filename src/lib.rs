pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod scorer;

pub use config::Ruleset;
pub use error::{DiceScoreError, DsResult};
pub use scorer::{Category, DiceSource, ScoreCard, ScoreOutcome, Scorer, SelectionReport};
