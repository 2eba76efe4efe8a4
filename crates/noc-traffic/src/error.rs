use thiserror::Error;

use noc_core::{Coord, Cycle};

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("traffic configuration error: {0}")]
    Config(String),

    #[error("{node} already injects at {cycle}")]
    DuplicateInjection { cycle: Cycle, node: Coord },
}

pub type TrafficResult<T> = Result<T, TrafficError>;
