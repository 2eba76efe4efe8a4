use noc_core::NocError;
use noc_mesh::MeshError;
use noc_traffic::TrafficError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] NocError),

    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("traffic error: {0}")]
    Traffic(#[from] TrafficError),
}

pub type SimResult<T> = Result<T, SimError>;
