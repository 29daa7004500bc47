use crate::ActorId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("actor not found: {0}")]
    UnknownActor(ActorId),

    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
}
