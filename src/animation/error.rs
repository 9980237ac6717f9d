use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error(
        "invalid pacing: reset {reset_ms}ms / collapse {collapse_ms}ms must fit inside tick {tick_ms}ms"
    )]
    InvalidPacing {
        reset_ms: u64,
        collapse_ms: u64,
        tick_ms: u64,
    },
}

pub type AnimationResult<T> = Result<T, AnimationError>;
