use crate::core::ports::CollectionError;
use crate::core::spot::draft::FormError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("write controls are disabled: {0}")]
    ControlsDisabled(String),
}
