use thiserror::Error;

use crate::Behavior;

/// Errors reported while registering behaviors.
///
/// Scroll handling itself never fails; every check happens before a registration mutates state.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown behavior `{0}`")]
    UnknownBehavior(String),

    #[error("`{options}` options cannot configure the `{behavior}` behavior")]
    OptionsMismatch {
        behavior: Behavior,
        options: Behavior,
    },

    #[error("background parallax area must be greater than zero")]
    ZeroArea,

    #[error("unknown easing `{0}`")]
    UnknownEasing(String),

    #[error("section `{name}` has a non-finite threshold")]
    NonFiniteThreshold { name: String },

    #[cfg(feature = "json")]
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
