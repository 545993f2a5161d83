//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TiplineError {
    #[error("FETCH/{0}")]
    Fetch(String),

    #[error("SUBMIT/{0}")]
    Submit(String),

    #[error("AUTH/{0}")]
    Auth(String),

    #[error("STORE/{0}")]
    Storage(String),

    #[error("AI/{0}")]
    Analysis(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),
}
