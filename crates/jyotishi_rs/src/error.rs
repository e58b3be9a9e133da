use jyotishi_chart::{ChartError, ErrorKind};
use jyotishi_ephem::EphemerisError;

/// Errors from the process-wide facade.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum JyotishiError {
    /// [`init`](crate::init) was called after the context already existed.
    #[error("jyotishi context already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

impl JyotishiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyInitialized => ErrorKind::Config,
            Self::Chart(e) => e.kind(),
            Self::Ephemeris(_) => ErrorKind::Provider,
        }
    }
}
