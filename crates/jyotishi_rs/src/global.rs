//! Process-wide ephemeris and configuration.
//!
//! The context is built at most once. [`init`] builds it from an explicit
//! configuration; otherwise the first request builds it from defaults.
//! Concurrent first use is safe: one caller loads, the others wait and
//! share the result.

use jyotishi_chart::ChartConfig;
use jyotishi_ephem::Ephemeris;
use log::info;
use once_cell::sync::OnceCell;

use crate::error::JyotishiError;

pub(crate) struct Context {
    pub(crate) ephemeris: Ephemeris,
    pub(crate) config: ChartConfig,
}

impl Context {
    fn load(config: ChartConfig) -> Result<Self, JyotishiError> {
        config.validate()?;
        let ephemeris = Ephemeris::new(config.ephemeris.clone())?;
        info!(
            "jyotishi context ready (reference location {})",
            config.location.label
        );
        Ok(Self { ephemeris, config })
    }
}

static CONTEXT: OnceCell<Context> = OnceCell::new();

/// Build the global context from `config`.
///
/// Fails with [`JyotishiError::AlreadyInitialized`] if a context exists,
/// including one created lazily by an earlier request.
pub fn init(config: ChartConfig) -> Result<(), JyotishiError> {
    install(&CONTEXT, || Context::load(config))
}

/// Run `build` only if `cell` is empty, under the cell's own guard. A caller
/// that finds the cell filled (by `init` or by a lazy request) gets
/// `AlreadyInitialized` and never builds.
fn install<T>(
    cell: &OnceCell<T>,
    build: impl FnOnce() -> Result<T, JyotishiError>,
) -> Result<(), JyotishiError> {
    let mut built = false;
    cell.get_or_try_init(|| {
        built = true;
        build()
    })?;
    if built {
        Ok(())
    } else {
        Err(JyotishiError::AlreadyInitialized)
    }
}

pub fn is_initialized() -> bool {
    CONTEXT.get().is_some()
}

pub(crate) fn context() -> Result<&'static Context, JyotishiError> {
    CONTEXT.get_or_try_init(|| Context::load(ChartConfig::default()))
}

/// The shared ephemeris, loading defaults on first use.
pub fn ephemeris() -> Result<&'static Ephemeris, JyotishiError> {
    Ok(&context()?.ephemeris)
}

/// The shared configuration, loading defaults on first use.
pub fn config() -> Result<&'static ChartConfig, JyotishiError> {
    Ok(&context()?.config)
}
