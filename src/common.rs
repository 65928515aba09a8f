pub mod grid;
pub mod input;

pub use grid::{Grid, GridError};
pub use input::{read_input, Args, InputError, ParseError};

use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::from_default_env().add_directive("info".parse()?);
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .with(env_filter)
        .try_init()?;
    Ok(())
}
