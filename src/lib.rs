mod cli;
mod error;
#[macro_use]
mod macros;
pub mod paginate;
pub mod sign;
mod utils;

pub type Result<T> = std::result::Result<T, Error>;
pub use cli::{PrCli, SignCli};
pub use error::Error;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber shared by both binaries.
///
/// Logging is off unless `RUST_LOG` sets a filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
