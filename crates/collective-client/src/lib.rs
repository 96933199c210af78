pub mod composer;
pub mod config;
pub mod error;
pub mod sink;
pub mod transcript;

use tracing_subscriber::{fmt, EnvFilter};

pub use composer::Composer;
pub use config::{ClientConfig, IdScheme};
pub use error::ConfigError;
pub use sink::{MemorySink, ProtocolSink, TracingSink, WriterSink};
pub use transcript::TranscriptEntry;

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`; output goes to stderr so the transcript on stdout
/// stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("collective=info,collective_client=debug,collective_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
