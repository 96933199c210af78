//! # collective
//!
//! Line-driven terminal composer for the Collective network.
//!
//! Each stdin line is either a command or a message body:
//! - `/as <name>`      pick a roster or guest identity (other names become custom)
//! - `/custom <name>`  switch to custom mode with the given name
//! - `/thread <label>` switch thread
//! - `/roster`         list the recognized identities
//! - `/history`        print the transcript
//! - `/json`           print the transcript as JSON
//! - `/quit`           exit
//!
//! Protocol lines are logged through `tracing` on stderr.

use std::io::{self, BufRead, Write};

use tracing::info;

use collective_client::config::ClientConfig;
use collective_client::sink::TracingSink;
use collective_client::{init_tracing, Composer, TranscriptEntry};
use collective_shared::constants::{APP_NAME, APP_SUBTITLE, CORE_ENTITIES, GUEST_OPTIONS};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ClientConfig::from_env();
    info!(?config, "Loaded configuration");

    let mut composer = Composer::from_config(&config, TracingSink);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{APP_NAME} - {APP_SUBTITLE}")?;
    for entry in composer.transcript() {
        writeln!(out, "{entry}")?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;

        match line.split_once(' ').unwrap_or((line.as_str(), "")) {
            ("/quit", _) => break,
            ("/as", name) => {
                composer.select(name);
                writeln!(out, "sending as {}", composer.sender())?;
            }
            ("/custom", name) => {
                composer.select_custom();
                composer.set_custom_name(name);
                writeln!(out, "sending as {}", composer.sender())?;
            }
            ("/thread", label) => match composer.set_thread(label) {
                Ok(()) => writeln!(out, "thread {}", composer.thread())?,
                Err(e) => writeln!(out, "{e}")?,
            },
            ("/roster", _) => {
                writeln!(out, "core: {}", CORE_ENTITIES.join(", "))?;
                writeln!(out, "guests: {}", GUEST_OPTIONS.join(", "))?;
            }
            ("/history", _) => {
                for entry in composer.transcript() {
                    writeln!(out, "{entry}")?;
                }
            }
            ("/json", _) => writeln!(out, "{}", composer.log().to_json()?)?,
            _ => {
                // Blank lines are rejected by the log and dropped silently.
                if let Ok(message) = composer.send_text(line.as_str()) {
                    writeln!(out, "{}", TranscriptEntry::from_message(&message))?;
                }
            }
        }
    }

    info!(messages = composer.log().len(), "Session closed");
    Ok(())
}
