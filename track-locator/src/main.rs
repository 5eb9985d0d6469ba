use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use track_locator::network::load_network;
use track_locator::service::{LocationHintService, LocoQuery};
use track_locator::settings::Settings;

/// How often the hint is refreshed in watch mode.
const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Print the location hint for a locomotive on a rail network.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Rail network JSON file.
    network: PathBuf,

    /// Locomotive query JSON file.
    query: PathBuf,

    /// Settings JSON file; defaults are used if it does not exist.
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,

    /// Re-read the query every second and print the hint when it changes.
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let settings = match Settings::load(&args.settings) {
        Ok(settings) => settings,
        Err(e) => {
            error!(path = %args.settings.display(), error = %e, "Failed to load settings");
            return ExitCode::FAILURE;
        }
    };

    let loaded = match load_network(&args.network) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(path = %args.network.display(), error = %e, "Failed to load network");
            return ExitCode::FAILURE;
        }
    };
    info!(
        tracks = loaded.network.len(),
        stations = loaded.stations.len(),
        "Loaded rail network"
    );

    let service = LocationHintService::new(loaded, settings);

    if !args.watch {
        return match render(&service, &args.query) {
            Ok(hint) => {
                println!("{hint}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to build hint");
                ExitCode::FAILURE
            }
        };
    }

    // Watch mode: the query file is rewritten by the game exporter, so
    // re-read it on every tick. A bad tick is logged and skipped.
    let mut last = None;
    watch(
        || match render(&service, &args.query) {
            Ok(hint) => {
                if last.as_ref() != Some(&hint) {
                    println!("{hint}");
                    println!();
                    last = Some(hint);
                }
            }
            Err(e) => error!(error = %e, "Failed to build hint"),
        },
        tokio::signal::ctrl_c(),
    )
    .await;
    ExitCode::SUCCESS
}

/// Call `on_tick` every [`REFRESH_INTERVAL`] until `shutdown` completes.
///
/// `shutdown` is polled across ticks, so a signal that arrives while
/// `on_tick` runs is seen on the next pass.
async fn watch<S: Future>(mut on_tick: impl FnMut(), shutdown: S) {
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = interval.tick() => on_tick(),
            _ = &mut shutdown => return,
        }
    }
}

fn render(
    service: &LocationHintService,
    query_path: &Path,
) -> Result<String, track_locator::service::HintError> {
    let query = LocoQuery::load(query_path)?;
    service.hint(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("track-locator").chain(list.iter().copied()))
    }

    #[test]
    fn parse_positional_only() {
        let parsed = args(&["net.json", "loco.json"]).unwrap();
        assert_eq!(parsed.network, PathBuf::from("net.json"));
        assert_eq!(parsed.query, PathBuf::from("loco.json"));
        assert_eq!(parsed.settings, PathBuf::from("settings.json"));
        assert!(!parsed.watch);
    }

    #[test]
    fn parse_flags() {
        let parsed = args(&["--watch", "net.json", "--settings", "s.json", "loco.json"]).unwrap();
        assert!(parsed.watch);
        assert_eq!(parsed.settings, PathBuf::from("s.json"));
        assert_eq!(parsed.network, PathBuf::from("net.json"));
        assert_eq!(parsed.query, PathBuf::from("loco.json"));
    }

    #[test]
    fn parse_errors() {
        assert!(args(&["net.json"]).is_err());
        assert!(args(&["a", "b", "c"]).is_err());
        assert!(args(&["a", "b", "--settings"]).is_err());
        assert!(args(&["a", "b", "--verbose"]).is_err());
    }

    #[tokio::test]
    async fn watch_stops_on_shutdown_raised_during_tick() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let mut tx = Some(tx);
        let mut ticks = 0;

        watch(
            || {
                ticks += 1;
                if let Some(tx) = tx.take() {
                    tx.send(()).unwrap();
                }
            },
            rx,
        )
        .await;

        assert_eq!(ticks, 1);
    }

    #[test]
    fn args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
