mod components;
mod draw;
mod state;
mod ui;

use crate::components::stadium_view::StadiumView;
use crate::state::app_settings::AppSettings;
use crate::state::messages::{NetworkRequest, NetworkResponse};
use crate::state::network::NetworkWorker;
use crate::state::view_state::ViewState;
use anyhow::Context;
use log::{LevelFilter, debug, error};
use stadium_api::StadiumStructure;
use stadium_api::client::StadiumApi;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = match parse_args(std::env::args().skip(1), AppSettings::load()) {
        Ok(CliAction::Run(settings)) => settings,
        Ok(CliAction::Help) => {
            println!("{}", usage_text());
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("stadium-view {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("{message}\n\n{}", usage_text());
            std::process::exit(2);
        }
    };

    better_panic::install();

    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .init();

    let view = mount_view(StadiumApi::with_base_url(settings.base_url.as_str())).await?;

    let html = view.render().to_html();
    match &settings.output {
        Some(path) => std::fs::write(path, &html)
            .with_context(|| format!("could not write {}", path.display()))?,
        None => println!("{html}"),
    }

    if settings.summary
        && let Some(structure) = view.state().data.as_ref()
    {
        eprint!("{}", summary_text(structure));
    }

    Ok(())
}

/// Attach a fresh view, serve its one request on the network worker and return it settled.
async fn mount_view(client: StadiumApi) -> anyhow::Result<StadiumView> {
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(1);
    let (network_resp_tx, mut network_resp_rx) = mpsc::channel::<NetworkResponse>(1);

    let network_worker = NetworkWorker::new(client, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    let mut view = StadiumView::new(Box::new(|state: &ViewState| {
        debug!("render: {}", draw::draw(state).text_content());
    }));

    if let Some(request) = view.on_attach() {
        network_req_tx
            .send(request)
            .await
            .context("network worker is not running")?;
    }

    while !view.is_settled() {
        let Some(response) = network_resp_rx.recv().await else {
            error!("network worker exited before answering");
            anyhow::bail!("network worker exited before answering");
        };
        view.on_response(response);
    }

    drop(network_req_tx);
    network_task.abort();
    Ok(view)
}

#[derive(Debug, PartialEq)]
enum CliAction {
    Run(AppSettings),
    Help,
    Version,
}

fn parse_args(
    args: impl IntoIterator<Item = String>,
    mut settings: AppSettings,
) -> Result<CliAction, String> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "-v" | "--verbose" => settings.log_level = LevelFilter::Debug,
            "--summary" => settings.summary = true,
            "--url" => {
                let url = args.next().ok_or("--url needs a value")?;
                settings.base_url = url;
            }
            "-o" | "--output" => {
                let path = args.next().ok_or("--output needs a value")?;
                settings.output = Some(PathBuf::from(path));
            }
            _ => return Err(format!("Unknown argument: {arg}")),
        }
    }
    Ok(CliAction::Run(settings))
}

fn usage_text() -> &'static str {
    "stadium-view - render a stadium's seating structure as HTML

Usage:
  stadium-view [--url <base>] [--output <file>] [--summary] [--verbose]
  stadium-view --help
  stadium-view --version

Options:
  --url <base>         Server base URL (default http://localhost:8080)
  -o, --output <file>  Write the HTML to a file instead of stdout
  --summary            Print seat counts per zone to stderr
  -v, --verbose        Log at debug level

Environment:
  STADIUM_API_URL      Server base URL, overridden by --url
  RUST_LOG             Log filter"
}

/// One line per zone: total seats, then the count for each status label.
fn summary_text(structure: &StadiumStructure) -> String {
    let mut out = String::new();
    for zone in &structure.zonas {
        let counts: Vec<String> = zone
            .state_counts()
            .into_iter()
            .map(|(estado, n)| format!("{estado}: {n}"))
            .collect();
        out.push_str(&format!(
            "Zona {}: {} asientos ({})\n",
            zone.nombre,
            zone.seat_count(),
            counts.join(", ")
        ));
    }
    out
}
