mod config;

use std::{borrow::Cow, env, io, process};

use config::{AppConfig, OutputFormat};
use tracing_subscriber::EnvFilter;
use tripsettle_application::SettlementService;
use tripsettle_infrastructure::JsonTripStore;
use tripsettle_presentation::{ReportExport, SettlementPresenter, format_service_error};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env(env::args().skip(1)).map_err(|err| err.to_string())?;

    let store = JsonTripStore::open(&config.export_path).map_err(|err| err.to_string())?;
    let trip_id = match config.trip_id {
        Some(trip_id) => trip_id,
        None => store
            .first_trip_id()
            .cloned()
            .ok_or("The export contains no trips")?,
    };
    tracing::info!(
        "Settling trip {} from {}",
        trip_id,
        config.export_path.display()
    );

    let settlement = SettlementService::new(&store)
        .generate_report(&trip_id)
        .map_err(|err| {
            tracing::error!("Failed to settle trip {}: {:?}", trip_id, err);
            format!(
                "{}: {}",
                tripsettle_i18n::SETTLEMENT_CALCULATION_FAILED,
                format_service_error(&err)
            )
        })?;

    match config.output {
        OutputFormat::Text => {
            if let Some(name) = store.trip_name(&trip_id) {
                println!("{name}\n");
            }
            let view = SettlementPresenter::render_with_members(
                &settlement.report,
                &settlement.members,
            );
            print!("{view}");
        }
        OutputFormat::Json => {
            let export = ReportExport::from_report(&settlement.report, &settlement.members);
            let json = serde_json::to_string_pretty(&export)
                .map_err(|err| format!("Failed to serialize report: {err}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
