mod config;
mod logging;
mod ui;

use std::process::ExitCode;

use config::AppConfig;
use flower_browser_adapters::{
    present_catalog_row, present_state, present_step_json, present_view, ImageCrateArtworkLoader,
};
use flower_browser_application::{
    BrowserService, CurrentViewQuery, DispatchIntentCommand, FlowerView, Intent,
    ListCatalogQuery,
};
use flower_browser_domain::FlowerCatalog;
use tracing::error;

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(msg) => {
            error!("invalid configuration: {msg}");
            return ExitCode::from(2);
        }
    };

    let service = build_browser_service(&config);
    let command = parse_command(&args);
    match run_command(command, service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            error!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_browser_service(config: &AppConfig) -> BrowserService {
    BrowserService::new(
        FlowerCatalog::builtin(),
        Box::new(ImageCrateArtworkLoader::new(
            config.asset_dir.clone(),
            config.max_artwork_edge,
        )),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    List,
    Show { json: bool },
    Replay { intents: Vec<Intent>, json: bool },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui);
    }

    let rest = &args[2..];
    let json = rest.iter().any(|arg| arg == "--json");
    match args[1].as_str() {
        "ui" => Ok(Command::Ui),
        "list" => Ok(Command::List),
        "show" => Ok(Command::Show { json }),
        "replay" => {
            let intents = rest
                .iter()
                .filter(|arg| arg.as_str() != "--json")
                .map(|arg| parse_intent(arg))
                .collect::<Result<Vec<_>, _>>()?;
            if intents.is_empty() {
                return Err(CommandError::Usage("missing intents to replay".to_string()));
            }
            Ok(Command::Replay { intents, json })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_intent(value: &str) -> Result<Intent, CommandError> {
    match value {
        "prev" | "previous" => Ok(Intent::PreviousPressed),
        "next" => Ok(Intent::NextPressed),
        "tap" => Ok(Intent::ImageTapped),
        other => Err(CommandError::Usage(format!("unknown intent: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    mut service: BrowserService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Ui => ui::launch_window(service, config).map_err(CommandError::Runtime),
        Command::List => {
            for entry in service.catalog_entries(ListCatalogQuery) {
                println!("{}", present_catalog_row(&entry));
            }
            Ok(())
        }
        Command::Show { json } => {
            let view = service.current_view(CurrentViewQuery);
            print_step(0, &service, &view, json)
        }
        Command::Replay { intents, json } => {
            let view = service.current_view(CurrentViewQuery);
            print_step(0, &service, &view, json)?;
            for (index, intent) in intents.into_iter().enumerate() {
                let view = service.dispatch(DispatchIntentCommand { intent });
                print_step(index + 1, &service, &view, json)?;
            }
            Ok(())
        }
    }
}

fn print_step(
    step: usize,
    service: &BrowserService,
    view: &FlowerView,
    json: bool,
) -> Result<(), CommandError> {
    let state = service.state();
    if json {
        let line = present_step_json(step, &state, view)
            .map_err(|error| CommandError::Runtime(format!("json encoding failed: {error}")))?;
        println!("{line}");
    } else {
        println!("#{step} {}", present_state(&state));
        println!("{}", present_view(view));
    }
    Ok(())
}

fn print_usage() {
    println!("usage:");
    println!("  flower-browser ui");
    println!("  flower-browser list");
    println!("  flower-browser show [--json]");
    println!("  flower-browser replay <prev|next|tap>... [--json]");
}
