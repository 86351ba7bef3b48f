//! Bricker entry point
//!
//! Loads the settings, builds the first board and prints its census. The
//! interactive loop runs inside a host runtime that drives `Session`.

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_PATH: &str = "bricker.json";

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bricker::settings::BoardSize;
    use bricker::sim::{BoardSummary, asset_paths};
    use bricker::{Session, Settings};

    env_logger::init();
    log::info!("Bricker (native) starting...");

    let mut settings = Settings::load(SETTINGS_PATH).unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        Settings::default()
    });

    // `bricker <bricks per row> <rows>`
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        settings.board = BoardSize::from_args(&args);
    }

    log::debug!("Host assets: {}", asset_paths().join(", "));

    let session = Session::new(settings);
    let summary = BoardSummary::of(session.state());
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize board summary: {}", e),
    }

    log::info!("Interactive play requires a host runtime driving Session::update");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host runtime embeds the library directly
}
