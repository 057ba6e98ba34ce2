mod bootstrap;

use std::time::Duration;

use anyhow::Result;
use vitals_core::settings::Settings;
use vitals_engine::{EngineConfig, Scenario, SimulatedEngine};
use vitals_runtime::{SessionCommand, SessionDriver};
use vitals_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Vitals Monitor v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Scenario: {}, Theme: {}, Refresh: {}s",
        settings.scenario,
        settings.theme,
        settings.refresh_rate
    );

    let config = EngineConfig::new(
        settings.credential.clone(),
        settings.frame_rate,
        settings.window,
        settings.update_every,
    )?;
    let scenario = Scenario::from_name(&settings.scenario)?;
    let engine = SimulatedEngine::new(config, scenario);

    let driver = SessionDriver::new(
        Box::new(engine),
        Duration::from_secs(u64::from(settings.refresh_rate)),
    );
    let (commands, snapshots, handle) = driver.start();

    let app = App::new(&settings.theme, settings.scenario.clone(), settings.refresh_rate);

    // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the TUI.
    // We also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly, which mirrors an
    // app being sent to the background mid-measurement.
    tokio::select! {
        result = app.run(commands.clone(), snapshots) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; stopping measurement session");
            let _ = commands.send(SessionCommand::Stop).await;
        }
    }

    // Closing the command channel ends the driver loop; joining waits for it
    // so the engine is halted before the process exits.
    drop(commands);
    handle.join().await;

    Ok(())
}
