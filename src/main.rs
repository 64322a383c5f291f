use std::sync::Arc;

use anyhow::Context as _;
use gpui::{App, Application};

use display_picker::SelectionSession;
use display_picker::automation::hand_off;
use display_picker::config::{Config, load_config};
use display_picker::monitor::DisplayInventory;
use display_picker::ui::open_picker;

/// Enumerate displays through the platform the app runs on.
#[cfg(windows)]
fn enumerate_live(_cx: &App) -> display_picker::Result<DisplayInventory> {
    DisplayInventory::enumerate(&display_picker::monitor::Win32Host)
}

#[cfg(not(windows))]
fn enumerate_live(cx: &App) -> display_picker::Result<DisplayInventory> {
    DisplayInventory::enumerate(&display_picker::monitor::GpuiHost::new(cx))
}

fn launch(cx: &mut App, config: &Config) -> anyhow::Result<()> {
    let inventory = match config.static_host() {
        Some(host) => {
            log::info!("Using display layout from config");
            DisplayInventory::enumerate(&host)
        }
        None => enumerate_live(cx),
    }
    .context("No usable displays")?;

    log::info!("Found {} display(s):", inventory.len());
    for (i, device) in inventory.devices().iter().enumerate() {
        log::info!(
            "  [{}] {} ({}) {}x{} at ({}, {})",
            i,
            device.id,
            device.name,
            device.resolution.width,
            device.resolution.height,
            device.origin.x,
            device.origin.y,
        );
    }

    let labels = inventory.labels().context("Cannot label displays")?;
    let inventory = Arc::new(inventory);
    let session = Arc::new(SelectionSession::new());

    open_picker(cx, inventory.clone(), labels, session.clone(), config)?;

    // Closing the picker without pressing Set ends the app.
    let close_session = session.clone();
    cx.on_window_closed(move |cx| {
        if cx.windows().is_empty() && !close_session.is_committed() {
            log::info!("Picker closed without a selection");
            cx.quit();
        }
    })
    .detach();

    let webdriver = config.webdriver.clone();
    cx.spawn(async move |cx| {
        let outcome = cx
            .background_executor()
            .spawn(async move {
                let index = session.await_selection();
                log::info!("Done waiting, display {} selected", index);
                hand_off(&inventory, index, webdriver.as_ref())
            })
            .await;
        let _ = cx.update(|cx| cx.quit());
        if let Err(e) = outcome {
            log::error!("Failed to move automation window: {}", e);
            std::process::exit(1);
        }
    })
    .detach();

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("display-picker v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config();

    Application::new().run(move |cx: &mut App| {
        if let Err(e) = launch(cx, &config) {
            log::error!("{:#}", e);
            cx.quit();
            std::process::exit(1);
        }
    });
}
