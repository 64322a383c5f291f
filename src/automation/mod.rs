pub mod webdriver;

pub use webdriver::{WebDriverClient, WindowRect};

use crate::config::WebDriverConfig;
use crate::error::Result;
use crate::monitor::{DisplayInventory, Point};

/// Anything that can move its window's top-left corner to a screen point.
pub trait WindowPositioner {
    fn set_window_position(&self, position: Point) -> Result<()>;
}

/// Move the positioner's window to the top-left corner of display `index`.
///
/// Exactly one positioning request is made. A rejected request is returned
/// as-is; there is no retry and no fallback display.
pub fn move_window_to_display<P>(
    inventory: &DisplayInventory,
    index: usize,
    positioner: &P,
) -> Result<Point>
where
    P: WindowPositioner + ?Sized,
{
    let top_left = inventory.top_left_corner(index)?;
    log::debug!("Moving automation window to display {} at {:?}", index, top_left);
    positioner.set_window_position(top_left)?;
    Ok(top_left)
}

/// Act on a committed selection.
///
/// With a WebDriver remote end configured, its browser window is moved to
/// the chosen display and the optional start page is loaded. Without one,
/// the selection is only reported on stdout.
pub fn hand_off(
    inventory: &DisplayInventory,
    index: usize,
    webdriver: Option<&WebDriverConfig>,
) -> Result<Point> {
    let Some(webdriver) = webdriver else {
        let top_left = inventory.top_left_corner(index)?;
        let label = inventory.label(index)?;
        log::info!("No WebDriver configured; selected {}", label);
        println!("{}\t{}\t{}", label, top_left.x, top_left.y);
        return Ok(top_left);
    };

    let client = WebDriverClient::connect(webdriver)?;
    let top_left = move_window_to_display(inventory, index, &client)?;
    if let Some(url) = &webdriver.start_url {
        client.navigate(url)?;
    }
    log::info!(
        "WebDriver session {} moved to ({}, {})",
        client.session_id(),
        top_left.x,
        top_left.y
    );
    println!("{}", client.session_id());
    Ok(top_left)
}
