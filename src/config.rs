use log::Level;

const DEFAULT_REDIRECT_URL: &str = "https://discord.gg/deepsense";

/// Where the last setup step sends the browser. Can be swapped at build
/// time with `DEEPSENSE_REDIRECT_URL`.
pub fn get_redirect_url() -> &'static str {
    option_env!("DEEPSENSE_REDIRECT_URL").unwrap_or(DEFAULT_REDIRECT_URL)
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose console while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Navbar gets the `scrolled` class past this many pixels.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Extra gap kept between the navbar and an anchor target.
pub const ANCHOR_GAP: f64 = 20.0;

/// Pause between clicking an OS card and entering its first step.
pub const BRANCH_REVEAL_DELAY_MS: u32 = 300;

pub const STATUS_REFRESH_INTERVAL_MS: u32 = 30_000;

pub const RIPPLE_LIFETIME_MS: u32 = 600;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
