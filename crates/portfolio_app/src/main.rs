//! Portfolio single-page application.
//!
//! A thin view layer over one GET request: fetch the project list from
//! the backend and render it as cards, with a manual refresh button and
//! cosmetic per-card like counters.
//!
//! The backend base URL is baked in at build time:
//!
//!   PORTFOLIO_API_URL=http://localhost:8000 trunk serve --open

mod app;
mod components;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(App);
}
