mod components;
mod config;

use components::app::App;

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    tracing::info!("Koji Copenhagen front-end starting");
    dioxus::launch(App);
}
