use dioxus::{logger::tracing::Level, prelude::*};

use rag_dashboard::{App, config::AppConfig};

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("could not start logger: {e}");
    }
    LaunchBuilder::new()
        .with_context(AppConfig::default())
        .launch(App)
}
