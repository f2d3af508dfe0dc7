use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting news & ico front-end");
    dioxus::launch(Root);
}

/// Page title plus the shared UI.
#[component]
fn Root() -> Element {
    rsx! {
        document::Title { "Tech news & New token sale" }
        {ui::App()}
    }
}
