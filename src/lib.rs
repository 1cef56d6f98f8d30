//! Discord ping alias lookup widget

pub mod api;
pub mod app;
pub mod state;

pub use app::AliasLookupApp;

/// Canvas element the wasm build mounts onto. The hosting page must supply it.
pub const CANVAS_ID: &str = "discord_name_canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    wasm_bindgen_futures::spawn_local(async {
        // Locate the canvas up front so a misconfigured page fails with a
        // clear message instead of a blank widget.
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document available");
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .unwrap_or_else(|| panic!("canvas element #{CANVAS_ID} missing from page"))
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .unwrap_or_else(|_| panic!("element #{CANVAS_ID} is not a canvas"));

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(AliasLookupApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
