fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        log::info!("Starting short URL copy handler");

        let config = short_url_copy::HandlerConfig::default();
        if let Err(e) = short_url_copy::dom::install_when_ready(config) {
            log::error!("Failed to install copy handler: {:#}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("short-url-copy runs in the browser; build it for wasm32-unknown-unknown");
}
