use wanderlust::config::CONFIG;
use wanderlust::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Wanderlust starting (API: {})", CONFIG.base_api);

    yew::Renderer::<App>::new().render();
}
