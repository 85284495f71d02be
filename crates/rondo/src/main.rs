use relm4::prelude::*;
use rondo::config;
use rondo::gui::app::AppModel;
use rondo::sys::runtime;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.rondo.dial");

    app.run::<AppModel>((config, rx));
}
