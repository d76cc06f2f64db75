use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

use critterfacts_web::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    // No wall clock on wasm32; timestamps come from the console instead.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
