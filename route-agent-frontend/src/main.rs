//! Browser frontend for the route agent.
//!
//! Collects a free-text route request, sends it to the routing backend and renders the itinerary
//! it answers with. Built with yew (CSR) and compiled to wasm.

mod app;
mod browser;
mod components;

use app::App;

const ROOT_ELEMENT_ID: &str = "route-agent";

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let window = web_sys::window().expect("Can't find window");
    let document = window.document().expect("Can't find document in window");
    let root = document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .expect("Can't find route-agent root element");

    yew::Renderer::<App>::with_root(root).render();
}
