use crate::app::App;

mod app;
mod components;
mod http;
mod logger;
mod tops_sheet;

fn main() {
    logger::init();
    yew::Renderer::<App>::new().render();
}
