use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod forms;
mod hooks;
mod models;
mod pages;
mod store;
mod styles;
mod utils;

use app::App;

fn main() {
    launch(App);
}
