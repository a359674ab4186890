//! Quizzy - Yew WASM Frontend
//!
//! Single-page client for the quiz-based learning product: playlists,
//! videos, generated quizzes, and the signed-in user's profile.

mod api;
mod app;
mod components;
mod pages;
mod storage;

pub use app::{App, Route};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Starting quizzy frontend");
    yew::Renderer::<App>::new().render();
}
