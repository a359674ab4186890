//! Playlist lookup page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Playlists page: open a playlist by its YouTube id.
#[function_component(PlaylistsPage)]
pub fn playlists_page() -> Html {
    let navigator = use_navigator();
    let playlist_id = use_state(String::new);

    let on_input = {
        let playlist_id = playlist_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            playlist_id.set(input.value());
        })
    };

    let on_submit = {
        let playlist_id = playlist_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = playlist_id.trim().to_string();
            if id.is_empty() {
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::PlaylistVideos { playlist_id: id });
            }
        })
    };

    html! {
        <div>
            <h1>{"Playlists"}</h1>

            <form class="filter-bar" onsubmit={on_submit}>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Enter YouTube Playlist ID"
                    value={(*playlist_id).clone()}
                    oninput={on_input}
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={playlist_id.trim().is_empty()}
                >
                    {"Open"}
                </button>
            </form>
        </div>
    }
}
