//! Playlist videos page component.

use core_types::{Playlist, Video};
use session::Mount;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::{Loading, VideoCard};
use crate::storage::browser_session;

/// Properties for PlaylistVideosPage.
#[derive(Properties, PartialEq)]
pub struct PlaylistVideosPageProps {
    pub playlist_id: String,
}

/// Player for the selected video plus the rest of the playlist.
#[function_component(PlaylistVideosPage)]
pub fn playlist_videos_page(props: &PlaylistVideosPageProps) -> Html {
    let playlist = use_state(|| None::<Playlist>);
    let selected = use_state(|| None::<Video>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let playlist = playlist.clone();
        let selected = selected.clone();
        let error = error.clone();
        let loading = loading.clone();

        use_effect_with(props.playlist_id.clone(), move |playlist_id| {
            let playlist_id = playlist_id.clone();
            let mount = Mount::new();
            loading.set(true);
            error.set(None);

            let task_mount = mount.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::for_session(&browser_session());
                let result = client.playlist_videos(&playlist_id).await;
                if let Err(e) = &result {
                    log::error!("Failed to fetch playlist {playlist_id}: {e}");
                }
                task_mount.deliver(result, |result| {
                    match result {
                        Ok(data) => {
                            selected.set(data.first_video().cloned());
                            playlist.set(Some(data));
                        }
                        Err(e) => error.set(Some(e.user_message("Failed to fetch playlist"))),
                    }
                    loading.set(false);
                });
            });

            move || mount.release()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |video: Video| selected.set(Some(video)))
    };

    let back = html! {
        <Link<Route> to={Route::Playlists} classes="btn btn-secondary">
            {"Back to Playlists"}
        </Link<Route>>
    };

    if *loading {
        return html! { <Loading label="Loading playlist..." /> };
    }

    if let Some(message) = error.as_ref() {
        return html! {
            <div class="card">
                <p class="error-text">{ message }</p>
                { back }
            </div>
        };
    }

    let Some(data) = playlist.as_ref().filter(|p| !p.videos.is_empty()) else {
        return html! {
            <div class="card">
                <p>{"This playlist has no videos."}</p>
                { back }
            </div>
        };
    };

    let selected_id = selected.as_ref().map(|v| v.id.clone());

    html! {
        <div>
            <div class="card-header">
                <h1>{ data.title.clone().unwrap_or_else(|| "Playlist".to_string()) }</h1>
                { back }
            </div>

            if let Some(video) = selected.as_ref() {
                <div class="card">
                    <div class="video-player">
                        <iframe
                            src={video.embed_url()}
                            title={video.title.clone()}
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen={true}
                        />
                    </div>
                    <h2 class="card-title">{ &video.title }</h2>
                    <p class="text-secondary">{ &video.description }</p>
                    <Link<Route>
                        to={Route::VideoQuiz { video_id: video.id.clone() }}
                        classes="btn btn-primary"
                    >
                        {"Take Quiz"}
                    </Link<Route>>
                </div>
            }

            <div class="video-grid">
                { for data.videos.iter().map(|video| {
                    let active = selected_id.as_deref() == Some(video.id.as_str());
                    html! {
                        <VideoCard
                            key={video.id.clone()}
                            video={video.clone()}
                            {active}
                            on_select={on_select.clone()}
                        />
                    }
                })}
            </div>
        </div>
    }
}
