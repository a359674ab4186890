//! Playlist entry card.

use core_types::Video;
use yew::prelude::*;

/// Properties for VideoCard component.
#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    #[prop_or_default]
    pub active: bool,
    pub on_select: Callback<Video>,
}

/// Thumbnail and title of one video; clicking selects it.
#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    let onclick = {
        let video = video.clone();
        props.on_select.reform(move |_: MouseEvent| video.clone())
    };

    let class = if props.active {
        "video-card active"
    } else {
        "video-card"
    };

    html! {
        <div {class} {onclick}>
            <img src={video.thumbnail_url()} alt={video.title.clone()} />
            <div class="video-info">
                <div class="video-title">{ &video.title }</div>
                <div class="video-description">{ &video.description }</div>
            </div>
        </div>
    }
}
