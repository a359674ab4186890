//! Generated quiz page component.

use core_types::Quiz;
use session::Mount;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::Loading;
use crate::storage::browser_session;

/// Properties for VideoQuizPage.
#[derive(Properties, PartialEq)]
pub struct VideoQuizPageProps {
    pub video_id: String,
}

/// Generates a quiz for a video and lists its questions.
#[function_component(VideoQuizPage)]
pub fn video_quiz_page(props: &VideoQuizPageProps) -> Html {
    let quiz = use_state(|| None::<Quiz>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let navigator = use_navigator();

    {
        let quiz = quiz.clone();
        let error = error.clone();
        let loading = loading.clone();

        use_effect_with(props.video_id.clone(), move |video_id| {
            let video_id = video_id.clone();
            let mount = Mount::new();
            loading.set(true);
            error.set(None);

            let task_mount = mount.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::for_session(&browser_session());
                let result = client.generate_quiz(&video_id).await;
                if let Err(e) = &result {
                    log::error!("Error generating quiz for {video_id}: {e}");
                }
                task_mount.deliver(result, |result| {
                    match result {
                        Ok(data) => quiz.set(Some(data)),
                        Err(e) => error.set(Some(e.user_message("Failed to generate quiz"))),
                    }
                    loading.set(false);
                });
            });

            move || mount.release()
        });
    }

    let go_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    if *loading {
        return html! { <Loading label="Generating quiz..." /> };
    }

    if let Some(message) = error.as_ref() {
        return html! {
            <div class="card">
                <p class="error-text">{ message }</p>
                <button class="btn btn-primary" onclick={go_back}>{"Back to Video"}</button>
            </div>
        };
    }

    let Some(quiz) = quiz.as_ref().filter(|q| !q.is_empty()) else {
        return html! {
            <div class="card">
                <p>{"No questions could be generated for this video."}</p>
                <button class="btn btn-primary" onclick={go_back}>{"Back to Video"}</button>
            </div>
        };
    };

    html! {
        <div>
            <div class="card-header">
                <h1>{ format!("Quiz ({} questions)", quiz.len()) }</h1>
                <button class="btn btn-secondary" onclick={go_back}>{"Back to Video"}</button>
            </div>

            { for quiz.questions.iter().enumerate().map(|(idx, question)| {
                html! {
                    <div class="card question" key={idx}>
                        <h2 class="card-title">
                            { format!("{}. {}", idx + 1, question.question) }
                        </h2>
                        <ol class="options">
                            { for question.options.iter().map(|option| html! {
                                <li>{ option }</li>
                            })}
                        </ol>
                    </div>
                }
            })}
        </div>
    }
}
