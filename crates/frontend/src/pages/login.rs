//! Login page component.

use web_types::LoginRequest;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::app::Route;
use crate::storage::browser_session;

/// Email/password form that stores the returned session.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let credentials = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();

            submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::from_build_env().login(&credentials).await {
                    Ok(resp) => match resp.token.as_deref().filter(|t| !t.is_empty()) {
                        Some(token) => {
                            if let Err(e) = browser_session().sign_in(token, resp.user.as_ref()) {
                                log::error!("Failed to store session: {e}");
                                error.set(Some("Could not save your session.".to_string()));
                            } else if let Some(navigator) = &navigator {
                                navigator.push(&Route::Dashboard);
                            }
                        }
                        None => {
                            log::error!("Login succeeded without a token");
                            error.set(Some("Login failed".to_string()));
                        }
                    },
                    Err(e) => {
                        log::warn!("Login failed: {e}");
                        error.set(Some(e.user_message("Login failed")));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="card login">
            <h1>{"Sign In"}</h1>

            if let Some(message) = error.as_ref() {
                <p class="error-text">{ message }</p>
            }

            <form onsubmit={on_submit}>
                <input
                    type="email"
                    class="search-input"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <input
                    type="password"
                    class="search-input"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Signing in..." } else { "Sign In" } }
                </button>
            </form>
        </div>
    }
}
