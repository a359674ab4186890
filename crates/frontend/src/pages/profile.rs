//! Profile page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::TokenBadge;
use crate::storage::browser_session;

/// Shows the cached profile snapshot and lets the user sign out.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile = use_state(|| browser_session().bootstrap_profile());
    let navigator = use_navigator();

    let on_sign_out = Callback::from(move |_: MouseEvent| {
        browser_session().sign_out();
        log::info!("Signed out");
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let Some(user) = profile.as_ref() else {
        return html! {
            <div class="card">
                <p>{"No profile data is stored for this session."}</p>
                <button class="btn btn-secondary" onclick={on_sign_out}>{"Sign Out"}</button>
            </div>
        };
    };

    html! {
        <div>
            <div class="card">
                <div class="card-header">
                    <div>
                        <h1 class="card-title">{ user.display_name() }</h1>
                        <p class="text-secondary">{ &user.email }</p>
                    </div>
                    <button class="btn btn-secondary" onclick={on_sign_out}>{"Sign Out"}</button>
                </div>
            </div>

            <div class="stats-grid">
                <TokenBadge tokens={Some(user.tokens)} label="Token Balance" />
            </div>
        </div>
    }
}
