//! Leaderboard page component.

use yew::prelude::*;

use crate::components::format_tokens;
use crate::storage::browser_session;

/// Leaderboard page: shows where the signed-in user stands.
#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    let profile = use_state(|| browser_session().bootstrap_profile());

    html! {
        <div>
            <h1>{"Leaderboard"}</h1>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Your Standing"}</h2>
                </div>
                if let Some(user) = profile.as_ref() {
                    <div class="leaderboard-row">
                        <span class="leaderboard-name">{ user.display_name() }</span>
                        <span class="leaderboard-tokens">{ format!("{} tokens", format_tokens(user.tokens)) }</span>
                    </div>
                } else {
                    <p>{"Sign in again to see your standing."}</p>
                }
            </div>
        </div>
    }
}
