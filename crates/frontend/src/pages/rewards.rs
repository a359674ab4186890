//! Rewards page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::TokenBadge;
use crate::storage::browser_session;

/// Token balance available for redemption.
#[function_component(RewardsPage)]
pub fn rewards_page() -> Html {
    let profile = use_state(|| browser_session().bootstrap_profile());
    let balance = profile.as_ref().map(|p| p.tokens);

    html! {
        <div>
            <h1>{"Rewards"}</h1>
            <p class="text-secondary">{"Redeem your tokens for exclusive rewards!"}</p>

            <div class="stats-grid">
                <TokenBadge tokens={balance} label="Available Tokens" />
            </div>

            <div class="card">
                <p>{"Complete quizzes to earn more tokens."}</p>
                <Link<Route> to={Route::Playlists} classes="btn btn-primary">
                    {"Find a Playlist"}
                </Link<Route>>
            </div>
        </div>
    }
}
