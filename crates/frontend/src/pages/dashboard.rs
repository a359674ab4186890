//! Dashboard page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::TokenBadge;
use crate::storage::browser_session;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let profile = use_state(|| browser_session().bootstrap_profile());

    let greeting = match profile.as_ref() {
        Some(p) if !p.full_name.first_name.is_empty() => {
            format!("Welcome back, {}!", p.full_name.first_name)
        }
        _ => "Welcome back!".to_string(),
    };

    html! {
        <div>
            <div class="card welcome">
                <h1>{ greeting }</h1>
                <p class="text-secondary">{"Ready to continue your learning journey?"}</p>
            </div>

            <div class="stats-grid">
                <TokenBadge tokens={profile.as_ref().map(|p| p.tokens)} label="Tokens" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Quick Actions"}</h2>
                </div>
                <div style="display: flex; gap: 1rem;">
                    <Link<Route> to={Route::Playlists} classes="btn btn-primary">
                        {"Browse Playlists"}
                    </Link<Route>>
                    <Link<Route> to={Route::Leaderboard} classes="btn btn-secondary">
                        {"View Leaderboard"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
