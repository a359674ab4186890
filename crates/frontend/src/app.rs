//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::UserProtected;
use crate::pages::{
    DashboardPage, LeaderboardPage, LoginPage, PlaylistVideosPage, PlaylistsPage, ProfilePage,
    RewardsPage, VideoQuizPage,
};

/// Application routes.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/playlists")]
    Playlists,
    #[at("/playlist/:playlist_id")]
    PlaylistVideos { playlist_id: String },
    #[at("/quiz/:video_id")]
    VideoQuiz { video_id: String },
    #[at("/rewards")]
    Rewards,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether the route sits behind the session check.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }
}

/// Wrap a view in the session check, redirecting to login when signed out.
fn protected(view: Html) -> Html {
    let fallback = html! { <Redirect<Route> to={Route::Login} /> };

    html! {
        <UserProtected {fallback}>
            { view }
        </UserProtected>
    }
}

/// Route switch function.
fn switch(route: Route) -> Html {
    let requires_auth = route.requires_auth();

    let view = match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Playlists => html! { <PlaylistsPage /> },
        Route::PlaylistVideos { playlist_id } => {
            html! { <PlaylistVideosPage {playlist_id} /> }
        }
        Route::VideoQuiz { video_id } => html! { <VideoQuizPage {video_id} /> },
        Route::Rewards => html! { <RewardsPage /> },
        Route::Leaderboard => html! { <LeaderboardPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    };

    if requires_auth {
        protected(view)
    } else {
        view
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Navbar />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Top navigation bar.
#[function_component(Navbar)]
fn navbar() -> Html {
    let current = use_route::<Route>();

    let link = |to: Route, label: &'static str| {
        let class = if current.as_ref() == Some(&to) {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <li>
                <Link<Route> {to} classes={classes!(class)}>{ label }</Link<Route>>
            </li>
        }
    };

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"Quizzy"}
            </Link<Route>>
            <ul class="nav-links">
                { link(Route::Dashboard, "Home") }
                { link(Route::Playlists, "Playlists") }
                { link(Route::Rewards, "Rewards") }
                { link(Route::Leaderboard, "Leaderboard") }
                { link(Route::Profile, "Profile") }
            </ul>
        </nav>
    }
}
