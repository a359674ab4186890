//! Authentication gate for protected routes.

use session::{AuthState, Guard, Mount};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::Loading;
use crate::storage::browser_session;

/// Properties for UserProtected component.
#[derive(Properties, PartialEq)]
pub struct UserProtectedProps {
    pub children: Html,
    /// Rendered once the session is known to be signed out
    #[prop_or_default]
    pub fallback: Html,
}

/// Which subtree the gate shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Loading,
    Children,
    Fallback,
}

impl From<AuthState> for Gate {
    fn from(state: AuthState) -> Self {
        match state {
            AuthState::Checking => Gate::Loading,
            AuthState::Authenticated => Gate::Children,
            AuthState::Unauthenticated => Gate::Fallback,
        }
    }
}

/// Renders `children` only after the stored token has been verified.
///
/// The check runs once per mount. The component does not navigate; the
/// router decides what `fallback` is.
#[function_component(UserProtected)]
pub fn user_protected(props: &UserProtectedProps) -> Html {
    let auth = use_state(|| AuthState::initial(&browser_session()));

    {
        let auth = auth.clone();
        let initial = *auth;

        use_effect_with((), move |_| {
            let mount = Mount::new();

            if initial == AuthState::Checking {
                let task_mount = mount.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let guard = Guard::new(browser_session(), ApiClient::from_build_env());
                    guard
                        .check_mounted(&task_mount, |state| auth.set(state))
                        .await;
                });
            }

            move || mount.release()
        });
    }

    match Gate::from(*auth) {
        Gate::Loading => html! { <Loading label="Checking your session..." /> },
        Gate::Children => props.children.clone(),
        Gate::Fallback => props.fallback.clone(),
    }
}
