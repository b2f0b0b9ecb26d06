use leptos::prelude::*;

use contracts::domain::User;

/// Session state: the signed-in account, if any. There are no real
/// authentication mechanics behind this; the login page checks credentials
/// against the in-memory user directory.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
