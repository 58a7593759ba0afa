use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::Redirect;

use crate::{api::AdminClient, config::TOKEN_STORAGE_KEY, router::Route};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

fn read_token() -> Option<String> {
    storage()
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.trim().is_empty())
}

fn write_token(token: Option<&str>) {
    let Some(storage) = storage() else {
        return;
    };
    let _ = match token {
        Some(token) => storage.set_item(TOKEN_STORAGE_KEY, token),
        None => storage.remove_item(TOKEN_STORAGE_KEY),
    };
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Admin capability for the signed-in session.
    pub fn client(&self) -> Option<AdminClient> {
        self.token.as_deref().map(AdminClient::new)
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

pub enum AuthAction {
    SignIn(String),
    SignOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let token = match action {
            AuthAction::SignIn(token) => Some(token),
            AuthAction::SignOut => None,
        };
        write_token(token.as_deref());
        Rc::new(AuthState {
            token,
        })
    }
}

pub type AuthContext = UseReducerHandle<AuthState>;

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(|| AuthState {
        token: read_token(),
    });
    html! {
        <ContextProvider<AuthContext> context={state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminGuardProps {
    pub children: Html,
}

/// Renders its children only with a stored token; otherwise sends the
/// visitor to the login screen.
#[function_component(AdminGuard)]
pub fn admin_guard(props: &AdminGuardProps) -> Html {
    let auth = use_context::<AuthContext>();
    let signed_in = auth.as_ref().is_some_and(|auth| auth.is_signed_in());

    if signed_in {
        props.children.clone()
    } else {
        html! { <Redirect<Route> to={Route::AdminLogin} /> }
    }
}
