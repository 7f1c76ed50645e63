//! Application Context
//!
//! Shared state provided via Leptos Context API: the remote client and the
//! current view. There is no URL router; navigation is an in-memory signal.

use leptos::prelude::*;

use crate::api::ApiClient;

/// Which view is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(u64),
}

/// App-wide dependencies provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Remote client, shared by all views
    pub api: ApiClient,
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(api: ApiClient, route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            api,
            route: route.0,
            set_route: route.1,
        }
    }

    /// Navigate to the list view
    pub fn goto_list(&self) {
        self.set_route.set(Route::List);
    }

    /// Navigate to the detail view for one record
    pub fn goto_detail(&self, id: u64) {
        self.set_route.set(Route::Detail(id));
    }
}

/// Get the app context, panicking if `App` has not provided it
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
