use dioxus::prelude::*;

use crate::utils::error::Result;

/// State of a one-shot API call
#[derive(Clone)]
pub struct ApiState<T: Clone + 'static> {
    pub loading: Signal<bool>,
    pub data: Signal<Option<Result<T>>>,
}

impl<T: Clone + 'static> ApiState<T> {
    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }
}

/// Simple API call hook: starts in the loading state with no data until the
/// caller's effect resolves the request.
pub fn use_api_simple<T: Clone + 'static>() -> ApiState<T> {
    ApiState {
        loading: use_signal(|| true),
        data: use_signal(|| None),
    }
}
