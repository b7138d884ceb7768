use crate::components::toast::notify;
use dioxus::prelude::*;
use dioxus_primitives::toast::Toasts;
use rbac::table::{
    FetchDescriptor, ListPage, TableAction, TableRow, TableStore, TableView, dispatch,
};
use rbac::{Notification, NotificationVariant};
use std::future::Future;

/// Runs `fetch` for `descriptor` and lands the result in `store` unless a
/// newer fetch was started in the meantime.
pub fn start_fetch<R, F, Fut>(
    mut store: Signal<TableStore<R>>,
    toaster: Toasts,
    descriptor: FetchDescriptor,
    fetch: F,
) where
    R: Clone + 'static,
    F: FnOnce(FetchDescriptor) -> Fut + 'static,
    Fut: Future<Output = rbac::Result<ListPage<R>>> + 'static,
{
    let id = store.write().begin(&descriptor);
    spawn(async move {
        let result = fetch(descriptor).await;
        let failure = result.as_ref().err().map(ToString::to_string);
        if store.write().complete(id, result) {
            if let Some(error) = failure {
                notify(
                    &toaster,
                    Notification::new(NotificationVariant::Danger, "Failed to load data")
                        .with_description(error),
                );
            }
        }
    });
}

/// Applies a table interaction to `store`; returns the fetch it queued, if any.
pub fn apply_action<R: Clone + TableRow + 'static>(
    mut store: Signal<TableStore<R>>,
    base: &TableView,
    action: TableAction,
) -> Option<FetchDescriptor> {
    let view = store.read().view(base.clone());
    let mut state = store.write();
    dispatch(&view, action, &mut *state);
    state.take_pending()
}

/// Current view of `store`, flagged as unavailable after a failed load
pub fn current_view<R: Clone + TableRow + 'static>(
    store: Signal<TableStore<R>>,
    base: TableView,
) -> TableView {
    let state = store.read();
    let mut view = state.view(base);
    if state.error().is_some() && state.items().is_empty() {
        view.no_data = true;
        view.no_data_description = vec![
            "The list could not be loaded.".to_string(),
            "Try again later.".to_string(),
        ];
    }
    view
}
