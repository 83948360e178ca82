//! Cache-aware fetches for the list, count and detail queries.
//!
//! # Design
//! - A fetch starts only when `begin_fetch` hands out a ticket, so concurrent
//!   requests for one key collapse into a single call.
//! - Results land through the ticket; a logout in between drops them.
//! - Failures are stored on the failing key, where only views of that key see them.

use std::rc::Rc;

use gloo::console;
use pokedex_api_models::ListQuery;
use yew::platform::spawn_local;
use yewdux::prelude::Dispatch;

use crate::core::store::AppStore;
use crate::services::api::ApiClient;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub(crate) fn ensure_list(client: Rc<ApiClient>, query: ListQuery) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut ticket = None;
    dispatch.reduce_mut(|store| ticket = store.cache.lists.begin_fetch(&query, now_ms()));
    let Some(ticket) = ticket else {
        return;
    };
    spawn_local(async move {
        let result = client.list(&query).await;
        dispatch.reduce_mut(|store| match result {
            Ok(list) => {
                if store.cache.lists.complete(&query, list, ticket, now_ms()) {
                    store.sync_cursor();
                }
            }
            Err(err) => {
                store.cache.lists.fail(&query, ticket, err.user_message(), now_ms());
            }
        });
    });
}

pub(crate) fn ensure_count(client: Rc<ApiClient>) {
    let probe = ListQuery::count_probe();
    let dispatch = Dispatch::<AppStore>::new();
    let mut ticket = None;
    dispatch.reduce_mut(|store| ticket = store.cache.counts.begin_fetch(&probe, now_ms()));
    let Some(ticket) = ticket else {
        return;
    };
    spawn_local(async move {
        let result = client.list(&probe).await;
        dispatch.reduce_mut(|store| match result {
            Ok(list) => {
                if store.cache.counts.complete(&probe, list.count, ticket, now_ms()) {
                    store.sync_cursor();
                }
            }
            Err(err) => {
                store.cache.counts.fail(&probe, ticket, err.user_message(), now_ms());
                console::warn!(format!("count query failed: {}", err.user_message()));
            }
        });
    });
}

pub(crate) fn ensure_detail(client: Rc<ApiClient>, id: u32) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut ticket = None;
    dispatch.reduce_mut(|store| ticket = store.cache.details.begin_fetch(&id, now_ms()));
    let Some(ticket) = ticket else {
        return;
    };
    spawn_local(async move {
        let result = client.detail(id).await;
        dispatch.reduce_mut(|store| match result {
            Ok(detail) => {
                store.cache.details.complete(&id, detail, ticket, now_ms());
            }
            Err(err) => {
                store.cache.details.fail(&id, ticket, err.user_message(), now_ms());
            }
        });
    });
}
