use client::directory::{DELETE_ERROR, LOAD_ERROR};
use client::{ApiClient, UserDirectory};
use pretty_assertions::assert_eq;
use shared_types::{UpdateUserRequest, UserStatus};

use crate::common::{self, StubBackend};

/// Fetch whatever page `dir` last asked for, the way the admin view does.
async fn load(
    api: &ApiClient,
    token: &str,
    dir: &mut UserDirectory,
    request: client::PageRequest,
) {
    let result = api.list_users(token, request.page, request.limit).await;
    assert!(dir.apply(&request, result));
}

#[tokio::test]
async fn test_twenty_five_users_span_three_pages() {
    let backend = StubBackend::start().await;
    backend.seed_users(23);
    let api = backend.client();
    let token = backend.token_for(common::ADMIN_EMAIL);

    let mut dir = UserDirectory::new(10);
    let request = dir.refresh();
    load(&api, &token, &mut dir, request).await;

    assert_eq!(dir.total(), 25);
    assert_eq!(dir.total_pages(), 3);
    assert_eq!(dir.users().len(), 10);
    assert!(dir.controls().prev_disabled());
    assert!(!dir.controls().next_disabled());

    let request = dir.next().unwrap();
    load(&api, &token, &mut dir, request).await;
    let request = dir.next().unwrap();
    load(&api, &token, &mut dir, request).await;

    assert_eq!(dir.page(), 3);
    assert_eq!(dir.users().len(), 5);
    assert!(dir.controls().next_disabled());
    assert!(dir.next().is_none());
    assert_eq!(backend.list_calls(), 3);
}

#[tokio::test]
async fn test_delete_refetches_listing_once() {
    let backend = StubBackend::start().await;
    backend.seed_users(3);
    let api = backend.client();
    let token = backend.token_for(common::ADMIN_EMAIL);

    let mut dir = UserDirectory::new(10);
    let request = dir.refresh();
    load(&api, &token, &mut dir, request).await;
    assert_eq!(dir.total(), 5);
    let victim = dir.users()[4].id;

    let result = api.delete_user(&token, victim).await;
    let refetch = dir.delete_finished(result).unwrap();
    load(&api, &token, &mut dir, refetch).await;

    assert_eq!(backend.delete_calls(), 1);
    assert_eq!(backend.list_calls(), 2);
    assert_eq!(dir.total(), 4);
    assert!(dir.users().iter().all(|u| u.id != victim));
    assert_eq!(dir.error(), None);
}

#[tokio::test]
async fn test_failed_delete_sets_banner_without_refetch() {
    let backend = StubBackend::start().await;
    let api = backend.client();
    let token = backend.token_for(common::ADMIN_EMAIL);

    let mut dir = UserDirectory::new(10);
    let request = dir.refresh();
    load(&api, &token, &mut dir, request).await;

    let result = api.delete_user(&token, 4242).await;
    assert!(dir.delete_finished(result).is_none());
    assert_eq!(dir.error(), Some(DELETE_ERROR));
    assert_eq!(backend.list_calls(), 1);
    assert_eq!(dir.users().len(), 2);
}

#[tokio::test]
async fn test_non_admin_listing_shows_load_error() {
    let backend = StubBackend::start().await;
    let api = backend.client();
    let token = backend.token_for(common::USER_EMAIL);

    let mut dir = UserDirectory::new(10);
    let request = dir.refresh();
    load(&api, &token, &mut dir, request).await;

    assert!(!dir.is_loading());
    assert_eq!(dir.error(), Some(LOAD_ERROR));
    assert!(dir.users().is_empty());
}

#[tokio::test]
async fn test_status_toggle_round_trips_through_listing() {
    let backend = StubBackend::start().await;
    let api = backend.client();
    let token = backend.token_for(common::ADMIN_EMAIL);

    let mut dir = UserDirectory::new(10);
    let request = dir.refresh();
    load(&api, &token, &mut dir, request).await;

    let target = dir
        .users()
        .iter()
        .find(|u| u.email == common::USER_EMAIL)
        .cloned()
        .unwrap();
    assert_eq!(target.status(), UserStatus::Active);

    let update = UpdateUserRequest {
        status: Some(target.status().toggled()),
        ..Default::default()
    };
    let result = api.update_user(&token, target.id, &update).await;
    let refetch = dir.update_finished(result).unwrap();
    load(&api, &token, &mut dir, refetch).await;

    let reloaded = dir.users().iter().find(|u| u.id == target.id).unwrap();
    assert_eq!(reloaded.status(), UserStatus::Inactive);
}

#[tokio::test]
async fn test_deleting_only_row_on_last_page_returns_to_previous_page() {
    let backend = StubBackend::start().await;
    backend.seed_users(19);
    let api = backend.client();
    let token = backend.token_for(common::ADMIN_EMAIL);

    let mut dir = UserDirectory::new(10);
    let request = dir.refresh();
    load(&api, &token, &mut dir, request).await;
    let request = dir.next().unwrap();
    load(&api, &token, &mut dir, request).await;
    let request = dir.next().unwrap();
    load(&api, &token, &mut dir, request).await;
    assert_eq!(dir.page(), 3);
    assert_eq!(dir.users().len(), 1);

    let victim = dir.users()[0].id;
    let result = api.delete_user(&token, victim).await;
    let refetch = dir.delete_finished(result).unwrap();
    load(&api, &token, &mut dir, refetch).await;
    assert!(dir.users().is_empty());

    let back = dir.clamp_page().unwrap();
    load(&api, &token, &mut dir, back).await;
    assert_eq!(dir.page(), 2);
    assert_eq!(dir.total(), 20);
    assert_eq!(dir.users().len(), 10);
    assert_eq!(dir.clamp_page(), None);
}
