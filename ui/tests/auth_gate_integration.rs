//! The console shows the login page, a spinner, or the users page
//! depending on the auth state.

mod common;

use crate::common::TestCtx;
use eyesentry_business::AuthStatus;
use kittest::Queryable;

#[tokio::test]
async fn test_signed_out_shows_login_page() {
    let mut ctx = TestCtx::new_app().await;
    let harness = ctx.harness_mut();
    harness.step();

    assert!(harness.query_by_label_contains("EyeSentry Admin").is_some());
    assert!(harness.query_by_label_contains("Email").is_some());
    assert!(harness.query_by_label_contains("Password").is_some());
    assert!(harness.query_by_label("Sign In").is_some());
    assert!(
        harness.query_by_label("Users").is_none(),
        "gated content must not render while signed out"
    );
}

#[tokio::test]
async fn test_signing_in_shows_spinner() {
    let mut ctx = TestCtx::new_app().await;
    let harness = ctx.harness_mut();
    harness.state_mut().state_mut().auth.start_sign_in();
    harness.step();

    assert!(harness.query_by_label_contains("Signing in").is_some());
    assert!(harness.query_by_label("Sign In").is_none());
}

#[tokio::test]
async fn test_sign_in_loads_users_table() {
    let mut ctx = TestCtx::new_app().await;
    {
        let harness = ctx.harness_mut();
        harness.step();
        let form = &mut harness.state_mut().state_mut().login_form;
        form.email = "admin@eyesentry.app".to_owned();
        form.password = "secret".to_owned();
        harness.step();
        harness.get_by_label("Sign In").click();
    }

    assert!(ctx.wait_for_label("alice@clinic.org").await, "users should load");

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("bob@clinic.org").is_some());
    assert!(harness.query_by_label("2024-03-01").is_some());
    assert!(harness.query_by_label_contains("admin@eyesentry.app").is_some());
    assert!(harness.query_by_label("Sign In").is_none());

    let requests = ctx
        .mock_server()
        .received_requests()
        .await
        .unwrap_or_default();
    let profiles = requests
        .iter()
        .find(|r| r.url.path() == "/rest/v1/profiles")
        .expect("profiles should be requested");
    assert_eq!(
        profiles
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer access-token")
    );
}

#[tokio::test]
async fn test_rejected_credentials_show_error() {
    let mut ctx = TestCtx::new_app().await;
    {
        let harness = ctx.harness_mut();
        harness.step();
        let form = &mut harness.state_mut().state_mut().login_form;
        form.email = "admin@eyesentry.app".to_owned();
        form.password = "wrong".to_owned();
        harness.step();
        harness.get_by_label("Sign In").click();
    }

    assert!(ctx.wait_for_label("Invalid login credentials").await);
    let harness = ctx.harness_mut();
    assert!(matches!(
        harness.state().state().auth.status,
        AuthStatus::Failed(_)
    ));
    assert!(harness.query_by_label("Sign In").is_some());
}

#[tokio::test]
async fn test_sign_out_returns_to_login() {
    let mut ctx = TestCtx::new_app().await;
    {
        let harness = ctx.harness_mut();
        harness.step();
        let form = &mut harness.state_mut().state_mut().login_form;
        form.email = "admin@eyesentry.app".to_owned();
        form.password = "secret".to_owned();
        harness.step();
        harness.get_by_label("Sign In").click();
    }
    assert!(ctx.wait_for_label("Sign out").await);

    ctx.harness_mut().get_by_label("Sign out").click();
    assert!(ctx.wait_for_label("Sign In").await);
    assert!(ctx.harness_mut().query_by_label("alice@clinic.org").is_none());
}
