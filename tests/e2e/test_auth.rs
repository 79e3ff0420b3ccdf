use crate::e2e::helpers;

use helpers::{assertions, TestContext};
use hyper::StatusCode;
use serde_json::json;

fn sign_up_body(email: &str, password: &str, confirmation: &str) -> serde_json::Value {
    json!({
        "user": {
            "email": email,
            "password": password,
            "password_confirmation": confirmation
        }
    })
}

#[tokio::test]
async fn it_should_sign_up_and_return_a_jwt() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/sign_up",
            &sign_up_body("fan@cypress.com", "hunter2hunter2", "hunter2hunter2"),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    assertions::assert_token_response(response.body.as_ref().unwrap());

    let user_count = ctx.fixtures.get_user_count().await.unwrap();
    assert_eq!(user_count, 1);
}

#[tokio::test]
async fn it_should_reject_sign_up_with_mismatched_confirmation() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/sign_up",
            &sign_up_body("fan@cypress.com", "hunter2hunter2", "something-else"),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("Password confirmation does not match");
}

#[tokio::test]
async fn it_should_reject_sign_up_with_short_password() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/sign_up", &sign_up_body("fan@cypress.com", "short", "short"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("at least 8 characters");
}

#[tokio::test]
async fn it_should_reject_sign_up_with_malformed_email() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/sign_up",
            &sign_up_body("not-an-email", "hunter2hunter2", "hunter2hunter2"),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("valid address");
}

#[tokio::test]
async fn it_should_reject_sign_up_with_duplicate_email() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures
        .create_user("fan@cypress.com", "hunter2hunter2")
        .await
        .unwrap();

    let response = ctx
        .client
        .post(
            "/sign_up",
            &sign_up_body("fan@cypress.com", "hunter2hunter2", "hunter2hunter2"),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::CONFLICT)
        .assert_error_message("Email already registered");
}

#[tokio::test]
async fn it_should_sign_in_and_return_a_jwt() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures
        .create_user("fan@cypress.com", "hunter2hunter2")
        .await
        .unwrap();

    let response = ctx
        .client
        .post(
            "/sign_in",
            &json!({
                "email": "fan@cypress.com",
                "password": "hunter2hunter2"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assertions::assert_token_response(response.body.as_ref().unwrap());
}

#[tokio::test]
async fn it_should_reject_sign_in_with_wrong_password() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures
        .create_user("fan@cypress.com", "hunter2hunter2")
        .await
        .unwrap();

    let response = ctx
        .client
        .post(
            "/sign_in",
            &json!({
                "email": "fan@cypress.com",
                "password": "wrong-password"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Invalid email or password");
}

#[tokio::test]
async fn it_should_reject_sign_in_for_unknown_email() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/sign_in",
            &json!({
                "email": "nobody@cypress.com",
                "password": "hunter2hunter2"
            }),
        )
        .await
        .unwrap();

    // Unknown email reads exactly like a wrong password
    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Invalid email or password");
}

#[tokio::test]
async fn it_should_issue_a_token_usable_on_me() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/sign_up",
            &sign_up_body("fan@cypress.com", "hunter2hunter2", "hunter2hunter2"),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);

    let jwt = response.body.as_ref().unwrap()["jwt"]
        .as_str()
        .unwrap()
        .to_string();

    let me = ctx.client.get_with_auth("/me", &jwt).await.unwrap();
    me.assert_status(StatusCode::OK);

    let body = me.body.as_ref().unwrap();
    assert_eq!(
        body.get("email").and_then(|v| v.as_str()),
        Some("fan@cypress.com")
    );
}
