use super::*;

/// Tests replacing the slogan of the seeded Nike advertisement.
///
/// Expected: 200 with the new slogan, GET returns the same
#[tokio::test]
async fn replace_slogan_then_get() {
    let app = TestApp::new().await;
    let id = app.seed("Nike", "Just do it!").await;
    let uri = format!("/api/advertisement/{}", id);

    let (status, body) = app
        .send(
            Method::PATCH,
            &uri,
            Some(Role::Admin),
            Some(json!([{ "op": "replace", "path": "/slogan", "value": "Win." }])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_dto(&body), dto("Nike", "Win."));

    let (status, body) = app.send(Method::GET, &uri, Some(Role::User), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_dto(&body), dto("Nike", "Win."));
}

/// Tests replacing only the company name.
///
/// Expected: 200 with the slogan untouched
#[tokio::test]
async fn replace_company_name_keeps_slogan() {
    let app = TestApp::new().await;
    let id = app.seed("Nike", "Just do it!").await;

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/advertisement/{}", id),
            Some(Role::Admin),
            Some(json!([{ "op": "replace", "path": "/companyName", "value": "Acme" }])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_dto(&body), dto("Acme", "Just do it!"));
}

/// Tests patching an unknown id.
///
/// Expected: 400 with "Advertisement not found."
#[tokio::test]
async fn patch_unknown_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/advertisement/5",
            Some(Role::Admin),
            Some(json!([{ "op": "replace", "path": "/slogan", "value": "Win." }])),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_text(&body), "Advertisement not found.");
}

/// Tests that an unknown path is rejected and nothing changes.
///
/// Expected: 400 and the stored record unchanged
#[tokio::test]
async fn unknown_path_leaves_record_unchanged() {
    let app = TestApp::new().await;
    let id = app.seed("Nike", "Just do it!").await;
    let uri = format!("/api/advertisement/{}", id);

    let (status, _) = app
        .send(
            Method::PATCH,
            &uri,
            Some(Role::Admin),
            Some(json!([
                { "op": "replace", "path": "/slogan", "value": "Win." },
                { "op": "replace", "path": "/logo", "value": "swoosh.png" }
            ])),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.send(Method::GET, &uri, Some(Role::User), None).await;
    assert_eq!(as_dto(&body), dto("Nike", "Just do it!"));
}

/// Tests that structural operations are refused.
///
/// Expected: 400 naming the unsupported operation
#[tokio::test]
async fn remove_is_unsupported() {
    let app = TestApp::new().await;
    let id = app.seed("Nike", "Just do it!").await;

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/advertisement/{}", id),
            Some(Role::Admin),
            Some(json!([{ "op": "remove", "path": "/slogan" }])),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_text(&body).contains("'remove'"));
}

/// Tests a body that is not a patch document.
///
/// Expected: 400
#[tokio::test]
async fn malformed_document_is_bad_request() {
    let app = TestApp::new().await;
    let id = app.seed("Nike", "Just do it!").await;

    let (status, _) = app
        .send(
            Method::PATCH,
            &format!("/api/advertisement/{}", id),
            Some(Role::Admin),
            Some(json!({ "slogan": "Win." })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests that Users cannot patch.
///
/// Expected: 403
#[tokio::test]
async fn user_cannot_patch() {
    let app = TestApp::new().await;
    let id = app.seed("Nike", "Just do it!").await;

    let (status, _) = app
        .send(
            Method::PATCH,
            &format!("/api/advertisement/{}", id),
            Some(Role::User),
            Some(json!([{ "op": "replace", "path": "/slogan", "value": "Win." }])),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests patching an unknown id with a path that is not patchable.
///
/// Expected: 400 with "Advertisement not found."
#[tokio::test]
async fn unknown_id_wins_over_invalid_path() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/advertisement/999",
            Some(Role::Admin),
            Some(json!([{ "op": "replace", "path": "/logo", "value": "x" }])),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_text(&body), "Advertisement not found.");
}

/// Tests patching an unknown id with an unsupported operation.
///
/// Expected: 400 with "Advertisement not found."
#[tokio::test]
async fn unknown_id_wins_over_unsupported_operation() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/advertisement/999",
            Some(Role::Admin),
            Some(json!([{ "op": "remove", "path": "/slogan" }])),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_text(&body), "Advertisement not found.");
}

/// Tests an anonymous patch on a non-numeric id.
///
/// Expected: 401 rather than a path rejection
#[tokio::test]
async fn anonymous_patch_on_bad_id_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(
            Method::PATCH,
            "/api/advertisement/abc",
            None,
            Some(json!([{ "op": "replace", "path": "/slogan", "value": "Win." }])),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
