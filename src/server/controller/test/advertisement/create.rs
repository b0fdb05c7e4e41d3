use super::*;

/// Tests creating an advertisement as Admin.
///
/// Expected: 200 with the full list including the new advertisement
#[tokio::test]
async fn create_returns_full_list() {
    let app = TestApp::new().await;
    app.seed("Nike", "Just do it!").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/advertisement",
            Some(Role::Admin),
            Some(json!({ "companyName": "Acme", "slogan": "Everything you need." })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_dtos(&body),
        vec![
            dto("Nike", "Just do it!"),
            dto("Acme", "Everything you need.")
        ]
    );
}

/// Tests that the created advertisement is readable by id.
///
/// Expected: 200 from GET with the input fields
#[tokio::test]
async fn get_after_create_returns_input() {
    let app = TestApp::new().await;

    app.send(
        Method::POST,
        "/api/advertisement",
        Some(Role::Admin),
        Some(json!({ "companyName": "Volvo", "slogan": "For life." })),
    )
    .await;

    let id = entity_ids(&app).await[0];
    let (status, body) = app
        .send(
            Method::GET,
            &format!("/api/advertisement/{}", id),
            Some(Role::User),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_dto(&body), dto("Volvo", "For life."));
}

/// Tests that Users cannot create advertisements.
///
/// Expected: 403 and nothing stored
#[tokio::test]
async fn user_cannot_create() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/advertisement",
            Some(Role::User),
            Some(json!({ "companyName": "Acme", "slogan": "Everything you need." })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(entity_ids(&app).await.is_empty());
}

/// Tests that a payload missing a field is rejected.
///
/// Expected: 400
#[tokio::test]
async fn incomplete_payload_is_bad_request() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/advertisement",
            Some(Role::Admin),
            Some(json!({ "companyName": "Acme" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

async fn entity_ids(app: &TestApp) -> Vec<i32> {
    use sea_orm::EntityTrait;

    entity::prelude::Advertisement::find()
        .all(app.db())
        .await
        .unwrap()
        .into_iter()
        .map(|model| model.id)
        .collect()
}
