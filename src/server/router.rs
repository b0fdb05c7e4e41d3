use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::advertisement::{self, ADVERTISEMENT_TAG},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Advertisement API", description = "Manage advertisements of companies"),
    tags((name = ADVERTISEMENT_TAG, description = "Advertisement endpoints")),
    modifiers(&BearerSecurity)
)]
struct ApiDoc;

/// Registers the `bearer` security scheme referenced by every endpoint.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            advertisement::get_advertisements,
            advertisement::create_advertisement,
            advertisement::update_advertisement
        ))
        .routes(routes!(
            advertisement::get_advertisement,
            advertisement::patch_advertisement,
            advertisement::delete_advertisement
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
