//! OpenAPI documentation configuration

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for the CRM API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CRM API",
        version = "0.1.0",
        description = "Admin console backend: products and users over in-memory stores",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/users", api = domain_users::ApiDoc)
    ),
    modifiers(&BearerAuth),
    security(("bearer" = [])),
    tags(
        (name = "Products", description = "Product catalogue management"),
        (name = "Users", description = "User account management")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
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
