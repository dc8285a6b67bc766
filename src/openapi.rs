/// OpenAPI documentation for the SecLab demo service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SecLab Demo API",
        version = "0.1.0",
        description = "Instructional service contrasting safe and unsafe handling of SQL, HTML output, CSRF, and credentials",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    ),
    tags(
        (name = "Health", description = "Service health checks"),
        (name = "Auth", description = "Token issuance and CSRF tokens"),
        (name = "Users", description = "User accounts and lookup endpoints, safe and unsafe variants"),
        (name = "Items", description = "Items owned by users"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Route where the generated document is served; the Swagger UI page
    /// and the route table both point here.
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
