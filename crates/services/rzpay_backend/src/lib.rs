// --- File: crates/services/rzpay_backend/src/lib.rs ---
pub mod app_state;
pub mod service_factory;

use axum::Router;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub use app_state::AppState;
pub use service_factory::RzpayServiceFactory;

/// Builds the full application router: payment routes, request tracing and
/// permissive CORS.
pub fn build_app(state: &AppState) -> Router {
    let factory = &state.service_factory;

    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = rzpay_payments::routes(factory.order_gateway(), factory.payment_record_store());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use rzpay_payments::doc::PaymentsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(info(
            title = "rzpay API",
            version = "0.1.0",
            description = "Razorpay orders and payment records",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ))]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(PaymentsApiDoc::openapi());
        tracing::info!("📖 Adding Swagger UI at /docs");

        app = app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc));
    }

    // One INFO span and response event per request
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    app.layer(trace).layer(CorsLayer::permissive())
}
