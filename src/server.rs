use crate::context::ApplicationContext;
use crate::room::sweeper::run_room_sweeper;
use axum::Router;
use tower_http::cors::CorsLayer;

mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> Result<(), std::io::Error> {
	let address = application_context.configuration.address;
	let router = create_router(application_context.clone());

	tokio::spawn(run_room_sweeper(application_context));

	axum_server::bind(address).serve(router.into_make_service()).await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	Router::new()
		.nest("/api", rest_api::router())
		.with_state(application_context)
		.layer(CorsLayer::permissive())
}
