use crate::{modules, modules::auth::middleware::AUTH_HEADER, types::Context};
use axum::{
    http::{header, HeaderName, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = modules::get_router(ctx.clone())
            .with_state(ctx.clone())
            .layer(
                ServiceBuilder::new()
                    .layer(trace::TraceLayer::new_for_http())
                    .layer(
                        cors::CorsLayer::new()
                            .allow_methods([Method::OPTIONS, Method::GET, Method::POST])
                            .allow_headers([
                                header::CONTENT_TYPE,
                                HeaderName::from_static(AUTH_HEADER),
                            ])
                            .allow_origin(cors::Any),
                    ),
            );

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address)
            .await
            .unwrap_or_else(|err| panic!("Failed to bind {}: {}", address, err));

        tracing::info!("App is running on {}", address);

        if let Err(err) = axum::serve(listener, self.router).await {
            tracing::error!("Server stopped: {}", err);
        }
    }
}
