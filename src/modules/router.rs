use super::{
    auth,
    schema::{self, AppSchema},
    user,
};
use crate::types::{AppEnvironment, Context};
use async_graphql::{
    http::{GraphiQLSource, ALL_WEBSOCKET_PROTOCOLS},
    Data,
};
use async_graphql_axum::{GraphQLProtocol, GraphQLRequest, GraphQLResponse, GraphQLWebSocket};
use axum::{
    extract::{State, WebSocketUpgrade},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

async fn graphql_handler(
    State(ctx): State<Arc<Context>>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut req = req.into_inner();
    if let Some(auth) = auth::middleware::from_headers(ctx, &headers).await {
        req = req.data(auth);
    }

    schema.execute(req).await.into()
}

async fn graphql_ws_handler(
    State(ctx): State<Arc<Context>>,
    Extension(schema): Extension<AppSchema>,
    protocol: GraphQLProtocol,
    upgrade: WebSocketUpgrade,
) -> Response {
    upgrade
        .protocols(ALL_WEBSOCKET_PROTOCOLS)
        .on_upgrade(move |stream| {
            GraphQLWebSocket::new(stream, schema, protocol)
                .on_connection_init(move |payload| async move {
                    let mut data = Data::default();
                    if let Some(auth) =
                        auth::middleware::from_connection_payload(ctx, payload).await
                    {
                        data.insert(auth);
                    }
                    Ok(data)
                })
                .serve()
        })
}

async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/graphql/ws")
            .finish(),
    )
}

pub fn get_router(ctx: Arc<Context>) -> Router<Arc<Context>> {
    let graphql = match ctx.app.environment {
        AppEnvironment::Development => get(graphiql).post(graphql_handler),
        AppEnvironment::Production => post(graphql_handler),
    };

    Router::new()
        .route("/graphql", graphql)
        .route("/graphql/ws", get(graphql_ws_handler))
        .merge(user::routes::get_router())
        .layer(Extension(schema::build_schema(ctx)))
}
