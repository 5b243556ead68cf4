use crate::{modules::user::resolvers::verify_email::service::service, types::Context};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct Params {
    pub code: String,
}

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Query(params): Query<Params>,
) -> impl IntoResponse {
    service(ctx, params.code).await
}
