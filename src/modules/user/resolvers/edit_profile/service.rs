use super::types::{request, response};
use crate::{
    modules::{auth, notification, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let current = payload.auth.user;
    let email = payload
        .body
        .email
        .map(|email| email.trim().to_lowercase())
        .filter(|email| *email != current.email);

    let password = match payload.body.password {
        Some(password) => Some(
            auth::service::password::hash(&password)
                .map_err(|_| response::Error::FailedToUpdateProfile)?,
        ),
        None => None,
    };

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    if let Some(email) = &email {
        if user::repository::find_by_email(&mut *tx, email.clone())
            .await
            .map_err(|_| response::Error::FailedToFetchUser)?
            .is_some()
        {
            return Err(response::Error::EmailAlreadyInUse);
        }
    }

    let updated = user::repository::update_by_id(
        &mut *tx,
        current.id.clone(),
        user::repository::UpdateUserPayload {
            is_verified: email.as_ref().map(|_| false),
            email: email.clone(),
            password,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateProfile)?;

    let verification = match email {
        Some(_) => Some(
            user::repository::verification::upsert(&mut *tx, current.id.clone())
                .await
                .map_err(|_| response::Error::FailedToUpdateProfile)?,
        ),
        None => None,
    };

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    if let Some(verification) = verification {
        tokio::spawn(notification::service::send(
            ctx.clone(),
            notification::service::Notification::verification_requested(
                updated.email.clone(),
                verification.code,
            ),
        ));
    }

    Ok(response::Success::ProfileUpdated(updated))
}
