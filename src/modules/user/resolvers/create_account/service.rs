use super::types::{request, response};
use crate::{
    modules::{auth, notification, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::CreateAccountInput) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.email.trim().to_lowercase();

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    if user::repository::find_by_email(&mut *tx, email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password = auth::service::password::hash(&payload.password)
        .map_err(|_| response::Error::SignupFailed)?;

    let user = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            email,
            password,
            role: payload.role,
        },
    )
    .await
    .map_err(|_| response::Error::SignupFailed)?;

    let verification = user::repository::verification::upsert(&mut *tx, user.id.clone())
        .await
        .map_err(|_| response::Error::SignupFailed)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tokio::spawn(notification::service::send(
        ctx.clone(),
        notification::service::Notification::verification_requested(
            user.email.clone(),
            verification.code,
        ),
    ));

    Ok(response::Success::AccountCreated(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::repository::Role;
    use sqlx::PgPool;

    fn input(email: &str) -> request::CreateAccountInput {
        request::CreateAccountInput {
            email: email.to_string(),
            password: "correct horse battery".to_string(),
            role: Role::Client,
        }
    }

    async fn count(pool: &PgPool, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn duplicate_email_is_rejected_without_writing(pool: PgPool) {
        let ctx = Arc::new(Context::with_pool(pool.clone()));

        assert!(service(ctx.clone(), input("dup@eats.test")).await.is_ok());

        let err = match service(ctx, input("  Dup@Eats.test ")).await {
            Ok(_) => panic!("second account with the same email was created"),
            Err(err) => err,
        };
        assert!(matches!(err, response::Error::EmailAlreadyInUse));
        assert!(err.to_string().contains("already"));

        assert_eq!(count(&pool, "users").await, 1);
        assert_eq!(count(&pool, "verifications").await, 1);
    }
}
