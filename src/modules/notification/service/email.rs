use super::{types, Error, Notification, Result};
use crate::types::Context;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::sync::Arc;

pub fn confirmation_link(base_url: &str, code: &str) -> String {
    format!(
        "{}/confirm?code={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(code)
    )
}

fn build_verification_email(
    ctx: &Context,
    notification: &types::VerificationRequested,
) -> Result<Message> {
    let link = confirmation_link(&ctx.app.url, &notification.code);

    Message::builder()
        .from(ctx.mail.sender.parse().map_err(|err| {
            tracing::error!("Invalid mail sender {}: {}", ctx.mail.sender, err);
            Error::InvalidNotification
        })?)
        .to(notification.email.parse().map_err(|err| {
            tracing::error!("Invalid recipient {}: {}", notification.email, err);
            Error::InvalidNotification
        })?)
        .subject("Verify your email")
        .header(ContentType::TEXT_HTML)
        .body(format!(
            "<p>Hello {},</p><p>Please confirm your account: <a href=\"{}\">{}</a></p>",
            notification.email, link, link
        ))
        .map_err(|err| {
            tracing::error!("Failed to build verification email: {}", err);
            Error::InvalidNotification
        })
}

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    let email = match &notification {
        Notification::VerificationRequested(n) => build_verification_email(&ctx, n)?,
    };

    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&ctx.mail.host)
        .map_err(|err| {
            tracing::error!("Failed to create mail transport: {}", err);
            Error::NotSent
        })?
        .credentials(Credentials::new(
            ctx.mail.user.clone(),
            ctx.mail.password.clone(),
        ))
        .build();

    match transport.send(email).await {
        Ok(_) => Ok(()),
        Err(err) => {
            tracing::error!("Failed to send email: {:?}", err);
            Err(Error::NotSent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_link_points_at_confirm_endpoint() {
        assert_eq!(
            confirmation_link("http://localhost:8000/", "01J0CODE"),
            "http://localhost:8000/confirm?code=01J0CODE"
        );
    }

    #[tokio::test]
    async fn verification_email_is_addressed_to_the_user() {
        let ctx = Context::for_tests();
        let email = build_verification_email(
            &ctx,
            &types::VerificationRequested {
                email: "client@eats.test".to_string(),
                code: "01J0CODE".to_string(),
            },
        )
        .unwrap();

        let raw = String::from_utf8(email.formatted()).unwrap();
        assert!(raw.contains("To: client@eats.test"));
        assert!(raw.contains("Subject: Verify your email"));
    }

    #[tokio::test]
    async fn rejects_malformed_recipient() {
        let ctx = Context::for_tests();
        let result = build_verification_email(
            &ctx,
            &types::VerificationRequested {
                email: "not an email".to_string(),
                code: "01J0CODE".to_string(),
            },
        );

        assert!(matches!(result, Err(Error::InvalidNotification)));
    }
}
