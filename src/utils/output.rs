use async_graphql::SimpleObject;
use std::fmt;

/// Shape shared by every mutation that has nothing to return besides success.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct CoreOutput {
    pub ok: bool,
    pub error: Option<String>,
}

impl CoreOutput {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            ok: false,
            error: Some(error.to_string()),
        }
    }
}

impl<S, E: fmt::Display> From<Result<S, E>> for CoreOutput {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(err) => Self::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_map_onto_ok_and_error() {
        let output: CoreOutput = Ok::<_, String>(()).into();
        assert_eq!(output, CoreOutput::success());

        let output: CoreOutput = Err::<(), _>("Restaurant not found").into();
        assert!(!output.ok);
        assert_eq!(output.error.as_deref(), Some("Restaurant not found"));
    }

    #[tokio::test]
    async fn ok_field_resolves_through_graphql() {
        use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};

        struct Query;

        #[Object]
        impl Query {
            async fn done(&self) -> CoreOutput {
                CoreOutput::success()
            }
        }

        let schema = Schema::new(Query, EmptyMutation, EmptySubscription);
        let response = schema.execute("{ done { ok error } }").await;

        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "done": { "ok": true, "error": null } })
        );
    }
}
