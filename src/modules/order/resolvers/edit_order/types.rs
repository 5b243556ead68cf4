pub mod request {
    use crate::modules::{auth::middleware::Auth, order::repository::OrderStatus};
    use async_graphql::InputObject;

    #[derive(InputObject)]
    pub struct EditOrderInput {
        pub id: String,
        pub status: OrderStatus,
    }

    pub struct Payload {
        pub body: EditOrderInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::order::repository::{Order, OrderStatus};
    use crate::modules::user::repository::Role;
    use async_graphql::{Enum, SimpleObject};
    use std::fmt;

    pub enum Success {
        OrderUpdated(Order),
    }

    #[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
    pub enum EditOrderFailure {
        NotFound,
        NotAuthorized,
        InvalidTransition,
    }

    #[derive(Debug)]
    pub enum Error {
        OrderNotFound,
        NotAParty,
        TransitionNotAllowed {
            role: Role,
            from: OrderStatus,
            to: OrderStatus,
        },
        StatusChanged { from: OrderStatus, to: OrderStatus },
        FailedToFetchOrder,
        FailedToUpdateOrder,
    }

    impl Error {
        pub fn failure(&self) -> Option<EditOrderFailure> {
            match self {
                Self::OrderNotFound => Some(EditOrderFailure::NotFound),
                Self::NotAParty | Self::TransitionNotAllowed { .. } => {
                    Some(EditOrderFailure::NotAuthorized)
                }
                Self::StatusChanged { .. } => Some(EditOrderFailure::InvalidTransition),
                Self::FailedToFetchOrder | Self::FailedToUpdateOrder => None,
            }
        }
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::OrderNotFound => write!(f, "Order not found"),
                Self::NotAParty => write!(f, "You can't edit this order"),
                Self::TransitionNotAllowed { role, from, to } => write!(
                    f,
                    "A {} user can't move an order from {} to {}",
                    role, from, to
                ),
                Self::StatusChanged { from, to } => write!(
                    f,
                    "The order is no longer {} so it can't go to {}",
                    from, to
                ),
                Self::FailedToFetchOrder => write!(f, "Could not load order"),
                Self::FailedToUpdateOrder => write!(f, "Could not update order"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct EditOrderOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub failure: Option<EditOrderFailure>,
    }

    impl From<Response> for EditOrderOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::OrderUpdated(_)) => Self {
                    ok: true,
                    error: None,
                    failure: None,
                },
                Err(err) => Self {
                    ok: false,
                    failure: err.failure(),
                    error: Some(err.to_string()),
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn failures_are_tagged_by_kind() {
            let output = EditOrderOutput::from(Err(Error::TransitionNotAllowed {
                role: Role::Owner,
                from: OrderStatus::Pending,
                to: OrderStatus::Cooked,
            }));

            assert!(!output.ok);
            assert_eq!(output.failure, Some(EditOrderFailure::NotAuthorized));
            assert_eq!(
                output.error.as_deref(),
                Some("A OWNER user can't move an order from PENDING to COOKED")
            );

            assert_eq!(
                Error::NotAParty.failure(),
                Some(EditOrderFailure::NotAuthorized)
            );
            assert_eq!(
                Error::OrderNotFound.failure(),
                Some(EditOrderFailure::NotFound)
            );
            assert_eq!(
                Error::StatusChanged {
                    from: OrderStatus::Cooking,
                    to: OrderStatus::Cooked,
                }
                .failure(),
                Some(EditOrderFailure::InvalidTransition)
            );
            assert_eq!(Error::FailedToUpdateOrder.failure(), None);
        }
    }
}
