pub mod request {
    use crate::modules::{
        auth::middleware::Auth,
        order::service::{ItemSelection, OptionSelection},
    };
    use async_graphql::InputObject;
    use serde::Serialize;
    use validator::Validate;

    #[derive(InputObject, Serialize, Clone)]
    pub struct CreateOrderItemOptionInput {
        pub name: String,
        pub choice: Option<String>,
    }

    #[derive(InputObject, Serialize, Clone)]
    pub struct CreateOrderItemInput {
        pub dish_id: String,
        #[graphql(default)]
        pub options: Vec<CreateOrderItemOptionInput>,
    }

    impl From<CreateOrderItemInput> for ItemSelection {
        fn from(item: CreateOrderItemInput) -> Self {
            Self {
                dish_id: item.dish_id,
                options: item
                    .options
                    .into_iter()
                    .map(|option| OptionSelection {
                        name: option.name,
                        choice: option.choice,
                    })
                    .collect(),
            }
        }
    }

    #[derive(InputObject, Validate)]
    pub struct CreateOrderInput {
        pub restaurant_id: String,
        #[validate(length(min = 1, message = "An order needs at least one item"))]
        pub items: Vec<CreateOrderItemInput>,
    }

    pub struct Payload {
        pub body: CreateOrderInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::order::service::PricingError, utils::validation};
    use async_graphql::SimpleObject;
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        OrderCreated(String),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        FailedToFetchRestaurant,
        FailedToFetchDishes,
        InvalidItems(PricingError),
        FailedToCreateOrder,
        UnexpectedError,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToValidate(errors) => {
                    write!(f, "{}", validation::into_message(errors))
                }
                Self::RestaurantNotFound => write!(f, "Restaurant not found"),
                Self::FailedToFetchRestaurant => write!(f, "Could not load restaurant"),
                Self::FailedToFetchDishes => write!(f, "Could not load dishes"),
                Self::InvalidItems(err) => write!(f, "{}", err),
                Self::FailedToCreateOrder => write!(f, "Could not create order"),
                Self::UnexpectedError => write!(f, "Sorry an error occurred"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct CreateOrderOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub order_id: Option<String>,
    }

    impl From<Response> for CreateOrderOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::OrderCreated(id)) => Self {
                    ok: true,
                    error: None,
                    order_id: Some(id),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    order_id: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::{CreateOrderInput, CreateOrderItemInput, CreateOrderItemOptionInput};
    use crate::utils::validation;
    use validator::Validate;

    #[test]
    fn orders_without_items_fail_validation() {
        let errors = CreateOrderInput {
            restaurant_id: "restaurant".to_string(),
            items: vec![],
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            validation::into_message(&errors),
            "items: An order needs at least one item"
        );
    }

    #[test]
    fn orders_with_items_pass_validation() {
        let input = CreateOrderInput {
            restaurant_id: "restaurant".to_string(),
            items: vec![CreateOrderItemInput {
                dish_id: "dish".to_string(),
                options: vec![CreateOrderItemOptionInput {
                    name: "size".to_string(),
                    choice: Some("large".to_string()),
                }],
            }],
        };

        assert!(input.validate().is_ok());
    }
}
