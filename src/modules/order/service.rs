use super::repository::{Order, OrderItemOption, OrderStatus};
use crate::modules::{
    dish::repository::{Dish, DishOption},
    restaurant,
    user::repository::{Role, User},
};
use sqlx::PgExecutor;
use std::collections::HashMap;
use std::fmt;

/// Owner of the restaurant the order was placed at, if it still exists.
pub async fn find_restaurant_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    order: &Order,
) -> Result<Option<String>, restaurant::repository::Error> {
    let Some(restaurant_id) = order.restaurant_id.clone() else {
        return Ok(None);
    };

    Ok(restaurant::repository::find_by_id(e, restaurant_id)
        .await?
        .map(|restaurant| restaurant.owner_id))
}

/// Whether `user` takes part in `order`, judged by the side their role plays in it.
pub fn can_access(user: &User, order: &Order, restaurant_owner_id: Option<&str>) -> bool {
    match user.role {
        Role::Client => order.customer_id == user.id,
        Role::Delivery => order.driver_id.as_deref() == Some(user.id.as_str()),
        Role::Owner => restaurant_owner_id == Some(user.id.as_str()),
    }
}

/// The status an order must currently be in for `role` to move it to `to`.
pub fn required_status(role: Role, to: OrderStatus) -> Option<OrderStatus> {
    match (role, to) {
        (Role::Owner, OrderStatus::Cooking) => Some(OrderStatus::Pending),
        (Role::Owner, OrderStatus::Cooked) => Some(OrderStatus::Cooking),
        (Role::Delivery, OrderStatus::PickedUp) => Some(OrderStatus::Cooked),
        (Role::Delivery, OrderStatus::Delivered) => Some(OrderStatus::PickedUp),
        _ => None,
    }
}

/// Any (role, current, requested) triple outside the lifecycle table.
#[derive(Debug, PartialEq)]
pub struct TransitionNotAllowed {
    pub role: Role,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

pub fn check_transition(
    role: Role,
    current: OrderStatus,
    to: OrderStatus,
) -> Result<(), TransitionNotAllowed> {
    match required_status(role, to) {
        Some(required) if required == current => Ok(()),
        _ => Err(TransitionNotAllowed {
            role,
            from: current,
            to,
        }),
    }
}

#[derive(Debug, PartialEq)]
pub enum TakeError {
    AlreadyYours,
    AlreadyTaken,
    NotTakeable(OrderStatus),
}

impl fmt::Display for TakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyYours => write!(f, "You have already taken this order"),
            Self::AlreadyTaken => write!(f, "This order has already been taken"),
            Self::NotTakeable(status) => {
                write!(f, "This order can't be taken while it is {}", status)
            }
        }
    }
}

pub fn check_takeable(order: &Order, driver_id: &str) -> Result<(), TakeError> {
    if matches!(order.status, OrderStatus::PickedUp | OrderStatus::Delivered) {
        return Err(TakeError::NotTakeable(order.status));
    }

    match order.driver_id.as_deref() {
        Some(current) if current == driver_id => Err(TakeError::AlreadyYours),
        Some(_) => Err(TakeError::AlreadyTaken),
        None => Ok(()),
    }
}

#[derive(Clone, Debug)]
pub struct OptionSelection {
    pub name: String,
    pub choice: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ItemSelection {
    pub dish_id: String,
    pub options: Vec<OptionSelection>,
}

#[derive(Debug, PartialEq)]
pub struct PricedItem {
    pub dish_id: String,
    pub options: Vec<OrderItemOption>,
}

#[derive(Debug, PartialEq)]
pub struct PricedOrder {
    pub items: Vec<PricedItem>,
    pub total: i32,
}

#[derive(Debug, PartialEq)]
pub enum PricingError {
    DishNotFound(String),
    UnknownOption { dish: String, option: String },
    UnknownChoice { option: String, choice: String },
    TotalTooLarge,
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DishNotFound(id) => write!(f, "Dish {} not found in this restaurant", id),
            Self::UnknownOption { dish, option } => {
                write!(f, "{} has no option named {}", dish, option)
            }
            Self::UnknownChoice { option, choice } => {
                write!(f, "Option {} has no choice named {}", option, choice)
            }
            Self::TotalTooLarge => write!(f, "Order total is too large"),
        }
    }
}

/// Extra cost of picking `choice` on `option`; a choice's own extra wins over the option's.
pub fn resolve_extra(
    option: &DishOption,
    choice: Option<&str>,
) -> Result<i32, PricingError> {
    let Some(choice) = choice else {
        return Ok(option.extra.unwrap_or(0));
    };

    option
        .choices
        .iter()
        .flatten()
        .find(|candidate| candidate.name == choice)
        .map(|candidate| candidate.extra.or(option.extra).unwrap_or(0))
        .ok_or_else(|| PricingError::UnknownChoice {
            option: option.name.clone(),
            choice: choice.to_string(),
        })
}

fn price_item(dish: &Dish, selection: &ItemSelection) -> Result<(PricedItem, i32), PricingError> {
    let mut subtotal = dish.price;
    let mut options = Vec::with_capacity(selection.options.len());

    for selected in &selection.options {
        let option = dish
            .options
            .iter()
            .find(|option| option.name == selected.name)
            .ok_or_else(|| PricingError::UnknownOption {
                dish: dish.name.clone(),
                option: selected.name.clone(),
            })?;
        let extra = resolve_extra(option, selected.choice.as_deref())?;

        subtotal = subtotal
            .checked_add(extra)
            .ok_or(PricingError::TotalTooLarge)?;
        options.push(OrderItemOption {
            name: selected.name.clone(),
            choice: selected.choice.clone(),
            extra,
        });
    }

    Ok((
        PricedItem {
            dish_id: dish.id.clone(),
            options,
        },
        subtotal,
    ))
}

/// Prices every selection against the restaurant's `dishes`.
pub fn price_order(dishes: &[Dish], selections: &[ItemSelection]) -> Result<PricedOrder, PricingError> {
    let by_id = dishes
        .iter()
        .map(|dish| (dish.id.as_str(), dish))
        .collect::<HashMap<_, _>>();

    let mut total: i32 = 0;
    let mut items = Vec::with_capacity(selections.len());

    for selection in selections {
        let dish = by_id
            .get(selection.dish_id.as_str())
            .ok_or_else(|| PricingError::DishNotFound(selection.dish_id.clone()))?;
        let (item, subtotal) = price_item(dish, selection)?;

        total = total
            .checked_add(subtotal)
            .ok_or(PricingError::TotalTooLarge)?;
        items.push(item);
    }

    Ok(PricedOrder { items, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dish::repository::DishChoice;
    use chrono::Utc;

    const ALL_STATUSES: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Cooking,
        OrderStatus::Cooked,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
    ];

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@eats.test", id),
            password: String::new(),
            role,
            is_verified: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn order(status: OrderStatus, driver_id: Option<&str>) -> Order {
        Order {
            id: "order".to_string(),
            customer_id: "customer".to_string(),
            driver_id: driver_id.map(str::to_string),
            restaurant_id: Some("restaurant".to_string()),
            total: 12,
            status,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn dish(id: &str, price: i32, options: Vec<DishOption>) -> Dish {
        Dish {
            id: id.to_string(),
            name: format!("dish {}", id),
            price,
            photo: None,
            description: "A tasty dish".to_string(),
            options,
            restaurant_id: "restaurant".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn size_option() -> DishOption {
        DishOption {
            name: "size".to_string(),
            choices: Some(vec![
                DishChoice {
                    name: "small".to_string(),
                    extra: None,
                },
                DishChoice {
                    name: "large".to_string(),
                    extra: Some(2),
                },
            ]),
            extra: Some(1),
        }
    }

    fn select(dish_id: &str, options: &[(&str, Option<&str>)]) -> ItemSelection {
        ItemSelection {
            dish_id: dish_id.to_string(),
            options: options
                .iter()
                .map(|(name, choice)| OptionSelection {
                    name: name.to_string(),
                    choice: choice.map(str::to_string),
                })
                .collect(),
        }
    }

    #[test]
    fn owner_and_driver_walk_the_whole_lifecycle() {
        assert_eq!(
            check_transition(Role::Owner, OrderStatus::Pending, OrderStatus::Cooking),
            Ok(())
        );
        assert_eq!(
            check_transition(Role::Owner, OrderStatus::Cooking, OrderStatus::Cooked),
            Ok(())
        );
        assert_eq!(
            check_transition(Role::Delivery, OrderStatus::Cooked, OrderStatus::PickedUp),
            Ok(())
        );
        assert_eq!(
            check_transition(Role::Delivery, OrderStatus::PickedUp, OrderStatus::Delivered),
            Ok(())
        );
    }

    #[test]
    fn every_triple_outside_the_table_is_not_allowed() {
        let allowed = [
            (Role::Owner, OrderStatus::Pending, OrderStatus::Cooking),
            (Role::Owner, OrderStatus::Cooking, OrderStatus::Cooked),
            (Role::Delivery, OrderStatus::Cooked, OrderStatus::PickedUp),
            (Role::Delivery, OrderStatus::PickedUp, OrderStatus::Delivered),
        ];

        for role in [Role::Client, Role::Owner, Role::Delivery] {
            for current in ALL_STATUSES {
                for to in ALL_STATUSES {
                    let result = check_transition(role, current, to);
                    if allowed.contains(&(role, current, to)) {
                        assert_eq!(result, Ok(()));
                    } else {
                        assert_eq!(
                            result,
                            Err(TransitionNotAllowed {
                                role,
                                from: current,
                                to,
                            }),
                            "{role} {current} -> {to} should not be allowed"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn right_target_from_the_wrong_source_is_not_allowed() {
        assert_eq!(
            check_transition(Role::Owner, OrderStatus::Pending, OrderStatus::Cooked),
            Err(TransitionNotAllowed {
                role: Role::Owner,
                from: OrderStatus::Pending,
                to: OrderStatus::Cooked,
            })
        );
        assert_eq!(
            check_transition(Role::Delivery, OrderStatus::Pending, OrderStatus::PickedUp),
            Err(TransitionNotAllowed {
                role: Role::Delivery,
                from: OrderStatus::Pending,
                to: OrderStatus::PickedUp,
            })
        );
        assert!(check_transition(Role::Client, OrderStatus::Pending, OrderStatus::Cooking).is_err());
    }

    #[test]
    fn only_parties_can_access_an_order() {
        let assigned = order(OrderStatus::Cooked, Some("driver"));

        assert!(can_access(&user("customer", Role::Client), &assigned, Some("owner")));
        assert!(can_access(&user("driver", Role::Delivery), &assigned, Some("owner")));
        assert!(can_access(&user("owner", Role::Owner), &assigned, Some("owner")));

        assert!(!can_access(&user("stranger", Role::Client), &assigned, Some("owner")));
        assert!(!can_access(&user("other", Role::Delivery), &assigned, Some("owner")));
        assert!(!can_access(&user("other", Role::Owner), &assigned, Some("owner")));
        assert!(!can_access(&user("owner", Role::Owner), &assigned, None));
    }

    #[test]
    fn access_follows_the_role_not_just_the_id() {
        let assigned = order(OrderStatus::Cooked, Some("customer"));

        assert!(!can_access(&user("customer", Role::Owner), &assigned, Some("owner")));
        assert!(can_access(&user("customer", Role::Delivery), &assigned, Some("owner")));
    }

    #[test]
    fn unassigned_orders_are_takeable_until_picked_up() {
        assert_eq!(check_takeable(&order(OrderStatus::Pending, None), "driver"), Ok(()));
        assert_eq!(check_takeable(&order(OrderStatus::Cooked, None), "driver"), Ok(()));
        assert_eq!(
            check_takeable(&order(OrderStatus::PickedUp, None), "driver"),
            Err(TakeError::NotTakeable(OrderStatus::PickedUp))
        );
        assert_eq!(
            check_takeable(&order(OrderStatus::Cooked, Some("driver")), "driver"),
            Err(TakeError::AlreadyYours)
        );
        assert_eq!(
            check_takeable(&order(OrderStatus::Cooked, Some("other")), "driver"),
            Err(TakeError::AlreadyTaken)
        );
    }

    #[test]
    fn choice_extra_wins_over_option_extra() {
        let option = size_option();

        assert_eq!(resolve_extra(&option, Some("large")), Ok(2));
        assert_eq!(resolve_extra(&option, Some("small")), Ok(1));
        assert_eq!(resolve_extra(&option, None), Ok(1));
    }

    #[test]
    fn missing_extras_cost_nothing() {
        let option = DishOption {
            name: "sauce".to_string(),
            choices: Some(vec![DishChoice {
                name: "mild".to_string(),
                extra: None,
            }]),
            extra: None,
        };

        assert_eq!(resolve_extra(&option, Some("mild")), Ok(0));
        assert_eq!(resolve_extra(&option, None), Ok(0));
    }

    #[test]
    fn unknown_choice_is_rejected() {
        assert_eq!(
            resolve_extra(&size_option(), Some("huge")),
            Err(PricingError::UnknownChoice {
                option: "size".to_string(),
                choice: "huge".to_string(),
            })
        );
    }

    #[test]
    fn large_size_adds_its_extra_to_the_price() {
        let dishes = vec![dish("d", 10, vec![size_option()])];

        let priced = price_order(&dishes, &[select("d", &[("size", Some("large"))])]).unwrap();

        assert_eq!(priced.total, 12);
        assert_eq!(
            priced.items,
            vec![PricedItem {
                dish_id: "d".to_string(),
                options: vec![OrderItemOption {
                    name: "size".to_string(),
                    choice: Some("large".to_string()),
                    extra: 2,
                }],
            }]
        );
    }

    #[test]
    fn total_sums_every_item_and_option() {
        let spicy = DishOption {
            name: "spicy".to_string(),
            choices: None,
            extra: Some(3),
        };
        let dishes = vec![
            dish("a", 10, vec![size_option(), spicy]),
            dish("b", 7, vec![]),
        ];

        let priced = price_order(
            &dishes,
            &[
                select("a", &[("size", Some("large")), ("spicy", None)]),
                select("b", &[]),
                select("b", &[]),
            ],
        )
        .unwrap();

        assert_eq!(priced.total, 10 + 2 + 3 + 7 + 7);
        assert_eq!(priced.items.len(), 3);
    }

    #[test]
    fn dishes_outside_the_restaurant_are_rejected() {
        let dishes = vec![dish("a", 10, vec![])];

        assert_eq!(
            price_order(&dishes, &[select("elsewhere", &[])]),
            Err(PricingError::DishNotFound("elsewhere".to_string()))
        );
    }

    #[test]
    fn unknown_option_is_rejected() {
        let dishes = vec![dish("a", 10, vec![size_option()])];

        assert_eq!(
            price_order(&dishes, &[select("a", &[("topping", None)])]),
            Err(PricingError::UnknownOption {
                dish: "dish a".to_string(),
                option: "topping".to_string(),
            })
        );
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let dishes = vec![dish("a", i32::MAX, vec![])];

        assert_eq!(
            price_order(&dishes, &[select("a", &[]), select("a", &[])]),
            Err(PricingError::TotalTooLarge)
        );
    }
}
