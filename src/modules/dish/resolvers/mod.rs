mod create_dish;
mod delete_dish;
mod edit_dish;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct DishMutation(
    create_dish::CreateDishMutation,
    edit_dish::EditDishMutation,
    delete_dish::DeleteDishMutation,
);
