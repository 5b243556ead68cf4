mod create_restaurant;
mod delete_restaurant;
mod edit_restaurant;
mod fields;
mod my_restaurant;
mod my_restaurants;
mod restaurant;
mod restaurants;
mod search_restaurant;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct RestaurantQuery(
    restaurants::RestaurantsQuery,
    restaurant::RestaurantByIdQuery,
    search_restaurant::SearchRestaurantQuery,
    my_restaurants::MyRestaurantsQuery,
    my_restaurant::MyRestaurantQuery,
);

#[derive(MergedObject, Default)]
pub struct RestaurantMutation(
    create_restaurant::CreateRestaurantMutation,
    edit_restaurant::EditRestaurantMutation,
    delete_restaurant::DeleteRestaurantMutation,
);
