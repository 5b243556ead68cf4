mod all_categories;
mod category;
mod fields;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct CategoryQuery(all_categories::AllCategoriesQuery, category::CategoryBySlugQuery);
