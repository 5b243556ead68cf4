mod create_account;
mod edit_profile;
mod login;
mod me;
mod user_profile;
pub mod verify_email;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct UserQuery(me::MeQuery, user_profile::UserProfileQuery);

#[derive(MergedObject, Default)]
pub struct UserMutation(
    create_account::CreateAccountMutation,
    login::LoginMutation,
    edit_profile::EditProfileMutation,
    verify_email::VerifyEmailMutation,
);
