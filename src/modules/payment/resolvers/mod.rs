mod create_payment;
mod get_payments;

use async_graphql::MergedObject;

#[derive(MergedObject, Default)]
pub struct PaymentQuery(get_payments::GetPaymentsQuery);

#[derive(MergedObject, Default)]
pub struct PaymentMutation(create_payment::CreatePaymentMutation);
