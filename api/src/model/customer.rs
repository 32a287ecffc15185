use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        Customer,
    },
    id::CustomerId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub phone: Option<String>,
}

impl From<CreateCustomerRequest> for CreateCustomer {
    fn from(value: CreateCustomerRequest) -> Self {
        let CreateCustomerRequest { name, email, phone } = value;
        CreateCustomer { name, email, phone }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[garde(length(min = 1))]
    pub name: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_nullable")]
    #[garde(skip)]
    pub phone: Option<Option<String>>,
}

#[derive(new)]
pub struct UpdateCustomerRequestWithId(CustomerId, UpdateCustomerRequest);

impl From<UpdateCustomerRequestWithId> for UpdateCustomer {
    fn from(value: UpdateCustomerRequestWithId) -> Self {
        let UpdateCustomerRequestWithId(customer_id, UpdateCustomerRequest { name, email, phone }) =
            value;
        UpdateCustomer {
            customer_id,
            name,
            email,
            phone,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let Customer {
            id,
            name,
            email,
            phone,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            email,
            phone,
            created_at,
            updated_at,
        }
    }
}
