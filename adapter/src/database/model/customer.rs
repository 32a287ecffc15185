use kernel::model::{customer::Customer, id::CustomerId};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct CustomerRow {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(value: CustomerRow) -> Self {
        let CustomerRow {
            id,
            name,
            email,
            phone,
            created_at,
            updated_at,
        } = value;
        Customer {
            id,
            name,
            email,
            phone,
            created_at,
            updated_at,
        }
    }
}
