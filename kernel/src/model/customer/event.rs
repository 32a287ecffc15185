use crate::model::id::CustomerId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

// `None` leaves the stored value untouched. `Some(None)` clears the phone.
#[derive(Debug, new)]
pub struct UpdateCustomer {
    pub customer_id: CustomerId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
}
