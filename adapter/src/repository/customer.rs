use crate::database::{model::customer::CustomerRow, ConnectionPool};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        Customer,
    },
    id::CustomerId,
};
use kernel::repository::customer::CustomerRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CustomerRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn create(&self, event: CreateCustomer) -> AppResult<Customer> {
        let now = Utc::now();
        // A duplicated email surfaces here as a UNIQUE constraint violation
        sqlx::query_as::<_, CustomerRow>(
            r#"
                INSERT INTO customers (name, email, phone, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(event.name)
        .bind(event.email)
        .bind(event.phone)
        .bind(now)
        .bind(now)
        .fetch_one(self.db.inner_ref())
        .await
        .map(Customer::from)
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT id, name, email, phone, created_at, updated_at
                FROM customers
                ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Customer::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT id, name, email, phone, created_at, updated_at
                FROM customers
                WHERE id = ?
            "#,
        )
        .bind(customer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Customer::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateCustomer) -> AppResult<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
                UPDATE customers
                SET
                    name = COALESCE(?, name),
                    email = COALESCE(?, email),
                    phone = CASE WHEN ? THEN ? ELSE phone END,
                    updated_at = ?
                WHERE id = ?
                RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(event.name)
        .bind(event.email)
        .bind(event.phone.is_some())
        .bind(event.phone.flatten())
        .bind(Utc::now())
        .bind(event.customer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Customer::from).ok_or_else(|| {
            AppError::EntityNotFound(format!("customer ({}) not found", event.customer_id))
        })
    }

    async fn delete(&self, customer_id: CustomerId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM customers WHERE id = ?
            "#,
        )
        .bind(customer_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "customer ({customer_id}) not found"
            )));
        }

        Ok(())
    }
}
