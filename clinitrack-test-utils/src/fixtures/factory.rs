//! Factory functions for in-memory database models.
//!
//! These build model instances without database interaction, for unit tests of pure
//! aggregation and filtering logic.

use chrono::{NaiveDate, Utc};

/// Build a calendar date, panicking on an invalid one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn process_model(id: i32, name: &str) -> entity::process::Model {
    entity::process::Model {
        id,
        name: name.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

pub fn subprocess_model(id: i32, process_id: i32, name: &str) -> entity::subprocess::Model {
    entity::subprocess::Model {
        id,
        name: name.to_string(),
        process_id,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a pending project model.
pub fn project_model(
    id: i32,
    process_id: i32,
    subprocess_id: i32,
    name: &str,
) -> entity::project::Model {
    entity::project::Model {
        id,
        name: name.to_string(),
        responsible: "Test Owner".to_string(),
        status: "Pendiente".to_string(),
        process_id,
        subprocess_id,
        created_at: Utc::now().naive_utc(),
        projected_date: date(2025, 6, 30),
        completion_date: None,
    }
}

pub fn task_model(id: i32, project_id: i32, status: &str) -> entity::task::Model {
    task_model_with_dates(
        id,
        project_id,
        status,
        date(2025, 1, 31),
        date(2025, 1, 31),
    )
}

/// Create a task model with explicit end and projected dates.
pub fn task_model_with_dates(
    id: i32,
    project_id: i32,
    status: &str,
    end_date: NaiveDate,
    projected_date: NaiveDate,
) -> entity::task::Model {
    entity::task::Model {
        id,
        project_id,
        description: format!("Task {}", id),
        responsible: "Test Owner".to_string(),
        start_date: date(2025, 1, 1),
        end_date,
        status: status.to_string(),
        created_at: Utc::now().naive_utc(),
        projected_date,
        fulfillment_date: None,
    }
}

pub fn insurer_model(id: i32, name: &str) -> entity::insurer::Model {
    entity::insurer::Model {
        id,
        name: name.to_string(),
        tax_id: "900.000.000-1".to_string(),
        contact: "contacto@example.com".to_string(),
    }
}

pub fn contract_model(
    id: i32,
    insurer_id: i32,
    end_date: NaiveDate,
    monthly_cap: f64,
) -> entity::contract::Model {
    entity::contract::Model {
        id,
        name: format!("Contract {}", id),
        start_date: date(2024, 1, 1),
        end_date,
        rate_type: "SOAT".to_string(),
        monthly_cap,
        conditions: None,
        insurer_id,
    }
}
