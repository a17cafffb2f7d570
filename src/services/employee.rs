//! Validation and mutation of employee records.
//!
//! Add, Edit and Delete each run inside one transaction. Checks run in a
//! fixed order and the first failing check decides the reported code; a
//! failure drops the transaction, so nothing is written. Storage errors are
//! logged and reported as [`Failure::DatabaseError`], never propagated.

use sqlx::{SqliteConnection, SqlitePool};

use crate::db;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeForm, EmployeeSummary};
use crate::models::result_code::{Failure, Outcome, Success};
use crate::utils::validation::{has_control_character, parse_int};

fn storage_error(err: sqlx::Error) -> Failure {
    log::error!("Storage failure while mutating employees: {}", err);
    Failure::DatabaseError
}

fn log_outcome(operation: &str, raw_id: &str, outcome: Outcome) {
    match outcome {
        Ok(success) => log::info!("{} employee {:?}: {}", operation, raw_id, success),
        Err(Failure::DatabaseError) => {
            log::error!("{} employee {:?}: {}", operation, raw_id, Failure::DatabaseError)
        }
        Err(failure) => log::warn!("{} employee {:?} rejected: {}", operation, raw_id, failure),
    }
}

/// Checks shared by Add and Edit, in reporting order, once `id` is settled.
async fn check_fields(
    conn: &mut SqliteConnection,
    id: i64,
    form: &EmployeeForm,
) -> Result<Employee, Failure> {
    let manager_id = parse_int(&form.manager_id).ok_or(Failure::ManagerIdHasInvalidCharacter)?;
    // a self-reference marks a top-level employee and needs no lookup
    if manager_id != id && !db::employee::exists(&mut *conn, manager_id).await.map_err(storage_error)? {
        return Err(Failure::ManagerIdDoesNotExist);
    }

    let salary = parse_int(&form.salary).ok_or(Failure::SalaryHasInvalidCharacter)?;
    let birth_year = parse_int(&form.birth_year).ok_or(Failure::BirthYearHasInvalidCharacter)?;
    let start_year = parse_int(&form.start_year).ok_or(Failure::StartYearHasInvalidCharacter)?;

    if has_control_character(&form.name) {
        return Err(Failure::NameHasControlCharacter);
    }

    Ok(Employee {
        id,
        name: form.name.clone(),
        salary,
        manager_id,
        birth_year,
        start_year,
    })
}

pub async fn add(pool: &SqlitePool, raw_id: &str, form: &EmployeeForm) -> Outcome {
    let outcome = try_add(pool, raw_id, form).await;
    log_outcome("add", raw_id, outcome);
    outcome
}

async fn try_add(pool: &SqlitePool, raw_id: &str, form: &EmployeeForm) -> Outcome {
    let id = parse_int(raw_id).ok_or(Failure::IdHasInvalidCharacter)?;

    let mut tx = pool.begin().await.map_err(storage_error)?;
    if db::employee::exists(&mut *tx, id).await.map_err(storage_error)? {
        return Err(Failure::IdAlreadyExists);
    }
    let employee = check_fields(&mut *tx, id, form).await?;

    db::employee::insert(&mut *tx, &employee)
        .await
        .map_err(storage_error)?;
    tx.commit().await.map_err(storage_error)?;
    Ok(Success::Added)
}

pub async fn edit(pool: &SqlitePool, raw_id: &str, form: &EmployeeForm) -> Outcome {
    let outcome = try_edit(pool, raw_id, form).await;
    log_outcome("edit", raw_id, outcome);
    outcome
}

async fn try_edit(pool: &SqlitePool, raw_id: &str, form: &EmployeeForm) -> Outcome {
    let id = parse_int(raw_id).ok_or(Failure::IdHasInvalidCharacter)?;

    let mut tx = pool.begin().await.map_err(storage_error)?;
    if !db::employee::exists(&mut *tx, id).await.map_err(storage_error)? {
        return Err(Failure::IdDoesNotExist);
    }
    let employee = check_fields(&mut *tx, id, form).await?;

    let touched = db::employee::update(&mut *tx, &employee)
        .await
        .map_err(storage_error)?;
    if touched == 0 {
        return Err(Failure::IdDoesNotExist);
    }
    tx.commit().await.map_err(storage_error)?;
    Ok(Success::Updated)
}

pub async fn delete(pool: &SqlitePool, raw_id: &str) -> Outcome {
    let outcome = try_delete(pool, raw_id).await;
    log_outcome("delete", raw_id, outcome);
    outcome
}

async fn try_delete(pool: &SqlitePool, raw_id: &str) -> Outcome {
    let id = parse_int(raw_id).ok_or(Failure::IdHasInvalidCharacter)?;

    let mut tx = pool.begin().await.map_err(storage_error)?;
    check_deletable_in(&mut *tx, id).await?;

    let touched = db::employee::delete(&mut *tx, id)
        .await
        .map_err(storage_error)?;
    if touched == 0 {
        return Err(Failure::IdDoesNotExist);
    }
    tx.commit().await.map_err(storage_error)?;
    Ok(Success::Deleted)
}

async fn check_deletable_in(conn: &mut SqliteConnection, id: i64) -> Result<(), Failure> {
    if !db::employee::exists(&mut *conn, id).await.map_err(storage_error)? {
        return Err(Failure::IdDoesNotExist);
    }
    if db::employee::has_subordinates(&mut *conn, id).await.map_err(storage_error)? {
        return Err(Failure::IdIsManager);
    }
    Ok(())
}

/// The delete guard without deleting; backs the confirmation page.
pub async fn check_deletable(pool: &SqlitePool, raw_id: &str) -> Result<i64, Failure> {
    let id = parse_int(raw_id).ok_or(Failure::IdHasInvalidCharacter)?;
    let mut conn = pool.acquire().await.map_err(storage_error)?;
    check_deletable_in(&mut *conn, id).await?;
    Ok(id)
}

/// Loads the record an edit form should start from.
pub async fn find_for_edit(pool: &SqlitePool, raw_id: &str) -> Result<Employee, Failure> {
    let id = parse_int(raw_id).ok_or(Failure::IdHasInvalidCharacter)?;
    db::employee::find(pool, id)
        .await
        .map_err(storage_error)?
        .ok_or(Failure::IdDoesNotExist)
}

/// An unparseable id is simply not found.
pub async fn get(pool: &SqlitePool, raw_id: &str) -> Result<Option<Employee>, AppError> {
    let Some(id) = parse_int(raw_id) else {
        return Ok(None);
    };
    Ok(db::employee::find(pool, id).await?)
}

/// `name_filter` is passed through as a `LIKE` pattern.
pub async fn list(pool: &SqlitePool, name_filter: Option<&str>) -> Result<Vec<EmployeeSummary>, AppError> {
    let rows = match name_filter {
        Some(filter) => db::employee::list_by_name(pool, filter).await?,
        None => db::employee::list(pool).await?,
    };
    Ok(rows)
}
