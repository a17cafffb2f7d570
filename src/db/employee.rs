//! Queries against the `employees` table.
//!
//! Every function takes any SQLite executor so callers can run them on the
//! pool directly or inside a transaction.

use sqlx::SqliteExecutor;

use crate::models::employee::{Employee, EmployeeSummary};

pub async fn exists<'e, E: SqliteExecutor<'e>>(executor: E, id: i64) -> Result<bool, sqlx::Error> {
    let row: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// True if some employee other than `id` itself names `id` as its manager.
pub async fn has_subordinates<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<i64> =
        sqlx::query_scalar("SELECT id FROM employees WHERE manager_id = ? AND id != ? LIMIT 1")
            .bind(id)
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(row.is_some())
}

pub async fn find<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT id, name, salary, manager_id, birth_year, start_year FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<EmployeeSummary>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeSummary>("SELECT id, name FROM employees ORDER BY id")
        .fetch_all(executor)
        .await
}

/// `pattern` is a SQL `LIKE` pattern supplied by the caller: `%` and `_`
/// are wildcards and anything else must match the whole name.
pub async fn list_by_name<'e, E: SqliteExecutor<'e>>(
    executor: E,
    pattern: &str,
) -> Result<Vec<EmployeeSummary>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeSummary>(
        "SELECT id, name FROM employees WHERE name LIKE ? ORDER BY id",
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
}

pub async fn insert<'e, E: SqliteExecutor<'e>>(executor: E, employee: &Employee) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO employees (id, name, salary, manager_id, birth_year, start_year) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(employee.id)
    .bind(&employee.name)
    .bind(employee.salary)
    .bind(employee.manager_id)
    .bind(employee.birth_year)
    .bind(employee.start_year)
    .execute(executor)
    .await?;
    Ok(())
}

/// Overwrites every field except `id`. Returns the number of rows touched.
pub async fn update<'e, E: SqliteExecutor<'e>>(executor: E, employee: &Employee) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE employees SET name = ?, salary = ?, manager_id = ?, birth_year = ?, start_year = ? WHERE id = ?",
    )
    .bind(&employee.name)
    .bind(employee.salary)
    .bind(employee.manager_id)
    .bind(employee.birth_year)
    .bind(employee.start_year)
    .bind(employee.id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(executor: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn employee(id: i64, name: &str, manager_id: i64) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            salary: 30000,
            manager_id,
            birth_year: 1990,
            start_year: 2015,
        }
    }

    #[actix_web::test]
    async fn insert_then_find() {
        let pool = test_pool().await;
        let alice = employee(1, "Alice", 1);
        insert(&pool, &alice).await.unwrap();

        assert!(exists(&pool, 1).await.unwrap());
        assert!(!exists(&pool, 2).await.unwrap());
        assert_eq!(find(&pool, 1).await.unwrap(), Some(alice));
        assert_eq!(find(&pool, 2).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn self_managed_row_has_no_subordinates() {
        let pool = test_pool().await;
        insert(&pool, &employee(1, "Alice", 1)).await.unwrap();
        assert!(!has_subordinates(&pool, 1).await.unwrap());

        insert(&pool, &employee(2, "Bob", 1)).await.unwrap();
        assert!(has_subordinates(&pool, 1).await.unwrap());
        assert!(!has_subordinates(&pool, 2).await.unwrap());
    }

    #[actix_web::test]
    async fn duplicate_primary_key_is_a_storage_error() {
        let pool = test_pool().await;
        insert(&pool, &employee(1, "Alice", 1)).await.unwrap();
        assert!(insert(&pool, &employee(1, "Other", 1)).await.is_err());
    }

    #[actix_web::test]
    async fn foreign_key_rejects_missing_manager() {
        let pool = test_pool().await;
        assert!(insert(&pool, &employee(5, "Orphan", 99)).await.is_err());
        assert!(!exists(&pool, 5).await.unwrap());
    }

    #[actix_web::test]
    async fn list_is_ordered_and_filterable() {
        let pool = test_pool().await;
        insert(&pool, &employee(3, "Carol", 3)).await.unwrap();
        insert(&pool, &employee(1, "Alice", 1)).await.unwrap();
        insert(&pool, &employee(2, "Alicia", 1)).await.unwrap();

        let all = list(&pool).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let filtered = list_by_name(&pool, "Ali%").await.unwrap();
        let names: Vec<&str> = filtered.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Alicia"]);

        // without wildcards the whole name has to match
        assert!(list_by_name(&pool, "Ali").await.unwrap().is_empty());
        assert_eq!(list_by_name(&pool, "alice").await.unwrap().len(), 1);
        assert!(list_by_name(&pool, "").await.unwrap().is_empty());
        assert_eq!(list_by_name(&pool, "%").await.unwrap().len(), 3);
        assert_eq!(list_by_name(&pool, "A_ic_a").await.unwrap().len(), 1);
        assert!(list_by_name(&pool, "Zed").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn update_and_delete_report_rows_touched() {
        let pool = test_pool().await;
        insert(&pool, &employee(1, "Alice", 1)).await.unwrap();

        let mut changed = employee(1, "Alice Smith", 1);
        changed.salary = 61000;
        assert_eq!(update(&pool, &changed).await.unwrap(), 1);
        assert_eq!(find(&pool, 1).await.unwrap(), Some(changed));

        assert_eq!(update(&pool, &employee(9, "Nobody", 9)).await.unwrap(), 0);
        assert_eq!(delete(&pool, 1).await.unwrap(), 1);
        assert_eq!(delete(&pool, 1).await.unwrap(), 0);
    }
}
