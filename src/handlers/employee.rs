use actix_web::http::header;
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::employee::{EmployeeForm, NameFilter, NewEmployeeForm};
use crate::models::result_code::{code_of, message_for, Outcome};
use crate::services::employee as service;
use crate::views::{self, ResultsPage, HTML_CONTENT_TYPE};

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(HTML_CONTENT_TYPE).body(body)
}

/// Post/redirect/get: a mutation only ever answers with a redirect that
/// carries its result code.
fn redirect_to_results(results_path: &str, outcome: Outcome) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("{}/{}", results_path, code_of(outcome))))
        .finish()
}

pub async fn index() -> HttpResponse {
    html(views::index_page())
}

pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let employees = service::list(&pool, None).await?;
    Ok(html(views::employees_page(&employees, None)))
}

pub async fn filter_employees(
    pool: web::Data<SqlitePool>,
    filter: web::Form<NameFilter>,
) -> Result<HttpResponse, AppError> {
    let employees = service::list(&pool, Some(&filter.name_filter)).await?;
    Ok(html(views::employees_page(&employees, Some(&filter.name_filter))))
}

pub async fn show_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match service::get(&pool, &id).await? {
        Some(employee) => Ok(html(views::employee_page(&employee))),
        None => Ok(HttpResponse::NotFound()
            .content_type(HTML_CONTENT_TYPE)
            .body(views::employee_not_found_page())),
    }
}

pub async fn add_form() -> HttpResponse {
    html(views::add_form_page())
}

pub async fn add_employee(
    pool: web::Data<SqlitePool>,
    form: web::Form<NewEmployeeForm>,
) -> HttpResponse {
    let (id, fields) = form.into_inner().into_parts();
    let outcome = service::add(&pool, &id, &fields).await;
    redirect_to_results("/employee-add-results", outcome)
}

pub async fn add_results(code: web::Path<String>) -> HttpResponse {
    html(views::results_page(ResultsPage::Add, message_for(&code)))
}

pub async fn delete_confirm(pool: web::Data<SqlitePool>, id: web::Path<String>) -> HttpResponse {
    match service::check_deletable(&pool, &id).await {
        Ok(id) => html(views::delete_confirm_page(id)),
        Err(reason) => html(views::results_page(ResultsPage::Delete, reason.message())),
    }
}

pub async fn delete_employee(pool: web::Data<SqlitePool>, id: web::Path<String>) -> HttpResponse {
    let outcome = service::delete(&pool, &id).await;
    redirect_to_results("/employee-del-results", outcome)
}

pub async fn delete_results(code: web::Path<String>) -> HttpResponse {
    html(views::results_page(ResultsPage::Delete, message_for(&code)))
}

pub async fn edit_form(pool: web::Data<SqlitePool>, id: web::Path<String>) -> HttpResponse {
    match service::find_for_edit(&pool, &id).await {
        Ok(employee) => html(views::edit_form_page(&employee)),
        Err(reason) => html(views::results_page(ResultsPage::Edit, reason.message())),
    }
}

pub async fn edit_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
    form: web::Form<EmployeeForm>,
) -> HttpResponse {
    let outcome = service::edit(&pool, &id, &form).await;
    redirect_to_results("/employee-edit-results", outcome)
}

pub async fn edit_results(code: web::Path<String>) -> HttpResponse {
    html(views::results_page(ResultsPage::Edit, message_for(&code)))
}
