pub mod employee;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(employee::index)))
        .service(
            web::resource("/employees")
                .route(web::get().to(employee::list_employees))
                .route(web::post().to(employee::filter_employees)),
        )
        .service(web::resource("/employee/{id}").route(web::get().to(employee::show_employee)))
        .service(
            web::resource("/employee-add")
                .route(web::get().to(employee::add_form))
                .route(web::post().to(employee::add_employee)),
        )
        .service(
            web::resource("/employee-add-results/{code}")
                .route(web::get().to(employee::add_results)),
        )
        .service(
            web::resource("/employee-del/{id}")
                .route(web::get().to(employee::delete_confirm))
                .route(web::post().to(employee::delete_employee)),
        )
        .service(
            web::resource("/employee-del-results/{code}")
                .route(web::get().to(employee::delete_results)),
        )
        .service(
            web::resource("/employee-edit/{id}")
                .route(web::get().to(employee::edit_form))
                .route(web::post().to(employee::edit_employee)),
        )
        .service(
            web::resource("/employee-edit-results/{code}")
                .route(web::get().to(employee::edit_results)),
        );
}
