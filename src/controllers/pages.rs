//! Wiki page routes — view, edit, save, and the home redirect.
//!
//! A missing page is never an error from the user's point of view: viewing
//! it redirects to the edit form, editing it shows an empty form for a new
//! page. Only a failed save produces a visible error (500).

use actix_web::{http::header, web, HttpResponse, Responder};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::pages::render;
use crate::pages::store::Page;
use crate::AppState;

/// Titles are restricted to alphanumerics before the store ever sees them
static VALID_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("invalid title regex"));

fn is_valid_title(title: &str) -> bool {
    VALID_TITLE.is_match(title)
}

fn redirect_to(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn invalid_title() -> HttpResponse {
    HttpResponse::NotFound().body("invalid page title")
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

async fn home() -> impl Responder {
    redirect_to("/view/FrontPage".to_string())
}

async fn view_page(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();
    if !is_valid_title(&title) {
        return invalid_title();
    }

    match data.store.load(&title) {
        Ok(page) => html(data.templates.render_view(&render::render(&page))),
        // Missing page: send the user to the edit form to create it
        Err(_) => redirect_to(format!("/edit/{}", title)),
    }
}

async fn edit_page(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();
    if !is_valid_title(&title) {
        return invalid_title();
    }

    let page = data.store.load(&title).unwrap_or_else(|_| Page {
        title: title.clone(),
        body: String::new(),
    });
    html(data.templates.render_edit(&page))
}

#[derive(Debug, Deserialize)]
struct SaveForm {
    body: String,
}

async fn save_page(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<SaveForm>,
) -> impl Responder {
    let title = path.into_inner();
    if !is_valid_title(&title) {
        return invalid_title();
    }

    let page = Page {
        title: title.clone(),
        body: form.into_inner().body,
    };

    match data.store.save(&page) {
        Ok(()) => redirect_to(format!("/view/{}", title)),
        Err(e) => {
            log::error!("Failed to save page '{}': {}", title, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/view/{title}", web::get().to(view_page))
        .route("/edit/{title}", web::get().to(edit_page))
        .route("/save/{title}", web::post().to(save_page));
}
