use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use tera::{Context, Tera};

use crate::auth::CurrentUser;
use crate::errors::AppResult;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("manufacturer_list.html", include_str!("../templates/manufacturer_list.html")),
    ("manufacturer_form.html", include_str!("../templates/manufacturer_form.html")),
    ("car_list.html", include_str!("../templates/car_list.html")),
    ("car_detail.html", include_str!("../templates/car_detail.html")),
    ("car_form.html", include_str!("../templates/car_form.html")),
    ("driver_list.html", include_str!("../templates/driver_list.html")),
    ("driver_detail.html", include_str!("../templates/driver_detail.html")),
    ("driver_form.html", include_str!("../templates/driver_form.html")),
    ("license_form.html", include_str!("../templates/license_form.html")),
];

/// Compiles the embedded templates. `.html` names are autoescaped.
pub fn init_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    Ok(tera)
}

/// Context every logged-in page starts from.
pub fn page_context(user: &CurrentUser) -> Context {
    let mut context = Context::new();
    context.insert("current_user", &user.driver);
    context
}

pub fn render(tera: &Tera, name: &str, context: &Context) -> AppResult<HttpResponse> {
    render_with_status(tera, name, context, StatusCode::OK)
}

pub fn render_with_status(
    tera: &Tera,
    name: &str,
    context: &Context,
    status: StatusCode,
) -> AppResult<HttpResponse> {
    let body = tera.render(name, context)?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        let tera = init_templates().unwrap();
        for (name, _) in TEMPLATES {
            assert!(tera.get_template(name).is_ok(), "{name} missing");
        }
    }

    #[test]
    fn output_is_escaped() {
        let tera = init_templates().unwrap();
        let mut context = Context::new();
        context.insert("error", "<script>");
        context.insert("next", "/");
        context.insert("username", "");
        let html = tera.render("login.html", &context).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
