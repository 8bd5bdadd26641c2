use actix_web::error::{InternalError, UrlencodedError};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::assets;
use crate::data::CV_FILE_NAME;
use crate::error::SiteResult;
use crate::pages::contact::{self, ContactForm};
use crate::routes::{self, Page, ROUTES};
use crate::settings::Settings;

/// Largest contact form body accepted, in bytes
const CONTACT_FORM_LIMIT: usize = 256 * 1024;

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub(crate) struct SiteState {
    pub settings: Settings,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body)
}

async fn page(req: HttpRequest) -> HttpResponse {
    match Page::from_path(req.path()) {
        Some(page) => html(routes::render(page, req.path())),
        None => not_found(req).await,
    }
}

async fn submit_contact(req: HttpRequest, form: web::Form<ContactForm>) -> HttpResponse {
    let form = form.into_inner();
    log::debug!(
        "demo contact submission from {:?} ({} message bytes), discarding",
        form.email,
        form.message.len()
    );
    let view = contact::submit(form);
    if !view.is_success() {
        log::debug!("contact submission missing {:?}", view.missing);
    }
    html(routes::render_contact(req.path(), &view))
}

/// A contact body that cannot be decoded (too large, wrong content type)
/// is answered like an empty submission
fn unreadable_contact(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("unreadable contact submission at {}: {}", req.path(), err);
    let view = contact::submit(ContactForm::default());
    InternalError::from_response(err, html(routes::render_contact(req.path(), &view))).into()
}

async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok().content_type("text/css; charset=utf-8").body(assets::STYLESHEET)
}

async fn asset(state: web::Data<SiteState>, name: web::Path<String>) -> SiteResult<HttpResponse> {
    let asset = assets::load(&state.settings.site.assets_dir, &name).await?;
    Ok(HttpResponse::Ok().content_type(asset.content_type).body(asset.bytes))
}

async fn download_cv(state: web::Data<SiteState>) -> SiteResult<HttpResponse> {
    let asset = assets::load(&state.settings.site.assets_dir, CV_FILE_NAME).await?;
    Ok(HttpResponse::Ok()
        .content_type(asset.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(asset.name)],
        })
        .body(asset.bytes))
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("no page at {}", req.path());
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(routes::render_not_found(req.path()))
}

/// The route itself, plus the same route with one trailing slash
fn route_patterns(path: &str) -> Vec<String> {
    if path == "/" {
        vec![path.to_owned()]
    } else {
        vec![path.to_owned(), format!("{}/", path)]
    }
}

/// Registers every route of the site
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    for (path, page_kind) in ROUTES.iter() {
        let resource = web::resource(route_patterns(path)).route(web::get().to(page));
        if *page_kind == Page::Contact {
            let form_config = web::FormConfig::default()
                .limit(CONTACT_FORM_LIMIT)
                .error_handler(unreadable_contact);
            cfg.service(resource.app_data(form_config).route(web::post().to(submit_contact)));
        } else {
            cfg.service(resource);
        }
    }
    cfg.route("/assets/site.css", web::get().to(stylesheet))
        .route("/assets/{name}", web::get().to(asset))
        .route(&format!("/{}", CV_FILE_NAME), web::get().to(download_cv))
        .default_service(web::to(not_found));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::data;
    use crate::markup::escape;

    fn state_with_assets(dir: &std::path::Path) -> SiteState {
        let mut settings = Settings::from_file(&write_settings(dir)).expect("settings");
        settings.site.assets_dir = dir.to_path_buf();
        SiteState { settings }
    }

    fn write_settings(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("portfolio.toml");
        std::fs::write(&path, "[server]\nport = 0\n").expect("write settings");
        path
    }

    async fn get(state: SiteState, uri: &str) -> (StatusCode, String) {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_rt::test]
    async fn every_route_renders_with_one_active_link() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let expected_active = [
            ("/", "/"),
            ("/experience", "/experience"),
            ("/projects", "/projects"),
            ("/projects/securevigil", "/projects"),
            ("/skills", "/skills"),
            ("/contact", "/contact"),
        ];
        for (uri, active) in expected_active.iter() {
            let (status, body) = get(state_with_assets(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(body.contains("<main"), "{}", uri);

            let desktop_active = format!("<a href=\"{}\" class=\"nav-link active\" aria-current=\"page\">", active);
            assert!(body.contains(&desktop_active), "{}", uri);
            assert_eq!(body.matches("class=\"nav-link active\"").count(), 1, "{}", uri);
        }
    }

    #[actix_rt::test]
    async fn single_trailing_slash_reaches_the_page() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let expected_active = [
            ("/skills/", "/skills"),
            ("/projects/securevigil/", "/projects"),
            ("/contact/", "/contact"),
        ];
        for (uri, active) in expected_active.iter() {
            let (status, body) = get(state_with_assets(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            let desktop_active = format!("<a href=\"{}\" class=\"nav-link active\" aria-current=\"page\">", active);
            assert!(body.contains(&desktop_active), "{}", uri);
            assert_eq!(body.matches("class=\"nav-link active\"").count(), 1, "{}", uri);
        }

        let (status, body) = get(state_with_assets(dir.path()), "/skills//").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }

    #[actix_rt::test]
    async fn unknown_path_is_not_found() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let (status, body) = get(state_with_assets(dir.path()), "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
        assert!(!body.contains("aria-current"));
    }

    #[actix_rt::test]
    async fn experience_blocks_follow_data_order() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let (_, body) = get(state_with_assets(dir.path()), "/experience").await;
        let mut from = 0;
        for (index, exp) in data::experiences().iter().enumerate() {
            let marker = format!("data-entry=\"{}\"", index);
            let at = body[from..].find(&marker).expect("entry rendered") + from;
            let next = format!("data-entry=\"{}\"", index + 1);
            let end = body[at..].find(&next).map(|offset| offset + at).unwrap_or_else(|| body.len());
            assert!(body[at..end].contains(&*escape(&exp.title)));
            from = at;
        }
        assert_eq!(body.matches("class=\"card experience-entry\"").count(), data::EXPERIENCES.len());
    }

    #[actix_rt::test]
    async fn complete_contact_submission_clears_form() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_assets(dir.path())))
                .configure(configure),
        )
        .await;
        let form = ContactForm {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            subject: "Audit".into(),
            message: "Let's talk".into(),
        };
        let req = test::TestRequest::post().uri("/contact").set_form(&form).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8_lossy(&test::read_body(resp).await).into_owned();

        assert!(body.contains(contact::SUCCESS_NOTICE));
        assert_eq!(body.matches("value=\"\"").count(), 3);
        assert!(body.contains("></textarea>"));
        for value in ["Grace", "grace@example.com", "Audit", "Let&#39;s talk"].iter() {
            assert!(!body.contains(value), "{} still rendered", value);
        }
    }

    #[actix_rt::test]
    async fn incomplete_contact_submission_keeps_values() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_assets(dir.path())))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form(&[("name", "Grace"), ("email", "grace@example.com")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8_lossy(&test::read_body(resp).await).into_owned();

        assert!(!body.contains(contact::SUCCESS_NOTICE));
        assert!(body.contains("value=\"Grace\""));
        assert_eq!(body.matches("aria-invalid=\"true\"").count(), 2);
    }

    #[actix_rt::test]
    async fn long_contact_message_is_accepted() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_assets(dir.path())))
                .configure(configure),
        )
        .await;
        let form = ContactForm {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            subject: "Audit".into(),
            message: "x".repeat(20_000),
        };
        let req = test::TestRequest::post().uri("/contact").set_form(&form).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8_lossy(&test::read_body(resp).await).into_owned();
        assert!(body.contains(contact::SUCCESS_NOTICE));
    }

    #[actix_rt::test]
    async fn unreadable_contact_body_re_renders_the_form() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_assets(dir.path())))
                .configure(configure),
        )
        .await;

        let oversized = format!("name=Grace&email=g%40example.com&subject=Hi&message={}", "x".repeat(CONTACT_FORM_LIMIT));
        let requests = vec![
            test::TestRequest::post()
                .uri("/contact")
                .insert_header(("content-type", "application/x-www-form-urlencoded"))
                .set_payload(oversized)
                .to_request(),
            test::TestRequest::post()
                .uri("/contact")
                .insert_header(("content-type", "text/plain"))
                .set_payload("name=Grace")
                .to_request(),
        ];
        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body = String::from_utf8_lossy(&test::read_body(resp).await).into_owned();
            assert!(body.contains("Send a Message"));
            assert!(!body.contains(contact::SUCCESS_NOTICE));
            assert_eq!(body.matches("aria-invalid=\"true\"").count(), 4);
        }
    }

    #[actix_rt::test]
    async fn cv_is_served_as_attachment() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join(CV_FILE_NAME), b"%PDF-1.4 cv").expect("write cv");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_assets(dir.path())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/Ola-Amodu-CV.pdf").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers().clone();
        assert_eq!(headers.get("content-type").and_then(|v| v.to_str().ok()), Some("application/pdf"));
        let disposition = headers.get("content-disposition").and_then(|v| v.to_str().ok()).unwrap_or("");
        assert!(disposition.starts_with("attachment"));
        assert_eq!(&test::read_body(resp).await[..], b"%PDF-1.4 cv");
    }

    #[actix_rt::test]
    async fn missing_or_hidden_assets_are_not_found() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join(".secret"), b"x").expect("write");

        let (status, _) = get(state_with_assets(dir.path()), "/Ola-Amodu-CV.pdf").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get(state_with_assets(dir.path()), "/assets/.secret").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, body) = get(state_with_assets(dir.path()), "/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(".site-nav"));
    }
}
