use axum::response::Redirect;

pub(crate) async fn index_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}

pub(crate) async fn index_page() -> axum::response::Response {
    const INDEX_CONTENT: &str = include_str!("../static/index.html");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "text/html; charset=utf-8")
        .header("cache-control", "no-cache")
        .body(INDEX_CONTENT.into())
        .unwrap()
}

pub(crate) async fn stylesheet() -> axum::response::Response {
    const CSS_CONTENT: &str = include_str!("../static/styles.css");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "text/css")
        .header("cache-control", "public, max-age=3600")
        .body(CSS_CONTENT.into())
        .unwrap()
}

pub(crate) async fn app_script() -> axum::response::Response {
    const APP_JS_CONTENT: &str = include_str!("../static/app.js");
    axum::response::Response::builder()
        .status(200)
        .header("content-type", "application/javascript")
        .header("cache-control", "public, max-age=3600")
        .body(APP_JS_CONTENT.into())
        .unwrap()
}
