use axum::{
    extract::Query,
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::{error::AppError, viewer::PdfViewerOptions};

/// Fixed at build time; the shell is not configurable per request.
pub const META_DESCRIPTION: &str = "Manage project documents, files, and FAQs in one place.";

/// Overlay content (dialogs, the inline viewer) mounts here.
pub const MOUNT_ID: &str = "overlay-root";

fn render_shell(title: &str, mount_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{META_DESCRIPTION}">
<title>{title}</title>
</head>
<body>
<div id="{MOUNT_ID}">{mount_content}</div>
</body>
</html>
"#
    )
}

/// The landing route never renders anything itself.
pub async fn root_handler() -> Redirect {
    Redirect::temporary("/login")
}

pub async fn login_handler() -> Html<String> {
    Html(render_shell("Log in", ""))
}

#[derive(Deserialize)]
pub struct ViewerQuery {
    file: String,
    page: Option<u32>,
    title: Option<String>,
}

pub async fn viewer_handler(
    Query(query): Query<ViewerQuery>,
) -> Result<Html<String>, AppError> {
    let mut options = PdfViewerOptions::new(query.file);
    if let Some(page) = query.page {
        options.initial_page = page;
    }
    options.title = query.title;

    let config = options
        .mount_config()
        .map_err(|e| AppError::Internal(Box::new(e)))?;

    let mount_content =
        format!(r#"<script type="application/json" id="viewer-config">{config}</script>"#);

    Ok(Html(render_shell("Viewer", &mount_content)))
}
