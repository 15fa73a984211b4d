//! Admin catalog management: upload form + archive storage.

use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Response};
use market_db::bots::BotTemplate;
use tower_sessions::Session;
use uuid::Uuid;

use super::pages::escape_html;
use super::{err_json, err_text};
use crate::app::SharedState;
use crate::auth;

/// GET /admin — upload form and catalog listing; admin only.
pub async fn admin_page(State(state): State<SharedState>, session: Session) -> Response {
    let config = state.config().await.clone();
    if !auth::is_admin(&session, &config).await {
        return "DENIED".into_response();
    }

    match state.db().get_all_bots() {
        Ok(bots) => Html(render_admin(&bots)).into_response(),
        Err(e) => err_text(500, &e.to_string()).into_response(),
    }
}

/// POST /admin — multipart name/price/zip upload.
///
/// The archive is stored under the server-controlled templates directory
/// with a generated filename. Archive contents, price, and duplicate
/// names are not validated.
pub async fn admin_upload(
    State(state): State<SharedState>,
    session: Session,
    mut multipart: Multipart,
) -> Response {
    let config = state.config().await.clone();
    if !auth::is_admin(&session, &config).await {
        return "DENIED".into_response();
    }

    let mut name = String::new();
    let mut price: i64 = 0;
    let mut archive: Option<axum::body::Bytes> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "name" => name = field.text().await.unwrap_or_default(),
            "price" => {
                price = field
                    .text()
                    .await
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0)
            }
            "zip" => match field.bytes().await {
                Ok(data) => archive = Some(data),
                Err(e) => return err_json(400, &e.to_string()).into_response(),
            },
            _ => {}
        }
    }

    let Some(data) = archive else {
        return err_json(400, "No zip file provided").into_response();
    };

    let path = state.templates_dir().join(format!("{}.zip", Uuid::new_v4()));
    if let Err(e) = tokio::fs::write(&path, &data).await {
        return err_text(500, &e.to_string()).into_response();
    }

    if let Err(e) = state.db().add_bot(&name, price, &path.to_string_lossy()) {
        return err_text(500, &e.to_string()).into_response();
    }
    tracing::info!(%name, price, path = %path.display(), "Bot package uploaded");

    match state.db().get_all_bots() {
        Ok(bots) => Html(render_admin(&bots)).into_response(),
        Err(e) => err_text(500, &e.to_string()).into_response(),
    }
}

fn render_admin(bots: &[BotTemplate]) -> String {
    let mut listing = String::new();
    for bot in bots {
        listing.push_str(&escape_html(&bot.name));
        listing.push_str("<br>\n");
    }

    format!(
        r#"<h2>Admin</h2>
<form method="post" enctype="multipart/form-data">
<input name="name" placeholder="Name">
<input name="price" placeholder="Price">
<input type="file" name="zip">
<button>Add</button>
</form>
<hr>
{listing}"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_page_lists_bot_names_escaped() {
        let bots = vec![
            BotTemplate {
                id: 1,
                name: "Greeter".into(),
                price: 5000,
                zip_path: "/tmp/a.zip".into(),
                created_at: String::new(),
            },
            BotTemplate {
                id: 2,
                name: "<script>".into(),
                price: 0,
                zip_path: "/tmp/b.zip".into(),
                created_at: String::new(),
            },
        ];
        let html = render_admin(&bots);
        assert!(html.contains("Greeter<br>"));
        assert!(html.contains("&lt;script&gt;<br>"));
        assert!(html.contains("multipart/form-data"));
    }
}
