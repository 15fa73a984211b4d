//! Server-rendered dashboard.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tower_sessions::Session;

use super::err_text;
use crate::app::SharedState;
use crate::auth;

type PageResult = Result<Html<String>, (StatusCode, String)>;

/// GET / — the user dashboard: full catalog, the user's activations, and
/// an analytics chart fed from /analytics.
pub async fn dashboard(State(state): State<SharedState>, session: Session) -> PageResult {
    let Some(user) = auth::session_user(&session).await else {
        return Ok(Html("Login first".to_string()));
    };

    let db = state.db();
    let count = db
        .count_user_activations(&user)
        .map_err(|e| err_text(500, &e.to_string()))?;
    let mine = db
        .get_user_activations(&user)
        .map_err(|e| err_text(500, &e.to_string()))?;
    let catalog = db
        .get_all_bots()
        .map_err(|e| err_text(500, &e.to_string()))?;

    let mut catalog_html = String::new();
    for bot in &catalog {
        catalog_html.push_str(&format!(
            r#"<form method="post" action="/open">
<input type="hidden" name="bot" value="{id}">
<b>{name}</b> - {price}
<button class="block bg-blue-500 text-white px-2 py-1 mt-1">Open</button>
</form>
"#,
            id = bot.id,
            name = escape_html(&bot.name),
            price = bot.price,
        ));
    }

    let mut mine_html = String::new();
    for a in &mine {
        mine_html.push_str(&format!(
            r#"<div class="border p-2 rounded">
<b>{name}</b><br>
<a href="/toggle/{id}">Toggle</a> |
<a href="/delete/{id}">Delete</a>
</div>
"#,
            id = a.id,
            name = escape_html(&a.bot_name),
        ));
    }

    Ok(Html(format!(
        r#"<script src="https://cdn.tailwindcss.com"></script>
<div class="p-4">
<div class="flex justify-between"><b>User</b><span>🤖 {count}</span></div>

<div class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-4">
<div class="bg-white p-3 rounded">
<h3>➕ New bot</h3>
{catalog_html}</div>

<div class="md:col-span-2 grid grid-cols-1 sm:grid-cols-2 gap-2">
{mine_html}</div>
</div>

<canvas id="c"></canvas>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<script>
fetch("/analytics").then(r=>r.json()).then(d=>{{
 new Chart(document.getElementById("c"),{{
 type:"line",
 data:{{labels:d.l, datasets:[{{data:d.v,label:"Bots"}}]}}
 }})
}})
</script>
</div>
"#,
    )))
}

/// Minimal HTML escaping for user-influenced text.
pub(super) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
