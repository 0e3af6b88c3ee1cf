//! Small `document::eval` helpers for browser features without a Rust API.

use dioxus::prelude::*;

/// `window.confirm`; false when the dialog cannot be shown.
pub async fn confirm(message: &str) -> bool {
    let js = format!(
        r#"(function(){{ try {{ return window.confirm("{}"); }} catch(e) {{ return false; }} }})()"#,
        js_escape(message)
    );
    match document::eval(&js).await {
        Ok(v) => v.as_bool().unwrap_or(false),
        Err(_) => false,
    }
}

/// Offer `contents` as a downloaded JSON file.
pub async fn download_json(file_name: &str, contents: &str) {
    let js = format!(
        r#"(function(){{
            try {{
              const blob = new Blob(["{}"], {{ type: "application/json" }});
              const url = URL.createObjectURL(blob);
              const a = document.createElement("a");
              a.href = url;
              a.download = "{}";
              document.body.appendChild(a);
              a.click();
              a.remove();
              URL.revokeObjectURL(url);
            }} catch(e) {{}}
            return "";
        }})()"#,
        js_escape(contents),
        js_escape(file_name)
    );
    if let Err(e) = document::eval(&js).await {
        tracing::warn!("browser.download_json: {e}");
    }
}

pub async fn read_cookies() -> String {
    match document::eval(r#"(function(){ try { return document.cookie || ""; } catch(e) { return ""; } })()"#).await {
        Ok(v) => v.as_str().unwrap_or_default().to_string(),
        Err(_) => String::new(),
    }
}

pub(crate) fn js_escape(s: &str) -> String {
    // Minimal JS string escape for embedding into a double-quoted string.
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
