use axum::http::StatusCode;
use dioxus::prelude::*;

use super::layout::layout;

/// Shared error page showing the resolved message and status code.
pub fn render(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");

    super::render(layout(
        "Error",
        rsx! {
            div { class: "alert", role: "alert",
                h1 { "{message}" }
                p { "{code} {reason}" }
                a { href: "/campgrounds", "Back to campgrounds" }
            }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_message_and_status() {
        let html = render(StatusCode::NOT_FOUND, "Page not found");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Page not found"));
        assert!(html.contains("404 Not Found"));
    }
}
