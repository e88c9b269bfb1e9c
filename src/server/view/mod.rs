//! Server-rendered HTML pages.
//!
//! Each page is a pure function from domain data to an HTML document, built with `rsx!`
//! and rendered to a string with `dioxus_ssr`. Text and attribute values are escaped by
//! the renderer.

pub mod campground;
pub mod error;
pub mod home;
mod layout;

use dioxus::prelude::*;

/// Renders a full page element into an HTML document string.
fn render(element: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(element)
    )
}
