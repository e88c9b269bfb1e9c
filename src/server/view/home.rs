use dioxus::prelude::*;

use super::{layout::layout, render};

/// Landing page linking to the campground list.
pub fn render_home() -> String {
    render(layout(
        "Home",
        rsx! {
            section { class: "hero",
                h1 { "YelpCamp" }
                p { "Browse campgrounds, share the good ones, and leave reviews." }
                a { class: "button", href: "/campgrounds", "View Campgrounds" }
            }
        },
    ))
}
