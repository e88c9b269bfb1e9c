use dioxus::prelude::*;

/// Head and body shared by every page; `render` adds the surrounding `<html>` element.
pub(super) fn layout(title: &str, content: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | YelpCamp" }
        }
        body {
            nav { class: "navbar",
                a { class: "brand", href: "/", "YelpCamp" }
                a { href: "/campgrounds", "Campgrounds" }
                a { href: "/campgrounds/new", "New Campground" }
            }
            main { class: "container", {content} }
        }
    }
}
