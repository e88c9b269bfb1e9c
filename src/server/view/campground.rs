use dioxus::prelude::*;

use super::{layout::layout, render};
use crate::server::model::campground::{Campground, CampgroundWithReviews};

/// List of every campground.
pub fn render_index(campgrounds: &[Campground]) -> String {
    render(layout(
        "All Campgrounds",
        rsx! {
            h1 { "All Campgrounds" }
            if campgrounds.is_empty() {
                p { "No campgrounds yet." }
            }
            ul { class: "campgrounds",
                for campground in campgrounds {
                    li { key: "{campground.id}",
                        a { href: "/campgrounds/{campground.id}", "{campground.title}" }
                        span { class: "location", "{campground.location}" }
                    }
                }
            }
        },
    ))
}

/// Form for creating a campground.
pub fn render_new() -> String {
    render(layout(
        "New Campground",
        rsx! {
            h1 { "New Campground" }
            form { action: "/campgrounds", method: "POST",
                {campground_fields(None)}
                button { r#type: "submit", "Add Campground" }
            }
            a { href: "/campgrounds", "All Campgrounds" }
        },
    ))
}

/// Form for editing an existing campground; submits as PUT through the method override.
pub fn render_edit(campground: &Campground) -> String {
    let action = format!("/campgrounds/{}?_method=PUT", campground.id);
    let back = format!("/campgrounds/{}", campground.id);

    render(layout(
        "Edit Campground",
        rsx! {
            h1 { "Edit Campground" }
            form { action: "{action}", method: "POST",
                {campground_fields(Some(campground))}
                button { r#type: "submit", "Update Campground" }
            }
            a { href: "{back}", "Back to Campground" }
        },
    ))
}

/// Detail page with the campground's reviews and the review form.
pub fn render_show(details: &CampgroundWithReviews) -> String {
    let campground = &details.campground;
    let price = format!("${:.2}/night", campground.price);
    let edit = format!("/campgrounds/{}/edit", campground.id);
    let delete = format!("/campgrounds/{}?_method=DELETE", campground.id);
    let add_review = format!("/campgrounds/{}/reviews", campground.id);

    render(layout(
        &campground.title,
        rsx! {
            article { class: "campground",
                h1 { "{campground.title}" }
                p { class: "location", "{campground.location}" }
                p { class: "price", "{price}" }
                p { "{campground.description}" }
                a { href: "{edit}", "Edit" }
                form { action: "{delete}", method: "POST",
                    button { r#type: "submit", "Delete" }
                }
            }
            section { class: "reviews",
                h2 { "Leave a Review" }
                form { action: "{add_review}", method: "POST",
                    label { r#for: "rating", "Rating" }
                    input {
                        r#type: "range",
                        id: "rating",
                        name: "review[rating]",
                        min: "1",
                        max: "5",
                    }
                    label { r#for: "body", "Review" }
                    textarea { id: "body", name: "review[body]", rows: "3", required: true }
                    button { r#type: "submit", "Submit" }
                }
                for review in details.reviews.iter() {
                    div { key: "{review.id}", class: "review",
                        h3 { "Rating: {review.rating}" }
                        p { "{review.body}" }
                    }
                }
            }
        },
    ))
}

/// Inputs shared by the new and edit forms, prefilled when editing.
fn campground_fields(campground: Option<&Campground>) -> Element {
    let (title, price, description, location) = match campground {
        Some(c) => (
            c.title.clone(),
            c.price.to_string(),
            c.description.clone(),
            c.location.clone(),
        ),
        None => Default::default(),
    };

    rsx! {
        label { r#for: "title", "Title" }
        input { r#type: "text", id: "title", name: "campground[title]", value: "{title}", required: true }
        label { r#for: "location", "Location" }
        input {
            r#type: "text",
            id: "location",
            name: "campground[location]",
            value: "{location}",
            required: true,
        }
        label { r#for: "price", "Price" }
        input {
            r#type: "number",
            id: "price",
            name: "campground[price]",
            min: "0",
            step: "0.01",
            value: "{price}",
            required: true,
        }
        label { r#for: "description", "Description" }
        textarea { id: "description", name: "campground[description]", required: true, "{description}" }
    }
}
