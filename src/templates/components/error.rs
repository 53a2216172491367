use crate::templates::components::icons;
use maud::{html, Markup, DOCTYPE};

/// Red banner shown above the listings. No dismiss button.
pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="bg-red-50 border-l-4 border-red-500 p-4 mb-6 rounded" role="alert" {
            div class="flex items-center" {
                div class="flex-shrink-0" {
                    (icons::error_circle("h-5 w-5 text-red-500"))
                }
                div class="ml-3" {
                    p class="text-sm text-red-700" { (message) }
                }
            }
        }
    }
}

/// Standalone page for routing-level errors (404 and friends).
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to listings" } }
            }
        }
    }
}
