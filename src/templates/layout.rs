use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Trackdays" }

                link rel="stylesheet" href="/static/css/app.css";
            }
            body class="h-full bg-gray-50" {
                div class="min-h-full" {
                    (nav_bar())

                    main class="container mx-auto px-4 py-8" {
                        (content)
                    }

                    (footer())
                }
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="container mx-auto px-4" {
                div class="flex justify-between items-center h-16" {
                    a href="/" class="flex items-center space-x-3" {
                        span class="text-2xl" { "🏁" }
                        span class="text-xl font-bold text-gray-900" { "Trackdays" }
                    }

                    div class="flex space-x-4" {
                        a href="/tracks" class="nav-link" { "Tracks" }
                        a href="/admin/tracks" class="nav-link" { "Admin: Tracks" }
                        a href="/admin/organizers" class="nav-link" { "Admin: Organizers" }
                        a href="/admin/events" class="nav-link" { "Admin: Events" }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-white border-t border-gray-200 mt-12" {
            div class="container mx-auto px-4 py-6" {
                div class="text-center text-gray-600 text-sm" {
                    "Trackdays - Track-day events and circuits"
                }
            }
        }
    }
}
