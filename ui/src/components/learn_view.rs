use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use koji_common::article::{Article, ArticleCategory};
use koji_common::filter::{CategoryFilter, DirectoryState};

use super::app::Route;
use super::catalog_state::use_catalog;
use super::partners_view::FilterButton;

fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, opts);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn LearnView() -> Element {
    let catalog = use_catalog();
    let mut directory = use_signal(DirectoryState::<ArticleCategory>::new);

    // HTML for the spotlighted article.
    let article_html = use_memo(move || {
        let state = catalog.read();
        directory
            .read()
            .spotlight(state.articles())
            .map(|article| render_markdown(&article.body))
    });

    let state = catalog.read();
    let articles = state.articles().to_vec();
    let featured: Vec<Article> = state
        .catalog
        .as_ref()
        .map(|c| c.featured_articles().into_iter().cloned().collect())
        .unwrap_or_default();
    drop(state);

    let view = directory.read();
    let visible: Vec<Article> = view.visible(&articles).into_iter().cloned().collect();
    let spotlight = view.spotlight(&articles).cloned();
    let active_filter = view.filter.category;
    let query = view.filter.query.clone();
    drop(view);

    let reader = spotlight.zip(article_html());

    rsx! {
        div { class: "learn-view",
            section { class: "page-header",
                h1 {
                    "Learn About "
                    span { class: "gradient-text", "Koji" }
                }
                p {
                    "Discover the ancient art and modern science of koji fermentation. Learn how we transform food waste into delicious, sustainable products."
                }
            }

            section { class: "card filters",
                h3 { "Browse by Category" }
                div { class: "search-bar",
                    input {
                        r#type: "text",
                        placeholder: "Search articles or topics...",
                        value: "{query}",
                        oninput: move |evt| directory.write().set_query(evt.value()),
                    }
                }
                div { class: "filter-buttons",
                    FilterButton {
                        label: "All Topics",
                        active: active_filter == CategoryFilter::All,
                        onclick: move |_| directory.write().set_category(CategoryFilter::All),
                    }
                    for category in ArticleCategory::ALL {
                        FilterButton {
                            key: "{category:?}",
                            label: category.label(),
                            active: active_filter == CategoryFilter::Only(category),
                            onclick: move |_| directory.write().set_category(CategoryFilter::Only(category)),
                        }
                    }
                }
            }

            if !featured.is_empty() {
                section { class: "featured-articles",
                    h2 { "Featured" }
                    for article in featured {
                        ArticleCard {
                            key: "{article.id}",
                            open: directory.read().is_spotlit(&article),
                            article: article.clone(),
                            on_open: move |a: Article| directory.write().select(&a),
                        }
                    }
                }
            }

            if let Some((article, body)) = reader {
                ArticleReader {
                    article: article,
                    body_html: body,
                    on_close: move |_| directory.write().selection.clear(),
                }
            }

            section { class: "article-grid",
                if visible.is_empty() {
                    p { class: "empty-state", "No articles match your search." }
                }
                for article in visible {
                    ArticleCard {
                        key: "{article.id}",
                        open: directory.read().is_spotlit(&article),
                        article: article.clone(),
                        on_open: move |a: Article| directory.write().select(&a),
                    }
                }
            }

            section { class: "glass-effect learn-cta",
                h2 { "Ready to Start Your Koji Journey?" }
                p { "Find a partner kitchen near you and see fermentation in action" }
                Link { to: Route::Partners {}, class: "btn btn-glass btn-large", "Find Workshops" }
            }
        }
    }
}

#[component]
fn ArticleCard(article: Article, open: bool, on_open: EventHandler<Article>) -> Element {
    let difficulty = article.difficulty.label();
    let difficulty_class = article.difficulty.badge_class();
    let category = article.category.label();
    let button_label = if open { "Close Article" } else { "Read Article" };
    let clicked = article.clone();

    rsx! {
        div { class: "card article-card",
            div { class: "article-image", "{article.image}" }
            div { class: "article-meta",
                span { class: "badge", "{category}" }
                span { class: "badge {difficulty_class}", "{difficulty}" }
                span { class: "read-time", "{article.read_time} min read" }
            }
            h3 { "{article.title}" }
            p { "{article.description}" }
            button {
                class: "btn btn-secondary btn-full",
                onclick: move |_| on_open.call(clicked.clone()),
                "{button_label}"
            }
        }
    }
}

#[component]
fn ArticleReader(article: Article, body_html: String, on_close: EventHandler<MouseEvent>) -> Element {
    rsx! {
        article { class: "card article-reader",
            div { class: "article-reader-header",
                h2 { "{article.image} {article.title}" }
                button { class: "btn btn-ghost btn-icon", onclick: move |evt| on_close.call(evt), "✕" }
            }
            div {
                class: "article-body",
                dangerous_inner_html: "{body_html}"
            }
            if !article.tags.is_empty() {
                div { class: "badges",
                    for tag in article.tags.iter() {
                        span { class: "badge badge-teal", key: "{tag}", "#{tag}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_tables_and_strikethrough() {
        let out = render_markdown("## Koji\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~");
        assert!(out.contains("<h2>Koji</h2>"));
        assert!(out.contains("<table>"));
        assert!(out.contains("<del>old</del>"));
    }
}
