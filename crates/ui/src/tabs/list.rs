//! Catalog tab: full listing plus title/author/genre search.

use leptos::*;

use estante_client::{ApiClient, BookQuery};
use estante_core::{dates, Book};

use crate::notify;
use crate::tabs::stale_guard;

#[component]
pub fn ListTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let guard = stale_guard();

    let books = create_rw_signal(Vec::<Book>::new());
    let title = create_rw_signal(String::new());
    let author = create_rw_signal(String::new());
    let genre = create_rw_signal(String::new());

    let load = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                let result = client.list_books().await;
                if !guard() {
                    return;
                }
                match result {
                    Ok(list) => books.set(list),
                    Err(err) => notify::surface("Could not load books", &err),
                }
            });
        }
    };
    load();

    let search = {
        let client = client.clone();
        move |_| {
            let query = BookQuery {
                title: title.get_untracked(),
                author: author.get_untracked(),
                genre: genre.get_untracked(),
            };
            let client = client.clone();
            spawn_local(async move {
                let result = client.search_books(&query).await;
                if !guard() {
                    return;
                }
                match result {
                    Ok(list) => books.set(list),
                    Err(err) => notify::surface("Book search failed", &err),
                }
            });
        }
    };

    let clear = {
        let load = load.clone();
        move |_| {
            title.set(String::new());
            author.set(String::new());
            genre.set(String::new());
            load();
        }
    };

    view! {
        <div class="search-bar">
            <input
                id="search-title"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <input
                id="search-author"
                placeholder="Author"
                prop:value=move || author.get()
                on:input=move |ev| author.set(event_target_value(&ev))
            />
            <input
                id="search-genre"
                placeholder="Genre"
                prop:value=move || genre.get()
                on:input=move |ev| genre.set(event_target_value(&ev))
            />
            <button id="search-button" on:click=search>"Search"</button>
            <button id="clear-search" on:click=clear>"Clear"</button>
        </div>
        <div id="list-content">
            {move || render_books(&books.get())}
        </div>
    }
}

fn render_books(books: &[Book]) -> View {
    if books.is_empty() {
        return view! { <p class="empty-message">"No books found."</p> }.into_view();
    }
    books.iter().map(book_card).collect_view()
}

/// Card markup for one catalog entry; flags the book when no copies remain.
fn book_card(book: &Book) -> impl IntoView {
    let status_class = if book.is_reservable() {
        "book-status"
    } else {
        "book-status unavailable"
    };
    view! {
        <div class="book-card">
            <h3>{book.title.clone()}</h3>
            <p><strong>"Author: "</strong>{book.author.clone()}</p>
            <p><strong>"Genre: "</strong>{book.genre.clone()}</p>
            <p><strong>"Published: "</strong>{dates::display_date(book.publication)}</p>
            <div class=status_class>
                <p><strong>"Available: "</strong>{book.available_count}" copies"</p>
            </div>
        </div>
    }
}
