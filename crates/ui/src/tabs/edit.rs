//! Edit tab: pick a book, load its details into the form, PUT it back.

use leptos::*;

use estante_client::ApiClient;
use estante_core::{dates, Book, BookDraft, FormError};

use crate::notify;
use crate::tabs::stale_guard;

#[component]
pub fn EditTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let guard = stale_guard();

    let options = create_rw_signal(Vec::<Book>::new());
    let selected = create_rw_signal(String::new());

    let title = create_rw_signal(String::new());
    let author = create_rw_signal(String::new());
    let genre = create_rw_signal(String::new());
    let publication = create_rw_signal(String::new());
    let quantity = create_rw_signal(String::new());

    let clear_fields = move || {
        title.set(String::new());
        author.set(String::new());
        genre.set(String::new());
        publication.set(String::new());
        quantity.set(String::new());
    };

    let load_options = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                let result = client.list_books().await;
                if !guard() {
                    return;
                }
                match result {
                    Ok(list) => options.set(list),
                    Err(err) => notify::surface("Could not load books", &err),
                }
            });
        }
    };
    load_options();

    let on_select = {
        let client = client.clone();
        move |ev: leptos::ev::Event| {
            let id = event_target_value(&ev);
            selected.set(id.clone());
            if id.is_empty() {
                clear_fields();
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                let result = client.get_book(&id).await;
                if !guard() {
                    return;
                }
                match result {
                    Ok(book) => {
                        title.set(book.title);
                        author.set(book.author);
                        genre.set(book.genre);
                        publication.set(dates::to_wire_date(book.publication));
                        quantity.set(book.available_count.to_string());
                    }
                    Err(err) => notify::surface("Could not load the book details", &err),
                }
            });
        }
    };

    let submit = {
        let client = client.clone();
        let load_options = load_options.clone();
        move |_| {
            let id = selected.get_untracked();
            if id.is_empty() {
                return notify::alert(&FormError::NoBookSelected.to_string());
            }
            let draft = BookDraft {
                title: title.get_untracked(),
                author: author.get_untracked(),
                genre: genre.get_untracked(),
                publication: publication.get_untracked(),
                quantity: quantity.get_untracked(),
            };
            let book = match draft.validate() {
                Ok(new_book) => new_book.with_id(id),
                Err(err) => return notify::alert(&err.to_string()),
            };
            let client = client.clone();
            let load_options = load_options.clone();
            spawn_local(async move {
                match client.update_book(&book).await {
                    Ok(_) => {
                        notify::alert("Book updated.");
                        load_options();
                    }
                    Err(err) => notify::surface("Could not update the book", &err),
                }
            });
        }
    };

    view! {
        <form on:submit=move |ev| ev.prevent_default()>
            <div class="form-group">
                <label for="edit-select">"Book"</label>
                <select id="edit-select" prop:value=move || selected.get() on:change=on_select>
                    <option value="">"Select a book"</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|book| {
                                view! { <option value=book.id.clone()>{book.select_label()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="form-group">
                <label for="edit-title">"Title"</label>
                <input
                    id="edit-title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-author">"Author"</label>
                <input
                    id="edit-author"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-genre">"Genre"</label>
                <input
                    id="edit-genre"
                    prop:value=move || genre.get()
                    on:input=move |ev| genre.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-publication">"Publication date"</label>
                <input
                    type="date"
                    id="edit-publication"
                    prop:value=move || publication.get()
                    on:input=move |ev| publication.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-quantity">"Copies"</label>
                <input
                    type="number"
                    id="edit-quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
            </div>
            <button id="edit-submit" on:click=submit>"Save changes"</button>
        </form>
    }
}
