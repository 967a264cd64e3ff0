//! Register tab: the create-book form.

use leptos::*;

use estante_client::ApiClient;
use estante_core::BookDraft;

use crate::notify;

#[component]
pub fn CreateTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let title = create_rw_signal(String::new());
    let author = create_rw_signal(String::new());
    let genre = create_rw_signal(String::new());
    let publication = create_rw_signal(String::new());
    let quantity = create_rw_signal("1".to_string());

    let submit = move |_| {
        let draft = BookDraft {
            title: title.get_untracked(),
            author: author.get_untracked(),
            genre: genre.get_untracked(),
            publication: publication.get_untracked(),
            quantity: quantity.get_untracked(),
        };
        let book = match draft.validate() {
            Ok(book) => book,
            Err(err) => return notify::alert(&err.to_string()),
        };
        let client = client.clone();
        spawn_local(async move {
            match client.create_book(&book).await {
                Ok(_) => {
                    notify::alert("Book registered.");
                    title.set(String::new());
                    author.set(String::new());
                    genre.set(String::new());
                    publication.set(String::new());
                    quantity.set("1".to_string());
                }
                Err(err) => notify::surface("Could not register the book", &err),
            }
        });
    };

    view! {
        <form on:submit=move |ev| ev.prevent_default()>
            <div class="form-group">
                <label for="create-title">"Title"</label>
                <input
                    id="create-title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="create-author">"Author"</label>
                <input
                    id="create-author"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="create-genre">"Genre"</label>
                <input
                    id="create-genre"
                    prop:value=move || genre.get()
                    on:input=move |ev| genre.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="create-publication">"Publication date"</label>
                <input
                    type="date"
                    id="create-publication"
                    prop:value=move || publication.get()
                    on:input=move |ev| publication.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="create-quantity">"Copies"</label>
                <input
                    type="number"
                    id="create-quantity"
                    min="1"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
            </div>
            <button id="create-submit" on:click=submit>"Register book"</button>
        </form>
    }
}
