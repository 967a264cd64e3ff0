//! Remove tab: pick a book and delete it, behind a confirmation.

use leptos::*;

use estante_client::ApiClient;
use estante_core::{Book, FormError};

use crate::notify;
use crate::tabs::stale_guard;

#[component]
pub fn DeleteTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let guard = stale_guard();

    let options = create_rw_signal(Vec::<Book>::new());
    let selected = create_rw_signal(String::new());

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

    let submit = {
        let client = client.clone();
        let load_options = load_options.clone();
        move |_| {
            let id = selected.get_untracked();
            if id.is_empty() {
                return notify::alert(&FormError::NoBookSelected.to_string());
            }
            if !notify::confirm("Remove this book? This cannot be undone.") {
                return;
            }
            let client = client.clone();
            let load_options = load_options.clone();
            spawn_local(async move {
                match client.delete_book(&id).await {
                    Ok(()) => {
                        notify::alert("Book removed.");
                        selected.set(String::new());
                        load_options();
                    }
                    Err(err) => notify::surface("Could not remove the book", &err),
                }
            });
        }
    };

    view! {
        <form on:submit=move |ev| ev.prevent_default()>
            <div class="form-group">
                <label for="delete-select">"Book"</label>
                <select
                    id="delete-select"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
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
            <button id="delete-submit" on:click=submit>"Remove book"</button>
        </form>
    }
}
