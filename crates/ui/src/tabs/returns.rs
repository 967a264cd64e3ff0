//! Return tab: finalize a pending reservation and browse the history of
//! returned/cancelled holds.

use leptos::*;

use estante_client::{ApiClient, BookDirectory};
use estante_core::{dates, reservation, FormError, Reservation};

use crate::notify;
use crate::tabs::stale_guard;

#[component]
pub fn ReturnTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let guard = stale_guard();

    let directory = create_rw_signal(BookDirectory::default());
    // (id, "title - user") pairs for the pending dropdown.
    let pending = create_rw_signal(Vec::<(String, String)>::new());
    let history = create_rw_signal(Vec::<Reservation>::new());
    let selected = create_rw_signal(String::new());

    let book_title = create_rw_signal("--".to_string());
    let user_name = create_rw_signal("--".to_string());
    let reserved_on = create_rw_signal("--".to_string());
    let expected_on = create_rw_signal("--".to_string());

    let clear_details = move || {
        book_title.set("--".to_string());
        user_name.set("--".to_string());
        reserved_on.set("--".to_string());
        expected_on.set("--".to_string());
    };

    let load = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                let result = match client.list_books().await {
                    Ok(books) => match client.list_reservations().await {
                        Ok(all) => Ok((books, all)),
                        Err(err) => Err(("Could not load reservations", err)),
                    },
                    Err(err) => Err(("Could not load books", err)),
                };
                if !guard() {
                    return;
                }
                let (books, all) = match result {
                    Ok(loaded) => loaded,
                    Err((context, err)) => return notify::surface(context, &err),
                };
                let table = BookDirectory::from_books(books);
                let active = reservation::active(&all);
                let options = table
                    .resolve(&active)
                    .into_iter()
                    .map(|(item, title)| (item.id.clone(), format!("{} - {}", title, item.user_name)))
                    .collect();
                pending.set(options);
                history.set(reservation::history(&all));
                directory.set(table);
            });
        }
    };
    load();

    let on_select = {
        let client = client.clone();
        move |ev: leptos::ev::Event| {
            let id = event_target_value(&ev);
            selected.set(id.clone());
            if id.is_empty() {
                clear_details();
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                let result = client.get_reservation(&id).await;
                if !guard() {
                    return;
                }
                match result {
                    Ok(item) => {
                        let title = directory
                            .get_untracked()
                            .title(&item.book_id)
                            .map(str::to_string)
                            .unwrap_or_else(|| "--".to_string());
                        book_title.set(title);
                        user_name.set(item.user_name);
                        reserved_on.set(dates::display_timestamp(item.reserved_at));
                        expected_on.set(dates::display_timestamp(item.expected_return_at));
                    }
                    Err(err) => notify::surface("Could not load the reservation details", &err),
                }
            });
        }
    };

    let finalize = {
        let client = client.clone();
        let load = load.clone();
        move |cancel: bool| {
            let id = selected.get_untracked();
            if id.is_empty() {
                return notify::alert(&FormError::NoReservationSelected.to_string());
            }
            if cancel && !notify::confirm("Cancel this reservation?") {
                return;
            }
            let client = client.clone();
            let load = load.clone();
            spawn_local(async move {
                let result = if cancel {
                    client.cancel_reservation(&id).await
                } else {
                    client.return_reservation(&id).await
                };
                match result {
                    Ok(_) => {
                        notify::alert(if cancel {
                            "Reservation cancelled."
                        } else {
                            "Return recorded."
                        });
                        selected.set(String::new());
                        clear_details();
                        load();
                    }
                    Err(err) => notify::surface(
                        if cancel {
                            "Could not cancel the reservation"
                        } else {
                            "Could not record the return"
                        },
                        &err,
                    ),
                }
            });
        }
    };
    let on_return = finalize.clone();
    let on_cancel = finalize;

    view! {
        <form on:submit=move |ev| ev.prevent_default()>
            <div class="form-group">
                <label for="return-reservation">"Reservation"</label>
                <select
                    id="return-reservation"
                    prop:value=move || selected.get()
                    on:change=on_select
                >
                    <option value="">"Select a reservation"</option>
                    {move || {
                        pending
                            .get()
                            .into_iter()
                            .map(|(id, label)| view! { <option value=id>{label}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="reservation-details">
                <p><strong>"Book: "</strong><span id="return-book-title">{move || book_title.get()}</span></p>
                <p><strong>"User: "</strong><span id="return-user-name">{move || user_name.get()}</span></p>
                <p><strong>"Reserved: "</strong><span id="return-date">{move || reserved_on.get()}</span></p>
                <p><strong>"Expected return: "</strong><span id="return-expected-date">{move || expected_on.get()}</span></p>
            </div>
            <div class="reservation-actions">
                <button id="return-submit" on:click=move |_| on_return(false)>"Record return"</button>
                <button id="cancel-reservation" on:click=move |_| on_cancel(true)>"Cancel reservation"</button>
            </div>
        </form>

        <h3>"History"</h3>
        <div id="return-history">
            {move || {
                let directory = directory.get();
                let rows = history.get();
                let resolved = directory.resolve(&rows);
                if resolved.is_empty() {
                    return view! { <p class="empty-message">"No returns recorded yet."</p> }
                        .into_view();
                }
                resolved
                    .into_iter()
                    .map(|(item, title)| history_row(item, title))
                    .collect_view()
                    .into_view()
            }}
        </div>
    }
}

/// History row: status plus the date of the terminating event.
fn history_row(item: &Reservation, title: &str) -> impl IntoView {
    let status = item.status();
    let class = format!("reservation-item {}", status.css_class());
    let finalized = item
        .finalized_at()
        .map(dates::display_timestamp)
        .unwrap_or_else(|| "--".to_string());
    view! {
        <div class=class>
            <h4>{title.to_string()}</h4>
            <p><strong>"User: "</strong>{item.user_name.clone()}</p>
            <p><strong>"Reserved: "</strong>{dates::display_timestamp(item.reserved_at)}</p>
            <p><strong>"Status: "</strong>{status.label()}</p>
            <p><strong>"Finalized: "</strong>{finalized}</p>
        </div>
    }
}
