//! Reserve tab: place a hold on an available book, list and search the
//! active reservations, and finalize them inline.

use leptos::*;

use estante_client::{ApiClient, BookDirectory};
use estante_core::{dates, reservation, Book, Reservation, ReservationDraft};

use crate::notify;
use crate::tabs::stale_guard;

#[component]
pub fn ReserveTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let guard = stale_guard();

    let reservable = create_rw_signal(Vec::<Book>::new());
    let directory = create_rw_signal(BookDirectory::default());
    let active = create_rw_signal(Vec::<Reservation>::new());

    let selected = create_rw_signal(String::new());
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());

    // Search input and the filter actually applied to the list.
    let term = create_rw_signal(String::new());
    let applied = create_rw_signal(String::new());

    // One catalog fetch per render cycle feeds both the dropdown and the
    // title resolution of the reservation rows.
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
                match result {
                    Ok((books, all)) => {
                        reservable
                            .set(books.iter().filter(|b| b.is_reservable()).cloned().collect());
                        directory.set(BookDirectory::from_books(books));
                        active.set(reservation::active(&all));
                    }
                    Err((context, err)) => notify::surface(context, &err),
                }
            });
        }
    };
    load();

    let submit = {
        let client = client.clone();
        let load = load.clone();
        move |_| {
            let draft = ReservationDraft {
                book_id: selected.get_untracked(),
                name: name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
            };
            let (book_id, request) = match draft.validate() {
                Ok(validated) => validated,
                Err(err) => return notify::alert(&err.to_string()),
            };
            let client = client.clone();
            let load = load.clone();
            spawn_local(async move {
                match client.create_reservation(&book_id, &request).await {
                    Ok(_) => {
                        notify::alert("Reservation created.");
                        selected.set(String::new());
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        load();
                    }
                    Err(err) => notify::surface("Could not create the reservation", &err),
                }
            });
        }
    };

    // The reservation search hits the backend again before filtering, so
    // holds placed from other sessions show up without re-entering the tab.
    let search = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn_local(async move {
                let result = client.list_reservations().await;
                if !guard() {
                    return;
                }
                match result {
                    Ok(all) => {
                        active.set(reservation::active(&all));
                        applied.set(term.get_untracked());
                    }
                    Err(err) => notify::surface("Could not load reservations", &err),
                }
            });
        }
    };

    // Inline row actions; cancellation asks first.
    let finalize = {
        let client = client.clone();
        let load = load.clone();
        move |id: String, cancel: bool| {
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

    view! {
        <form on:submit=move |ev| ev.prevent_default()>
            <div class="form-group">
                <label for="reserve-book">"Book"</label>
                <select
                    id="reserve-book"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">"Select a book"</option>
                    {move || {
                        reservable
                            .get()
                            .into_iter()
                            .map(|book| {
                                view! { <option value=book.id.clone()>{book.reserve_label()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="form-group">
                <label for="reserve-user-name">"User name"</label>
                <input
                    id="reserve-user-name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="reserve-user-email">"Email"</label>
                <input
                    id="reserve-user-email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="reserve-user-phone">"Phone"</label>
                <input
                    id="reserve-user-phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </div>
            <button id="reserve-submit" on:click=submit>"Reserve"</button>
        </form>

        <div class="search-bar">
            <input
                id="search-reservation"
                placeholder="Search by user name"
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
            <button id="search-reservation-button" on:click=search>"Search"</button>
        </div>
        <div id="active-reservations">
            {move || {
                let directory = directory.get();
                let rows = reservation::search_active_by_user(&active.get(), &applied.get());
                let resolved = directory.resolve(&rows);
                if resolved.is_empty() {
                    return view! { <p class="empty-message">"No active reservations."</p> }
                        .into_view();
                }
                resolved
                    .into_iter()
                    .map(|(item, title)| {
                        let on_return = finalize.clone();
                        let on_cancel = finalize.clone();
                        let return_id = item.id.clone();
                        let cancel_id = item.id.clone();
                        view! {
                            <div class="reservation-item">
                                <h4>{title.to_string()}</h4>
                                <p><strong>"User: "</strong>{item.user_name.clone()}</p>
                                <p>
                                    <strong>"Reserved: "</strong>
                                    {dates::display_timestamp(item.reserved_at)}
                                </p>
                                <p>
                                    <strong>"Expected return: "</strong>
                                    {dates::display_timestamp(item.expected_return_at)}
                                </p>
                                <div class="reservation-actions">
                                    <button
                                        class="action-button"
                                        on:click=move |_| on_return(return_id.clone(), false)
                                    >
                                        "Return"
                                    </button>
                                    <button
                                        class="action-button secondary"
                                        on:click=move |_| on_cancel(cancel_id.clone(), true)
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_view()
            }}
        </div>
    }
}
