//! Shipment list and tracking-number lookup.

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

use leptos::prelude::*;

use super::nav::PortalNav;
use crate::app::use_transport;
use crate::net::portal::{CreateShipment, Shipment, TrackingDetails};
use crate::state::session::use_session;

/// `"IN_TRANSIT"` -> `"In transit"`.
fn status_label(status: &str) -> String {
    let lowered = status.trim().replace('_', " ").to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn destination(shipment: &Shipment) -> String {
    [shipment.recipient_city.trim(), shipment.recipient_state.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(any(test, feature = "csr"))]
fn created_message(shipment: &Shipment) -> String {
    format!("Created shipment {}.", shipment.tracking_number)
}

/// Form fields of the create-shipment form.
#[derive(Clone, Copy)]
struct ShipmentDraft {
    name: RwSignal<String>,
    address: RwSignal<String>,
    city: RwSignal<String>,
    state: RwSignal<String>,
    zip: RwSignal<String>,
}

impl ShipmentDraft {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            zip: RwSignal::new(String::new()),
        }
    }

    fn request(&self) -> CreateShipment {
        CreateShipment {
            recipient_name: self.name.get(),
            recipient_address: self.address.get(),
            recipient_city: self.city.get(),
            recipient_state: self.state.get(),
            recipient_zip_code: self.zip.get(),
        }
    }

    #[cfg(any(test, feature = "csr"))]
    fn clear(&self) {
        for field in [self.name, self.address, self.city, self.state, self.zip] {
            field.set(String::new());
        }
    }
}

fn draft_input(value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            class="shipment-create__input"
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn TrackingPage() -> impl IntoView {
    let session = use_session();
    let transport = StoredValue::new(use_transport());
    let shipments = RwSignal::new(Vec::<Shipment>::new());
    let details = RwSignal::new(None::<TrackingDetails>);
    let number = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let draft = ShipmentDraft::new();

    let reload = move || {
        #[cfg(feature = "csr")]
        {
            if let Some(token) = session.token() {
                let transport = transport.get_value();
                leptos::task::spawn_local(async move {
                    match crate::net::portal::my_shipments(&transport, &token).await {
                        Ok(list) => shipments.set(list),
                        Err(err) => message.set(Some(err.user_message("Could not load shipments"))),
                    }
                });
            }
        }
    };
    reload();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        let request = match draft.request().validated() {
            Ok(request) => request,
            Err(label) => {
                message.set(Some(format!("{label} is required.")));
                return;
            }
        };
        message.set(None);

        #[cfg(feature = "csr")]
        {
            let transport = transport.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::portal::create_shipment(&transport, &token, &request).await {
                    Ok(created) => {
                        message.set(Some(created_message(&created)));
                        draft.clear();
                        reload();
                    }
                    Err(err) => message.set(Some(err.user_message("Could not create shipment"))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, request, reload);
        }
    };

    let on_track = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        let tracking_number = number.get();
        message.set(None);

        #[cfg(feature = "csr")]
        {
            let transport = transport.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::portal::track_shipment(&transport, &token, &tracking_number).await {
                    Ok(found) => details.set(Some(found)),
                    Err(err) => {
                        details.set(None);
                        message.set(Some(err.user_message("Tracking lookup failed")));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (transport, token, tracking_number);
        }
    };

    view! {
        <PortalNav />
        <main class="tracking-page">
            <form class="tracking-lookup" on:submit=on_track>
                <input
                    class="tracking-lookup__input"
                    type="text"
                    placeholder="Tracking number"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
                <button type="submit">"Track"</button>
            </form>
            <Show when=move || message.get().is_some()>
                <p class="tracking-message">{move || message.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                details
                    .get()
                    .map(|found| {
                        view! {
                            <section class="tracking-details">
                                <h2>{found.shipment.tracking_number.clone()}</h2>
                                <p>{status_label(&found.shipment.status)}</p>
                                <ul>
                                    {found
                                        .events
                                        .into_iter()
                                        .map(|event| {
                                            view! {
                                                <li>
                                                    <span>{event.event_time}</span>
                                                    " "
                                                    <span>{event.location}</span>
                                                    " "
                                                    <span>{event.description}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
            }}
            <h2>"New shipment"</h2>
            <form class="shipment-create" on:submit=on_create>
                {draft_input(draft.name, "Recipient name")}
                {draft_input(draft.address, "Address")}
                {draft_input(draft.city, "City")}
                {draft_input(draft.state, "State")}
                {draft_input(draft.zip, "Zip code")}
                <button type="submit">"Create"</button>
            </form>
            <h2>"My shipments"</h2>
            <ul class="shipment-list">
                {move || {
                    shipments
                        .get()
                        .into_iter()
                        .map(|shipment| {
                            view! {
                                <li class="shipment-list__item">
                                    <span>{shipment.tracking_number.clone()}</span>
                                    " "
                                    <span>{status_label(&shipment.status)}</span>
                                    " "
                                    <span>{destination(&shipment)}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </main>
    }
}
