//! Shipment statistics and date-range report.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;

use super::nav::PortalNav;
use crate::app::use_transport;
use crate::net::portal::{ShipmentReport, UserStatistics};
use crate::state::session::use_session;

/// Expand two `YYYY-MM-DD` date-input values into an inclusive
/// date-time range.
fn report_range(start: &str, end: &str) -> Result<(String, String), &'static str> {
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return Err("Pick a start and end date.");
    }
    // ISO dates order lexicographically.
    if start > end {
        return Err("Start date must be on or before end date.");
    }
    Ok((format!("{start}T00:00:00"), format!("{end}T23:59:59")))
}

fn percent_label(rate: f64) -> String {
    format!("{rate:.1}%")
}

fn status_rows(counts: &std::collections::BTreeMap<String, u64>) -> Vec<(String, u64)> {
    counts.iter().map(|(status, count)| (status.clone(), *count)).collect()
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = use_session();
    let transport = use_transport();
    let stats = RwSignal::new(None::<UserStatistics>);
    let report = RwSignal::new(None::<ShipmentReport>);
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        if let Some(token) = session.token() {
            let transport = transport.clone();
            leptos::task::spawn_local(async move {
                match crate::net::portal::statistics(&transport, &token).await {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(err) => message.set(Some(err.user_message("Could not load statistics"))),
                }
            });
        }
    }

    let on_report = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        let (from, to) = match report_range(&start.get(), &end.get()) {
            Ok(range) => range,
            Err(msg) => {
                message.set(Some(msg.to_owned()));
                return;
            }
        };
        message.set(None);

        #[cfg(feature = "csr")]
        {
            let transport = transport.clone();
            leptos::task::spawn_local(async move {
                match crate::net::portal::shipment_report(&transport, &token, &from, &to).await {
                    Ok(loaded) => report.set(Some(loaded)),
                    Err(err) => message.set(Some(err.user_message("Report failed"))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&transport, token, from, to);
        }
    };

    let counts_table = |counts: Vec<(String, u64)>| {
        view! {
            <table class="status-counts">
                {counts
                    .into_iter()
                    .map(|(status, count)| view! { <tr><td>{status}</td><td>{count}</td></tr> })
                    .collect_view()}
            </table>
        }
    };

    view! {
        <PortalNav />
        <main class="reports-page">
            <h2>"Statistics"</h2>
            {move || {
                stats
                    .get()
                    .map(|s| {
                        view! {
                            <p>"Total shipments: " {s.total_shipments}</p>
                            {counts_table(status_rows(&s.status_counts))}
                        }
                    })
            }}
            <h2>"Shipment report"</h2>
            <form class="report-range" on:submit=on_report>
                <input type="date" prop:value=move || start.get() on:input=move |ev| start.set(event_target_value(&ev)) />
                <input type="date" prop:value=move || end.get() on:input=move |ev| end.set(event_target_value(&ev)) />
                <button type="submit">"Run report"</button>
            </form>
            <Show when=move || message.get().is_some()>
                <p class="reports-message">{move || message.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                report
                    .get()
                    .map(|r| {
                        view! {
                            <p>"Shipments in range: " {r.total_shipments}</p>
                            <p>"Delivery rate: " {percent_label(r.delivery_rate)}</p>
                            {counts_table(status_rows(&r.status_counts))}
                        }
                    })
            }}
        </main>
    }
}
