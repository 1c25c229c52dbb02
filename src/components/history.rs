//! History Component
//!
//! Fetches the measurement history once per mount and renders it newest
//! first, filtered by an inclusive day range.

use chrono::NaiveDate;
use leptos::*;

use crate::api::{self, HistoryEntry};
use crate::components::Loading;
use crate::state::use_session;

/// Inclusive day-range filter over the cached history. An empty bound
/// leaves that side open.
pub fn filter_by_date(
    entries: &[HistoryEntry],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<HistoryEntry> {
    entries
        .iter()
        .filter(|entry| {
            let day = entry.day();
            from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
        })
        .cloned()
        .collect()
}

/// Parse an `<input type="date">` value; empty or partial input means
/// unbounded.
fn parse_bound(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// History table component
#[component]
pub fn History() -> impl IntoView {
    let session = use_session();

    let (entries, set_entries) = create_signal(None::<Vec<HistoryEntry>>);
    let (error, set_error) = create_signal(None::<String>);
    let (from, set_from) = create_signal(String::new());
    let (to, set_to) = create_signal(String::new());

    // One fetch per mount; newest first for display
    create_effect(move |_| {
        let token = session.token().unwrap_or_default();
        spawn_local(async move {
            match api::fetch_history(&token).await {
                Ok(mut history) => {
                    history.reverse();
                    set_entries.set(Some(history));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("history fetch failed: {e:?}").into());
                    set_error.set(Some("Error al obtener el historial".to_string()));
                }
            }
        });
    });

    view! {
        <div class="w-full max-w-3xl mx-auto mb-8 p-8 bg-white rounded-xl shadow-lg">
            <h2 class="text-2xl font-bold text-sky-700 text-center mb-6">"Historial de cálculos"</h2>

            <div class="flex flex-wrap items-center justify-center gap-4 mb-6">
                <label class="text-sky-700 font-medium">
                    "Desde:"
                    <input
                        type="date"
                        prop:value=move || from.get()
                        on:input=move |ev| set_from.set(event_target_value(&ev))
                        class="ml-2 rounded-lg px-3 py-2 border border-sky-200
                               focus:border-sky-500 focus:outline-none"
                    />
                </label>
                <label class="text-sky-700 font-medium">
                    "Hasta:"
                    <input
                        type="date"
                        prop:value=move || to.get()
                        on:input=move |ev| set_to.set(event_target_value(&ev))
                        class="ml-2 rounded-lg px-3 py-2 border border-sky-200
                               focus:border-sky-500 focus:outline-none"
                    />
                </label>
            </div>

            {move || match (error.get(), entries.get()) {
                (Some(message), _) => view! {
                    <p class="text-center text-red-500 font-medium">{message}</p>
                }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
                (None, Some(list)) => {
                    let filtered =
                        filter_by_date(&list, parse_bound(&from.get()), parse_bound(&to.get()));
                    if filtered.is_empty() {
                        view! {
                            <p class="text-center text-sky-600">
                                "No hay cálculos en el rango seleccionado."
                            </p>
                        }.into_view()
                    } else {
                        view! { <HistoryTable entries=filtered /> }.into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn HistoryTable(entries: Vec<HistoryEntry>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left">
                <thead>
                    <tr class="text-sky-700 border-b-2 border-sky-200">
                        <th class="px-3 py-2">"Fecha"</th>
                        <th class="px-3 py-2">"Peso (kg)"</th>
                        <th class="px-3 py-2">"Altura (m)"</th>
                        <th class="px-3 py-2">"IMC"</th>
                        <th class="px-3 py-2">"Resultado"</th>
                    </tr>
                </thead>
                <tbody>
                    {entries.into_iter().map(|entry| view! {
                        <tr class="border-b border-sky-100 text-sky-900">
                            <td class="px-3 py-2 whitespace-nowrap">{entry.datetime_label()}</td>
                            <td class="px-3 py-2">{entry.weight_kg}</td>
                            <td class="px-3 py-2">{entry.height_m}</td>
                            <td class="px-3 py-2">{format!("{:.2}", entry.bmi)}</td>
                            <td class="px-3 py-2">{entry.category}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, timestamp: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            recorded_at: timestamp.parse().unwrap(),
            weight_kg: 70.0,
            height_m: 1.75,
            bmi: 22.86,
            category: "Normal".to_string(),
        }
    }

    fn day(iso: &str) -> NaiveDate {
        iso.parse().unwrap()
    }

    fn sample() -> Vec<HistoryEntry> {
        vec![
            entry(1, "2025-09-10T12:00:00Z"),
            entry(2, "2025-09-15T12:00:00Z"),
            entry(3, "2025-09-20T12:00:00Z"),
        ]
    }

    fn ids(entries: &[HistoryEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_open_bounds_keep_everything() {
        assert_eq!(ids(&filter_by_date(&sample(), None, None)), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_bound_drops_earlier_days() {
        let filtered = filter_by_date(&sample(), Some(day("2025-09-15")), None);
        assert_eq!(ids(&filtered), vec![2, 3]);
    }

    #[test]
    fn test_to_bound_drops_later_days() {
        let filtered = filter_by_date(&sample(), None, Some(day("2025-09-15")));
        assert_eq!(ids(&filtered), vec![1, 2]);
    }

    #[test]
    fn test_bounds_are_inclusive_on_both_ends() {
        let filtered = filter_by_date(
            &sample(),
            Some(day("2025-09-10")),
            Some(day("2025-09-20")),
        );
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn test_entries_later_the_same_day_still_match_the_to_bound() {
        let entries = vec![entry(1, "2025-09-15T23:59:00Z")];
        let filtered = filter_by_date(&entries, None, Some(day("2025-09-15")));
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_disjoint_range_filters_everything_out() {
        let filtered = filter_by_date(
            &sample(),
            Some(day("2025-10-01")),
            Some(day("2025-10-31")),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_parse_bound_handles_picker_values() {
        assert_eq!(parse_bound("2025-09-15"), Some(day("2025-09-15")));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("2025-09"), None);
    }
}
