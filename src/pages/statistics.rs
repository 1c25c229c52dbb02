//! Statistics Page
//!
//! Aggregate summary cards plus three charts derived from the history.
//! The summary refetches on every strategy change; the history is
//! strategy-independent and fetched once per mount.

use futures::future::try_join;
use leptos::*;

use crate::api::{self, ApiResult, HistoryEntry, StatsSummary, Strategy};
use crate::components::{BarChart, LineChart, Loading, Series};
use crate::state::use_session;

/// What the page currently shows. Every strategy change passes through
/// `Loading` again.
#[derive(Clone)]
enum StatsState {
    Loading,
    Error(String),
    Ready {
        summary: StatsSummary,
        history: Vec<HistoryEntry>,
    },
}

/// What the entry effect requests, decided from the credential and the
/// history cache before anything is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchPlan {
    /// No credential: nothing is requested
    Skip,
    /// Warm history cache: one summary request, the cached list is reused
    SummaryOnly,
    /// Cold cache: summary and history are requested together
    Joint,
}

/// Decide the fetch plan. The cache only fills on a successful joint
/// fetch, so a failed mount retries both.
fn fetch_plan(authenticated: bool, cache_filled: bool) -> FetchPlan {
    match (authenticated, cache_filled) {
        (false, _) => FetchPlan::Skip,
        (true, true) => FetchPlan::SummaryOnly,
        (true, false) => FetchPlan::Joint,
    }
}

/// Advance the in-flight task tag. The returned value marks the task
/// started by this entry; only the newest tag may publish its result.
fn next_generation(generation: StoredValue<u64>) -> u64 {
    generation.update_value(|g| *g += 1);
    generation.get_value()
}

/// BMI over time, in chronological (server) order.
fn bmi_series(history: &[HistoryEntry]) -> Series {
    Series::new(
        history.iter().map(|e| e.date_label()).collect(),
        history.iter().map(|e| e.bmi).collect(),
    )
}

/// Weight over time, in chronological (server) order.
fn weight_series(history: &[HistoryEntry]) -> Series {
    Series::new(
        history.iter().map(|e| e.date_label()).collect(),
        history.iter().map(|e| e.weight_kg).collect(),
    )
}

/// Category bars, taken from the summary rather than recomputed locally.
fn category_series(summary: &StatsSummary) -> Series {
    Series::new(
        summary
            .category_counts
            .iter()
            .map(|c| c.category.clone())
            .collect(),
        summary
            .category_counts
            .iter()
            .map(|c| f64::from(c.count))
            .collect(),
    )
}

/// Series for the three chart widgets, or `None` for an empty history
/// (the placeholder renders instead and no chart mounts).
fn chart_series(
    summary: &StatsSummary,
    history: &[HistoryEntry],
) -> Option<(Series, Series, Series)> {
    if history.is_empty() {
        return None;
    }
    Some((
        bmi_series(history),
        weight_series(history),
        category_series(summary),
    ))
}

/// Card text for a nullable statistic.
fn optional_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Statistics page component
#[component]
pub fn Statistics() -> impl IntoView {
    let session = use_session();

    let (state, set_state) = create_signal(StatsState::Loading);
    let (strategy, set_strategy) = create_signal(Strategy::default());
    // Strategy-independent, so kept across refetches
    let history_cache = create_rw_signal(None::<Vec<HistoryEntry>>);
    // Tag for in-flight tasks; stale resolutions must not publish
    let generation = store_value(0_u64);

    create_effect(move |_| {
        let strategy = strategy.get();
        let current = next_generation(generation);

        let token = session.token();
        let cached = history_cache.get_untracked();
        let plan = fetch_plan(token.is_some(), cached.is_some());

        if plan == FetchPlan::Skip {
            set_state.set(StatsState::Error("No autenticado.".to_string()));
            return;
        }
        // Not Skip, so a credential is present
        let token = token.unwrap_or_default();

        set_state.set(StatsState::Loading);
        spawn_local(async move {
            let loaded: ApiResult<(StatsSummary, Vec<HistoryEntry>)> = match (plan, cached) {
                (FetchPlan::SummaryOnly, Some(history)) => api::fetch_summary(&token, strategy)
                    .await
                    .map(|summary| (summary, history)),
                _ => {
                    try_join(
                        api::fetch_summary(&token, strategy),
                        api::fetch_history(&token),
                    )
                    .await
                }
            };

            // A newer entry superseded this task while it was in flight
            if generation.get_value() != current {
                return;
            }

            match loaded {
                Ok((summary, history)) => {
                    history_cache.set(Some(history.clone()));
                    set_state.set(StatsState::Ready { summary, history });
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("statistics fetch failed: {e:?}").into());
                    set_state.set(StatsState::Error(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="w-full max-w-5xl mx-auto mb-8 p-10 bg-white rounded-xl shadow-lg">
            <h1 class="text-3xl font-bold text-sky-700 text-center mb-6">"Estadísticas"</h1>

            <div class="flex items-center justify-center gap-3 mb-8">
                <label for="estrategia" class="text-sky-700 font-medium">
                    "Estrategia de cálculo:"
                </label>
                <select
                    id="estrategia"
                    on:change=move |ev| {
                        set_strategy.set(Strategy::from_query(&event_target_value(&ev)))
                    }
                    prop:value=move || strategy.get().as_query().to_string()
                    class="rounded-lg px-3 py-2 border border-sky-200
                           focus:border-sky-500 focus:outline-none"
                >
                    <option value="media">"Media"</option>
                    <option value="mediana">"Mediana"</option>
                </select>
            </div>

            {move || match state.get() {
                StatsState::Loading => view! { <Loading /> }.into_view(),
                StatsState::Error(message) => view! {
                    <p class="text-center text-red-500 font-medium">{message}</p>
                }.into_view(),
                StatsState::Ready { summary, history } => view! {
                    <StatsContent summary=summary history=history />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn StatsContent(summary: StatsSummary, history: Vec<HistoryEntry>) -> impl IntoView {
    let Some((bmi, weight, categories)) = chart_series(&summary, &history) else {
        return view! {
            <p class="text-center text-sky-600">
                "Todavía no tienes cálculos en tu historial."
            </p>
        }
        .into_view();
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-10">
            <div class="bg-sky-100 border border-sky-200 p-6 rounded-lg text-center">
                <h3 class="text-lg font-semibold text-sky-700 mb-2">"Promedio IMC"</h3>
                <p class="text-2xl font-bold text-sky-700">{optional_stat(summary.bmi_average)}</p>
            </div>
            <div class="bg-sky-100 border border-sky-200 p-6 rounded-lg text-center">
                <h3 class="text-lg font-semibold text-sky-700 mb-2">"Variación de peso"</h3>
                <p class="text-2xl font-bold text-sky-700">
                    {optional_stat(summary.weight_variation)}
                </p>
            </div>
            <div class="bg-sky-100 border border-sky-200 p-6 rounded-lg text-center">
                <h3 class="text-lg font-semibold text-sky-700 mb-2">"Conteo por categoría"</h3>
                <ul class="text-sky-700">
                    {summary
                        .category_counts
                        .iter()
                        .map(|c| view! {
                            <li>{format!("{}: {}", c.category, c.count)}</li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <LineChart
                title="Evolución de IMC"
                series=Signal::derive(move || bmi.clone())
                color="#388e3c"
            />
            <LineChart
                title="Evolución de Peso"
                series=Signal::derive(move || weight.clone())
                color="#1976d2"
            />
            <BarChart
                title="Cantidad por Categoría"
                series=Signal::derive(move || categories.clone())
                color="#fbc02d"
            />
        </div>
    }
    .into_view()
}
