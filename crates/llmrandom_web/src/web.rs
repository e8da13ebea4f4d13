use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use llmrandom::dataset::{max_trial, uniform_baseline, Model, Observation, MODEL_COUNT};
use llmrandom::freq::{cutoff_grid, max_count_per_model, value_counts, CutoffGrid, ValueCounts};
use llmrandom::playback::{Playback, PressAction, TickAction, TICK_MS};
use llmrandom::preference::{ends_with_rows, multiples_rows, PreferenceRow};

mod bars;
mod grid;
mod legend;
mod loader;
mod tables;
mod tooltip;

use bars::FreqBars;
use grid::FreqGrid;
use legend::ColorLegend;
use tables::PreferenceTables;
use tooltip::{TooltipPortal, TooltipStore};

/// Results document fetched relative to the page.
const DATA_URL: &str = "llmrandom.json";

/// Trials advanced per slider step and per playback tick.
const SWEEP_STEP: u32 = 1;

/// Column pitch of the value axis in px, one column per outcome value.
const CELL_W: f64 = 10.0;
/// Row pitch of the temperature axis in px.
const CELL_H: f64 = 15.0;
/// Width of the plotted area, 100 value columns.
const PLOT_W: f64 = CELL_W * 100.0;
/// Bottom edge of the heat grid, shared as the bar-chart baseline.
const CHART_BASE: f64 = CELL_H * 11.0;
/// Height of a bar at the chart's fixed maximum.
const BAR_SPAN: f64 = CELL_H * 10.0;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Everything derived once from the loaded dataset. Cutoff-sensitive grids
/// are recomputed reactively; these stay fixed for the session.
pub struct Analysis {
    pub observations: Vec<Observation>,
    pub max_trial: u32,
    pub max_per_model: [u32; MODEL_COUNT],
    pub overall: ValueCounts,
    pub overall_max: u32,
    pub multiples: Vec<PreferenceRow>,
    pub ends_with: Vec<PreferenceRow>,
}

impl Analysis {
    fn new(observations: Vec<Observation>) -> Self {
        let uniform = value_counts(&uniform_baseline());
        let overall = value_counts(&observations);
        Self {
            max_trial: max_trial(&observations),
            max_per_model: max_count_per_model(&observations),
            overall_max: overall.max(),
            multiples: multiples_rows(&overall, &uniform),
            ends_with: ends_with_rows(&overall, &uniform),
            overall,
            observations,
        }
    }
}

pub type AnalysisSignal = ReadSignal<Option<Arc<Analysis>>>;

#[component]
fn App() -> impl IntoView {
    let (analysis, set_analysis) = signal::<Option<Arc<Analysis>>>(None);
    let (cutoff, set_cutoff) = signal(0u32);
    let (playback, set_playback) = signal(Playback::new(0, SWEEP_STEP));
    let (interval_id, set_interval_id) = signal::<Option<i32>>(None);
    let (status, set_status) = signal(format!("loading {DATA_URL}"));
    let tooltip: TooltipStore = RwSignal::new(None);

    let stop_timer = move || {
        if let Some(id) = interval_id.get_untracked() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
            set_interval_id.set(None);
        }
    };

    let start_timer = move || {
        if interval_id.get_untracked().is_some() {
            return;
        }
        let window = match web_sys::window() {
            Some(w) => w,
            None => {
                set_status.set("no window".to_string());
                return;
            }
        };

        let cb = Closure::wrap(Box::new(move || {
            match set_playback.try_update(|p| p.tick(cutoff.get_untracked())) {
                Some(TickAction::Advance(next)) => set_cutoff.set(next),
                Some(TickAction::Finish) | None => stop_timer(),
            }
        }) as Box<dyn FnMut()>);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            TICK_MS as i32,
        ) {
            Ok(id) => {
                cb.forget();
                set_interval_id.set(Some(id));
            }
            Err(_) => set_status.set("failed to start interval".to_string()),
        }
    };

    let toggle_playback = move || {
        match set_playback.try_update(|p| p.press(cutoff.get_untracked())) {
            Some(PressAction::Start { from }) => {
                set_cutoff.set(from);
                start_timer();
            }
            Some(PressAction::Stop) | None => stop_timer(),
        }
    };

    on_cleanup(move || stop_timer());

    spawn_local(async move {
        match loader::fetch_observations(DATA_URL).await {
            Ok(observations) => {
                let analysis = Analysis::new(observations);
                set_status.set(format!(
                    "{} draws loaded, highest trial {}",
                    analysis.observations.len(),
                    analysis.max_trial
                ));
                set_playback.set(Playback::new(analysis.max_trial, SWEEP_STEP));
                set_cutoff.set(analysis.max_trial);
                set_analysis.set(Some(Arc::new(analysis)));
            }
            Err(e) => {
                web_sys::console::error_1(&JsValue::from_str(&e));
                set_status.set(format!("load failed: {e}"));
            }
        }
    });

    view! {
        <main style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; padding: 18px; max-width: 1100px; margin: 0 auto;">
            <h1 style="margin: 0 0 8px 0;">"LLM random numbers"</h1>
            <p style="margin: 0 0 4px 0; color: #555;">
                "Three language models were asked for a random number between 0 and 99, "
                "two hundred times at each of eleven temperatures. Drag the slider to "
                "replay the draws trial by trial."
            </p>
            <p class="status" style="margin: 0 0 16px 0; color: #888;">{status}</p>

            <section style="display: flex; gap: 10px; align-items: center; margin-bottom: 14px;">
                <button
                    id="play"
                    title="Sweep through the trials"
                    class=move || if playback.get().is_playing() { "play playing" } else { "play" }
                    on:click=move |_| toggle_playback()
                >
                    <i class=move || {
                        if playback.get().is_playing() { "bi-pause" } else { "bi-play" }
                    }></i>
                </button>
                <input
                    type="range"
                    id="iter"
                    min="0"
                    max=move || playback.get().max().to_string()
                    step=SWEEP_STEP.to_string()
                    prop:value=move || cutoff.get().to_string()
                    style="flex: 1;"
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        if let Ok(n) = v.parse::<u32>() {
                            set_cutoff.set(n);
                        }
                    }
                />
                <span style="min-width: 72px; color: #333;">
                    {move || format!("trial {}", cutoff.get())}
                </span>
            </section>

            <ColorLegend />

            {Model::ALL
                .into_iter()
                .map(|model| view! { <ModelSection model analysis cutoff tooltip /> })
                .collect_view()}

            <section style="margin-bottom: 18px;">
                <h2 style="margin: 12px 0 4px 0;">"all models"</h2>
                <FreqBars
                    chart_id="ALL"
                    counts=Signal::derive(move || {
                        analysis.with(|a| a.as_ref().map(|a| a.overall).unwrap_or_default())
                    })
                    max=Signal::derive(move || {
                        analysis.with(|a| a.as_ref().map_or(0, |a| a.overall_max))
                    })
                    tooltip
                />
            </section>

            <PreferenceTables analysis />
            <TooltipPortal store=tooltip />
        </main>
    }
}

/// One model's heat grid plus its per-value bar chart, both driven by the
/// same cutoff-bounded aggregate.
#[component]
fn ModelSection(
    model: Model,
    analysis: AnalysisSignal,
    cutoff: ReadSignal<u32>,
    tooltip: TooltipStore,
) -> impl IntoView {
    let grid = Memo::new(move |_| {
        analysis.with(|a| match a {
            Some(a) => cutoff_grid(&a.observations, model, cutoff.get()),
            None => CutoffGrid::default(),
        })
    });
    let totals = Signal::derive(move || grid.with(|g| *g.value_totals()));
    let max = Signal::derive(move || {
        analysis.with(|a| a.as_ref().map_or(0, |a| a.max_per_model[model.index()]))
    });

    view! {
        <section style="margin-bottom: 18px;">
            <h2 style="margin: 12px 0 4px 0;">{format!("model {}", model.label())}</h2>
            <FreqGrid model grid tooltip />
            <FreqBars chart_id=model.label() counts=totals max tooltip />
        </section>
    }
}
