use leptos::prelude::*;

use llmrandom::dataset::{TEMP_STEPS, TRIALS_PER_STREAM, VALUE_SPAN};
use llmrandom::fmt::{fmt_f64_fixed, fmt_percent};
use llmrandom::freq::ValueCounts;

use super::tooltip::{TooltipPayload, TooltipStore};
use super::{BAR_SPAN, CELL_W, CHART_BASE};

/// How many of the most frequent values get a label above their bar.
const TOP_LABELS: usize = 10;

/// Bar geometry snapshot, keyed on (value, count) so a changed count swaps
/// the node instead of leaving a stale one.
#[derive(Clone, Copy, PartialEq)]
struct Bar {
    value: u8,
    count: u32,
    y: f64,
    height: f64,
}

#[derive(Clone, Copy, PartialEq)]
struct TopLabel {
    value: u8,
    count: u32,
    y: f64,
}

/// Per-value bar chart summed across temperature rows. Bars scale against a
/// fixed maximum so they grow toward it during a sweep.
#[component]
pub fn FreqBars(
    chart_id: &'static str,
    counts: Signal<ValueCounts>,
    max: Signal<u32>,
    tooltip: TooltipStore,
) -> impl IntoView {
    let bars = Memo::new(move |_| {
        let scale = max.get().max(1) as f64;
        counts
            .get()
            .nonzero()
            .map(|(value, count)| {
                let height = count as f64 / scale * BAR_SPAN;
                Bar {
                    value,
                    count,
                    y: CHART_BASE - height,
                    height,
                }
            })
            .collect::<Vec<Bar>>()
    });
    let top = Memo::new(move |_| {
        let scale = max.get().max(1) as f64;
        counts
            .get()
            .top(TOP_LABELS)
            .into_iter()
            .map(|(value, count)| TopLabel {
                value,
                count,
                y: CHART_BASE - count as f64 / scale * BAR_SPAN - 3.0,
            })
            .collect::<Vec<TopLabel>>()
    });

    view! {
        <svg class="freq-bar" data-model=chart_id width="1060" height="170">
            <For
                each=move || bars.get()
                key=|bar| (bar.value, bar.count)
                children=|bar: Bar| {
                    view! {
                        <rect
                            class="bar"
                            x=fmt_f64_fixed(bar.value as f64 * CELL_W + 0.5, 1)
                            y=fmt_f64_fixed(bar.y, 2)
                            width="9"
                            height=fmt_f64_fixed(bar.height, 2)
                            fill="steelblue"
                        />
                    }
                }
            />
            {(0..VALUE_SPAN as u8)
                .map(|value| {
                    let hover = move |ev: web_sys::MouseEvent| {
                        let count = counts.get_untracked().get(value);
                        let text = if count > 0 {
                            format!(
                                "{} came up {} of the time",
                                value,
                                fmt_percent(
                                    count as f64 / TRIALS_PER_STREAM as f64 / TEMP_STEPS as f64,
                                ),
                            )
                        } else {
                            format!("{value} never came up")
                        };
                        tooltip.set(Some(TooltipPayload::at(&ev, text)));
                    };
                    view! {
                        <rect
                            class="bar-bg"
                            x=fmt_f64_fixed(value as f64 * CELL_W + 0.5, 1)
                            y="0"
                            width="9"
                            height=fmt_f64_fixed(CHART_BASE, 0)
                            fill="none"
                            pointer-events="all"
                            on:mouseenter=hover
                            on:mousemove=hover
                            on:mouseleave=move |_| tooltip.set(None)
                        />
                    }
                })
                .collect_view()}
            <For
                each=move || top.get()
                key=|label| (label.value, label.count)
                children=|label: TopLabel| {
                    view! {
                        <text
                            class="bar-label"
                            x=fmt_f64_fixed((label.value as f64 + 0.5) * CELL_W, 1)
                            y=fmt_f64_fixed(label.y, 2)
                            text-anchor="middle"
                        >
                            {label.value.to_string()}
                        </text>
                    }
                }
            />
        </svg>
    }
}
