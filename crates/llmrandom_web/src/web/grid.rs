use leptos::prelude::*;

use llmrandom::dataset::{Model, Temperature, TRIALS_PER_STREAM};
use llmrandom::fmt::{fmt_f64_fixed, fmt_percent};
use llmrandom::freq::{CutoffGrid, GridCell};
use llmrandom::scale::{fill_opacity, heat_color};

use super::tooltip::{TooltipPayload, TooltipStore};
use super::{CELL_H, CELL_W, CHART_BASE, PLOT_W};

/// Heatmap of one model's draws: temperature rows by value columns, cell
/// color by count, the most recent value per row outlined.
#[component]
pub fn FreqGrid(model: Model, grid: Memo<CutoffGrid>, tooltip: TooltipStore) -> impl IntoView {
    let cells = Memo::new(move |_| grid.with(|g| g.cells()));
    let observed = Memo::new(move |_| {
        grid.with(|g| {
            g.value_totals()
                .nonzero()
                .map(|(value, _)| value)
                .collect::<Vec<u8>>()
        })
    });

    view! {
        <svg class="freq-grid" data-model=model.label() width="1060" height="200">
            <For
                each=move || cells.get()
                key=|cell| (cell.key(), cell.count, cell.latest)
                children=move |cell: GridCell| {
                    let x = fmt_f64_fixed(cell.value as f64 * CELL_W + 0.5, 1);
                    let y = fmt_f64_fixed(cell.temperature.row() as f64 * CELL_H + 0.5, 1);
                    let text = format!(
                        "{} came up {} of the time at temperature {}",
                        cell.value,
                        fmt_percent(cell.count as f64 / TRIALS_PER_STREAM as f64),
                        cell.temperature
                    );
                    let follow_text = text.clone();
                    view! {
                        <rect
                            class="freq"
                            x=x
                            y=y
                            width="9"
                            height="14"
                            fill=heat_color(cell.count).hex()
                            fill-opacity=fmt_f64_fixed(fill_opacity(cell.count), 1)
                            stroke=if cell.latest { "black" } else { "none" }
                            stroke-opacity="0.5"
                            on:mouseenter=move |ev| {
                                tooltip.set(Some(TooltipPayload::at(&ev, text.clone())))
                            }
                            on:mousemove=move |ev| {
                                tooltip.set(Some(TooltipPayload::at(&ev, follow_text.clone())))
                            }
                            on:mouseleave=move |_| tooltip.set(None)
                        />
                    }
                }
            />
            <For
                each=move || observed.get()
                key=|value| *value
                children=|value: u8| {
                    // Stagger labels over two lines so adjacent ones stay legible.
                    let dy = if value % 2 == 1 { 3.0 } else { 18.0 };
                    view! {
                        <text
                            class="num"
                            x=fmt_f64_fixed((value as f64 + 0.5) * CELL_W + 0.5, 1)
                            y=fmt_f64_fixed(CHART_BASE + dy, 0)
                            dominant-baseline="hanging"
                            text-anchor="middle"
                        >
                            {value.to_string()}
                        </text>
                    }
                }
            />
            {Temperature::all()
                .map(|temperature| {
                    view! {
                        <text
                            class="temp"
                            x="1050"
                            y=fmt_f64_fixed((temperature.row() as f64 + 0.5) * CELL_H, 1)
                            dominant-baseline="middle"
                            text-anchor="end"
                        >
                            {temperature.to_string()}
                        </text>
                    }
                })
                .collect_view()}
            {Temperature::all()
                .map(|temperature| {
                    let d = format!(
                        "M0,{}H{}",
                        fmt_f64_fixed(temperature.row() as f64 * CELL_H, 0),
                        fmt_f64_fixed(PLOT_W, 0)
                    );
                    view! { <path class="grid" d=d /> }
                })
                .collect_view()}
        </svg>
    }
}
