use leptos::prelude::*;

use llmrandom::dataset::TRIALS_PER_STREAM;
use llmrandom::fmt::{fmt_f64_fixed, fmt_percent};
use llmrandom::scale::{fill_opacity, heat_color, FULL_OPACITY_COUNT, MAX_COLOR_COUNT};

use super::CELL_W;

/// Color ramp reference: one swatch per count from 0 to the scale ceiling,
/// annotated at the opacity knee and the two ends.
#[component]
pub fn ColorLegend() -> impl IntoView {
    view! {
        <svg class="legend-box" width="1060" height="30">
            {(0..MAX_COLOR_COUNT)
                .map(|count| {
                    view! {
                        <rect
                            class="legend-mark"
                            x=fmt_f64_fixed(count as f64 * CELL_W, 0)
                            width="10"
                            height="10"
                            fill=heat_color(count).hex()
                            fill-opacity=fmt_f64_fixed(fill_opacity(count), 1)
                        />
                    }
                })
                .collect_view()}
            {[0, FULL_OPACITY_COUNT, MAX_COLOR_COUNT]
                .into_iter()
                .map(|count| {
                    view! {
                        <text
                            class="legend-label"
                            x=fmt_f64_fixed((count as f64 + 0.5) * CELL_W, 1)
                            y="15"
                            dominant-baseline="hanging"
                            text-anchor="middle"
                        >
                            {fmt_percent(count as f64 / TRIALS_PER_STREAM as f64)}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}
