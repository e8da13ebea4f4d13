use leptos::ev::MouseEvent;
use leptos::prelude::*;

use llmrandom::fmt::fmt_f64_fixed;

/// One hover readout, anchored near the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPayload {
    pub text: String,
    pub top_px: f64,
    pub left_px: f64,
}

impl TooltipPayload {
    /// Payload positioned just below and right of the cursor.
    pub fn at(ev: &MouseEvent, text: String) -> Self {
        Self {
            text,
            top_px: f64::from(ev.client_y()) + 18.0,
            left_px: f64::from(ev.client_x()) + 14.0,
        }
    }
}

pub type TooltipStore = RwSignal<Option<TooltipPayload>>;

#[component]
pub fn TooltipPortal(store: TooltipStore) -> impl IntoView {
    let payload = Memo::new(move |_| store.get());

    view! {
        <Show when=move || payload.get().is_some() fallback=|| ()>
            {move || {
                let p = payload
                    .get()
                    .expect("Show guarantees payload is Some when rendered");

                let top = fmt_f64_fixed(p.top_px, 0);
                let left = fmt_f64_fixed(p.left_px, 0);
                let style = format!("top: {top}px; left: {left}px;");

                view! {
                    <div class="tooltip tooltip-portal" role="tooltip" style=style>
                        {p.text}
                    </div>
                }
            }}
        </Show>
    }
}
