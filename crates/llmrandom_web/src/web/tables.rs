use leptos::prelude::*;

use llmrandom::preference::PreferenceRow;

use super::AnalysisSignal;

fn ratio_class(row: &PreferenceRow) -> &'static str {
    if row.strongly_over() {
        "text-end text-success"
    } else if row.strongly_under() {
        "text-end text-danger"
    } else {
        "text-end"
    }
}

/// The two digit-preference tables: multiples of N and final digits, each
/// comparing observed counts against the uniform baseline.
#[component]
pub fn PreferenceTables(analysis: AnalysisSignal) -> impl IntoView {
    let multiples =
        move || analysis.with(|a| a.as_ref().map(|a| a.multiples.clone()).unwrap_or_default());
    let ends_with =
        move || analysis.with(|a| a.as_ref().map(|a| a.ends_with.clone()).unwrap_or_default());

    view! {
        <section style="display: flex; gap: 40px; flex-wrap: wrap; margin-bottom: 18px;">
            <table>
                <caption>"preference for multiples of N"</caption>
                <thead>
                    <tr>
                        <th class="text-end">"N"</th>
                        <th class="text-end">"vs. uniform"</th>
                    </tr>
                </thead>
                <tbody id="multiples-body">
                    <For
                        each=multiples
                        key=|row| row.rule
                        children=|row: PreferenceRow| {
                            view! {
                                <tr class="multiple">
                                    <th class="text-end">{row.rule.label()}</th>
                                    <td class=ratio_class(&row)>{row.phrase()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <table>
                <caption>"preference for final digits"</caption>
                <thead>
                    <tr>
                        <th class="text-end">"digit"</th>
                        <th class="text-end">"vs. uniform"</th>
                    </tr>
                </thead>
                <tbody id="endswith-body">
                    <For
                        each=ends_with
                        key=|row| row.rule
                        children=|row: PreferenceRow| {
                            view! {
                                <tr class="endswith">
                                    <th class="text-end">{row.rule.label()}</th>
                                    <td class=ratio_class(&row)>{row.phrase()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
