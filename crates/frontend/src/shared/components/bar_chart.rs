use leptos::prelude::*;

/// One row of a horizontal bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    /// Text rendered at the right edge (formatted value, share, ...).
    pub display: String,
}

/// CSS-only horizontal bar chart; bar widths are relative to the largest
/// value in the set.
#[component]
pub fn BarChart(#[prop(into)] rows: Signal<Vec<BarRow>>) -> impl IntoView {
    view! {
        <div class="bar-chart">
            {move || {
                let rows = rows.get();
                let max = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);
                if rows.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No data for the current selection."</p>
                        </div>
                    }
                    .into_any();
                }
                rows.into_iter()
                    .map(|row| {
                        let width = if max > 0.0 { row.value / max * 100.0 } else { 0.0 };
                        view! {
                            <div class="bar-chart__row">
                                <span class="bar-chart__label">{row.label}</span>
                                <div class="bar-chart__track">
                                    <div
                                        class="bar-chart__bar"
                                        style=format!("width: {width:.1}%")
                                    ></div>
                                </div>
                                <span class="bar-chart__value">{row.display}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
