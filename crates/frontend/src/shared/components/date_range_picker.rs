use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;

use contracts::filters::DateRange;

use crate::shared::date_utils::{input_value, parse_input_date};

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)? - Duration::days(1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)? - Duration::days(1)
    };
    Some((start, end))
}

/// Date-range control: from/to date inputs plus quick buttons for the
/// current month, the previous month and clearing the range.
#[component]
pub fn DateRangePicker(
    #[prop(into)] value: Signal<DateRange>,
    on_change: Callback<DateRange>,
    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    let on_from = {
        move |ev| {
            let mut range = value.get_untracked();
            range.from = parse_input_date(&event_target_value(&ev));
            on_change.run(range);
        }
    };
    let on_to = {
        move |ev| {
            let mut range = value.get_untracked();
            range.to = parse_input_date(&event_target_value(&ev));
            on_change.run(range);
        }
    };

    let set_current_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some((from, to)) = month_bounds(today.year(), today.month()) {
            on_change.run(DateRange {
                from: Some(from),
                to: Some(to),
            });
        }
    };

    let set_previous_month = move |_| {
        let today = Utc::now().date_naive();
        let (year, month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        if let Some((from, to)) = month_bounds(year, month) {
            on_change.run(DateRange {
                from: Some(from),
                to: Some(to),
            });
        }
    };

    let clear = move |_| on_change.run(DateRange::default());

    view! {
        <div class="date-range">
            {label.map(|l| view! { <span class="date-range__label">{l}</span> })}
            <input
                type="date"
                class="field__input date-range__input"
                prop:value=move || input_value(value.get().from)
                on:change=on_from
            />
            <span class="date-range__separator">"–"</span>
            <input
                type="date"
                class="field__input date-range__input"
                prop:value=move || input_value(value.get().to)
                on:change=on_to
            />
            <button type="button" class="button button--ghost" on:click=set_current_month>
                "This month"
            </button>
            <button type="button" class="button button--ghost" on:click=set_previous_month>
                "Last month"
            </button>
            <button
                type="button"
                class="button button--ghost"
                on:click=clear
                disabled=move || !value.get().is_set()
            >
                "Clear"
            </button>
        </div>
    }
}
