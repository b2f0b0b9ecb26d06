pub mod bar_chart;
pub mod date_range_picker;
pub mod filter_panel;
pub mod searchable_select;
pub mod stat_card;

pub use bar_chart::{BarChart, BarRow};
pub use date_range_picker::DateRangePicker;
pub use filter_panel::FilterPanel;
pub use searchable_select::SearchableSelect;
pub use stat_card::StatCard;
