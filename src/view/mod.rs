pub mod html;
pub mod report;

pub use html::{render_dashboard_html, render_scorecard_html};
pub use report::{format_metric, format_pct, format_sg, render_dashboard_text, render_scorecard_text};
