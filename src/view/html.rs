use maud::{DOCTYPE, Markup, html};

use crate::model::{CriticalErrorKind, RoundScorecard, SgCategory};
use crate::score::{Dashboard, WindowReport};
use crate::view::report::{format_metric, format_sg};

fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
        }
        body {
            h1 { (title) }
            (body)
        }
    }
}

fn render_window(name: &str, report: &WindowReport) -> Markup {
    let agg = &report.aggregate;
    html! {
        h3 { (name) " (" (report.rounds) " rounds, " (agg.total_holes) " holes)" }
        table class="styled-table" {
            thead {
                tr {
                    th { "Critical error" }
                    th { "Count" }
                }
            }
            tbody {
                @for kind in CriticalErrorKind::ALL {
                    tr {
                        td { (kind.label()) }
                        td { (agg.critical_errors.by_kind(kind)) }
                    }
                }
            }
        }
        table class="styled-table" {
            thead {
                tr {
                    th { "Strokes gained" }
                    th { "Per hole" }
                }
            }
            tbody {
                @for category in SgCategory::ALL {
                    tr {
                        td { (category.label()) }
                        td { (format_sg(agg.strokes_gained.category(category))) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_dashboard_html(owner: &str, dashboard: &Dashboard) -> Markup {
    let title = format!("{owner}: last {} rounds", dashboard.window_size);
    page(
        &title,
        html! {
            table class="styled-table" {
                thead {
                    tr {
                        th { "Metric" }
                        th { "Current" }
                        th { "Previous" }
                        th { "Change" }
                    }
                }
                tbody {
                    @for delta in &dashboard.deltas {
                        @let class = match delta.improved() {
                            Some(true) => "improved",
                            Some(false) => "worse",
                            None => "",
                        };
                        tr class=(class) {
                            td { (delta.metric.label()) }
                            td { (format_metric(delta.metric, delta.current)) }
                            td { (format_metric(delta.metric, delta.previous)) }
                            td { (delta.describe().unwrap_or_default()) }
                        }
                    }
                }
            }
            (render_window("Current window", &dashboard.current))
            (render_window("Previous window", &dashboard.previous))
            h3 { "Coaching" }
            @if dashboard.coaching.is_empty() {
                p { "Nothing stands out yet." }
            } @else {
                ol {
                    @for item in &dashboard.coaching {
                        li {
                            strong { (item.title) }
                            p { (item.detail) }
                        }
                    }
                }
            }
        },
    )
}

#[must_use]
pub fn render_scorecard_html(round_id: &str, card: &RoundScorecard) -> Markup {
    page(
        &format!("Round {round_id}"),
        html! {
            table class="styled-table" {
                thead {
                    tr {
                        th { "Hole" }
                        th { "Par" }
                        th { "Score" }
                        th { "Putts" }
                        th { "Critical errors" }
                    }
                }
                tbody {
                    @for line in &card.lines {
                        tr {
                            td { (line.hole_number) }
                            td { (line.par) }
                            @match line.score_display {
                                Some(display) => {
                                    td class=(display.css_class()) { (line.score.unwrap_or_default()) }
                                }
                                None => {
                                    td { "-" }
                                }
                            }
                            td { (line.putts.map_or_else(|| "-".to_string(), |p| p.to_string())) }
                            td { (line.critical_errors) }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { "Total" }
                        td { (card.total_par) }
                        td { (card.total_score) }
                        td colspan="2" { (card.to_par) " to par" }
                    }
                }
            }
        },
    )
}
