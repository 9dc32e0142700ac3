use crate::model::{CriticalErrorKind, RoundScorecard, SgCategory};
use crate::score::{Dashboard, DashboardMetric, MetricDelta, WindowReport};

#[must_use]
pub fn format_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.0}%"))
}

#[must_use]
pub fn format_sg(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:+.2}"))
}

/// Current value of a metric in its display unit.
#[must_use]
pub fn format_metric(metric: DashboardMetric, value: Option<f64>) -> String {
    match (metric, value) {
        (_, None) => "-".to_string(),
        (DashboardMetric::StrokesGainedTotal, v) => format_sg(v),
        (m, v) if m.is_rate() => format_pct(v),
        (m, Some(v)) => {
            let decimals = usize::try_from(m.decimals()).unwrap_or(0);
            format!("{v:.decimals$}")
        }
    }
}

fn delta_line(delta: &MetricDelta) -> String {
    let change = delta
        .describe()
        .unwrap_or_else(|| "no previous period".to_string());
    format!(
        "  {:<28} {:>8}   {}",
        delta.metric.label(),
        format_metric(delta.metric, delta.current),
        change
    )
}

fn window_block(name: &str, report: &WindowReport) -> Vec<String> {
    let agg = &report.aggregate;
    let mut lines = vec![format!(
        "{name}: {} rounds, {} scored holes ({} unscored)",
        report.rounds, agg.total_holes, agg.unscored_holes
    )];
    for kind in CriticalErrorKind::ALL {
        lines.push(format!(
            "  {:<28} {:>8}",
            kind.label(),
            agg.critical_errors.by_kind(kind)
        ));
    }
    for category in SgCategory::ALL {
        lines.push(format!(
            "  SG {:<25} {:>8}",
            category.label(),
            format_sg(agg.strokes_gained.category(category))
        ));
    }
    lines
}

/// Plain-text dashboard.
#[must_use]
pub fn render_dashboard_text(owner: &str, dashboard: &Dashboard) -> String {
    let mut lines = vec![
        format!(
            "Dashboard for {owner}, last {} rounds",
            dashboard.window_size
        ),
        String::new(),
    ];
    lines.extend(dashboard.deltas.iter().map(delta_line));
    lines.push(String::new());
    lines.extend(window_block("Current window", &dashboard.current));
    lines.push(String::new());
    lines.extend(window_block("Previous window", &dashboard.previous));
    lines.push(String::new());

    if dashboard.coaching.is_empty() {
        lines.push("Coaching: nothing stands out yet".to_string());
    } else {
        lines.push("Coaching".to_string());
        for (idx, item) in dashboard.coaching.iter().enumerate() {
            lines.push(format!("  {}. {}", idx + 1, item.title));
            lines.push(format!("     {}", item.detail));
        }
    }
    lines.join("\n") + "\n"
}

#[must_use]
pub fn render_scorecard_text(round_id: &str, card: &RoundScorecard) -> String {
    let mut lines = vec![format!("Round {round_id}"), "Hole Par Score Putts CE".to_string()];
    for line in &card.lines {
        lines.push(format!(
            "{:>4} {:>3} {:>5} {:>5} {:>2}",
            line.hole_number,
            line.par,
            line.score.map_or_else(|| "-".to_string(), |s| s.to_string()),
            line.putts.map_or_else(|| "-".to_string(), |p| p.to_string()),
            line.critical_errors
        ));
    }
    let to_par = match card.to_par {
        0 => "E".to_string(),
        n => format!("{n:+}"),
    };
    lines.push(format!(
        "Total {} ({to_par}) over {} holes, par {}",
        card.total_score, card.holes_scored, card.total_par
    ));
    lines.join("\n") + "\n"
}
