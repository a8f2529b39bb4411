use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::components::viewport::prefers_reduced_motion;
use crate::config::{STATS_THRESHOLD, STAT_COUNT_DURATION_MS, STAT_FRAME_MS};
use crate::content::Stat;

/// A stat value split around its first number, e.g. `"12,500+"`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatFigure {
    prefix: String,
    target: u64,
    suffix: String,
    original: String,
}

impl StatFigure {
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let run = text[start..]
            .find(|c: char| !(c.is_ascii_digit() || c == ','))
            .map(|len| start + len)
            .unwrap_or(text.len());
        let digits: String = text[start..run].chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse().ok()?;
        Some(Self {
            prefix: text[..start].to_string(),
            target,
            suffix: text[run..].to_string(),
            original: text.to_string(),
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Text shown at `progress` in `[0, 1]`; the last frame is the original.
    pub fn frame(&self, progress: f64) -> String {
        if progress >= 1.0 {
            return self.original.clone();
        }
        let value = (self.target as f64 * ease_out_cubic(progress)).floor() as u64;
        format!("{}{}{}", self.prefix, group_thousands(value), self.suffix)
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[derive(Properties, PartialEq)]
pub struct StatsStripProps {
    pub stats: Vec<Stat>,
}

#[function_component(StatsStrip)]
pub fn stats_strip(props: &StatsStripProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), STATS_THRESHOLD);
    let progress = use_state_eq(|| if prefers_reduced_motion() { 1.0 } else { 0.0 });
    let finished = *progress >= 1.0;

    {
        let setter = progress.setter();
        use_effect_with_deps(
            move |(revealed, finished)| {
                let interval = (*revealed && !*finished).then(|| {
                    let started = Utc::now().timestamp_millis();
                    Interval::new(STAT_FRAME_MS, move || {
                        let elapsed = Utc::now().timestamp_millis() - started;
                        setter.set((elapsed as f64 / STAT_COUNT_DURATION_MS as f64).min(1.0));
                    })
                });
                move || drop(interval)
            },
            (revealed, finished),
        );
    }

    if props.stats.is_empty() {
        return html! {};
    }

    html! {
        <div ref={node} class="stats-strip">
            <style>
                {r#"
                    .stats-strip {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 3rem 2rem;
                        text-align: center;
                    }
                    .stat-number {
                        display: block;
                        font-size: 2.6rem;
                        font-weight: 700;
                        color: #1E90FF;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        color: #999;
                    }
                "#}
            </style>
            {
                props.stats.iter().map(|stat| {
                    let text = match StatFigure::parse(&stat.value) {
                        Some(figure) if revealed => figure.frame(*progress),
                        _ => stat.value.clone(),
                    };
                    html! {
                        <div class="stat">
                            <span class="stat-number" data-value={stat.value.clone()}>{text}</span>
                            <span class="stat-label">{stat.label.clone()}</span>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
