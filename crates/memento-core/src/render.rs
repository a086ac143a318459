//! Render orchestration: one immutable snapshot in, one frame out.

use chrono::NaiveDate;

use crate::calendar::age_years;
use crate::clock::SimulationClock;
use crate::config::{Config, SpecialDay};
use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Result;
use crate::grid::GridState;
use crate::layout::Layout;
use crate::special_day::resolve_special_day;
use crate::surface::{Color, Point, Surface, TextStyle};
use crate::wrap::wrap_text;

const QUOTE_STYLE: TextStyle = TextStyle::serif(36.0);
const QUOTE_MARGIN: f64 = 120.0;
const QUOTE_LINE_HEIGHT: f64 = 50.0;

/// Everything a render depends on.
#[derive(Clone, Copy, Debug)]
pub struct RenderSnapshot<'a> {
    pub config: &'a Config,
    pub clock: SimulationClock,
    pub layout: Layout,
}

impl<'a> RenderSnapshot<'a> {
    /// Snapshot using the layout named in `config`.
    pub fn new(config: &'a Config, clock: SimulationClock) -> Self {
        Self {
            config,
            clock,
            layout: config.layout,
        }
    }

    pub fn with_layout(self, layout: Layout) -> Self {
        Self { layout, ..self }
    }
}

/// Numbers shown alongside the calendar.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub weeks_lived: i64,
    pub total_weeks: u32,
    /// Clamped to `[0, 100]`.
    pub percentage: f64,
    pub age_years: i64,
    pub simulated_date: NaiveDate,
    pub special_day_title: Option<String>,
}

impl Summary {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Weeks Lived: {} of {} ({:.1}%)",
                self.weeks_lived, self.total_weeks, self.percentage
            ),
            format!("Current Age: {} years", self.age_years),
            format!("Simulated Date: {}", self.simulated_date.format("%Y-%m-%d")),
        ];
        if let Some(title) = &self.special_day_title {
            lines.push(format!("Special Day: {title}"));
        }
        lines
    }
}

/// Result of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOutcome<'a> {
    pub grid: GridState,
    pub special_day: Option<&'a SpecialDay>,
    pub summary: Summary,
}

/// Compute the frame's numbers without drawing anything.
pub fn evaluate<'a>(snapshot: &RenderSnapshot<'a>) -> Result<RenderOutcome<'a>> {
    let config: &'a Config = snapshot.config;
    let person = &config.person;
    let birthdate = person.birthdate()?;
    let today = snapshot.clock.civil_date();

    let grid = GridState::compute(birthdate, today, person.expected_lifespan)?;
    let special_day = resolve_special_day(&snapshot.clock.instant(), &config.special_days);

    let summary = Summary {
        weeks_lived: grid.weeks_lived,
        total_weeks: grid.total_weeks,
        percentage: grid.percentage(),
        age_years: age_years(birthdate, today),
        simulated_date: today,
        special_day_title: special_day.map(|day| day.title.clone()),
    };

    Ok(RenderOutcome {
        grid,
        special_day,
        summary,
    })
}

/// Draw the frame for `snapshot`: the special-day quote if one matches,
/// otherwise the active layout.
pub fn render<'a, S: Surface + ?Sized>(
    surface: &mut S,
    snapshot: &RenderSnapshot<'a>,
) -> Result<RenderOutcome<'a>> {
    let outcome = evaluate(snapshot)?;
    match outcome.special_day {
        Some(day) => render_quote(surface, &day.quote),
        None => snapshot.layout.render(
            surface,
            outcome.grid.weeks_lived,
            outcome.grid.total_weeks,
        ),
    }
    Ok(outcome)
}

/// Full-screen centred quote.
pub fn render_quote<S: Surface + ?Sized>(surface: &mut S, quote: &str) {
    surface.clear(DISPLAY_WIDTH, DISPLAY_HEIGHT, Color::WHITE);

    let lines = wrap_text(&*surface, quote, DISPLAY_WIDTH - QUOTE_MARGIN, &QUOTE_STYLE);
    let start_y =
        DISPLAY_HEIGHT / 2.0 - (lines.len().saturating_sub(1) as f64 * QUOTE_LINE_HEIGHT / 2.0);

    for (index, line) in lines.iter().enumerate() {
        let at = Point::new(
            DISPLAY_WIDTH / 2.0,
            start_y + index as f64 * QUOTE_LINE_HEIGHT,
        );
        surface.fill_text(line, at, &QUOTE_STYLE, Color::BLACK);
    }
}
