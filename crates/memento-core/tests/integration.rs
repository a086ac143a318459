//! Integration tests exercising the full render pipeline:
//! config → snapshot → evaluate → layout or quote, through a recording surface.

use approx::assert_relative_eq;
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use memento_core::{
    CalendarError, Color, Config, Layout, Person, Point, Rect, RenderSnapshot, SimulationClock, SpecialDay,
    Stroke, Surface, SvgSurface, TextMeasure, TextStyle, evaluate, render, resolve_special_day,
    total_weeks, weeks_lived,
};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    FillRect(Rect, Color),
    StrokeRect(Rect, Stroke),
    FillCircle(Point, f64, Color),
    StrokeCircle(Point, f64, Stroke),
    Text(String, Point),
}

/// Records every drawing call; text is one unit wide per character.
#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    /// Markers drawn solid black (excludes the white clear).
    fn filled(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(op, Op::FillRect(_, c) | Op::FillCircle(_, _, c) if *c == Color::BLACK)
            })
            .count()
    }

    fn outlined(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::StrokeRect(..) | Op::StrokeCircle(..)))
            .count()
    }

    fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasure for Recorder {
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().count() as f64 * style.size * 0.5
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::FillRect(rect, color));
    }
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.ops.push(Op::StrokeRect(rect, stroke));
    }
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(Op::FillCircle(center, radius, color));
    }
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        self.ops.push(Op::StrokeCircle(center, radius, stroke));
    }
    fn fill_text(&mut self, text: &str, at: Point, _style: &TextStyle, _color: Color) {
        self.ops.push(Op::Text(text.to_string(), at));
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config_with(birthdate: &str, lifespan: u32, special_days: Vec<SpecialDay>) -> Config {
    Config {
        person: Person {
            birthdate: birthdate.to_string(),
            expected_lifespan: lifespan,
        },
        special_days,
        layout: Layout::Grid,
    }
}

const STOIC: &str = "Let us prepare our minds as if we had come to the very end of life. \
Let us postpone nothing. Let us balance life's books each day.";

/// Birthdate 1990-06-15, lifespan 80, simulated 2024-06-15.
#[test]
fn thirty_four_year_scenario() {
    let config = config_with("1990-06-15", 80, vec![]);
    let snapshot = RenderSnapshot::new(&config, SimulationClock::at_date(date(2024, 6, 15)));
    let outcome = evaluate(&snapshot).unwrap();

    assert_eq!(outcome.summary.age_years, 34);
    assert_eq!(outcome.grid.weeks_lived, 1768);
    assert_eq!(outcome.grid.total_weeks, 4160);
    assert_relative_eq!(outcome.summary.percentage, 42.5, epsilon = 1e-9);
    assert!(outcome.special_day.is_none());
}

#[test]
fn every_layout_draws_exact_marker_counts() {
    for layout in Layout::ALL {
        for (lived, total) in [(0, 4160), (1768, 4160), (4160, 4160), (37, 100)] {
            let mut rec = Recorder::default();
            layout.render(&mut rec, lived, total);
            assert_eq!(rec.filled(), lived as usize, "{layout} filled, lived={lived}");
            assert_eq!(
                rec.outlined(),
                (i64::from(total) - lived) as usize,
                "{layout} outlined, lived={lived}"
            );
            assert_eq!(
                rec.ops.first(),
                Some(&Op::FillRect(Rect::new(0.0, 0.0, 800.0, 480.0), Color::WHITE)),
                "{layout} clears first"
            );
        }
    }
}

#[test]
fn outlived_and_unborn_never_overdraw() {
    for layout in Layout::ALL {
        let mut rec = Recorder::default();
        layout.render(&mut rec, 9000, 4160);
        assert_eq!(rec.filled(), 4160, "{layout}");
        assert_eq!(rec.outlined(), 0, "{layout}");

        let mut rec = Recorder::default();
        layout.render(&mut rec, -50, 4160);
        assert_eq!(rec.filled(), 0, "{layout}");
        assert_eq!(rec.outlined(), 4160, "{layout}");
    }
}

#[test]
fn future_weeks_use_hairline_gray() {
    let mut rec = Recorder::default();
    Layout::Grid.render(&mut rec, 0, 52);
    assert!(rec.ops.iter().all(|op| match op {
        Op::StrokeCircle(_, _, stroke) => *stroke == Stroke::hairline(Color::gray(0xd8)),
        Op::FillRect(_, c) => *c == Color::WHITE,
        _ => false,
    }));
}

#[test]
fn special_day_replaces_grid_with_quote() {
    let config = config_with(
        "1990-06-15",
        80,
        vec![SpecialDay {
            date: "03-15".to_string(),
            title: "Ides".to_string(),
            quote: STOIC.to_string(),
        }],
    );
    let snapshot = RenderSnapshot::new(&config, SimulationClock::at_date(date(2024, 3, 15)));
    let mut rec = Recorder::default();
    let outcome = render(&mut rec, &snapshot).unwrap();

    assert_eq!(outcome.special_day.map(|d| d.title.as_str()), Some("Ides"));
    assert_eq!(rec.filled(), 0);
    assert_eq!(rec.outlined(), 0);

    let lines = rec.texts();
    assert!(lines.len() > 1, "quote should wrap: {lines:?}");
    assert_eq!(lines.join(" "), STOIC);
    for line in &lines {
        assert!(rec.measure_text(line, &TextStyle::serif(36.0)) <= 680.0 || !line.contains(' '));
    }

    // Lines are centred around the middle of the surface.
    let ys: Vec<f64> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text(_, p) => Some(p.y),
            _ => None,
        })
        .collect();
    let mid = (ys[0] + ys[ys.len() - 1]) / 2.0;
    assert_relative_eq!(mid, 240.0, epsilon = 1e-9);
}

#[test]
fn rendering_is_idempotent() {
    let config = config_with("1987-08-17", 80, vec![]);
    let clock = SimulationClock::at_date(date(2025, 2, 1));
    for layout in Layout::ALL {
        let snapshot = RenderSnapshot::new(&config, clock).with_layout(layout);
        let mut a = SvgSurface::default();
        let mut b = SvgSurface::default();
        let first = render(&mut a, &snapshot).unwrap();
        let second = render(&mut b, &snapshot).unwrap();
        assert_eq!(first, second);
        assert_eq!(a.finish(), b.finish());
    }
}

#[test]
fn longer_lifespan_draws_every_week() {
    let config = config_with("1990-01-01", 95, vec![]);
    let snapshot = RenderSnapshot::new(&config, SimulationClock::at_date(date(2000, 1, 1)))
        .with_layout(Layout::Timeline);
    let mut rec = Recorder::default();
    let outcome = render(&mut rec, &snapshot).unwrap();
    assert_eq!(outcome.grid.total_weeks, 95 * 52);
    assert_eq!(rec.filled() + rec.outlined(), 95 * 52);
    assert_eq!(rec.filled(), 520);
}

#[test]
fn oversized_lifespan_is_rejected_before_drawing() {
    let config = config_with("1990-01-01", 100_000_000, vec![]);
    for layout in Layout::ALL {
        let snapshot = RenderSnapshot::new(&config, SimulationClock::at_date(date(2000, 1, 1)))
            .with_layout(layout);
        let mut rec = Recorder::default();
        assert_eq!(
            render(&mut rec, &snapshot).unwrap_err(),
            CalendarError::LifespanTooLong(100_000_000)
        );
        assert!(rec.ops.is_empty(), "{layout}");
    }
}

#[test]
fn longest_allowed_lifespan_draws_every_week() {
    let config = config_with("1990-01-01", 150, vec![]);
    let snapshot = RenderSnapshot::new(&config, SimulationClock::at_date(date(2000, 1, 1)))
        .with_layout(Layout::Columns);
    let mut rec = Recorder::default();
    let outcome = render(&mut rec, &snapshot).unwrap();
    assert_eq!(outcome.grid.total_weeks, 150 * 52);
    assert_eq!(rec.filled() + rec.outlined(), 150 * 52);
}

#[test]
fn known_values() {
    assert_eq!(weeks_lived(date(2000, 1, 1), date(2001, 1, 1)), 52);
    assert_eq!(total_weeks(80), Ok(4160));
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
}

proptest! {
    #[test]
    fn weeks_lived_non_negative_and_monotone(
        birth in arb_date(),
        offset in 0i64..40_000,
        step in 1i64..400,
    ) {
        let r1 = birth + chrono::Duration::days(offset);
        let r2 = r1 + chrono::Duration::days(step);
        let w1 = weeks_lived(birth, r1);
        let w2 = weeks_lived(birth, r2);
        prop_assert!(w1 >= 0);
        prop_assert!(w2 >= w1, "{birth} {r1}={w1} {r2}={w2}");
        prop_assert_eq!(weeks_lived(birth, birth), 0);
    }

    #[test]
    fn special_day_ignores_caller_zone(
        secs in 0i64..4_000_000_000,
        offset_hours in -12i32..=14,
    ) {
        let days: Vec<SpecialDay> = (1..=28)
            .map(|d| SpecialDay {
                date: format!("{:02}-{:02}", (d % 12) + 1, d),
                title: format!("day {d}"),
                quote: String::new(),
            })
            .collect();
        let utc = Utc.timestamp_opt(secs, 0).unwrap();
        let zone = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let local = utc.with_timezone(&zone);
        prop_assert_eq!(
            resolve_special_day(&utc, &days),
            resolve_special_day(&local, &days)
        );
    }
}
