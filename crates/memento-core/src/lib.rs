//! Life calendar engine.
//!
//! Maps a birthdate and a simulated "current" instant onto a grid of one
//! marker per week of an expected lifespan, resolves recurring special days
//! in a fixed civil timezone, and draws the result through a small 2D
//! surface abstraction in one of several interchangeable layouts.
//!
//! Zero I/O — pure functions over an immutable snapshot.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod layout;
pub mod render;
pub mod special_day;
pub mod surface;
pub mod svg;
pub mod wrap;

pub use calendar::{age_years, parse_date, total_weeks, weeks_lived};
pub use clock::SimulationClock;
pub use config::{Config, Person, SpecialDay};
pub use constants::{
    CIVIL_ZONE, DEFAULT_BIRTHDATE, DEFAULT_LIFESPAN, DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_LIFESPAN,
    PHI, WEEKS_PER_YEAR,
};
pub use error::{CalendarError, Result};
pub use grid::{GridState, WeekStatus};
pub use layout::{Layout, Marker, ParseLayoutError};
pub use render::{RenderOutcome, RenderSnapshot, Summary, evaluate, render, render_quote};
pub use special_day::{civil_month_day, resolve_special_day};
pub use surface::{Color, FontFamily, Point, Rect, Stroke, Surface, TextMeasure, TextStyle};
pub use svg::SvgSurface;
pub use wrap::wrap_text;
