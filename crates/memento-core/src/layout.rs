//! Spatial layouts for the week grid.
//!
//! Every layout maps a week index to a marker on the 800×480 surface and
//! shares one colour contract: past weeks are solid black, future weeks a
//! light-gray hairline outline, and nothing is drawn past the lifespan.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PHI, WEEKS_PER_YEAR};
use crate::grid::{WeekStatus, week_status};
use crate::surface::{Color, Point, Rect, Stroke, Surface};

const CENTER: Point = Point::new(DISPLAY_WIDTH / 2.0, DISPLAY_HEIGHT / 2.0);

const SPIRAL_ANGLE_STEP: f64 = 0.3;
const SPIRAL_RADIUS_GROWTH: f64 = 0.18;
const RINGS_MAX_RADIUS: f64 = 220.0;
const WAVE_COLUMNS: u32 = 80;
const WAVE_AMPLITUDE: f64 = 30.0;
const WAVE_FREQUENCY: f64 = 0.1;
const PROGRESS_RADIUS: f64 = 200.0;
const FIBONACCI_SCALE: f64 = 3.0;

/// Radius of the small dots used by the polar and wave layouts.
const DOT_RADIUS: f64 = 2.0;

/// Serialized by [`Layout::name`]; deserialized through [`FromStr`], so config
/// files accept the same spellings as the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Layout {
    /// Year rows of small circles with breathing room between them.
    #[default]
    Grid,
    /// Archimedean spiral from the centre outward.
    Spiral,
    /// One ring per year, like tree rings.
    Concentric,
    /// 80-column grid displaced by a sine wave.
    Wave,
    /// Year rows of filled rectangles.
    Timeline,
    /// A single ring for the whole lifespan.
    Circular,
    /// Golden-angle sunflower pattern.
    Fibonacci,
    /// Timeline cells drawn column by column.
    Columns,
}

/// Where and how one week is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    Dot { center: Point, radius: f64 },
    Cell(Rect),
}

impl Layout {
    pub const ALL: [Layout; 8] = [
        Layout::Grid,
        Layout::Spiral,
        Layout::Concentric,
        Layout::Wave,
        Layout::Timeline,
        Layout::Circular,
        Layout::Fibonacci,
        Layout::Columns,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::Spiral => "spiral",
            Layout::Concentric => "concentric",
            Layout::Wave => "wave",
            Layout::Timeline => "timeline",
            Layout::Circular => "circular",
            Layout::Fibonacci => "fibonacci",
            Layout::Columns => "columns",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Layout::Grid => "52 x years grid of small circles",
            Layout::Spiral => "Archimedean spiral from the centre outward",
            Layout::Concentric => "one ring per year, starting at 12 o'clock",
            Layout::Wave => "80-column grid displaced by a sine wave",
            Layout::Timeline => "years as rows of filled cells",
            Layout::Circular => "the whole lifespan on a single ring",
            Layout::Fibonacci => "golden-angle sunflower spiral",
            Layout::Columns => "timeline cells drawn column by column",
        }
    }

    /// Outline colour for future weeks.
    pub fn future_color(self) -> Color {
        match self {
            Layout::Grid => Color::gray(0xd8),
            Layout::Timeline | Layout::Columns => Color::gray(0xf0),
            _ => Color::gray(0xe0),
        }
    }

    /// Marker geometry for week `index` of `total_weeks`.
    pub fn marker(self, index: u32, total_weeks: u32) -> Marker {
        let years = year_rows(total_weeks);
        let year = f64::from(index / WEEKS_PER_YEAR);
        let week = f64::from(index % WEEKS_PER_YEAR);
        let i = f64::from(index);

        match self {
            Layout::Grid => {
                let (cell_w, cell_h) = year_cell(years);
                let offset_x = (DISPLAY_WIDTH - f64::from(WEEKS_PER_YEAR) * cell_w) / 2.0;
                let offset_y = (DISPLAY_HEIGHT - f64::from(years) * cell_h) / 2.0;
                Marker::Dot {
                    center: Point::new(
                        offset_x + week * cell_w + cell_w / 2.0,
                        offset_y + year * cell_h + cell_h / 2.0,
                    ),
                    radius: cell_w.min(cell_h) / 3.0,
                }
            }
            Layout::Spiral => Marker::Dot {
                center: CENTER.polar(i * SPIRAL_ANGLE_STEP, i * SPIRAL_RADIUS_GROWTH),
                radius: DOT_RADIUS,
            },
            Layout::Concentric => {
                let radius = (year + 1.0) * (RINGS_MAX_RADIUS / f64::from(years));
                let angle = week * (TAU / f64::from(WEEKS_PER_YEAR)) - FRAC_PI_2;
                Marker::Dot {
                    center: CENTER.polar(angle, radius),
                    radius: DOT_RADIUS,
                }
            }
            Layout::Wave => {
                let rows = total_weeks.div_ceil(WAVE_COLUMNS).max(1);
                let cell_w = DISPLAY_WIDTH / f64::from(WAVE_COLUMNS);
                let cell_h = DISPLAY_HEIGHT / f64::from(rows);
                let col = f64::from(index % WAVE_COLUMNS);
                let row = f64::from(index / WAVE_COLUMNS);
                Marker::Dot {
                    center: Point::new(
                        col * cell_w + cell_w / 2.0,
                        row * cell_h + cell_h / 2.0 + (i * WAVE_FREQUENCY).sin() * WAVE_AMPLITUDE,
                    ),
                    radius: DOT_RADIUS,
                }
            }
            Layout::Timeline | Layout::Columns => {
                let (cell_w, cell_h) = year_cell(years);
                Marker::Cell(Rect::new(week * cell_w, year * cell_h, cell_w - 1.0, cell_h - 1.0))
            }
            Layout::Circular => {
                let angle = (i / f64::from(total_weeks.max(1))) * TAU - FRAC_PI_2;
                Marker::Dot {
                    center: CENTER.polar(angle, PROGRESS_RADIUS),
                    radius: 3.0,
                }
            }
            Layout::Fibonacci => Marker::Dot {
                center: CENTER.polar(i * TAU / PHI, FIBONACCI_SCALE * i.sqrt()),
                radius: DOT_RADIUS,
            },
        }
    }

    /// Week indices in drawing order. Every index in `0..total_weeks` appears once.
    pub fn draw_order(self, total_weeks: u32) -> Box<dyn Iterator<Item = u32>> {
        match self {
            Layout::Columns => {
                let years = year_rows(total_weeks);
                Box::new(
                    (0..WEEKS_PER_YEAR)
                        .flat_map(move |week| {
                            (0..years).map(move |year| year * WEEKS_PER_YEAR + week)
                        })
                        .filter(move |&index| index < total_weeks),
                )
            }
            _ => Box::new(0..total_weeks),
        }
    }

    /// Clear the surface and draw every week of the lifespan.
    pub fn render<S: Surface + ?Sized>(self, surface: &mut S, weeks_lived: i64, total_weeks: u32) {
        surface.clear(DISPLAY_WIDTH, DISPLAY_HEIGHT, Color::WHITE);
        let future = Stroke::hairline(self.future_color());

        for index in self.draw_order(total_weeks) {
            let Some(status) = week_status(index, weeks_lived, total_weeks) else {
                continue;
            };
            draw_marker(surface, self.marker(index, total_weeks), status, future);
        }
    }
}

/// Rows needed to hold `total_weeks` at 52 per row (80 for the default lifespan).
fn year_rows(total_weeks: u32) -> u32 {
    total_weeks.div_ceil(WEEKS_PER_YEAR).max(1)
}

fn year_cell(years: u32) -> (f64, f64) {
    (
        DISPLAY_WIDTH / f64::from(WEEKS_PER_YEAR),
        DISPLAY_HEIGHT / f64::from(years),
    )
}

fn draw_marker<S: Surface + ?Sized>(
    surface: &mut S,
    marker: Marker,
    status: WeekStatus,
    future: Stroke,
) {
    match (marker, status) {
        (Marker::Dot { center, radius }, WeekStatus::Past) => {
            surface.fill_circle(center, radius, Color::BLACK)
        }
        (Marker::Dot { center, radius }, WeekStatus::Future) => {
            surface.stroke_circle(center, radius, future)
        }
        (Marker::Cell(rect), WeekStatus::Past) => surface.fill_rect(rect, Color::BLACK),
        // Inset by half the line width so the outline stays inside the cell.
        (Marker::Cell(rect), WeekStatus::Future) => surface.stroke_rect(
            Rect::new(rect.x + 0.5, rect.y + 0.5, rect.width - 1.0, rect.height - 1.0),
            future,
        ),
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutError(String);

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Layout::ALL.iter().map(|l| l.name()).collect();
        write!(f, "unknown layout '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseLayoutError {}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "default" => return Ok(Layout::Grid),
            "rings" => return Ok(Layout::Concentric),
            "circular-progress" => return Ok(Layout::Circular),
            "vertical-columns" => return Ok(Layout::Columns),
            _ => {}
        }
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name() == wanted)
            .ok_or_else(|| ParseLayoutError(s.to_string()))
    }
}

impl TryFrom<String> for Layout {
    type Error = ParseLayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
