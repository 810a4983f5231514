//! Availability Chart
//!
//! Donut chart of booked vs. free places for one activity.
//!
//! The geometry is a pure function of `(booked, total)`. Drawing goes
//! through the [`ChartSurface`] trait so the same routine paints an HTML
//! canvas in the browser and a recording surface in tests.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::theme::Theme;

/// Angle of the first sector's leading edge (12 o'clock)
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Radius of the centre hole relative to the outer radius
pub const HOLE_RATIO: f64 = 0.3;

/// Gap between the outer ring and the canvas edge
pub const EDGE_PADDING: f64 = 5.0;

/// Stroke width for sector and hole borders
pub const STROKE_WIDTH: f64 = 2.0;

/// Which part of the capacity a sector represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectorKind {
    Booked,
    Available,
}

/// A filled wedge, angles in radians
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub kind: SectorKind,
    pub start: f64,
    pub end: f64,
}

impl Sector {
    /// Angular extent of the wedge
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Geometry of an availability chart
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvailabilityChart {
    booked: u32,
    total: u32,
}

impl AvailabilityChart {
    /// Build the chart for `booked` of `total` places.
    ///
    /// `booked` is clamped to `total` so the two sectors always tile the
    /// circle.
    pub fn new(booked: u32, total: u32) -> Self {
        Self {
            booked: booked.min(total),
            total,
        }
    }

    pub fn booked(&self) -> u32 {
        self.booked
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn available(&self) -> u32 {
        self.total - self.booked
    }

    /// Sweep of the booked sector. Zero when there is no capacity.
    pub fn booked_angle(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.booked as f64 / self.total as f64) * TAU
    }

    /// Sweep of the available sector, the exact complement of the booked one
    pub fn available_angle(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        TAU - self.booked_angle()
    }

    /// Sectors to paint, in drawing order. Empty sectors are omitted.
    pub fn sectors(&self) -> Vec<Sector> {
        let mut sectors = Vec::with_capacity(2);
        let split = START_ANGLE + self.booked_angle();

        if self.booked > 0 {
            sectors.push(Sector {
                kind: SectorKind::Booked,
                start: START_ANGLE,
                end: split,
            });
        }

        if self.available() > 0 {
            sectors.push(Sector {
                kind: SectorKind::Available,
                start: split,
                end: START_ANGLE + TAU,
            });
        }

        sectors
    }

    /// Text shown in the centre hole
    pub fn label(&self) -> String {
        format!("{}/{}", self.booked, self.total)
    }
}

/// Colours and font for a chart, derived from the active theme
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPalette {
    pub booked: &'static str,
    pub available: &'static str,
    pub stroke: &'static str,
    pub hole: &'static str,
    pub text: &'static str,
    pub font: &'static str,
}

impl ChartPalette {
    /// Palette matching the page background of `theme`
    pub fn for_theme(theme: Theme) -> Self {
        let (hole, text) = match theme {
            Theme::Light => ("#ffffff", "#333333"),
            Theme::Dark => ("#2d2d2d", "#e0e0e0"),
        };

        Self {
            booked: "#f44336",
            available: "#4caf50",
            stroke: "#ffffff",
            hole,
            text,
            font: "12px Poppins, sans-serif",
        }
    }

    pub fn sector_fill(&self, kind: SectorKind) -> &'static str {
        match kind {
            SectorKind::Booked => self.booked,
            SectorKind::Available => self.available,
        }
    }
}

/// Minimal 2D drawing surface the chart renders onto
pub trait ChartSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Erase the whole surface
    fn clear(&self);

    /// Fill and stroke a pie wedge centred at `(cx, cy)`
    fn wedge(&self, cx: f64, cy: f64, radius: f64, sector: &Sector, fill: &str, stroke: &str);

    /// Fill and stroke a full circle
    fn circle(&self, cx: f64, cy: f64, radius: f64, fill: &str, stroke: &str);

    /// Draw text centred on `(x, y)`
    fn centered_text(&self, text: &str, x: f64, y: f64, color: &str, font: &str);
}

/// Paint `chart` onto `surface`.
///
/// Clears first, so calling it again (after a theme change, say) gives the
/// same picture with the new colours.
pub fn draw_availability_chart<S: ChartSurface + ?Sized>(
    surface: &S,
    chart: &AvailabilityChart,
    palette: &ChartPalette,
) {
    let cx = surface.width() / 2.0;
    let cy = surface.height() / 2.0;
    let radius = (cx.min(cy) - EDGE_PADDING).max(0.0);

    surface.clear();

    for sector in chart.sectors() {
        surface.wedge(
            cx,
            cy,
            radius,
            &sector,
            palette.sector_fill(sector.kind),
            palette.stroke,
        );
    }

    surface.circle(cx, cy, radius * HOLE_RATIO, palette.hole, palette.stroke);
    surface.centered_text(&chart.label(), cx, cy, palette.text, palette.font);
}

/// DOM id for an activity's chart canvas: lower-cased, each whitespace run
/// (leading and trailing ones included) collapsed to `-`
pub fn chart_dom_id(activity_name: &str) -> String {
    let mut id = String::from("chart-");
    let mut in_space = false;
    for c in activity_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.extend(c.to_lowercase());
            in_space = false;
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const EPSILON: f64 = 1e-9;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Wedge { kind: SectorKind, sweep: f64, fill: String },
        Circle { radius: f64, fill: String },
        Text { text: String, x: f64, y: f64 },
    }

    struct RecordingSurface {
        width: f64,
        height: f64,
        ops: RefCell<Vec<Op>>,
    }

    impl RecordingSurface {
        fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                ops: RefCell::new(Vec::new()),
            }
        }

        fn wedges(&self) -> Vec<Op> {
            self.ops
                .borrow()
                .iter()
                .filter(|op| matches!(op, Op::Wedge { .. }))
                .cloned()
                .collect()
        }
    }

    impl ChartSurface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn clear(&self) {
            self.ops.borrow_mut().push(Op::Clear);
        }

        fn wedge(&self, _cx: f64, _cy: f64, _radius: f64, sector: &Sector, fill: &str, _stroke: &str) {
            self.ops.borrow_mut().push(Op::Wedge {
                kind: sector.kind,
                sweep: sector.sweep(),
                fill: fill.to_string(),
            });
        }

        fn circle(&self, _cx: f64, _cy: f64, radius: f64, fill: &str, _stroke: &str) {
            self.ops.borrow_mut().push(Op::Circle {
                radius,
                fill: fill.to_string(),
            });
        }

        fn centered_text(&self, text: &str, x: f64, y: f64, _color: &str, _font: &str) {
            self.ops.borrow_mut().push(Op::Text {
                text: text.to_string(),
                x,
                y,
            });
        }
    }

    #[test]
    fn test_sectors_always_tile_circle() {
        for total in 1..=25u32 {
            for booked in 0..=total {
                let chart = AvailabilityChart::new(booked, total);
                let sum = chart.booked_angle() + chart.available_angle();
                assert!((sum - TAU).abs() < EPSILON, "{}/{} summed to {}", booked, total, sum);

                let sectors = chart.sectors();
                assert!(sectors.iter().all(|s| s.sweep() > 0.0));
                let drawn: f64 = sectors.iter().map(Sector::sweep).sum();
                assert!((drawn - TAU).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_nobody_booked() {
        let chart = AvailabilityChart::new(0, 4);
        let sectors = chart.sectors();
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].kind, SectorKind::Available);
        assert_eq!(sectors[0].start, START_ANGLE);
        assert!((sectors[0].sweep() - TAU).abs() < EPSILON);
        assert_eq!(chart.label(), "0/4");
    }

    #[test]
    fn test_fully_booked() {
        let chart = AvailabilityChart::new(4, 4);
        let sectors = chart.sectors();
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].kind, SectorKind::Booked);
        assert!((sectors[0].sweep() - TAU).abs() < EPSILON);
        assert_eq!(chart.label(), "4/4");
    }

    #[test]
    fn test_partial_booking_degrees() {
        let chart = AvailabilityChart::new(3, 10);
        assert!((chart.booked_angle().to_degrees() - 108.0).abs() < 1e-6);
        assert!((chart.available_angle().to_degrees() - 252.0).abs() < 1e-6);

        let sectors = chart.sectors();
        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].end, sectors[1].start);
        assert!((sectors[1].end - (START_ANGLE + TAU)).abs() < EPSILON);
    }

    #[test]
    fn test_zero_capacity_draws_background_only() {
        let chart = AvailabilityChart::new(0, 0);
        assert_eq!(chart.booked_angle(), 0.0);
        assert_eq!(chart.available_angle(), 0.0);
        assert!(chart.sectors().is_empty());

        let surface = RecordingSurface::new(80.0, 80.0);
        draw_availability_chart(&surface, &chart, &ChartPalette::for_theme(Theme::Light));
        assert!(surface.wedges().is_empty());
        assert!(surface
            .ops
            .borrow()
            .iter()
            .any(|op| matches!(op, Op::Circle { .. })));
    }

    #[test]
    fn test_overbooked_is_clamped() {
        let chart = AvailabilityChart::new(7, 5);
        assert_eq!(chart.booked(), 5);
        assert_eq!(chart.available(), 0);
        assert_eq!(chart.label(), "5/5");
    }

    #[test]
    fn test_draw_sequence() {
        let surface = RecordingSurface::new(80.0, 80.0);
        let palette = ChartPalette::for_theme(Theme::Dark);
        draw_availability_chart(&surface, &AvailabilityChart::new(2, 12), &palette);

        let ops = surface.ops.borrow().clone();
        assert_eq!(ops.len(), 5);
        assert_eq!(ops[0], Op::Clear);
        assert!(matches!(&ops[1], Op::Wedge { kind: SectorKind::Booked, fill, .. } if fill == "#f44336"));
        assert!(matches!(&ops[2], Op::Wedge { kind: SectorKind::Available, fill, .. } if fill == "#4caf50"));
        // outer radius 40 - 5 = 35, hole at 30%
        assert!(matches!(&ops[3], Op::Circle { radius, fill } if (radius - 10.5).abs() < EPSILON && fill == "#2d2d2d"));
        assert_eq!(
            ops[4],
            Op::Text {
                text: "2/12".to_string(),
                x: 40.0,
                y: 40.0
            }
        );
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let surface = RecordingSurface::new(80.0, 80.0);
        let chart = AvailabilityChart::new(3, 10);
        let palette = ChartPalette::for_theme(Theme::Light);

        draw_availability_chart(&surface, &chart, &palette);
        let first = surface.ops.borrow().clone();
        surface.ops.borrow_mut().clear();
        draw_availability_chart(&surface, &chart, &palette);

        assert_eq!(*surface.ops.borrow(), first);
    }

    #[test]
    fn test_palette_follows_theme() {
        assert_ne!(
            ChartPalette::for_theme(Theme::Light).hole,
            ChartPalette::for_theme(Theme::Dark).hole
        );
    }

    #[test]
    fn test_chart_dom_id() {
        assert_eq!(chart_dom_id("Chess Club"), "chart-chess-club");
        assert_eq!(chart_dom_id("Track  and\tField"), "chart-track-and-field");
    }

    #[test]
    fn test_chart_dom_id_edge_whitespace() {
        assert_eq!(chart_dom_id(" Chess"), "chart--chess");
        assert_eq!(chart_dom_id("Chess "), "chart-chess-");
        assert_ne!(chart_dom_id(" Chess"), chart_dom_id("Chess"));
    }
}
