use anyhow::Context as _;
use kurbo::PathEl;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::animation::keyframes::{Lerp, Track};
use crate::animation::schedule::{Durations, Schedule};
use crate::foundation::core::{BezPath, Canvas, FLY, HOIST, Point, Size, Vec2};
use crate::foundation::error::FlagResult;
use crate::foundation::format;
use crate::regions::table::{RegionOrder, WeightTable};
use crate::scene::model::FlagSpec;
use crate::scene::resolve::{BandNode, FlagScene, StarNode, resolve_scene};

/// Id of the shared star shape that every `<use>` references.
pub const STAR_SYMBOL_ID: &str = "s";

/// Resolve `spec` and write it as an SVG document.
#[tracing::instrument(skip(spec))]
pub fn render_svg(spec: &FlagSpec) -> FlagResult<String> {
    let scene = resolve_scene(spec)?;
    write_scene(&scene)
}

/// One-call generator: scale stripes and stars by `table`, optionally animating against the
/// canonical flag.
pub fn proportional_flag(
    table: &WeightTable,
    order: &RegionOrder,
    animation: Option<Durations>,
) -> FlagResult<String> {
    let mut spec = FlagSpec::proportional(table, order)?;
    spec.animation = animation;
    render_svg(&spec)
}

/// Five-pointed star of circumradius 1 centered on the origin, one point straight up.
pub fn star_path() -> BezPath {
    let mut path = BezPath::new();
    for n in 0..5u32 {
        let turns = (f64::from((n * 2) % 5) - 0.25) / 5.0;
        let theta = std::f64::consts::TAU * turns;
        let p = Point::new(theta.cos(), theta.sin());
        if n == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Path data for a polygon path, formatted with [`format::num`].
fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                d.push_str(&format!("M{},{}", format::num(p.x), format::num(p.y)));
            }
            PathEl::LineTo(p) => {
                d.push_str(&format!(" {},{}", format::num(p.x), format::num(p.y)));
            }
            PathEl::ClosePath => d.push('Z'),
            // Polygon only.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    }
    d
}

/// Write a resolved scene. Output depends only on `scene`.
pub fn write_scene(scene: &FlagScene) -> FlagResult<String> {
    let mut doc = SvgDoc::new(scene.schedule);
    doc.begin()?;

    doc.open("defs", &[])?;
    doc.empty(
        "path",
        &[
            ("id", STAR_SYMBOL_ID.to_string()),
            ("fill", scene.palette.white.clone()),
            ("d", path_data(&star_path())),
        ],
    )?;
    doc.close("defs")?;

    // The six white stripes are the background showing through.
    doc.empty(
        "rect",
        &[
            ("width", "100%".to_string()),
            ("height", "100%".to_string()),
            ("fill", scene.palette.white.clone()),
        ],
    )?;

    for band in &scene.bands {
        doc.band(band, &scene.palette.red)?;
    }
    doc.canton(&scene.canton, &scene.palette.blue)?;
    for star in &scene.stars {
        doc.star(star)?;
    }

    doc.finish()
}

type Attrs<'a> = [(&'a str, String)];

struct SvgDoc {
    writer: Writer<Vec<u8>>,
    timing: Option<Timing>,
}

/// Attributes shared by every animation element of a document.
struct Timing {
    dur: String,
    key_times: String,
}

impl Timing {
    fn new(schedule: &Schedule) -> Self {
        Self {
            dur: format!("{}s", format::num(schedule.total_secs())),
            key_times: format::list(schedule.key_times().iter().map(|&t| format::num(t))),
        }
    }

    fn attrs(&self) -> [(&'static str, String); 3] {
        [
            ("repeatCount", "indefinite".to_string()),
            ("dur", self.dur.clone()),
            ("keyTimes", self.key_times.clone()),
        ]
    }
}

impl SvgDoc {
    fn new(schedule: Option<Schedule>) -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            timing: schedule.as_ref().map(Timing::new),
        }
    }

    fn event(&mut self, event: Event<'_>) -> FlagResult<()> {
        self.writer.write_event(event).context("write svg event")?;
        Ok(())
    }

    fn element<'a>(name: &'a str, attrs: &'a Attrs<'a>) -> BytesStart<'a> {
        BytesStart::new(name).with_attributes(attrs.iter().map(|(k, v)| (*k, v.as_str())))
    }

    fn open(&mut self, name: &str, attrs: &Attrs<'_>) -> FlagResult<()> {
        self.event(Event::Start(Self::element(name, attrs)))
    }

    fn close(&mut self, name: &str) -> FlagResult<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attrs: &Attrs<'_>) -> FlagResult<()> {
        self.event(Event::Empty(Self::element(name, attrs)))
    }

    fn begin(&mut self) -> FlagResult<()> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.event(Event::Text(BytesText::new("\n")))?;
        let canvas = Canvas::NOMINAL;
        self.open(
            "svg",
            &[
                ("xmlns", "http://www.w3.org/2000/svg".to_string()),
                ("xmlns:xlink", "http://www.w3.org/1999/xlink".to_string()),
                ("width", canvas.width.to_string()),
                ("height", canvas.height.to_string()),
                (
                    "viewBox",
                    format!("0 0 {} {}", format::num(FLY), format::num(HOIST)),
                ),
            ],
        )
    }

    fn finish(mut self) -> FlagResult<String> {
        self.close("svg")?;
        self.event(Event::Text(BytesText::new("\n")))?;
        let bytes = self.writer.into_inner();
        let text = String::from_utf8(bytes).context("svg output is not utf-8")?;
        Ok(text)
    }

    /// `<animate>` over one scalar attribute.
    fn animate<T>(
        &mut self,
        name: &str,
        track: &Track<T>,
        fmt: impl Fn(&T) -> String,
    ) -> FlagResult<()>
    where
        T: Lerp + Clone + PartialEq,
    {
        let (Track::Animated(kf), Some(timing)) = (track, &self.timing) else {
            return Ok(());
        };
        let mut attrs = vec![
            ("attributeName", name.to_string()),
            ("values", format::list(kf.values().iter().map(&fmt))),
        ];
        attrs.extend(timing.attrs());
        self.empty("animate", &attrs)
    }

    /// `<animateTransform>` of one transform type; `additive` stacks it on the previous one.
    fn animate_transform<T>(
        &mut self,
        kind: &str,
        track: &Track<T>,
        fmt: impl Fn(&T) -> String,
        additive: bool,
    ) -> FlagResult<()>
    where
        T: Lerp + Clone + PartialEq,
    {
        let (Track::Animated(kf), Some(timing)) = (track, &self.timing) else {
            return Ok(());
        };
        let mut attrs = vec![
            ("attributeName", "transform".to_string()),
            ("attributeType", "XML".to_string()),
            ("type", kind.to_string()),
            ("values", format::list(kf.values().iter().map(&fmt))),
        ];
        attrs.extend(timing.attrs());
        if additive {
            attrs.push(("additive", "sum".to_string()));
        }
        self.empty("animateTransform", &attrs)
    }

    fn band(&mut self, band: &BandNode, fill: &str) -> FlagResult<()> {
        let attrs = [
            ("width", "100%".to_string()),
            ("y", format::num(*band.y.initial())),
            ("height", format::num(*band.height.initial())),
            ("fill", fill.to_string()),
        ];
        if !(band.y.is_animated() || band.height.is_animated()) {
            return self.empty("rect", &attrs);
        }
        self.open("rect", &attrs)?;
        self.animate("y", &band.y, |v| format::num(*v))?;
        self.animate("height", &band.height, |v| format::num(*v))?;
        self.close("rect")
    }

    fn canton(&mut self, canton: &Track<Size>, fill: &str) -> FlagResult<()> {
        let size = canton.initial();
        let attrs = [
            ("width", format::pct(size.width)),
            ("height", format::pct(size.height)),
            ("fill", fill.to_string()),
        ];
        if !canton.is_animated() {
            return self.empty("rect", &attrs);
        }
        self.open("rect", &attrs)?;
        self.animate("width", canton, |s| format::pct(s.width))?;
        self.animate("height", canton, |s| format::pct(s.height))?;
        self.close("rect")
    }

    fn star(&mut self, star: &StarNode) -> FlagResult<()> {
        let center: Vec2 = *star.translate.initial();
        let radius = *star.scale.initial();
        let animated = star.translate.is_animated() || star.scale.is_animated();
        // Animated stars spell the scale as a pair to match the animateTransform values.
        let scale = if animated {
            format::pair(radius, radius)
        } else {
            format::num(radius)
        };
        let attrs = [
            ("xlink:href", format!("#{STAR_SYMBOL_ID}")),
            (
                "transform",
                format!("translate({}) scale({scale})", format::pair(center.x, center.y)),
            ),
        ];
        if !animated {
            return self.empty("use", &attrs);
        }
        self.open("use", &attrs)?;
        self.animate_transform(
            "translate",
            &star.translate,
            |v| format::pair(v.x, v.y),
            false,
        )?;
        self.animate_transform("scale", &star.scale, |r| format::pair(*r, *r), true)?;
        self.close("use")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
