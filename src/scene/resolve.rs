use crate::animation::keyframes::Track;
use crate::animation::schedule::Schedule;
use crate::foundation::core::{STAR_COUNT, Size, Vec2};
use crate::foundation::error::FlagResult;
use crate::layout::canton::CantonGeometry;
use crate::layout::stars::{StarGrid, StarScales, star_position};
use crate::layout::stripes::StripeLayout;
use crate::scene::model::{FlagSpec, Palette};

/// One red band: top offset and height, in flag units.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BandNode {
    pub y: Track<f64>,
    pub height: Track<f64>,
}

/// One star: center (flag units) and radius.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StarNode {
    pub rank: usize,
    pub translate: Track<Vec2>,
    pub scale: Track<f64>,
}

/// Fully resolved geometry of one document, ready to be written out.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FlagScene {
    /// Shared timing when any element animates.
    pub schedule: Option<Schedule>,
    pub bands: Vec<BandNode>,
    /// Canton size as fractions of the fly (width) and hoist (height).
    pub canton: Track<Size>,
    pub stars: Vec<StarNode>,
    pub palette: Palette,
}

/// Geometry of one end of the animation cycle.
struct Snapshot<'a> {
    stripes: &'a StripeLayout,
    stars: &'a StarScales,
    canton: CantonGeometry,
}

/// Resolve every element of the flag, including keyframes when animating.
///
/// Star centers and radii at each end are measured against the canton of that same end, so a
/// canton that animates carries its stars along with it.
#[tracing::instrument(skip(spec), fields(animated = spec.animation.is_some()))]
pub fn resolve_scene(spec: &FlagSpec) -> FlagResult<FlagScene> {
    spec.validate()?;

    let schedule = spec.animation.map(Schedule::new).transpose()?;
    let proportional = Snapshot {
        stripes: &spec.stripes,
        stars: &spec.stars,
        canton: spec.canton.resolve(&spec.stripes)?,
    };

    let scene = match schedule {
        None => static_scene(&proportional, &spec.palette)?,
        Some(schedule) => {
            let canonical_stripes = StripeLayout::canonical();
            let uniform = StarScales::uniform();
            let default = default_snapshot(spec, &proportional, &canonical_stripes, &uniform)?;
            animated_scene(schedule, &proportional, &default, &spec.palette)?
        }
    };

    tracing::debug!(
        canton = ?proportional.canton,
        canton_animated = scene.canton.is_animated(),
        cycle_secs = ?scene.schedule.map(|s| s.total_secs()),
        "resolved flag scene"
    );
    Ok(scene)
}

fn default_snapshot<'a>(
    spec: &'a FlagSpec,
    proportional: &Snapshot<'a>,
    canonical_stripes: &'a StripeLayout,
    uniform: &'a StarScales,
) -> FlagResult<Snapshot<'a>> {
    let Some(alt) = &spec.alternate_default else {
        return Ok(Snapshot {
            stripes: canonical_stripes,
            stars: uniform,
            canton: CantonGeometry::standard(),
        });
    };

    let stripes = alt.stripes().unwrap_or(canonical_stripes);
    let canton = match alt.canton() {
        None => proportional.canton,
        Some(selector) => selector.resolve(stripes)?,
    };
    Ok(Snapshot {
        stripes,
        stars: alt.stars(),
        canton,
    })
}

fn static_scene(snap: &Snapshot<'_>, palette: &Palette) -> FlagResult<FlagScene> {
    let bands = snap
        .stripes
        .red_bands()
        .iter()
        .map(|b| BandNode {
            y: Track::Static(b.top),
            height: Track::Static(b.height),
        })
        .collect();

    let grid = StarGrid::for_canton(&snap.canton);
    let stars = (0..STAR_COUNT)
        .map(|rank| {
            let coord = star_position(rank)?;
            Ok(StarNode {
                rank,
                translate: Track::Static(grid.center(coord).to_vec2()),
                scale: Track::Static(grid.radius(snap.stars.scale(rank))),
            })
        })
        .collect::<FlagResult<Vec<_>>>()?;

    Ok(FlagScene {
        schedule: None,
        bands,
        canton: Track::Static(Size::new(snap.canton.width, snap.canton.height)),
        stars,
        palette: palette.clone(),
    })
}

fn animated_scene(
    schedule: Schedule,
    prop: &Snapshot<'_>,
    default: &Snapshot<'_>,
    palette: &Palette,
) -> FlagResult<FlagScene> {
    let bands = prop
        .stripes
        .red_bands()
        .iter()
        .zip(default.stripes.red_bands())
        .map(|(p, d)| BandNode {
            y: Track::animated(p.top, d.top),
            height: Track::animated(p.height, d.height),
        })
        .collect();

    let canton = Track::between(
        Size::new(prop.canton.width, prop.canton.height),
        Size::new(default.canton.width, default.canton.height),
    );

    let grid = StarGrid::for_canton(&prop.canton);
    let default_grid = StarGrid::for_canton(&default.canton);
    let stars = (0..STAR_COUNT)
        .map(|rank| {
            let coord = star_position(rank)?;
            Ok(StarNode {
                rank,
                translate: Track::animated(
                    grid.center(coord).to_vec2(),
                    default_grid.center(coord).to_vec2(),
                ),
                scale: Track::animated(
                    grid.radius(prop.stars.scale(rank)),
                    default_grid.radius(default.stars.scale(rank)),
                ),
            })
        })
        .collect::<FlagResult<Vec<_>>>()?;

    Ok(FlagScene {
        schedule: Some(schedule),
        bands,
        canton,
        stars,
        palette: palette.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/resolve.rs"]
mod tests;
