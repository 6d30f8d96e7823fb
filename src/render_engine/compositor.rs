//! Places several logo viewports on one shared drawing surface.
//!
//! Each view owns a pixel rectangle in page coordinates (top-left origin).
//! Drawing is clipped per view with a scissor rectangle and pointer input is
//! routed to the view under the cursor.

use generational_arena::{Arena, Index};
use glam::{DVec2, IVec2, UVec2};

/// Pixel size of a view at scale 1, roughly a navbar icon.
pub const BASE_SIZE: f64 = 40.0;
pub const MAX_SCALE: f64 = 100.0;
/// Fraction of the viewport a view covers at scale 100.
pub const VIEWPORT_COVERAGE: f64 = 0.9;

/// Pixel extent for a 1..=100 scale along an axis of `viewport_extent` pixels.
pub fn size_for_scale(scale: f64, viewport_extent: u32) -> u32 {
    let scale = if scale.is_nan() { 1.0 } else { scale.clamp(1.0, MAX_SCALE) };
    let max_size = viewport_extent as f64 * VIEWPORT_COVERAGE;
    let size = BASE_SIZE + (max_size - BASE_SIZE) * (scale - 1.0) / (MAX_SCALE - 1.0);
    size.round().max(0.0) as u32
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct ViewId(pub Index);
impl From<ViewId> for Index {
    fn from(id: ViewId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: IVec2,
    pub size: UVec2,
}
impl Rect {
    pub fn new(origin: IVec2, size: UVec2) -> Self {
        Self { origin, size }
    }

    /// Exclusive far corner, saturating at the `i32` range.
    pub fn max(&self) -> IVec2 {
        let size = self.size.min(UVec2::splat(i32::MAX as u32)).as_ivec2();
        self.origin.saturating_add(size)
    }

    pub fn contains(&self, point: DVec2) -> bool {
        let min = self.origin.as_dvec2();
        let max = self.max().as_dvec2();
        point.x >= min.x && point.y >= min.y && point.x < max.x && point.y < max.y
    }

    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min = self.origin.max(other.origin);
        let max = self.max().min(other.max());
        if max.x <= min.x || max.y <= min.y {
            return None;
        }
        let size = UVec2::new(
            (max.x as i64 - min.x as i64) as u32,
            (max.y as i64 - min.y as i64) as u32,
        );
        Some(Rect::new(min, size))
    }

    /// Same rectangle with a bottom-left origin, as scissor state expects.
    pub fn to_gl_scissor(&self, surface_height: u32) -> Rect {
        let y = (surface_height.min(i32::MAX as u32) as i32).saturating_sub(self.max().y);
        Rect::new(IVec2::new(self.origin.x, y), self.size)
    }

    pub fn aspect(&self) -> f32 {
        if self.size.y == 0 {
            1.0
        } else {
            self.size.x as f32 / self.size.y as f32
        }
    }
}

/// One placed logo viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub origin: IVec2,
    /// Width and height scale, each 1..=100.
    pub scale: DVec2,
    pub size: UVec2,
}
impl View {
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin, self.size)
    }
}

pub struct Compositor {
    surface: UVec2,
    views: Arena<View>,
    /// Registration order, later views are on top.
    order: Vec<ViewId>,
}

impl Compositor {
    pub fn new(surface: UVec2) -> Self {
        Self {
            surface,
            views: Arena::new(),
            order: vec![],
        }
    }

    pub fn surface(&self) -> UVec2 {
        self.surface
    }

    fn size_of(&self, scale: DVec2) -> UVec2 {
        UVec2::new(
            size_for_scale(scale.x, self.surface.x),
            size_for_scale(scale.y, self.surface.y),
        )
    }

    pub fn register(&mut self, origin: IVec2, scale: DVec2) -> ViewId {
        let size = self.size_of(scale);
        let id = ViewId(self.views.insert(View { origin, scale, size }));
        self.order.push(id);
        log::debug!("registered view {id:?} at {origin} size {size}");
        id
    }

    /// Drops the view and its clip rectangle. Stale ids return false.
    pub fn unregister(&mut self, id: ViewId) -> bool {
        if self.views.remove(id.into()).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        true
    }

    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.get(id.into())
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn move_view(&mut self, id: ViewId, origin: IVec2) -> bool {
        match self.views.get_mut(id.into()) {
            Some(view) => {
                view.origin = origin;
                true
            }
            None => false,
        }
    }

    /// New surface size; every view's pixel size is recomputed.
    pub fn resize(&mut self, surface: UVec2) {
        self.surface = surface;
        for (_, view) in self.views.iter_mut() {
            view.size = UVec2::new(
                size_for_scale(view.scale.x, surface.x),
                size_for_scale(view.scale.y, surface.y),
            );
        }
    }

    /// The view's rectangle clipped to the surface; None when fully offscreen.
    pub fn scissor(&self, id: ViewId) -> Option<Rect> {
        let surface = Rect::new(IVec2::ZERO, self.surface);
        self.view(id)?.rect().intersect(&surface)
    }

    /// Visible views bottom to top.
    pub fn scissors(&self) -> Vec<(ViewId, Rect)> {
        self.order
            .iter()
            .filter_map(|id| self.scissor(*id).map(|rect| (*id, rect)))
            .collect()
    }

    /// Topmost view under `point`, with the point relative to the view origin.
    pub fn route_pointer(&self, point: DVec2) -> Option<(ViewId, DVec2)> {
        self.order.iter().rev().find_map(|id| {
            let rect = self.scissor(*id)?;
            if rect.contains(point) {
                let view = self.view(*id)?;
                Some((*id, point - view.origin.as_dvec2()))
            } else {
                None
            }
        })
    }
}
