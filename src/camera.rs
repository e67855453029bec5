use glam::DVec2;

/// Factor applied to the zoom by a single scroll notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Smallest on-screen radius, relative to the zoom, a body is drawn with.
pub const MIN_VISIBLE_RADIUS: f64 = 0.0113382;

/// Pan offset and zoom factor a renderer uses to map the world onto its window.
///
/// World space is Cartesian with `y` pointing up. Screen space is in pixels with the origin at
/// the top-left corner and `y` pointing down. The centre of the screen shows the world point
/// [`offset`](Camera::offset).
///
/// The camera never affects the simulation: it only converts coordinates and radii for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Size of the screen in pixels.
    pub screen: DVec2,
    /// World point shown at the centre of the screen.
    pub offset: DVec2,
    zoom: f64,
    drag_anchor: Option<DVec2>,
}

impl Camera {
    /// Creates a new [`Camera`] centred on the world origin with a zoom of 1.
    pub fn new(screen: DVec2) -> Self {
        Self {
            screen,
            offset: DVec2::ZERO,
            zoom: 1.0,
            drag_anchor: None,
        }
    }

    /// Pixels per world unit.
    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Converts a world position to screen pixels.
    #[inline]
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        let relative = (world - self.offset) * self.zoom;
        DVec2::new(
            self.screen.x / 2.0 + relative.x,
            self.screen.y / 2.0 - relative.y,
        )
    }

    /// Converts screen pixels to a world position.
    #[inline]
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        let relative = DVec2::new(
            screen.x - self.screen.x / 2.0,
            self.screen.y / 2.0 - screen.y,
        );
        self.offset + relative / self.zoom
    }

    /// Magnifies the view by [`ZOOM_STEP`].
    pub fn zoom_in(&mut self) {
        self.zoom *= ZOOM_STEP;
    }

    /// Shrinks the view by [`ZOOM_STEP`].
    pub fn zoom_out(&mut self) {
        self.zoom /= ZOOM_STEP;
    }

    /// Zooms in for a positive scroll delta and out for a negative one.
    pub fn zoom_by_scroll(&mut self, delta: f64) {
        if delta > 0.0 {
            self.zoom_in();
        } else if delta < 0.0 {
            self.zoom_out();
        }
    }

    /// Starts panning with the cursor at `screen`.
    pub fn begin_drag(&mut self, screen: DVec2) {
        self.drag_anchor = Some(self.screen_to_world(screen));
    }

    /// Pans so the world point grabbed by [`begin_drag`](Camera::begin_drag) stays under the cursor.
    ///
    /// Does nothing if no drag is in progress.
    pub fn drag_to(&mut self, screen: DVec2) {
        if let Some(anchor) = self.drag_anchor {
            self.offset += anchor - self.screen_to_world(screen);
        }
    }

    /// Stops panning.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Returns true while a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// World-space radius to draw a body with so it stays visible at low zoom.
    #[inline]
    pub fn display_radius(&self, radius: f64) -> f64 {
        radius.max(MIN_VISIBLE_RADIUS * 50.0 / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn camera() -> Camera {
        Camera::new(DVec2::new(1000.0, 1000.0))
    }

    #[test]
    fn origin_is_screen_centre() {
        let camera = camera();

        assert_eq!(camera.world_to_screen(DVec2::ZERO), DVec2::new(500.0, 500.0));
        // y up in the world is y down on screen.
        assert_eq!(camera.world_to_screen(DVec2::new(10.0, 10.0)), DVec2::new(510.0, 490.0));
    }

    #[test]
    fn conversions_are_inverse() {
        let mut camera = camera();
        camera.offset = DVec2::new(-250.0, 1e4);
        camera.zoom_out();
        camera.zoom_out();

        let world = DVec2::new(123.5, -98.25);
        let back = camera.screen_to_world(camera.world_to_screen(world));

        assert!((back - world).length() < EPSILON);
    }

    #[test]
    fn scroll_direction() {
        let mut camera = camera();

        camera.zoom_by_scroll(1.0);
        assert!((camera.zoom() - ZOOM_STEP).abs() < EPSILON);

        camera.zoom_by_scroll(-1.0);
        camera.zoom_by_scroll(-1.0);
        assert!((camera.zoom() - 1.0 / ZOOM_STEP).abs() < EPSILON);

        camera.zoom_by_scroll(0.0);
        assert!((camera.zoom() - 1.0 / ZOOM_STEP).abs() < EPSILON);
    }

    #[test]
    fn drag_keeps_grabbed_point_under_cursor() {
        let mut camera = camera();
        camera.zoom_in();

        let start = DVec2::new(100.0, 200.0);
        let grabbed = camera.screen_to_world(start);

        camera.begin_drag(start);
        assert!(camera.is_dragging());

        let end = DVec2::new(640.0, 80.0);
        camera.drag_to(end);
        camera.end_drag();

        assert!((camera.screen_to_world(end) - grabbed).length() < EPSILON);

        let offset = camera.offset;
        camera.drag_to(DVec2::ZERO);
        assert_eq!(camera.offset, offset);
    }

    #[test]
    fn display_radius_grows_when_zoomed_out() {
        let mut camera = camera();
        assert_eq!(camera.display_radius(100.0), 100.0);

        for _ in 0..100 {
            camera.zoom_out();
        }

        let radius = camera.display_radius(100.0);
        assert!(radius > 100.0);
        assert!((radius - MIN_VISIBLE_RADIUS * 50.0 / camera.zoom()).abs() < EPSILON);
    }
}
