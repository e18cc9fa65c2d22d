use glam::Vec3;
use round_geometry::{CornerRadii, RoundGeometry};

/// Battery gauge housing; the radius equals half the height, so the ends are
/// full semicircles.
pub const BATTERY_SIZE: (f32, f32) = (1.9, 0.2);
pub const BATTERY_RADIUS: f32 = 0.1;

/// Vehicle selector buttons: width, height, corner radius.
pub const BUTTON_SIZE: [f32; 3] = [0.9, 0.25, 0.02];
const BUTTON_MARGIN: f32 = 0.03;
const BUTTONS_PER_ROW: usize = 2;

/// The CPU gauge draws on a plain square plane.
pub const CPU_GAUGE_SIZE: f32 = 2.0;

/// A mesh the dashboard places in its scene.
#[derive(Clone, Debug)]
pub struct Panel {
    pub name: String,
    pub geometry: RoundGeometry,
    pub position: Vec3,
}

impl Panel {
    fn new(name: impl Into<String>, geometry: RoundGeometry, position: Vec3) -> Self {
        Self {
            name: name.into(),
            geometry,
            position,
        }
    }
}

/// Offset that puts a centered mesh's top-left corner at `origin`, slightly in
/// front of the backdrop.
fn top_left_anchor(origin: Vec3, width: f32, height: f32) -> Vec3 {
    origin + Vec3::new(width / 2.0, -height / 2.0, 0.001)
}

/// Every mesh of the telemetry dashboard with `vehicles` selector buttons.
pub fn dashboard_panels(vehicles: usize) -> Vec<Panel> {
    let mut panels = Vec::with_capacity(vehicles + 3);

    let (width, height) = BATTERY_SIZE;
    panels.push(Panel::new(
        "battery",
        RoundGeometry::new(width, height, BATTERY_RADIUS),
        Vec3::new(0.15, -0.8, 0.0),
    ));

    panels.push(Panel::new(
        "cpu",
        RoundGeometry::new(CPU_GAUGE_SIZE, CPU_GAUGE_SIZE, CornerRadii::zero()),
        Vec3::new(0.15, -2.0, 0.0),
    ));

    // Tab-like header: rounded on the left only
    panels.push(Panel::new(
        "header",
        RoundGeometry::new(2.0, 0.4, CornerRadii::new(0.12, 0.0)),
        Vec3::new(0.0, 2.4, 0.0),
    ));

    let [width, height, radius] = BUTTON_SIZE;
    let step_x = width + 2.0 * BUTTON_MARGIN;
    let step_y = height + 2.0 * BUTTON_MARGIN;
    for i in 0..vehicles {
        let origin = Vec3::new(
            -3.5 + (i % BUTTONS_PER_ROW) as f32 * step_x + BUTTON_MARGIN,
            3.0 - (i / BUTTONS_PER_ROW) as f32 * step_y - BUTTON_MARGIN,
            0.0,
        );
        panels.push(Panel::new(
            format!("vehicle-{i}"),
            RoundGeometry::new(width, height, radius),
            top_left_anchor(origin, width, height),
        ));
    }

    panels
}
