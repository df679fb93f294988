//! Orbit camera and perspective projection onto the canvas.

use std::f64::consts::FRAC_PI_2;

use crate::topology::Point3;

/// Tunables for the orbit camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
	/// Yaw added per second while idle; 0.003 rad per frame at 60 fps.
	pub auto_rotate: f64,
	/// Zoom clamp for the wheel.
	pub min_zoom: f64,
	/// See `min_zoom`.
	pub max_zoom: f64,
	/// Radians of orbit per pixel dragged.
	pub orbit_speed: f64,
}

impl Default for CameraSettings {
	fn default() -> Self {
		Self {
			auto_rotate: 0.18,
			min_zoom: 0.1,
			max_zoom: 10.0,
			orbit_speed: 0.01,
		}
	}
}

const MIN_DISTANCE: f64 = 5.0;
const NEAR_PLANE: f64 = 0.1;
// keep the camera off the poles
const MAX_PITCH: f64 = FRAC_PI_2 - 0.05;

/// A point after projection, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	/// Canvas x.
	pub x: f64,
	/// Canvas y, growing downwards.
	pub y: f64,
	/// Distance from the camera along the view axis; larger is farther.
	pub depth: f64,
	/// Pixels per world unit at this depth.
	pub scale: f64,
}

/// Eye circling the origin, looking at it.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
	/// Rotation about the vertical axis.
	pub yaw: f64,
	/// Elevation; kept off the poles.
	pub pitch: f64,
	/// Screen-space magnification.
	pub zoom: f64,
	/// Eye distance from the origin.
	pub distance: f64,
	/// Screen-space offset in pixels.
	pub pan_x: f64,
	/// See `pan_x`.
	pub pan_y: f64,
	/// Speeds and zoom limits.
	pub settings: CameraSettings,
}

impl Default for OrbitCamera {
	fn default() -> Self {
		Self {
			yaw: 0.0,
			pitch: 0.35,
			zoom: 1.0,
			distance: MIN_DISTANCE,
			pan_x: 0.0,
			pan_y: 0.0,
			settings: CameraSettings::default(),
		}
	}
}

impl OrbitCamera {
	/// Move the eye far enough back to see a scene of the given radius.
	pub fn frame(&mut self, radius: f64) {
		self.distance = (radius * 2.5).max(MIN_DISTANCE);
	}

	/// Turn by a drag of `(dx, dy)` pixels.
	pub fn orbit(&mut self, dx: f64, dy: f64) {
		self.yaw += dx * self.settings.orbit_speed;
		self.pitch = (self.pitch + dy * self.settings.orbit_speed).clamp(-MAX_PITCH, MAX_PITCH);
	}

	/// Multiply the zoom by `factor` while keeping the canvas point
	/// `(cx, cy)` fixed, relative to the canvas centre.
	pub fn zoom_at(&mut self, factor: f64, cx: f64, cy: f64) {
		let zoom = (self.zoom * factor).clamp(self.settings.min_zoom, self.settings.max_zoom);
		let ratio = zoom / self.zoom;
		self.pan_x = cx - (cx - self.pan_x) * ratio;
		self.pan_y = cy - (cy - self.pan_y) * ratio;
		self.zoom = zoom;
	}

	/// Idle rotation over `dt` seconds.
	pub fn advance(&mut self, dt: f64) {
		self.yaw += self.settings.auto_rotate * dt;
	}

	/// Project `p` onto a canvas of the given size. Points behind the near
	/// plane are not visible.
	pub fn project(&self, p: Point3, width: f64, height: f64) -> Option<Projected> {
		let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
		let x = p.x * cos_yaw - p.z * sin_yaw;
		let z = p.x * sin_yaw + p.z * cos_yaw;

		let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
		let y = p.y * cos_pitch - z * sin_pitch;
		let z = p.y * sin_pitch + z * cos_pitch;

		let depth = self.distance - z;
		if depth < NEAR_PLANE {
			return None;
		}
		let focal = width.min(height) * self.zoom;
		let scale = focal / depth;
		Some(Projected {
			x: width / 2.0 + self.pan_x + x * scale,
			y: height / 2.0 + self.pan_y - y * scale,
			depth,
			scale,
		})
	}
}
