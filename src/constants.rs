// Rendering and page-wiring constants used by the web frontend.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const BACKGROUND_URL: &str = "assets/background.jpg";

// Clear colour when no background texture is available
pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.04, 0.08];

// Object materials (linear RGB)
pub const CUBE_COLOR: [f32; 3] = [0.9, 0.3, 0.3];
pub const TORUS_COLOR: [f32; 3] = [1.0, 0.39, 0.28];

// Mesh sizing
pub const CUBE_SIZE: f32 = 2.0; // edge length
pub const TORUS_RADIUS: f32 = 10.0; // centre of tube to centre of torus
pub const TORUS_TUBE: f32 = 3.0; // tube radius
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;

// Lighting
pub const LIGHT_DIRECTION: [f32; 3] = [0.4, 0.8, 0.6]; // towards the light, normalized in the shader
pub const AMBIENT_LIGHT: f32 = 0.25;
