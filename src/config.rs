use std::path::PathBuf;

use glam::Vec4;

/// Output image format. The host's encoder owns the actual file writing;
/// this only selects which settings block gets applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    #[allow(dead_code)]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

/// One viewing angle to render, named after the output subfolder it fills.
#[derive(Debug, Clone)]
pub struct Direction {
    pub name: String,
    pub rotation_y_degrees: f32,
}

impl Direction {
    pub fn new(name: &str, rotation_y_degrees: f32) -> Self {
        Self {
            name: name.to_string(),
            rotation_y_degrees,
        }
    }
}

/// The whole configuration block for one export run.
///
/// `model_name: None` means "find the only mesh in the scene"; naming a model
/// that does not exist is an error rather than a silent fallback.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_folder: PathBuf,
    /// Width and height in pixels. Powers of two pack best into sheets.
    pub sprite_size: u32,
    pub frame_rate: u32,
    pub background_color: Vec4,
    pub camera_distance: f32,
    /// Camera pitch in degrees: 90 = side view, 0 = top-down.
    pub camera_angle_degrees: f32,
    pub model_name: Option<String>,
    pub format: ExportFormat,
    pub export_animations: bool,
    pub export_static: bool,
    pub animation_start_frame: i32,
    /// `None` means use the scene's end frame.
    pub animation_end_frame: Option<i32>,
    pub directions: Vec<Direction>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("sprites_export"),
            sprite_size: 512,
            frame_rate: 10,
            background_color: Vec4::ZERO,
            camera_distance: 5.0,
            camera_angle_degrees: 90.0,
            model_name: None,
            format: ExportFormat::Png,
            export_animations: true,
            export_static: false,
            animation_start_frame: 1,
            animation_end_frame: None,
            directions: vec![
                Direction::new("left", 90.0),
                Direction::new("right", -90.0),
                Direction::new("front", 0.0),
                Direction::new("back", 180.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directions_cover_four_sides() {
        let config = ExportConfig::default();
        let names: Vec<&str> = config.directions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["left", "right", "front", "back"]);
    }

    #[test]
    fn default_format_is_transparent_png() {
        let config = ExportConfig::default();
        assert_eq!(config.format, ExportFormat::Png);
        assert_eq!(config.background_color.w, 0.0);
        assert_eq!(config.format.extension(), "png");
    }
}
