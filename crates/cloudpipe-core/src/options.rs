//! Upload options model
//!
//! The options record translated onto the Cloudinary upload call. One required
//! field (the target folder); everything else is optional and, when unset, is
//! omitted from the remote call entirely so the provider applies its own
//! defaults. No cross-field invariants are enforced locally - Cloudinary
//! rejects unsupported combinations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Remote resource kind. Selects the upload endpoint path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Image,
    Video,
    Raw,
    Auto,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
            ResourceType::Auto => "auto",
        }
    }
}

/// Crop strategy applied by the provider's transformation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropMode {
    Scale,
    Fit,
    Limit,
    Mfit,
    Fill,
    Pad,
    Lpad,
    Mpad,
    Crop,
    Thumb,
}

impl CropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropMode::Scale => "scale",
            CropMode::Fit => "fit",
            CropMode::Limit => "limit",
            CropMode::Mfit => "mfit",
            CropMode::Fill => "fill",
            CropMode::Pad => "pad",
            CropMode::Lpad => "lpad",
            CropMode::Mpad => "mpad",
            CropMode::Crop => "crop",
            CropMode::Thumb => "thumb",
        }
    }
}

/// Gravity / anchor point for cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    North,
    NorthEast,
    NorthWest,
    South,
    SouthEast,
    SouthWest,
    East,
    West,
    Center,
    Face,
    Faces,
}

impl Gravity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gravity::North => "north",
            Gravity::NorthEast => "north_east",
            Gravity::NorthWest => "north_west",
            Gravity::South => "south",
            Gravity::SouthEast => "south_east",
            Gravity::SouthWest => "south_west",
            Gravity::East => "east",
            Gravity::West => "west",
            Gravity::Center => "center",
            Gravity::Face => "face",
            Gravity::Faces => "faces",
        }
    }
}

/// Named visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Sepia,
    Grayscale,
    Blackwhite,
    Sharpen,
    Blur,
    OilPaint,
    Pixelate,
    Vignette,
    BrightnessContrast,
    AutoBrightness,
    AutoColor,
    AutoContrast,
    Improve,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Sepia => "sepia",
            Effect::Grayscale => "grayscale",
            Effect::Blackwhite => "blackwhite",
            Effect::Sharpen => "sharpen",
            Effect::Blur => "blur",
            Effect::OilPaint => "oil_paint",
            Effect::Pixelate => "pixelate",
            Effect::Vignette => "vignette",
            Effect::BrightnessContrast => "brightness_contrast",
            Effect::AutoBrightness => "auto_brightness",
            Effect::AutoColor => "auto_color",
            Effect::AutoContrast => "auto_contrast",
            Effect::Improve => "improve",
        }
    }
}

/// Corner radius: a pixel count, the `max`/`min` keywords, or a raw provider
/// expression such as a percentage (`"20%"`).
#[derive(Debug, Clone, PartialEq)]
pub enum Radius {
    Max,
    Min,
    Pixels(u32),
    Expression(String),
}

impl Radius {
    /// Wire representation sent to the provider.
    pub fn as_param(&self) -> String {
        match self {
            Radius::Max => "max".to_string(),
            Radius::Min => "min".to_string(),
            Radius::Pixels(px) => px.to_string(),
            Radius::Expression(expr) => expr.clone(),
        }
    }
}

impl From<&str> for Radius {
    fn from(s: &str) -> Self {
        match s {
            "max" => Radius::Max,
            "min" => Radius::Min,
            other => match other.parse::<u32>() {
                Ok(px) => Radius::Pixels(px),
                Err(_) => Radius::Expression(other.to_string()),
            },
        }
    }
}

impl FromStr for Radius {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Radius::from(s))
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_param())
    }
}

impl Serialize for Radius {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_param())
    }
}

impl<'de> Deserialize<'de> for Radius {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Every string maps to some radius form.
        let s = String::deserialize(deserializer)?;
        Ok(Radius::from(s.as_str()))
    }
}

/// Options controlling one upload to the remote provider.
///
/// Deserializable directly from the upload endpoint's query string. Only
/// `folder` is required; `delete_local_file` controls whether the staged local
/// copy is removed after a successful remote upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOptions {
    pub folder: String,
    pub resource_type: Option<ResourceType>,
    pub format: Option<String>,
    pub crop: Option<CropMode>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub aspect_ratio: Option<String>,
    pub gravity: Option<Gravity>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub zoom: Option<f32>,
    pub effect: Option<Effect>,
    pub radius: Option<Radius>,
    pub angle: Option<i32>,
    #[serde(default)]
    pub delete_local_file: bool,
}

impl UploadOptions {
    /// Options with the given target folder and everything else unset.
    pub fn new(folder: impl Into<String>) -> Self {
        UploadOptions {
            folder: folder.into(),
            resource_type: None,
            format: None,
            crop: None,
            width: None,
            height: None,
            aspect_ratio: None,
            gravity: None,
            x: None,
            y: None,
            zoom: None,
            effect: None,
            radius: None,
            angle: None,
            delete_local_file: false,
        }
    }
}
