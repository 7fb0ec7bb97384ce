//! Closed value sets used by generation payloads.
//!
//! Every enum carries an `Unknown` catch-all so a value introduced by the
//! service later still decodes. `Unknown` cannot be sent: serializing it is
//! an encoding error.

use serde::{Deserialize, Serialize};

/// Style preset applied to a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PresetStyle {
    #[serde(rename = "NONE")]
    NoStyle,
    /// Requires alchemy off.
    Leonardo,
    // Alchemy presets.
    Anime,
    Creative,
    Dynamic,
    Environment,
    General,
    Illustration,
    Photography,
    Raytraced,
    #[serde(rename = "RENDER_3D")]
    Render3D,
    SketchBw,
    SketchColor,
    // PhotoReal presets.
    StockPhoto,
    Vibrant,
    Unprocessed,
    Bokeh,
    Cinematic,
    CinematicCloseup,
    Fashion,
    Film,
    Food,
    Hdr,
    LongExposure,
    Macro,
    Minimalistic,
    Monochrome,
    Moody,
    Neutral,
    Portrait,
    Retro,
    #[serde(other, skip_serializing)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scheduler {
    Klms,
    EulerAncestralDiscrete,
    EulerDiscrete,
    Ddim,
    DpmSolver,
    Pndm,
    Leonardo,
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Base model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SdVersion {
    #[serde(rename = "v1_5")]
    V1_5,
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v3")]
    V3,
    #[serde(rename = "SDXL_0_8")]
    Sdxl0_8,
    #[serde(rename = "SDXL_0_9")]
    Sdxl0_9,
    #[serde(rename = "SDXL_1_0")]
    Sdxl1_0,
    #[serde(rename = "SDXL_LIGHTNING")]
    SdxlLightning,
    #[serde(other, skip_serializing)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CanvasRequestType {
    #[serde(rename = "INPAINT")]
    Inpaint,
    #[serde(rename = "OUTPAINT")]
    Outpaint,
    #[serde(rename = "SKETCH2IMG")]
    Sketch2Img,
    #[serde(rename = "IMG2IMG")]
    Img2Img,
    #[serde(other, skip_serializing)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationStatus {
    Pending,
    Complete,
    Failed,
    #[serde(other, skip_serializing)]
    Unknown,
}

impl GenerationStatus {
    /// COMPLETE or FAILED; the job won't change anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

/// Kind of post-processing applied to a generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransformType {
    Outpaint,
    Inpaint,
    Upscale,
    Unzoom,
    #[serde(rename = "NOBG")]
    NoBackground,
    #[serde(other, skip_serializing)]
    Unknown,
}
