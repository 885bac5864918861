//! Paint settings snapshot and its key-value storage.
//!
//! The host reads a [`PaintSettings`] once per apply and hands it to the
//! engine by reference. Between sessions the same values live in a
//! [`SettingsStore`], keyed by the `KEY_*` constants below. Enumerations are
//! stored as 1-based integer codes and colors as an RGB triple plus a
//! separate alpha.

use std::collections::HashMap;

use crate::{
    data_structures::{bounds::Axis, color::Color},
    error::SettingsError,
};

pub const KEY_PAINT_MODE: &str = "paint_mode";
pub const KEY_BLEND_MODE: &str = "blend_mode";
pub const KEY_COLOR_MAIN: &str = "color_main";
pub const KEY_ALPHA_MAIN: &str = "alpha_main";
pub const KEY_COLOR_SUB: &str = "color_sub";
pub const KEY_ALPHA_SUB: &str = "alpha_sub";
pub const KEY_GRADIENT_BOUNDS: &str = "gradient_bounds";
pub const KEY_GRADIENT_AXIS: &str = "gradient_axis";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PaintMode {
    /// Every target vertex receives the main color.
    #[default]
    Standard,
    /// Main and sub colors are interpolated across the gradient frame.
    Gradient,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Replace,
    Add,
    Multiply,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GradientBounds {
    /// The mesh's axis-aligned bounding box along the gradient axis.
    #[default]
    MeshBounds,
    /// The segment between two selected vertices.
    PointToPoint,
}

/// Conversion to and from the integer codes used in the settings store.
pub trait SettingCode: Sized + Copy {
    const KEY: &'static str;

    fn code(self) -> i32;

    fn from_code(code: i32) -> Option<Self>;
}

impl SettingCode for PaintMode {
    const KEY: &'static str = KEY_PAINT_MODE;

    fn code(self) -> i32 {
        match self {
            PaintMode::Standard => 1,
            PaintMode::Gradient => 2,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(PaintMode::Standard),
            2 => Some(PaintMode::Gradient),
            _ => None,
        }
    }
}

impl SettingCode for BlendMode {
    const KEY: &'static str = KEY_BLEND_MODE;

    fn code(self) -> i32 {
        match self {
            BlendMode::Replace => 1,
            BlendMode::Add => 2,
            BlendMode::Multiply => 3,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(BlendMode::Replace),
            2 => Some(BlendMode::Add),
            3 => Some(BlendMode::Multiply),
            _ => None,
        }
    }
}

impl SettingCode for GradientBounds {
    const KEY: &'static str = KEY_GRADIENT_BOUNDS;

    fn code(self) -> i32 {
        match self {
            GradientBounds::MeshBounds => 1,
            GradientBounds::PointToPoint => 2,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(GradientBounds::MeshBounds),
            2 => Some(GradientBounds::PointToPoint),
            _ => None,
        }
    }
}

impl SettingCode for Axis {
    const KEY: &'static str = KEY_GRADIENT_AXIS;

    fn code(self) -> i32 {
        match self {
            Axis::X => 1,
            Axis::Y => 2,
            Axis::Z => 3,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Axis::X),
            2 => Some(Axis::Y),
            3 => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Immutable settings for one apply.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaintSettings {
    pub mode: PaintMode,
    pub blend: BlendMode,
    pub main: Color,
    pub sub: Color,
    pub bounds: GradientBounds,
    pub axis: Axis,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            mode: PaintMode::Standard,
            blend: BlendMode::Replace,
            main: Color::white(),
            sub: Color::white(),
            bounds: GradientBounds::MeshBounds,
            axis: Axis::X,
        }
    }
}

impl PaintSettings {
    pub fn standard(main: Color, blend: BlendMode) -> Self {
        Self {
            mode: PaintMode::Standard,
            blend,
            main,
            ..Default::default()
        }
    }

    pub fn gradient(main: Color, sub: Color, bounds: GradientBounds, axis: Axis) -> Self {
        Self {
            mode: PaintMode::Gradient,
            main,
            sub,
            bounds,
            axis,
            ..Default::default()
        }
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Exchanges the main and sub colors, alpha included.
    pub fn swap_colors(mut self) -> Self {
        std::mem::swap(&mut self.main, &mut self.sub);
        self
    }

    /// Reads a snapshot from `store`. Missing keys fall back to their default.
    ///
    /// Colors with a NaN or infinite channel are rejected.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let main = read_color(store, KEY_COLOR_MAIN, KEY_ALPHA_MAIN, defaults.main)?;
        let sub = read_color(store, KEY_COLOR_SUB, KEY_ALPHA_SUB, defaults.sub)?;

        Ok(Self {
            mode: read_code(store)?.unwrap_or(defaults.mode),
            blend: read_code(store)?.unwrap_or(defaults.blend),
            main,
            sub,
            bounds: read_code(store)?.unwrap_or(defaults.bounds),
            axis: read_code(store)?.unwrap_or(defaults.axis),
        })
    }

    /// Writes every field of the snapshot into `store`.
    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        for (key, value) in self.entries() {
            store.set(key, value);
        }
    }

    fn entries(&self) -> [(&'static str, SettingValue); 8] {
        [
            (PaintMode::KEY, SettingValue::Int(self.mode.code())),
            (BlendMode::KEY, SettingValue::Int(self.blend.code())),
            (KEY_COLOR_MAIN, SettingValue::Rgb(self.main.rgb())),
            (KEY_ALPHA_MAIN, SettingValue::Float(self.main.a)),
            (KEY_COLOR_SUB, SettingValue::Rgb(self.sub.rgb())),
            (KEY_ALPHA_SUB, SettingValue::Float(self.sub.a)),
            (GradientBounds::KEY, SettingValue::Int(self.bounds.code())),
            (Axis::KEY, SettingValue::Int(self.axis.code())),
        ]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SettingValue {
    Int(i32),
    Float(f32),
    Rgb([f32; 3]),
}

/// Opaque key-value store the host persists settings in.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<SettingValue>;

    fn set(&mut self, key: &str, value: SettingValue);

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, SettingValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Writes the default for every key the store does not have yet.
///
/// Existing values are left alone, so this is safe to call on every startup.
pub fn ensure_defaults<S: SettingsStore + ?Sized>(store: &mut S) {
    for (key, value) in PaintSettings::default().entries() {
        if !store.contains(key) {
            log::debug!("initializing setting `{key}`");
            store.set(key, value);
        }
    }
}

/// Overwrites every key with its default.
pub fn reset<S: SettingsStore + ?Sized>(store: &mut S) {
    PaintSettings::default().save(store);
    log::info!("paint settings reset to defaults");
}

/// Swaps the stored main and sub colors. Every other key is left as it is.
pub fn swap_colors<S: SettingsStore + ?Sized>(store: &mut S) -> Result<(), SettingsError> {
    let settings = PaintSettings::load(store)?.swap_colors();
    store.set(KEY_COLOR_MAIN, SettingValue::Rgb(settings.main.rgb()));
    store.set(KEY_ALPHA_MAIN, SettingValue::Float(settings.main.a));
    store.set(KEY_COLOR_SUB, SettingValue::Rgb(settings.sub.rgb()));
    store.set(KEY_ALPHA_SUB, SettingValue::Float(settings.sub.a));
    log::debug!("swapped main and sub colors");
    Ok(())
}

fn read_code<T: SettingCode, S: SettingsStore + ?Sized>(store: &S) -> Result<Option<T>, SettingsError> {
    match store.get(T::KEY) {
        None => Ok(None),
        Some(SettingValue::Int(code)) => T::from_code(code)
            .map(Some)
            .ok_or(SettingsError::UnknownCode { key: T::KEY, code }),
        Some(_) => Err(SettingsError::WrongType {
            key: T::KEY,
            expected: "integer code",
        }),
    }
}

fn read_float<S: SettingsStore + ?Sized>(store: &S, key: &'static str) -> Result<Option<f32>, SettingsError> {
    match store.get(key) {
        None => Ok(None),
        Some(SettingValue::Float(v)) => Ok(Some(v)),
        // Hosts commonly store whole-number floats as integers.
        Some(SettingValue::Int(v)) => Ok(Some(v as f32)),
        Some(_) => Err(SettingsError::WrongType { key, expected: "float" }),
    }
}

fn read_rgb<S: SettingsStore + ?Sized>(store: &S, key: &'static str) -> Result<Option<[f32; 3]>, SettingsError> {
    match store.get(key) {
        None => Ok(None),
        Some(SettingValue::Rgb(rgb)) => Ok(Some(rgb)),
        Some(_) => Err(SettingsError::WrongType { key, expected: "rgb triple" }),
    }
}

fn read_color<S: SettingsStore + ?Sized>(
    store: &S,
    rgb_key: &'static str,
    alpha_key: &'static str,
    default: Color,
) -> Result<Color, SettingsError> {
    let rgb = read_rgb(store, rgb_key)?.unwrap_or(default.rgb());
    let alpha = read_float(store, alpha_key)?.unwrap_or(default.a);
    let color = Color::from_rgb_alpha(rgb, alpha);
    if !color.is_finite() {
        let key = if rgb.iter().all(|c| c.is_finite()) { alpha_key } else { rgb_key };
        return Err(SettingsError::NonFinite { key });
    }
    Ok(color)
}
