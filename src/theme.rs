//! Theme support for the admin dashboard.
//!
//! A theme is resolved from two keys: the color mode (light or dark) and a named
//! variant. Every variant carries a light and a dark palette in a static table,
//! and [`ThemeContext`] owns the active pair together with its resolved palette.
//! The context is created once by the application root and handed down by
//! reference; there is no global theme.
//!
//! # Examples
//!
//! ```
//! use radmin::theme::{ThemeContext, ThemeMode, ThemeVariant};
//!
//! let mut theme = ThemeContext::new();
//! theme.set_variant(ThemeVariant::Ocean);
//! theme.toggle_mode();
//! assert_eq!(theme.mode(), ThemeMode::Dark);
//! assert_eq!(theme.variant(), ThemeVariant::Ocean);
//! ```

use egui::Color32;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Light or dark color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}

/// Named color preset. The set is closed; strings only enter through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    #[default]
    Default,
    Modern,
    Elegant,
    Nature,
    Ocean,
    Sunset,
    Tech,
    Minimal,
    Vibrant,
    Corporate,
    Cosmic,
    Forest,
    Candy,
    Midnight,
    Sunrise,
    Neon,
    Royal,
    Autumn,
    Winter,
    Spring,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 20] = [
        ThemeVariant::Default,
        ThemeVariant::Modern,
        ThemeVariant::Elegant,
        ThemeVariant::Nature,
        ThemeVariant::Ocean,
        ThemeVariant::Sunset,
        ThemeVariant::Tech,
        ThemeVariant::Minimal,
        ThemeVariant::Vibrant,
        ThemeVariant::Corporate,
        ThemeVariant::Cosmic,
        ThemeVariant::Forest,
        ThemeVariant::Candy,
        ThemeVariant::Midnight,
        ThemeVariant::Sunrise,
        ThemeVariant::Neon,
        ThemeVariant::Royal,
        ThemeVariant::Autumn,
        ThemeVariant::Winter,
        ThemeVariant::Spring,
    ];

    /// Lower-case key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            ThemeVariant::Default => "default",
            ThemeVariant::Modern => "modern",
            ThemeVariant::Elegant => "elegant",
            ThemeVariant::Nature => "nature",
            ThemeVariant::Ocean => "ocean",
            ThemeVariant::Sunset => "sunset",
            ThemeVariant::Tech => "tech",
            ThemeVariant::Minimal => "minimal",
            ThemeVariant::Vibrant => "vibrant",
            ThemeVariant::Corporate => "corporate",
            ThemeVariant::Cosmic => "cosmic",
            ThemeVariant::Forest => "forest",
            ThemeVariant::Candy => "candy",
            ThemeVariant::Midnight => "midnight",
            ThemeVariant::Sunrise => "sunrise",
            ThemeVariant::Neon => "neon",
            ThemeVariant::Royal => "royal",
            ThemeVariant::Autumn => "autumn",
            ThemeVariant::Winter => "winter",
            ThemeVariant::Spring => "spring",
        }
    }

    /// Display label with the first letter capitalized ("Ocean").
    pub fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ThemeVariant::ALL
            .iter()
            .copied()
            .find(|v| v.key() == wanted)
            .ok_or_else(|| ThemeError::UnknownVariant(s.to_string()))
    }
}

/// Errors raised when theme names are parsed from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme variant '{0}'")]
    UnknownVariant(String),
    #[error("unknown color mode '{0}' (expected 'light' or 'dark')")]
    UnknownMode(String),
}

/// Background of cards and dialogs: a flat color or a two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paper {
    Solid(Color32),
    /// CSS-style gradient; `angle_deg` 0 points up, 90 points right.
    Gradient {
        angle_deg: f32,
        from: Color32,
        to: Color32,
    },
}

impl Paper {
    /// Flat color for widgets that cannot paint a gradient.
    pub fn base(&self) -> Color32 {
        match *self {
            Paper::Solid(color) => color,
            Paper::Gradient { from, .. } => from,
        }
    }

    /// Fills `rect` with this paper.
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.add(self.shape(rect, 8));
    }

    /// Shape filling `rect`; gradients become a colored mesh.
    pub fn shape(&self, rect: egui::Rect, corner_radius: u8) -> egui::Shape {
        match *self {
            Paper::Solid(color) => {
                egui::Shape::rect_filled(rect, egui::CornerRadius::same(corner_radius), color)
            }
            Paper::Gradient { angle_deg, from, to } => {
                let radians = angle_deg.to_radians();
                let dir = egui::vec2(radians.sin(), -radians.cos());
                let corners = [
                    rect.left_top(),
                    rect.right_top(),
                    rect.right_bottom(),
                    rect.left_bottom(),
                ];
                let center = rect.center();
                let reach = corners
                    .iter()
                    .map(|c| (*c - center).dot(dir).abs())
                    .fold(f32::EPSILON, f32::max);

                let mut mesh = egui::Mesh::default();
                for corner in corners {
                    let t = 0.5 + (corner - center).dot(dir) / (2.0 * reach);
                    mesh.colored_vertex(corner, lerp_color(from, to, t));
                }
                mesh.add_triangle(0, 1, 2);
                mesh.add_triangle(0, 2, 3);
                egui::Shape::mesh(mesh)
            }
        }
    }
}

/// Fully resolved colors for one (mode, variant) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub mode: ThemeMode,

    // Brand colors
    pub primary: Color32,
    pub primary_dark: Color32,
    pub primary_light: Color32,
    pub secondary: Color32,

    // Surfaces
    pub background: Color32,
    pub paper: Paper,
    /// Input fields and toolbars (white in light mode, #2d2d2d in dark)
    pub surface: Color32,
    /// Dialog title and action bars
    pub surface_header: Color32,
    pub divider: Color32,

    // Text
    pub text: Color32,
    pub text_secondary: Color32,

    // Status colors
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub success: Color32,
}

enum PaperSpec {
    Solid(&'static str),
    Gradient(f32, &'static str, &'static str),
}

struct Swatch {
    primary: &'static str,
    secondary: &'static str,
    background: &'static str,
    paper: PaperSpec,
}

/// Static (light, dark) swatches per variant.
fn swatches(variant: ThemeVariant) -> (Swatch, Swatch) {
    use PaperSpec::{Gradient, Solid};

    let sw = |primary, secondary, background, paper| Swatch {
        primary,
        secondary,
        background,
        paper,
    };

    match variant {
        ThemeVariant::Default => (
            sw("#1976d2", "#9c27b0", "#f5f5f5", Solid("#ffffff")),
            sw("#90caf9", "#ce93d8", "#121212", Solid("#1e1e1e")),
        ),
        ThemeVariant::Modern => (
            sw("#2196f3", "#ff4081", "#f8f9fa", Solid("#ffffff")),
            sw("#64b5f6", "#ff80ab", "#18191a", Solid("#242526")),
        ),
        ThemeVariant::Elegant => (
            sw("#5c6bc0", "#8e24aa", "#f5f6fa", Solid("#ffffff")),
            sw("#7986cb", "#ab47bc", "#1a1b1e", Solid("#2f3136")),
        ),
        ThemeVariant::Nature => (
            sw("#43a047", "#ff9800", "#f1f8e9", Solid("#ffffff")),
            sw("#66bb6a", "#ffa726", "#1b2419", Solid("#2a3626")),
        ),
        ThemeVariant::Ocean => (
            sw("#0288d1", "#00acc1", "#e3f2fd", Solid("#ffffff")),
            sw("#29b6f6", "#26c6da", "#102027", Solid("#1c313a")),
        ),
        ThemeVariant::Sunset => (
            sw("#f57c00", "#d81b60", "#fff3e0", Solid("#ffffff")),
            sw("#ff9800", "#ec407a", "#2d1c15", Solid("#3e2723")),
        ),
        ThemeVariant::Tech => (
            sw("#3949ab", "#00897b", "#e8eaf6", Solid("#ffffff")),
            sw("#5c6bc0", "#26a69a", "#1a237e", Solid("#283593")),
        ),
        ThemeVariant::Minimal => (
            sw("#546e7a", "#78909c", "#eceff1", Solid("#ffffff")),
            sw("#78909c", "#90a4ae", "#263238", Solid("#37474f")),
        ),
        ThemeVariant::Vibrant => (
            sw("#6200ea", "#00bfa5", "#f3e5f5", Solid("#ffffff")),
            sw("#7c4dff", "#1de9b6", "#1a0033", Solid("#2b0049")),
        ),
        ThemeVariant::Corporate => (
            sw("#1565c0", "#283593", "#f5f5f5", Solid("#ffffff")),
            sw("#42a5f5", "#5c6bc0", "#0d1b2a", Solid("#1b2b3a")),
        ),
        ThemeVariant::Cosmic => (
            sw("#6b3fa0", "#c431d9", "#f0f2ff", Gradient(135.0, "#ffffff", "#e8eaff")),
            sw("#9d6fe7", "#d975e9", "#0a0a1a", Gradient(135.0, "#1a1a3a", "#0a0a1a")),
        ),
        ThemeVariant::Forest => (
            sw("#2e7d32", "#795548", "#f1f8e9", Gradient(120.0, "#ffffff", "#e8f5e9")),
            sw("#4caf50", "#8d6e63", "#1a231a", Gradient(120.0, "#243024", "#1a231a")),
        ),
        ThemeVariant::Candy => (
            sw("#ec407a", "#ab47bc", "#fff0f7", Gradient(45.0, "#ffffff", "#fce4ec")),
            sw("#f48fb1", "#ce93d8", "#2a1f24", Gradient(45.0, "#321f29", "#2a1f24")),
        ),
        ThemeVariant::Midnight => (
            sw("#3949ab", "#283593", "#e8eaf6", Gradient(150.0, "#ffffff", "#e8eaf6")),
            sw("#5c6bc0", "#3f51b5", "#0a0c1a", Gradient(150.0, "#1a1f3c", "#0a0c1a")),
        ),
        ThemeVariant::Sunrise => (
            sw("#ff7043", "#ffa726", "#fff3e0", Gradient(90.0, "#ffffff", "#fff3e0")),
            sw("#ff8a65", "#ffb74d", "#2a1f1a", Gradient(90.0, "#321f1a", "#2a1f1a")),
        ),
        ThemeVariant::Neon => (
            sw("#00e5ff", "#00b0ff", "#e0f7fa", Gradient(60.0, "#ffffff", "#e0f7fa")),
            sw("#18ffff", "#40c4ff", "#0a192f", Gradient(60.0, "#1a2f3c", "#0a192f")),
        ),
        ThemeVariant::Royal => (
            sw("#8e24aa", "#6a1b9a", "#f3e5f5", Gradient(135.0, "#ffffff", "#f3e5f5")),
            sw("#ab47bc", "#8e24aa", "#1a121f", Gradient(135.0, "#2a1f2f", "#1a121f")),
        ),
        ThemeVariant::Autumn => (
            sw("#f57c00", "#d84315", "#fff3e0", Gradient(30.0, "#ffffff", "#fff3e0")),
            sw("#ff9800", "#ff5722", "#2a1f1a", Gradient(30.0, "#2f241a", "#2a1f1a")),
        ),
        ThemeVariant::Winter => (
            sw("#4fc3f7", "#29b6f6", "#e1f5fe", Gradient(90.0, "#ffffff", "#e1f5fe")),
            sw("#81d4fa", "#4fc3f7", "#0a1a2a", Gradient(90.0, "#1a2a3a", "#0a1a2a")),
        ),
        ThemeVariant::Spring => (
            sw("#66bb6a", "#26a69a", "#e8f5e9", Gradient(120.0, "#ffffff", "#e8f5e9")),
            sw("#81c784", "#4db6ac", "#1a2a1a", Gradient(120.0, "#1f2f1f", "#1a2a1a")),
        ),
    }
}

fn build_palette(mode: ThemeMode, swatch: &Swatch) -> Palette {
    let primary = hex_to_color32(swatch.primary);
    let paper = match swatch.paper {
        PaperSpec::Solid(hex) => Paper::Solid(hex_to_color32(hex)),
        PaperSpec::Gradient(angle_deg, from, to) => Paper::Gradient {
            angle_deg,
            from: hex_to_color32(from),
            to: hex_to_color32(to),
        },
    };

    let (surface, surface_header, divider, text, text_secondary) = match mode {
        ThemeMode::Light => (
            Color32::WHITE,
            hex_to_color32("#f5f5f5"),
            Color32::from_rgb(224, 224, 224),
            Color32::from_rgb(33, 33, 33),
            Color32::from_rgb(102, 102, 102),
        ),
        ThemeMode::Dark => (
            hex_to_color32("#2d2d2d"),
            hex_to_color32("#2d2d2d"),
            Color32::from_rgb(61, 61, 61),
            Color32::WHITE,
            Color32::from_rgb(179, 179, 179),
        ),
    };

    let (error, warning, info, success) = match mode {
        ThemeMode::Light => ("#d32f2f", "#ed6c02", "#0288d1", "#2e7d32"),
        ThemeMode::Dark => ("#f44336", "#ffa726", "#29b6f6", "#66bb6a"),
    };

    Palette {
        mode,
        primary,
        primary_dark: darken(primary, 0.3),
        primary_light: lighten(primary, 0.2),
        secondary: hex_to_color32(swatch.secondary),
        background: hex_to_color32(swatch.background),
        paper,
        surface,
        surface_header,
        divider,
        text,
        text_secondary,
        error: hex_to_color32(error),
        warning: hex_to_color32(warning),
        info: hex_to_color32(info),
        success: hex_to_color32(success),
    }
}

static PALETTES: Lazy<HashMap<(ThemeMode, ThemeVariant), Palette>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(ThemeVariant::ALL.len() * 2);
    for variant in ThemeVariant::ALL {
        let (light, dark) = swatches(variant);
        table.insert((ThemeMode::Light, variant), build_palette(ThemeMode::Light, &light));
        table.insert((ThemeMode::Dark, variant), build_palette(ThemeMode::Dark, &dark));
    }
    table
});

/// A color preset offered in the settings drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSwatch {
    pub variant: ThemeVariant,
    pub color: Color32,
}

/// The sixteen presets shown in the settings drawer, in display order.
///
/// Tech, Minimal, Vibrant and Corporate are selectable from the command line
/// but have no chip.
pub fn preset_swatches() -> Vec<PresetSwatch> {
    [
        ("#1976d2", ThemeVariant::Default),
        ("#2196f3", ThemeVariant::Modern),
        ("#5c6bc0", ThemeVariant::Elegant),
        ("#43a047", ThemeVariant::Nature),
        ("#0288d1", ThemeVariant::Ocean),
        ("#f57c00", ThemeVariant::Sunset),
        ("#6b3fa0", ThemeVariant::Cosmic),
        ("#2e7d32", ThemeVariant::Forest),
        ("#ec407a", ThemeVariant::Candy),
        ("#3949ab", ThemeVariant::Midnight),
        ("#ff7043", ThemeVariant::Sunrise),
        ("#00e5ff", ThemeVariant::Neon),
        ("#8e24aa", ThemeVariant::Royal),
        ("#f57c00", ThemeVariant::Autumn),
        ("#4fc3f7", ThemeVariant::Winter),
        ("#66bb6a", ThemeVariant::Spring),
    ]
    .into_iter()
    .map(|(hex, variant)| PresetSwatch {
        variant,
        color: hex_to_color32(hex),
    })
    .collect()
}

/// Session-lifetime theme state: the active mode and variant plus the palette
/// they resolve to.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    mode: ThemeMode,
    variant: ThemeVariant,
    palette: Palette,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeContext {
    /// Creates the start-up theme: light mode, default variant.
    pub fn new() -> Self {
        Self::with_selection(ThemeMode::Light, ThemeVariant::Default)
    }

    pub fn with_selection(mode: ThemeMode, variant: ThemeVariant) -> Self {
        Self {
            mode,
            variant,
            palette: Self::resolve(mode, variant),
        }
    }

    /// Looks up the palette for a (mode, variant) pair.
    pub fn resolve(mode: ThemeMode, variant: ThemeVariant) -> Palette {
        match PALETTES.get(&(mode, variant)) {
            Some(palette) => palette.clone(),
            None => {
                let (light, dark) = swatches(variant);
                match mode {
                    ThemeMode::Light => build_palette(mode, &light),
                    ThemeMode::Dark => build_palette(mode, &dark),
                }
            }
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Flips light and dark.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.palette = Self::resolve(self.mode, self.variant);
        tracing::debug!(mode = %self.mode, "color mode toggled");
    }

    /// Selects a variant. Selecting the active variant again changes nothing.
    pub fn set_variant(&mut self, variant: ThemeVariant) {
        if variant == self.variant {
            return;
        }
        self.variant = variant;
        self.palette = Self::resolve(self.mode, self.variant);
        tracing::debug!(variant = %self.variant, "theme variant selected");
    }

    /// Builds egui visuals for the active palette.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = match self.mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        self.apply_to_visuals(&mut visuals);
        visuals
    }

    /// Applies the palette onto existing egui visuals.
    pub fn apply_to_visuals(&self, visuals: &mut egui::Visuals) {
        let colors = &self.palette;

        // Background colors
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.paper.base();
        visuals.extreme_bg_color = colors.surface;
        visuals.faint_bg_color = match colors.mode {
            ThemeMode::Light => adjust_color(colors.surface, -8),
            ThemeMode::Dark => adjust_color(colors.surface, 8),
        };

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = with_alpha(colors.primary, 90);
        visuals.selection.stroke.color = colors.primary;

        visuals.widgets.noninteractive.bg_fill = colors.paper.base();
        visuals.widgets.noninteractive.bg_stroke.color = colors.divider;
        visuals.widgets.inactive.bg_fill = colors.surface_header;
        visuals.widgets.inactive.weak_bg_fill = colors.surface_header;
        visuals.widgets.hovered.bg_fill = with_alpha(colors.primary, 40);
        visuals.widgets.hovered.weak_bg_fill = with_alpha(colors.primary, 40);
        visuals.widgets.active.bg_fill = colors.primary;
        visuals.widgets.active.weak_bg_fill = colors.primary_dark;

        visuals.hyperlink_color = colors.primary;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

/// Converts a hex color string (like "#1976d2") to Color32.
///
/// Malformed input yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adds `amount` to every channel, clamped to 0..=255.
///
/// Positive amounts give a lighter shade, negative a darker one.
pub fn adjust_color(color: Color32, amount: i16) -> Color32 {
    let shift = |c: u8| (c as i16 + amount).clamp(0, 255) as u8;
    Color32::from_rgb(shift(color.r()), shift(color.g()), shift(color.b()))
}

/// Gradient stops for a filled preset chip: light mode darkens toward the
/// bottom, dark mode lightens toward the top.
pub fn preset_gradient(color: Color32, mode: ThemeMode) -> Paper {
    let (from, to) = match mode {
        ThemeMode::Light => (color, adjust_color(color, -20)),
        ThemeMode::Dark => (adjust_color(color, 20), color),
    };
    Paper::Gradient {
        angle_deg: 180.0,
        from,
        to,
    }
}

/// Scales every channel toward black by `coefficient` (0.0..=1.0).
pub fn darken(color: Color32, coefficient: f32) -> Color32 {
    let keep = 1.0 - coefficient.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * keep).round() as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

/// Moves every channel toward white by `coefficient` (0.0..=1.0).
pub fn lighten(color: Color32, coefficient: f32) -> Color32 {
    let coefficient = coefficient.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 + (255.0 - c as f32) * coefficient).round() as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}
