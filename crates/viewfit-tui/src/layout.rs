//! Surface geometry for the three display sizes.
//!
//! Mirrors the host-app constraint sets: `Small` pins an inline 16:9 strip
//! to the top of the stage, `Large` centers a height-filling 16:9 surface,
//! and `Full` fills the width with the surface vertically centered.
//! Terminal cells are roughly twice as tall as wide, so widths are halved
//! relative to rows when holding the aspect ratio.

use std::fmt;

use ratatui::layout::Rect;
use viewfit_core::resolver::DisplaySize;

/// Approximate height of a terminal cell in units of its width.
const CELL_ASPECT: u32 = 2;

/// Presentation policy for the two base sizes.
///
/// The size machine always distinguishes three values; the collapsed
/// policy only changes how `Small` and `Large` are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPolicy {
    /// Distinct layouts for `Small`, `Large`, and `Full`.
    #[default]
    ThreeTier,
    /// `Small` and `Large` share the inline base layout.
    CollapsedBase,
}

impl LayoutPolicy {
    /// The other policy.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::ThreeTier => Self::CollapsedBase,
            Self::CollapsedBase => Self::ThreeTier,
        }
    }
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ThreeTier => "three-tier",
            Self::CollapsedBase => "collapsed-base",
        };
        f.write_str(name)
    }
}

/// Visual arrangement of the surface within the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceVariant {
    /// Pinned to the top edge at full stage width.
    TopStrip,
    /// Horizontally centered, filling the stage height.
    CenteredTall,
    /// Full stage width, vertically centered.
    FullWidth,
}

/// Map a display size to its visual variant under the active policy.
#[must_use]
pub fn variant_for(size: DisplaySize, policy: LayoutPolicy) -> SurfaceVariant {
    match (policy, size) {
        (LayoutPolicy::CollapsedBase, DisplaySize::Small | DisplaySize::Large)
        | (LayoutPolicy::ThreeTier, DisplaySize::Small) => SurfaceVariant::TopStrip,
        (LayoutPolicy::ThreeTier, DisplaySize::Large) => SurfaceVariant::CenteredTall,
        (_, DisplaySize::Full) => SurfaceVariant::FullWidth,
    }
}

/// Rows that keep a 16:9 surface at the given cell width.
fn rows_for_width(width: u16) -> u16 {
    (u32::from(width) * 9 / (16 * CELL_ASPECT)) as u16
}

/// Columns that keep a 16:9 surface at the given cell height.
fn cols_for_height(height: u16) -> u16 {
    (u32::from(height) * 16 * CELL_ASPECT / 9).min(u32::from(u16::MAX)) as u16
}

/// Compute the surface rectangle inside the stage area.
///
/// Degenerate stages collapse toward the stage bounds instead of
/// overflowing them.
#[must_use]
pub fn surface_rect(area: Rect, variant: SurfaceVariant) -> Rect {
    if area.width == 0 || area.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    match variant {
        SurfaceVariant::TopStrip => {
            let height = rows_for_width(area.width).clamp(1, area.height);
            Rect::new(area.x, area.y, area.width, height)
        },
        SurfaceVariant::CenteredTall => {
            let width = cols_for_height(area.height).clamp(1, area.width);
            let x = area.x + (area.width - width) / 2;
            Rect::new(x, area.y, width, area.height)
        },
        SurfaceVariant::FullWidth => {
            let height = rows_for_width(area.width).clamp(1, area.height);
            let y = area.y + (area.height - height) / 2;
            Rect::new(area.x, y, area.width, height)
        },
    }
}
