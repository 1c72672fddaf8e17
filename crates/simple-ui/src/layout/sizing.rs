//! Per-element sizing strategies.

use std::fmt;
use std::str::FromStr;

use simple_ui_core::logging::targets;
use simple_ui_render::Size;

/// How an element's size is derived from its cell and its original size.
///
/// The "exact" variants scale each axis independently; the others keep the
/// original aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizingStrategy {
    /// Keep the original size.
    #[default]
    None,
    /// Largest uniform scale that fits inside the cell.
    Contain,
    /// Smallest uniform scale that covers the cell; may overflow it.
    Cover,
    /// Exactly the cell size.
    CoverExact,
    /// Exactly the cell size.
    Stretch,
    /// Scale up, keeping aspect, when the original is smaller than the cell.
    Grow,
    /// Scale down, keeping aspect, when the original is larger than the cell.
    Shrink,
    /// Raise each axis independently to the cell size.
    GrowExact,
    /// Clamp each axis independently to the cell size.
    ShrinkExact,
}

impl SizingStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [SizingStrategy; 9] = [
        SizingStrategy::None,
        SizingStrategy::Contain,
        SizingStrategy::Cover,
        SizingStrategy::CoverExact,
        SizingStrategy::Stretch,
        SizingStrategy::Grow,
        SizingStrategy::Shrink,
        SizingStrategy::GrowExact,
        SizingStrategy::ShrinkExact,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            SizingStrategy::None => "none",
            SizingStrategy::Contain => "contain",
            SizingStrategy::Cover => "cover",
            SizingStrategy::CoverExact => "cover!",
            SizingStrategy::Stretch => "stretch",
            SizingStrategy::Grow => "grow",
            SizingStrategy::Shrink => "shrink",
            SizingStrategy::GrowExact => "grow!",
            SizingStrategy::ShrinkExact => "shrink!",
        }
    }

    /// Whether the strategy divides by the original size.
    fn scales_uniformly(&self) -> bool {
        matches!(
            self,
            SizingStrategy::Contain
                | SizingStrategy::Cover
                | SizingStrategy::Grow
                | SizingStrategy::Shrink
        )
    }

    /// The size an element with `original` size should take in a `cell`.
    ///
    /// Strategies that scale uniformly leave an original with a zero or
    /// non-finite side unchanged.
    pub fn target_size(&self, cell: Size, original: Size) -> Size {
        let (cw, ch) = (cell.width, cell.height);
        let (ow, oh) = (original.width, original.height);

        if self.scales_uniformly() && !(ow.is_finite() && oh.is_finite() && ow != 0.0 && oh != 0.0)
        {
            tracing::debug!(
                target: targets::LAYOUT,
                strategy = %self,
                ow,
                oh,
                "original size cannot be scaled; keeping it"
            );
            return original;
        }

        match self {
            SizingStrategy::None => original,
            SizingStrategy::Stretch | SizingStrategy::CoverExact => cell,
            SizingStrategy::Cover => original.scale((cw / ow).max(ch / oh)),
            SizingStrategy::Contain => original.scale((cw / ow).min(ch / oh)),
            SizingStrategy::Shrink => {
                if ow > cw || oh > ch {
                    original.scale((ow.min(cw) / ow).min(oh.min(ch) / oh))
                } else {
                    original
                }
            }
            SizingStrategy::Grow => {
                if ow < cw || oh < ch {
                    original.scale((ow.max(cw) / ow).min(oh.max(ch) / oh))
                } else {
                    original
                }
            }
            SizingStrategy::ShrinkExact => {
                if ow > cw || oh > ch {
                    Size::new(ow.min(cw), oh.min(ch))
                } else {
                    original
                }
            }
            SizingStrategy::GrowExact => {
                if ow < cw || oh < ch {
                    Size::new(ow.max(cw), oh.max(ch))
                } else {
                    original
                }
            }
        }
    }
}

impl fmt::Display for SizingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognized sizing strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sizing strategy '{0}'")]
pub struct ParseStrategyError(pub String);

impl FromStr for SizingStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(SizingStrategy::None),
            "contain" => Ok(SizingStrategy::Contain),
            "cover" => Ok(SizingStrategy::Cover),
            "cover!" | "cover-exact" => Ok(SizingStrategy::CoverExact),
            "stretch" => Ok(SizingStrategy::Stretch),
            "grow" => Ok(SizingStrategy::Grow),
            "shrink" => Ok(SizingStrategy::Shrink),
            "grow!" | "grow-exact" => Ok(SizingStrategy::GrowExact),
            "shrink!" | "shrink-exact" => Ok(SizingStrategy::ShrinkExact),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Size, b: Size) -> bool {
        (a.width - b.width).abs() < EPS && (a.height - b.height).abs() < EPS
    }

    const CELLS: [Size; 4] = [
        Size::new(100.0, 50.0),
        Size::new(30.0, 200.0),
        Size::new(64.0, 64.0),
        Size::new(1.0, 500.0),
    ];
    const ORIGINALS: [Size; 4] = [
        Size::new(10.0, 10.0),
        Size::new(300.0, 40.0),
        Size::new(20.0, 80.0),
        Size::new(640.0, 480.0),
    ];

    #[test]
    fn test_stretch_always_matches_cell() {
        for cell in CELLS {
            for original in ORIGINALS {
                assert_eq!(SizingStrategy::Stretch.target_size(cell, original), cell);
                assert_eq!(SizingStrategy::CoverExact.target_size(cell, original), cell);
            }
        }
    }

    #[test]
    fn test_contain_fits_and_keeps_aspect() {
        for cell in CELLS {
            for original in ORIGINALS {
                let t = SizingStrategy::Contain.target_size(cell, original);
                assert!(t.width <= cell.width + EPS && t.height <= cell.height + EPS);
                assert!(
                    (t.width / t.height - original.width / original.height).abs() < EPS,
                    "{t:?} from {original:?}"
                );
            }
        }
    }

    #[test]
    fn test_cover_covers_and_keeps_aspect() {
        for cell in CELLS {
            for original in ORIGINALS {
                let t = SizingStrategy::Cover.target_size(cell, original);
                assert!(t.width >= cell.width - EPS && t.height >= cell.height - EPS);
                assert!((t.width / t.height - original.width / original.height).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_none_keeps_original() {
        let original = Size::new(12.0, 34.0);
        assert_eq!(
            SizingStrategy::None.target_size(Size::new(1.0, 1.0), original),
            original
        );
    }

    #[test]
    fn test_shrink() {
        let cell = Size::new(100.0, 100.0);
        assert!(approx(
            SizingStrategy::Shrink.target_size(cell, Size::new(200.0, 50.0)),
            Size::new(100.0, 25.0)
        ));
        // Fits already: unchanged.
        assert_eq!(
            SizingStrategy::Shrink.target_size(cell, Size::new(20.0, 50.0)),
            Size::new(20.0, 50.0)
        );
        assert_eq!(
            SizingStrategy::ShrinkExact.target_size(cell, Size::new(200.0, 50.0)),
            Size::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_grow() {
        let cell = Size::new(100.0, 100.0);
        // Limited by the axis that needs the least growth.
        assert!(approx(
            SizingStrategy::Grow.target_size(cell, Size::new(50.0, 20.0)),
            Size::new(100.0, 40.0)
        ));
        assert_eq!(
            SizingStrategy::Grow.target_size(cell, Size::new(200.0, 200.0)),
            Size::new(200.0, 200.0)
        );
        assert_eq!(
            SizingStrategy::GrowExact.target_size(cell, Size::new(50.0, 200.0)),
            Size::new(100.0, 200.0)
        );
    }

    #[test]
    fn test_zero_original_is_kept() {
        let cell = Size::new(100.0, 100.0);
        let original = Size::new(0.0, 10.0);
        for strategy in [
            SizingStrategy::Cover,
            SizingStrategy::Contain,
            SizingStrategy::Grow,
            SizingStrategy::Shrink,
        ] {
            assert_eq!(strategy.target_size(cell, original), original);
        }
        assert_eq!(SizingStrategy::Stretch.target_size(cell, original), cell);
        assert_eq!(
            SizingStrategy::GrowExact.target_size(cell, original),
            Size::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_names_round_trip() {
        for strategy in SizingStrategy::ALL {
            assert_eq!(strategy.name().parse::<SizingStrategy>(), Ok(strategy));
        }
        assert_eq!("cover-exact".parse(), Ok(SizingStrategy::CoverExact));
        assert_eq!("Shrink-Exact".parse(), Ok(SizingStrategy::ShrinkExact));
        assert_eq!(
            "squash".parse::<SizingStrategy>(),
            Err(ParseStrategyError("squash".to_string()))
        );
    }
}
