use crate::error::PixelViewError;
use crate::layout::MAX_PLANES;
use crate::validate::check_at_most;

/// Resource limits checked when a view is built through a config.
///
/// All fields default to `None` (no limit beyond the hard 32-plane cap).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum plane count. Values above 32 have no effect.
    pub max_planes: Option<u32>,
}

impl Limits {
    /// Reject dimensions above any configured width, height or pixel cap.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PixelViewError> {
        check_at_most(u64::from(width), self.max_width, "width")?;
        check_at_most(u64::from(height), self.max_height, "height")?;
        check_at_most(
            u64::from(width) * u64::from(height),
            self.max_pixels,
            "pixel count",
        )
    }

    /// Reject a plane count above the configured cap (at most 32).
    pub(crate) fn check_planes(&self, planes: u32) -> Result<(), PixelViewError> {
        let cap = self.max_planes.map_or(MAX_PLANES, |m| m.min(MAX_PLANES));
        check_at_most(u64::from(planes), Some(u64::from(cap)), "plane count")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_limits_accept_anything_within_32_planes() {
        let limits = Limits::default();
        assert!(limits.check(u32::MAX, u32::MAX).is_ok());
        assert!(limits.check_planes(32).is_ok());
        assert!(limits.check_planes(33).is_err());
    }

    #[test]
    fn each_cap_names_what_it_limits() {
        let limits = Limits {
            max_width: Some(320),
            max_height: Some(200),
            max_pixels: Some(320 * 100),
            max_planes: Some(4),
        };
        assert!(limits.check(320, 100).is_ok());
        assert_eq!(
            limits.check(321, 1).unwrap_err().to_string(),
            "limit exceeded: width 321 exceeds limit 320"
        );
        assert_eq!(
            limits.check(1, 201).unwrap_err().to_string(),
            "limit exceeded: height 201 exceeds limit 200"
        );
        assert_eq!(
            limits.check(320, 101).unwrap_err().to_string(),
            "limit exceeded: pixel count 32320 exceeds limit 32000"
        );
        assert_eq!(
            limits.check_planes(5).unwrap_err().to_string(),
            "limit exceeded: plane count 5 exceeds limit 4"
        );
    }
}
