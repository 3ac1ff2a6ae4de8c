//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the batch pipeline in [`process`](crate::process)
//! (which decides what images to resize) and the
//! [`backend`](super::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock)
//! without changing pipeline logic.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Exact output shape for a contain-resize (width, height).
///
/// Parses from a string as either a single integer `N` (meaning `N,N`) or
/// two comma-separated integers `W,H`. Both axes must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The target as a `(width, height)` pair for dimension math.
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for TargetSize {
    /// 299x299, the input shape of the Inception-style encoders this tool
    /// prepares datasets for.
    fn default() -> Self {
        Self {
            width: 299,
            height: 299,
        }
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TargetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_axis = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid size component '{}'", part.trim()))
                .and_then(|n| {
                    if n == 0 {
                        Err("size components must be positive".to_string())
                    } else {
                        Ok(n)
                    }
                })
        };

        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [single] => {
                let n = parse_axis(single)?;
                Ok(Self::new(n, n))
            }
            [w, h] => Ok(Self::new(parse_axis(w)?, parse_axis(h)?)),
            _ => Err(format!(
                "expected a single integer N or two comma-separated integers W,H, got '{s}'"
            )),
        }
    }
}

/// Parameters for one contain-resize operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub target: TargetSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_integer_means_square() {
        assert_eq!("299".parse::<TargetSize>().unwrap(), TargetSize::new(299, 299));
    }

    #[test]
    fn parse_pair() {
        assert_eq!(
            "320,240".parse::<TargetSize>().unwrap(),
            TargetSize::new(320, 240)
        );
    }

    #[test]
    fn parse_pair_with_spaces() {
        assert_eq!(
            "320, 240".parse::<TargetSize>().unwrap(),
            TargetSize::new(320, 240)
        );
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!("abc".parse::<TargetSize>().is_err());
        assert!("10,abc".parse::<TargetSize>().is_err());
    }

    #[test]
    fn parse_rejects_zero_axis() {
        assert!("0".parse::<TargetSize>().is_err());
        assert!("10,0".parse::<TargetSize>().is_err());
        assert!("0,10".parse::<TargetSize>().is_err());
    }

    #[test]
    fn parse_rejects_extra_components() {
        assert!("1,2,3".parse::<TargetSize>().is_err());
    }

    #[test]
    fn parse_rejects_empty() {
        assert!("".parse::<TargetSize>().is_err());
        assert!(",".parse::<TargetSize>().is_err());
    }

    #[test]
    fn default_is_299_square() {
        assert_eq!(TargetSize::default(), TargetSize::new(299, 299));
    }

    #[test]
    fn display_formats_as_w_x_h() {
        assert_eq!(TargetSize::new(320, 240).to_string(), "320x240");
    }
}
