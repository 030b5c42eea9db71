// Server version strings with dev-build tracking

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::error::{Result, VersionError};

/// Marker appended to every rendered version to tell users and plugins this
/// is the IPv6-enabled distribution rather than upstream
pub const DISTRIBUTION_TAG: &str = "-ipv6";

/// Marker appended to rendered dev builds
pub const DEV_MARKER: &str = "+dev";

/// Upper bound for a parsed component; larger digit runs saturate to it
pub const MAX_COMPONENT: u64 = i64::MAX.unsigned_abs();

static BASE_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-(.*))?\n?$").expect("base version pattern is valid")
});

/// A parsed server version.
///
/// Holds the verbatim base version string alongside its numeric components,
/// an optional suffix, and the caller-supplied dev flag and build number.
/// Instances are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString {
    base_version: String,
    suffix: String,
    major: u64,
    minor: u64,
    patch: u64,
    build: u32,
    development: bool,
}

impl VersionString {
    /// Parse `base_version` (`major.minor.patch[-suffix]`) and attach the
    /// dev flag and build number.
    ///
    /// A single trailing `\n` is tolerated and kept in the base version.
    /// Components larger than [`MAX_COMPONENT`] saturate to it.
    ///
    /// Fails with [`VersionError::InvalidVersionFormat`] when the string does
    /// not match.
    pub fn new(base_version: &str, is_dev_build: bool, build_number: u32) -> Result<Self> {
        let captures = BASE_VERSION_PATTERN
            .captures(base_version)
            .ok_or_else(|| VersionError::InvalidVersionFormat(base_version.to_string()))?;

        // digits only, so overflow is the only way parsing can fail
        let component = |index: usize| -> u64 {
            captures[index]
                .parse::<u64>()
                .map_or(MAX_COMPONENT, |value| value.min(MAX_COMPONENT))
        };

        let version = Self {
            base_version: base_version.to_string(),
            suffix: captures
                .get(4)
                .map_or_else(String::new, |m| m.as_str().to_string()),
            major: component(1),
            minor: component(2),
            patch: component(3),
            build: build_number,
            development: is_dev_build,
        };

        tracing::debug!(
            base = %version.base_version,
            major = version.major,
            minor = version.minor,
            patch = version.patch,
            dev = version.development,
            build = version.build,
            "parsed version"
        );

        Ok(version)
    }

    /// Parse a release build (not dev, build number 0)
    pub fn release(base_version: &str) -> Result<Self> {
        Self::new(base_version, false, 0)
    }

    /// Parse a dev build with the given build number
    pub fn dev(base_version: &str, build_number: u32) -> Result<Self> {
        Self::new(base_version, true, build_number)
    }

    /// Bit-packed rank: `(major << 9) | (minor << 5) | patch`.
    ///
    /// Minor and patch are only collision-free below 32; larger values bleed
    /// into the neighbouring fields, and bits shifted past 64 are dropped.
    /// The packing is kept as-is because consumers compare the literal integer.
    pub fn number(&self) -> i64 {
        (signed(self.major) << 9) | (signed(self.minor) << 5) | signed(self.patch)
    }

    pub fn base_version(&self) -> &str {
        &self.base_version
    }

    /// Render the version for display.
    ///
    /// `{base}-ipv6`, then `+dev` for dev builds, then `.{build}` when
    /// `include_build` is set and the build number is non-zero.
    pub fn full_version(&self, include_build: bool) -> String {
        let mut rendered = format!("{}{}", self.base_version, DISTRIBUTION_TAG);
        if self.development {
            rendered.push_str(DEV_MARKER);
            if include_build && self.build > 0 {
                rendered.push('.');
                rendered.push_str(&self.build.to_string());
            }
        }
        rendered
    }

    pub const fn major(&self) -> u64 {
        self.major
    }

    pub const fn minor(&self) -> u64 {
        self.minor
    }

    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Text after the hyphen following the patch number, empty if absent
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub const fn build_number(&self) -> u32 {
        self.build
    }

    pub const fn is_dev_build(&self) -> bool {
        self.development
    }

    /// Compare `target` against `self`.
    ///
    /// With `diff` set, returns `target.number() - self.number()` unchanged.
    /// Otherwise returns `1` if the target is newer, `-1` if it is older and
    /// `0` if both are equal. At equal rank a dev target is older than a
    /// release `self`; a dev `self` against a release target is only decided
    /// by build numbers.
    pub fn compare(&self, target: &Self, diff: bool) -> i64 {
        let number = self.number();
        let target_number = target.number();

        if diff {
            return target_number.wrapping_sub(number);
        }

        let result = if number > target_number {
            -1
        } else if number < target_number {
            1
        } else if target.is_dev_build() && !self.is_dev_build() {
            -1
        } else if target.build_number() > self.build_number() {
            1
        } else if target.build_number() < self.build_number() {
            -1
        } else {
            0
        };

        tracing::debug!(
            this = %self.full_version(true),
            target = %target.full_version(true),
            result,
            "compared versions"
        );

        result
    }
}

fn signed(component: u64) -> i64 {
    i64::try_from(component).unwrap_or(i64::MAX)
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_version(false))
    }
}

impl FromStr for VersionString {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::release(s)
    }
}
