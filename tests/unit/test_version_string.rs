use verstring::{VersionError, VersionString, DISTRIBUTION_TAG};

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_accessors_match_components() {
        for (input, major, minor, patch, suffix) in [
            ("0.0.0", 0, 0, 0, ""),
            ("1.2.3", 1, 2, 3, ""),
            ("10.20.30-beta", 10, 20, 30, "beta"),
            ("4.0.0-BETA2+hotfix", 4, 0, 0, "BETA2+hotfix"),
        ] {
            let version = VersionString::release(input).unwrap();
            assert_eq!(version.major(), major, "{input}");
            assert_eq!(version.minor(), minor, "{input}");
            assert_eq!(version.patch(), patch, "{input}");
            assert_eq!(version.suffix(), suffix, "{input}");
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for input in ["1.2", "1.2.x", "1.2.3 ", "1.2.3_beta", "latest"] {
            assert!(
                matches!(VersionString::release(input), Err(VersionError::InvalidVersionFormat(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_base_version_round_trip() {
        for input in ["1.2.3", "0.0.1", "007.08.09"] {
            let version = VersionString::release(input).unwrap();
            assert_eq!(version.base_version(), input);
            assert_eq!(version.to_string(), format!("{input}{DISTRIBUTION_TAG}"));
        }
    }

    #[test]
    fn test_trailing_newline_from_file_contents() {
        let version = VersionString::release("1.2.3-beta\n").unwrap();
        assert_eq!(version.suffix(), "beta");
        assert_eq!(version.number(), VersionString::release("1.2.3").unwrap().number());
    }

    #[test]
    fn test_large_components_parse() {
        let version = VersionString::release("4294967296.0.0").unwrap();
        assert_eq!(version.major(), 4_294_967_296);
        assert_eq!(version.number(), 2_199_023_255_552);
    }

    #[test]
    fn test_caller_flags_are_stored() {
        let version = VersionString::new("1.2.3", true, 42).unwrap();
        assert!(version.is_dev_build());
        assert_eq!(version.build_number(), 42);
    }
}

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[test]
    fn test_raw_difference_is_other_minus_this() {
        let this = VersionString::release("1.0.0").unwrap();
        let other = VersionString::release("0.5.3").unwrap();
        assert_eq!(this.compare(&other, true), other.number() - this.number());
        assert_eq!(this.compare(&other, true), -349);
    }

    #[test]
    fn test_raw_difference_ignores_dev_and_build() {
        let this = VersionString::release("1.2.3").unwrap();
        let other = VersionString::dev("1.2.3", 99).unwrap();
        assert_eq!(this.compare(&other, true), 0);
    }

    #[test]
    fn test_update_check_flow() {
        let local = VersionString::dev("1.2.3", 10).unwrap();
        let remote_newer = VersionString::release("1.2.4").unwrap();
        let remote_same_release = VersionString::release("1.2.3").unwrap();
        let remote_newer_dev = VersionString::dev("1.2.3", 11).unwrap();

        assert_eq!(local.compare(&remote_newer, false), 1);
        // dev local against a release of the same rank is settled by build numbers
        assert_eq!(local.compare(&remote_same_release, false), -1);
        assert_eq!(local.compare(&remote_newer_dev, false), 1);
    }

    #[test]
    fn test_release_beats_dev_at_same_rank() {
        let release = VersionString::new("2.0.0", false, 0).unwrap();
        let dev = VersionString::new("2.0.0", true, 1000).unwrap();
        assert_eq!(release.compare(&dev, false), -1);
    }

    #[test]
    fn test_higher_rank_wins_over_dev_flags() {
        let this = VersionString::dev("2.0.0", 1).unwrap();
        let other = VersionString::release("1.9.9").unwrap();
        assert_eq!(this.compare(&other, false), -1);
        assert_eq!(other.compare(&this, false), 1);
    }
}
