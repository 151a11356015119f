//! Tests for tolerance band parsing and the admission policies

#[cfg(test)]
mod tests {
    use gridreach::SearchError;
    use gridreach::algorithm::tolerance::{AdmissionPolicy, ToleranceBand};

    // Tests absolute containment includes both limits
    // Verified by changing <= to < on the upper limit
    #[test]
    fn test_absolute_band_is_inclusive() {
        let band = ToleranceBand::new(1.0, 3.0);
        assert!(band.contains(1.0));
        assert!(band.contains(3.0));
        assert!(!band.contains(0.999));
        assert!(!band.contains(3.001));
    }

    // Tests anchored containment subtracts the lower limit and adds the upper
    // Verified by adding the lower limit instead of subtracting it
    #[test]
    fn test_band_around_anchor() {
        let band: ToleranceBand<f64> = ToleranceBand::new(2.0, 0.5);
        let (low, high) = band.bounds_around(10.0);
        assert!((low - 8.0).abs() < f64::EPSILON);
        assert!((high - 10.5).abs() < f64::EPSILON);

        assert!(band.contains_around(10.0, 8.0));
        assert!(band.contains_around(10.0, 10.5));
        assert!(!band.contains_around(10.0, 10.6));
        assert!(!band.contains_around(10.0, 7.9));
    }

    // Tests an inverted band admits nothing in absolute mode
    #[test]
    fn test_inverted_band() {
        let band = ToleranceBand::new(5.0, 1.0);
        assert!(band.is_inverted());
        for value in [0.0, 1.0, 3.0, 5.0, 6.0] {
            assert!(!band.contains(value));
        }
        assert!(!ToleranceBand::new(1.0, 5.0).is_inverted());
    }

    // Tests parsing accepts whitespace and infinity
    #[test]
    fn test_parse_accepts_numbers() {
        let band = ToleranceBand::<f64>::parse(" 0.5 ", "inf")
            .unwrap_or_else(|e| unreachable!("limits are numbers: {e}"));
        assert!((band.lower_limit - 0.5).abs() < f64::EPSILON);
        assert!(band.upper_limit.is_infinite());

        let negative = ToleranceBand::<f32>::parse("-1", "2e1")
            .unwrap_or_else(|e| unreachable!("limits are numbers: {e}"));
        assert!((negative.lower_limit + 1.0).abs() < f32::EPSILON);
        assert!((negative.upper_limit - 20.0).abs() < f32::EPSILON);
    }

    // Tests parse failures name the offending limit
    // Verified by swapping the parameter names passed to parse_limit
    #[test]
    fn test_parse_rejects_non_numbers() {
        match ToleranceBand::<f64>::parse("1", "abc") {
            Err(SearchError::InvalidArgument {
                parameter, value, ..
            }) => {
                assert_eq!(parameter, "upper_limit");
                assert_eq!(value, "abc");
            }
            other => unreachable!("expected InvalidArgument, got {other:?}"),
        }

        match ToleranceBand::<f64>::parse("", "1") {
            Err(SearchError::InvalidArgument { parameter, .. }) => {
                assert_eq!(parameter, "lower_limit");
            }
            other => unreachable!("expected InvalidArgument, got {other:?}"),
        }
    }

    // Tests NaN is not accepted as a limit
    // Verified by removing the NaN check
    #[test]
    fn test_parse_rejects_nan() {
        let result = ToleranceBand::<f64>::parse("NaN", "1");
        assert!(matches!(result, Err(SearchError::InvalidArgument { .. })));
    }

    // Tests each policy anchors the band where documented
    // Verified by anchoring the relative policy to the start value
    #[test]
    fn test_policies_choose_anchor() {
        let band = ToleranceBand::new(1.0, 1.0);
        let current = 5.0;
        let start = 0.0;

        assert!(AdmissionPolicy::Relative.admits(&band, current, start, 6.0));
        assert!(!AdmissionPolicy::Relative.admits(&band, current, start, 1.0));

        assert!(AdmissionPolicy::Anchored.admits(&band, current, start, 1.0));
        assert!(!AdmissionPolicy::Anchored.admits(&band, current, start, 6.0));

        assert!(AdmissionPolicy::Absolute.admits(&band, current, start, 1.0));
        assert!(!AdmissionPolicy::Absolute.admits(&band, current, start, 0.5));
    }

    // Tests policy names round-trip through FromStr and Display
    #[test]
    fn test_policy_names() {
        for policy in AdmissionPolicy::ALL {
            let parsed: Result<AdmissionPolicy, _> = policy.to_string().parse();
            assert!(parsed.is_ok_and(|p| p == policy));
        }
        assert!(matches!(
            " ABSOLUTE ".parse::<AdmissionPolicy>(),
            Ok(AdmissionPolicy::Absolute)
        ));
        assert!("fuzzy".parse::<AdmissionPolicy>().is_err());
        assert_eq!(AdmissionPolicy::default(), AdmissionPolicy::Relative);
    }

    // Tests band display includes both limits
    #[test]
    fn test_band_display() {
        assert_eq!(
            ToleranceBand::new(0.5, 2.0).to_string(),
            "[lower 0.5, upper 2]"
        );
    }
}
