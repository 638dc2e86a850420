use crate::error::{Result, SpectraError};

use super::model::SpectralSample;

/// Reflectance value the instrument writes for "no measurement".
pub const NO_DATA_SENTINEL: f64 = -1.23e34;

// ---------------------------------------------------------------------------
// Series builder
// ---------------------------------------------------------------------------

/// Turn a wavelength text blob and a reflectance text blob into index-paired
/// samples.
///
/// * Lines without a numeric value are skipped, blank ones included.
/// * Reflectance lines equal to [`NO_DATA_SENTINEL`] are dropped before the
///   columns are compared.
/// * Differing column lengths fail with [`SpectraError::MismatchedLengths`];
///   nothing else is validated.
pub fn build_series(wavelength_text: &str, reflectance_text: &str) -> Result<Vec<SpectralSample>> {
    let wavelengths = parse_column(wavelength_text);
    let reflectances: Vec<f64> = parse_column(reflectance_text)
        .into_iter()
        .filter(|&v| v != NO_DATA_SENTINEL)
        .collect();

    if wavelengths.len() != reflectances.len() {
        return Err(SpectraError::MismatchedLengths {
            wavelengths: wavelengths.len(),
            reflectances: reflectances.len(),
        });
    }

    Ok(wavelengths
        .into_iter()
        .zip(reflectances)
        .map(|(wavelength, reflectance)| SpectralSample {
            wavelength,
            reflectance,
        })
        .collect())
}

/// Parse one float per line, skipping lines that hold no number.
pub fn parse_column(text: &str) -> Vec<f64> {
    let mut skipped = 0usize;
    let values: Vec<f64> = text
        .lines()
        .filter_map(|line| {
            let value = parse_leading_float(line);
            if value.is_none() {
                skipped += 1;
            }
            value
        })
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {skipped} non-numeric line(s), kept {}", values.len());
    }
    values
}

/// Parse the longest numeric prefix of a trimmed line, so `"0.25 %"` reads as
/// `0.25` and `"abc"` reads as nothing. `Infinity` with an optional sign is
/// accepted; NaN never comes out.
pub fn parse_leading_float(line: &str) -> Option<f64> {
    let s = line.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let frac_end = skip_digits(bytes, frac_start);
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = skip_digits(bytes, j);
        if exp_end > j {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_by_index() {
        let samples = build_series("1.0\n1.1", "0.3\n0.7").unwrap();
        assert_eq!(
            samples,
            vec![
                SpectralSample { wavelength: 1.0, reflectance: 0.3 },
                SpectralSample { wavelength: 1.1, reflectance: 0.7 },
            ]
        );
    }

    #[test]
    fn test_sentinel_causes_mismatch() {
        let err = build_series("1.0\n1.1\n1.2", "0.2\n-1.23e34\n0.4").unwrap_err();
        match err {
            SpectraError::MismatchedLengths {
                wavelengths,
                reflectances,
            } => {
                assert_eq!(wavelengths, 3);
                assert_eq!(reflectances, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sentinel_removed_at_any_position() {
        for refl in [
            "-1.23e34\n0.2\n0.4",
            "0.2\n-1.23e34\n0.4",
            "0.2\n0.4\n-1.23E+34",
        ] {
            let samples = build_series("1.0\n1.1", refl).unwrap();
            let values: Vec<f64> = samples.iter().map(|s| s.reflectance).collect();
            assert_eq!(values, vec![0.2, 0.4], "input {refl:?}");
        }
    }

    #[test]
    fn test_sentinel_only_filtered_from_reflectance() {
        let samples = build_series("-1.23e34\n1.0", "0.1\n0.2").unwrap();
        assert_eq!(samples[0].wavelength, NO_DATA_SENTINEL);
    }

    #[test]
    fn test_blank_and_text_lines_skipped() {
        let wl = "wavelength\n\n0.40\r\n0.41\n  \n0.42\n";
        let refl = "0.05\nn/a\n0.06\n0.07";
        let samples = build_series(wl, refl).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2].wavelength, 0.42);
        assert_eq!(samples[2].reflectance, 0.07);
    }

    #[test]
    fn test_no_sorting_or_dedup() {
        let samples = build_series("2.0\n1.0\n1.0", "0.5\n0.6\n0.7").unwrap();
        let wl: Vec<f64> = samples.iter().map(|s| s.wavelength).collect();
        assert_eq!(wl, vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_empty_inputs_pair_to_nothing() {
        assert!(build_series("", "\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_leading_float_prefix() {
        assert_eq!(parse_leading_float("0.25 %"), Some(0.25));
        assert_eq!(parse_leading_float("  -3e2xyz"), Some(-300.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("7."), Some(7.0));
        assert_eq!(parse_leading_float("+4"), Some(4.0));
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("NaN"), None);
        assert_eq!(parse_leading_float(""), None);
    }
}
