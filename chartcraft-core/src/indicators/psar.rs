//! Parabolic stop-and-reverse over a single track.
//!
//! Wilder's acceleration-factor system reduced to one price track: the
//! track itself acts as both high and low. Inherently sequential — keeps
//! direction, extreme point (EP), and acceleration factor (AF) as state.
//!
//! Parameters: af_step (default 0.02), af_max (default 0.20).
//! First valid value at index 1 (needs two points to pick a direction).

/// Compute the SAR of `values`.
pub fn psar(values: &[f64], af_step: f64, af_max: f64) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < 2 || values[0].is_nan() || values[1].is_nan() {
        return result;
    }

    let mut is_long = values[1] >= values[0];
    let mut sar = values[0];
    let mut ep = values[1];
    let mut af = af_step;

    result[1] = sar;

    for i in 2..n {
        if values[i].is_nan() {
            // Void point: no SAR output and no state update
            continue;
        }

        let projected = sar + af * (ep - sar);

        if is_long {
            if values[i] < projected {
                // Reverse: prior EP becomes the new SAR
                is_long = false;
                sar = ep;
                ep = values[i];
                af = af_step;
            } else {
                sar = projected;
                if values[i] > ep {
                    ep = values[i];
                    af = (af + af_step).min(af_max);
                }
            }
        } else if values[i] > projected {
            is_long = true;
            sar = ep;
            ep = values[i];
            af = af_step;
        } else {
            sar = projected;
            if values[i] < ep {
                ep = values[i];
                af = (af + af_step).min(af_max);
            }
        }

        result[i] = sar;
    }

    result
}
