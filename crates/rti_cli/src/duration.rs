use std::str::FromStr;
use std::time::Duration;

/// A duration written as `1h`, `30m`, `1d` or a mix like `1h15m30s`.
/// A trailing bare number counts as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

const TOO_LARGE: &str = "Duration too large";

fn add_scaled(total: u64, num: u64, scale: u64) -> std::result::Result<u64, String> {
    num.checked_mul(scale)
        .and_then(|seconds| total.checked_add(seconds))
        .ok_or_else(|| TOO_LARGE.to_string())
}

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if !current_number.is_empty() {
                let num = current_number.parse::<u64>().map_err(|_| TOO_LARGE.to_string())?;
                let scale = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    'd' => 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = add_scaled(total_seconds, num, scale)?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        if !current_number.is_empty() {
            let num = current_number.parse::<u64>().map_err(|_| TOO_LARGE.to_string())?;
            total_seconds = add_scaled(total_seconds, num, 1)?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }
        if total_seconds == 0 {
            return Err("Duration must be longer than zero".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}
