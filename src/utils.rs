use std::process::Command;

/// Checks if a command exists and is executable.
///
/// # Arguments
/// * `cmd` - The command to check
///
/// # Returns
/// `true` if the command exists and is executable, `false` otherwise
pub fn command_exists(cmd: &str) -> bool {
    if cmd.trim().is_empty() {
        return false;
    }
    let finder = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };
    Command::new(finder)
        .arg(cmd)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Safely parses a string into a numeric type, clamping the value to the type bounds.
/// Non-numeric values return `None` so callers can fall back to their own default.
///
/// # Examples
///
/// ```
/// use textkit::utils::safe_parse;
///
/// assert_eq!(safe_parse::<u8>("255"), Some(255));
/// assert_eq!(safe_parse::<u8>("256"), Some(255)); // Clamped to u8::MAX
/// assert_eq!(safe_parse::<u8>("-1"), Some(0));    // Clamped to u8::MIN
/// assert_eq!(safe_parse::<u8>("abc"), None);
/// assert_eq!(safe_parse::<i8>("-129"), Some(-128)); // Clamped to i8::MIN
/// ```
pub fn safe_parse<T>(s: &str) -> Option<T>
where
    T: std::str::FromStr + std::cmp::PartialOrd + Copy + num::Bounded + num::Zero + std::fmt::Display,
{
    let s = s.trim();
    let val = match s.parse::<i64>() {
        Ok(val) => val,
        // Integers beyond the i64 range still clamp to the bounds of T
        Err(_) => {
            let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            return Some(if s.starts_with('-') {
                T::min_value()
            } else {
                T::max_value()
            });
        }
    };

    let max = T::max_value()
        .to_string()
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    let min = T::min_value()
        .to_string()
        .parse::<i64>()
        .unwrap_or(i64::MIN);

    if val < min {
        Some(T::min_value())
    } else if val > max {
        Some(T::max_value())
    } else {
        Some(s.parse::<T>().unwrap_or(T::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        if cfg!(windows) {
            assert!(command_exists("cmd"));
        } else {
            assert!(command_exists("ls"));
            assert!(command_exists("cat"));
        }

        assert!(!command_exists("this_command_should_not_exist_123456789"));
        assert!(!command_exists(""));
    }

    #[test]
    fn test_safe_parse() {
        assert_eq!(safe_parse::<u8>("0"), Some(0));
        assert_eq!(safe_parse::<u8>(" 42 "), Some(42));
        assert_eq!(safe_parse::<u8>("1000"), Some(u8::MAX));
        assert_eq!(safe_parse::<u8>("-5"), Some(0));
        assert_eq!(safe_parse::<i64>("-5"), Some(-5));
        assert_eq!(safe_parse::<i8>("127"), Some(127));
        assert_eq!(safe_parse::<i8>("128"), Some(127));
        assert_eq!(safe_parse::<u32>("3.5"), None);
        assert_eq!(safe_parse::<u32>(""), None);
        assert_eq!(safe_parse::<u32>("-"), None);
        assert_eq!(safe_parse::<u8>("99999999999999999999"), Some(u8::MAX));
        assert_eq!(safe_parse::<u8>("-99999999999999999999"), Some(0));
        assert_eq!(safe_parse::<i64>("99999999999999999999"), Some(i64::MAX));
        assert_eq!(safe_parse::<i64>("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(safe_parse::<i64>("99999999999999999999x"), None);
    }
}
