use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("TEXTKIT_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Logs a debug message to stderr with optional formatted arguments.
///
/// Output goes to stderr so it never mixes with transformed text on stdout.
///
/// # Examples
///
/// ```
/// use std::env;
/// use textkit::debug;
///
/// env::set_var("TEXTKIT_DEBUG", "true");
///
/// debug!("Transform applied");
/// debug!("Transform {} took {} bytes", "rot13", 12);
///
/// env::remove_var("TEXTKIT_DEBUG");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
