#[cfg(windows)]
use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
#[cfg(windows)]
use winapi::um::handleapi::INVALID_HANDLE_VALUE;
#[cfg(windows)]
use winapi::um::processenv::GetStdHandle;
#[cfg(windows)]
use winapi::um::winbase::STD_OUTPUT_HANDLE;
#[cfg(windows)]
use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

// ===== Terminal Control =====

/// Initialize ANSI color support on Windows
#[cfg(windows)]
pub fn enable_ansi_support() {
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle != INVALID_HANDLE_VALUE {
            let mut mode = 0;
            if GetConsoleMode(handle, &mut mode) != 0 {
                SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING);
            }
        }
    }
}

/// Initialize ANSI color support (no-op on non-Windows platforms)
#[cfg(not(windows))]
pub fn enable_ansi_support() {}

/// Cross-platform color helper functions
pub mod colors {
    use colored::Colorize;

    pub fn red(text: &str) -> String {
        text.red().to_string()
    }

    pub fn green(text: &str) -> String {
        text.green().to_string()
    }

    pub fn yellow(text: &str) -> String {
        text.yellow().to_string()
    }

    pub fn blue(text: &str) -> String {
        text.blue().to_string()
    }

    pub fn gray(text: &str) -> String {
        text.bright_black().to_string()
    }

    pub fn bright_yellow(text: &str) -> String {
        text.bright_yellow().to_string()
    }
}

/// Helper functions for formatted indicators
pub fn failed_indicator() -> String {
    colors::red("✗")
}

pub fn success_indicator() -> String {
    colors::green("✓")
}

pub fn warning_indicator() -> String {
    colors::yellow("⚠")
}

/// Width of the separator under the report header
pub const SEPARATOR_WIDTH: usize = 50;

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
