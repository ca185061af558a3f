//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a skipped-post message.
pub fn print_skip(message: &str) {
    println!("{} {}", style("SKIP").dim().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Insta Downloader                                  ║
║     Download every post of an Instagram profile       ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).magenta());
}

/// Print run summary before downloading.
pub fn print_run_summary(profile: &str, post_count: Option<u64>, download_dir: &str) {
    println!();
    println!("{}", style("Download:").bold());
    println!("  Profile: {}", profile);
    if let Some(count) = post_count {
        println!("  Posts: {}", count);
    }
    println!("  Directory: {}", download_dir);
    println!();
}
