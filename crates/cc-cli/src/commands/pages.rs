use std::fmt::Write as _;

use cc_core::shell::{AppShell, Page};

/// Sidebar listing. The landing page is marked with `*`; disabled pages show
/// their badge instead of being selectable.
pub fn render() -> String {
    let shell = AppShell::new();
    let mut out = String::new();
    let _ = writeln!(out, "{:<3}{:<20}{:<20}", "", "PAGE", "ROUTE");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for page in Page::ALL {
        let marker = if page == shell.current_page() { "*" } else { "" };
        let _ = write!(out, "{marker:<3}{:<20}{:<20}", page.title(), page.route());
        if let Some(badge) = page.badge() {
            let _ = write!(out, "({badge})");
        }
        out.push('\n');
    }
    out
}
