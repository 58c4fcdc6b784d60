/// Embedded report page
pub const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");

/// Embedded CSS, inlined into the page's `<style>` block
pub const STYLES_CSS: &str = include_str!("../../templates/styles.css");
