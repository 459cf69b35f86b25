use model::quality::QualityReport;
use std::fmt::Write;

/// Render the quality counters as a plain-text report, one section per
/// entity in the fixed customers, products, sales order.
pub fn render(report: &QualityReport) -> String {
    let mut out = String::new();
    for (entity, stats) in report.entries() {
        let header = entity.to_string().to_uppercase();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{header} DATA");
        let _ = writeln!(out, "processed: {}", stats.processed);
        let _ = writeln!(out, "duplicates: {}", stats.duplicates);
        let _ = writeln!(out, "missing: {}", stats.missing);
        let _ = writeln!(out, "loaded: {}", stats.loaded);
        out.push('\n');
    }
    out
}
