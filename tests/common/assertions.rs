//! Shared assertions for color reports.

use kite::services::ColorReport;

/// Assert a report rendered the expected sRGB triple and matching hex
pub fn assert_rgb(report: &ColorReport, expected: [u8; 3]) {
    assert_eq!(
        report.rgb, expected,
        "Interval {} rendered {:?}, expected {:?}",
        report.input, report.rgb, expected
    );
    let hex = format!("#{:02x}{:02x}{:02x}", expected[0], expected[1], expected[2]);
    assert_eq!(report.hex, hex);
}

/// Assert a report is achromatic white
pub fn assert_white(report: &ColorReport) {
    assert_rgb(report, [255, 255, 255]);
    assert_eq!(report.oklch.c, 0.0);
    assert!(report.contributions.is_empty());
}

/// Assert the hue stored in the report lies in [0, 360)
pub fn assert_hue_in_range(report: &ColorReport) {
    assert!(
        (0.0..360.0).contains(&report.oklch.h),
        "Hue {} of {} out of range",
        report.oklch.h,
        report.input
    );
}
