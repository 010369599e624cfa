use acumen_core::models::Diagnostic;

/// Find the diagnostic band a completed score falls into.
///
/// Bands are checked in server list order — no sort is applied — and the
/// first structural match wins, so overlapping bands resolve to whichever
/// the server returned earlier. Both bounds are inclusive; a missing
/// bound is open toward ±∞. No match is an absence, not an error: the
/// score summary simply renders nothing.
pub fn match_diagnostic(score: f64, diagnostics: &[Diagnostic]) -> Option<&Diagnostic> {
    diagnostics.iter().find(|d| d.contains(score))
}
