use super::AnalysisReport;
use std::fmt::Write;

const RULE: &str = "============================================================";

/// Render the analysis and separation results as plain text.
///
/// `cleaned_file` is `None` when no row was moved and nothing was written.
pub fn render_report(
    analysis: &AnalysisReport,
    non_stopwords: &[String],
    moved_rows: usize,
    cleaned_file: Option<&str>,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, analysis, non_stopwords, moved_rows, cleaned_file);
    out
}

fn write_report(
    out: &mut String,
    analysis: &AnalysisReport,
    non_stopwords: &[String],
    moved_rows: usize,
    cleaned_file: Option<&str>,
) -> std::fmt::Result {
    let stats = &analysis.length_stats;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "STOPWORD ANALYSIS REPORT")?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "\nGENERAL STATISTICS:")?;
    writeln!(out, "   Unique words: {}", analysis.total_words)?;
    writeln!(out, "   Minimum word length: {}", stats.min)?;
    writeln!(out, "   Maximum word length: {}", stats.max)?;
    writeln!(out, "   Average word length: {:.2}", stats.avg)?;

    writeln!(out, "\nWORD LENGTH DISTRIBUTION:")?;
    for (length, count) in &stats.distribution {
        let percentage = *count as f64 / analysis.total_words.max(1) as f64 * 100.0;
        writeln!(out, "   {} chars: {} words ({:.1}%)", length, count, percentage)?;
    }

    writeln!(out, "\nSTOPWORD PATTERN MATCHES:")?;
    for pattern in analysis.pattern_matches.iter().filter(|p| p.count > 0) {
        writeln!(out, "   {}: {} words", pattern.category, pattern.count)?;
        let examples: Vec<&str> = pattern.examples.iter().take(5).map(String::as_str).collect();
        writeln!(out, "      e.g. {}", examples.join(", "))?;
    }

    writeln!(out, "\nNLTK ENGLISH STOPWORD MATCHES:")?;
    writeln!(out, "   {} words match NLTK stopwords", analysis.nltk_matches)?;

    writeln!(out, "\nNON-STOPWORD CANDIDATES:")?;
    if analysis.non_stopword_candidates.is_empty() {
        writeln!(out, "   None found")?;
    } else {
        writeln!(
            out,
            "   {} words may not be stopwords:",
            analysis.non_stopword_candidates.len()
        )?;
        for word in analysis.non_stopword_candidates.iter().take(10) {
            writeln!(out, "      - {}", word)?;
        }
    }

    writeln!(out, "\nSUSPICIOUS WORDS:")?;
    if analysis.suspicious_words.is_empty() {
        writeln!(out, "   None found")?;
    } else {
        writeln!(out, "   {} suspicious words:", analysis.suspicious_words.len())?;
        for word in analysis.suspicious_words.iter().take(10) {
            writeln!(out, "      - {}", word)?;
        }
    }

    writeln!(out, "\nCONCLUSION:")?;
    writeln!(out, "   Stopword percentage: {:.1}%", analysis.stopword_percentage)?;
    writeln!(out, "   Status: {}", analysis.grade.description())?;

    if !analysis.non_stopword_candidates.is_empty() || !analysis.suspicious_words.is_empty() {
        writeln!(out, "\nRECOMMENDATIONS:")?;
        writeln!(out, "   - Review the non-stopword candidates")?;
        writeln!(out, "   - Verify the suspicious words")?;
        writeln!(out, "   - Consider removing words that are not stopwords")?;
    }

    if !non_stopwords.is_empty() {
        writeln!(out, "\nNON-STOPWORDS FOUND ({} words):", non_stopwords.len())?;
        for (i, word) in non_stopwords.iter().take(20).enumerate() {
            writeln!(out, "   {:2}. {}", i + 1, word)?;
        }
        if non_stopwords.len() > 20 {
            writeln!(out, "   ... and {} more", non_stopwords.len() - 20)?;
        }
    }

    writeln!(out, "\nSEPARATION:")?;
    match cleaned_file {
        Some(cleaned_file) => {
            writeln!(out, "   - {} rows moved to non_stopwords.csv", moved_rows)?;
            writeln!(out, "   - Clean file saved as {}", cleaned_file)?;
        }
        None => writeln!(out, "   - No rows flagged, input left as is")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::analyze;

    #[test]
    fn test_report_sections() {
        let words: Vec<String> = ["the", "dan", "komputer"].iter().map(|w| w.to_string()).collect();
        let analysis = analyze(&words);
        let non_stopwords = vec!["komputer".to_string()];

        let report = render_report(&analysis, &non_stopwords, 1, Some("data/out_cleaned.csv"));

        assert!(report.contains("STOPWORD ANALYSIS REPORT"));
        assert!(report.contains("Unique words: 3"));
        assert!(report.contains("articles: 1 words"));
        assert!(report.contains("NON-STOPWORDS FOUND (1 words):"));
        assert!(report.contains("    1. komputer"));
        assert!(report.contains("1 rows moved to non_stopwords.csv"));
        assert!(report.contains("data/out_cleaned.csv"));
    }

    #[test]
    fn test_report_without_findings_has_no_recommendations() {
        let words: Vec<String> = ["the", "and"].iter().map(|w| w.to_string()).collect();
        let report = render_report(&analyze(&words), &[], 0, None);

        assert!(report.contains("Status: EXCELLENT"));
        assert!(!report.contains("RECOMMENDATIONS"));
        assert!(!report.contains("NON-STOPWORDS FOUND"));
        assert!(report.contains("No rows flagged"));
        assert!(!report.contains("non_stopwords.csv"));
    }
}
