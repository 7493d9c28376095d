//! Output formatters for console, JSON and Markdown presentation

use crate::config::OutputFormat;
use crate::error::{JobMatcherError, Result};
use crate::matching::JobMatch;
use crate::output::report::RecommendationReport;
use crate::recommendation::{
    JobRecommendation, RecommendationInsights, RecommendationTier, ScenarioViews,
};
use colored::{Color, Colorize};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Trait for rendering engine output
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    /// Insights and scenario views only
    fn format_insights(&self, report: &RecommendationReport) -> Result<String>;
    /// Per-dimension breakdown of a single match
    fn format_match(&self, job_match: &JobMatch) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

fn salary_text(rec: &JobRecommendation) -> Option<String> {
    rec.job()
        .salary_range()
        .map(|range| format!("${:.0} - ${:.0}", range.min, range.max))
}

fn location_text(rec: &JobRecommendation) -> String {
    let job = rec.job();
    match (job.location(), job.remote) {
        (Some(location), true) => format!("{} (remote)", location),
        (Some(location), false) => location.to_string(),
        (None, true) => "Remote".to_string(),
        (None, false) => "Location not listed".to_string(),
    }
}

fn write_line(out: &mut String, line: impl AsRef<str>) -> Result<()> {
    writeln!(out, "{}", line.as_ref())
        .map_err(|e| JobMatcherError::OutputFormatting(e.to_string()))
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}", prefix, title)
        }
    }

    fn format_tier_badge(&self, tier: RecommendationTier) -> String {
        let color = match tier {
            RecommendationTier::PerfectMatch => Color::Green,
            RecommendationTier::GoodMatch => Color::BrightGreen,
            RecommendationTier::Explore => Color::Yellow,
            RecommendationTier::Stretch => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", tier.label().color(color).bold())
        } else {
            format!("[{}]", tier.label())
        }
    }

    fn format_recommendation(
        &self,
        out: &mut String,
        rank: usize,
        rec: &JobRecommendation,
    ) -> Result<()> {
        let job = rec.job();
        write_line(
            out,
            format!(
                "{:>2}. {} at {} {}",
                rank,
                self.colorize(&job.title, Color::Cyan),
                job.company,
                self.format_tier_badge(rec.tier)
            ),
        )?;
        write_line(
            out,
            format!(
                "    Fit {}% | Confidence {}% | Priority {:.2} | {}",
                percent(rec.match_score()),
                percent(rec.confidence()),
                rec.priority,
                rec.apply_window
            ),
        )?;
        let mut facts = vec![location_text(rec)];
        if let Some(salary) = salary_text(rec) {
            facts.push(salary);
        }
        write_line(out, format!("    {}", facts.join(" | ")))?;
        if !rec.tags.is_empty() {
            write_line(
                out,
                format!("    Tags: {}", self.colorize(&rec.tags.join(", "), Color::Magenta)),
            )?;
        }

        if self.detailed {
            for reason in &rec.job_match.reasons {
                write_line(out, format!("    {} {}", self.colorize("+", Color::Green), reason))?;
            }
            for improvement in &rec.job_match.improvements {
                write_line(
                    out,
                    format!("    {} {}", self.colorize("-", Color::Yellow), improvement),
                )?;
            }
            write_line(
                out,
                format!(
                    "    Estimated response rate: {}%",
                    percent(rec.estimated_response_rate)
                ),
            )?;
        }
        Ok(())
    }

    fn format_insights_section(
        &self,
        out: &mut String,
        insights: &RecommendationInsights,
    ) -> Result<()> {
        write_line(out, self.format_header("Insights", 2))?;
        write_line(
            out,
            format!(
                "Recommendations: {} | Average fit: {}% | Remote: {:.0}%",
                insights.total,
                percent(insights.average_match_score),
                insights.remote_percentage
            ),
        )?;
        let tiers = &insights.tier_counts;
        write_line(
            out,
            format!(
                "Tiers: {} perfect, {} good, {} explore, {} stretch",
                tiers.perfect_match, tiers.good_match, tiers.explore, tiers.stretch
            ),
        )?;

        let lists = [
            ("Top skills", &insights.top_skills),
            ("Top industries", &insights.top_industries),
            ("Top locations", &insights.top_locations),
        ];
        for (label, items) in lists {
            if items.is_empty() {
                continue;
            }
            let joined: Vec<String> = items
                .iter()
                .map(|item| format!("{} ({})", item.name, item.count))
                .collect();
            write_line(out, format!("{}: {}", label, joined.join(", ")))?;
        }

        if insights.salary.jobs_with_salary > 0 {
            write_line(
                out,
                format!(
                    "Salary: avg ${:.0}, range ${:.0} - ${:.0} across {} postings",
                    insights.salary.average,
                    insights.salary.min,
                    insights.salary.max,
                    insights.salary.jobs_with_salary
                ),
            )?;
        }
        Ok(())
    }

    fn format_scenarios_section(&self, out: &mut String, views: &ScenarioViews) -> Result<()> {
        write_line(out, self.format_header("Scenarios", 2))?;
        let sections = [
            ("Quick wins", &views.quick_wins),
            ("Career growth", &views.career_growth),
            ("Salary boost", &views.salary_boost),
            ("Remote work", &views.remote_work),
        ];
        for (label, recs) in sections {
            write_line(out, self.format_header(label, 3))?;
            if recs.is_empty() {
                write_line(out, "  (none)")?;
            }
            for rec in recs {
                write_line(
                    out,
                    format!(
                        "  • {} at {} ({}%)",
                        rec.job().title,
                        rec.job().company,
                        percent(rec.match_score())
                    ),
                )?;
            }
        }
        Ok(())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = String::new();

        write_line(
            &mut out,
            self.format_header(&format!("JOB RECOMMENDATIONS FOR {}", report.profile_name), 1),
        )?;
        write_line(
            &mut out,
            format!(
                "Generated: {} | {} of {} jobs | Processing time: {}ms",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.jobs_returned,
                report.metadata.jobs_considered,
                report.metadata.processing_time_ms
            ),
        )?;

        write_line(&mut out, self.format_header("Recommendations", 2))?;
        if report.is_empty() {
            write_line(
                &mut out,
                self.colorize(
                    "No jobs cleared the current thresholds. \
                     Try lowering --min-score or --min-confidence.",
                    Color::Yellow,
                ),
            )?;
        }
        for (idx, rec) in report.recommendations.iter().enumerate() {
            self.format_recommendation(&mut out, idx + 1, rec)?;
        }

        self.format_insights_section(&mut out, &report.insights)?;
        if self.detailed {
            self.format_scenarios_section(&mut out, &report.scenarios)?;
        }
        Ok(out)
    }

    fn format_insights(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = String::new();
        self.format_insights_section(&mut out, &report.insights)?;
        self.format_scenarios_section(&mut out, &report.scenarios)?;
        Ok(out)
    }

    fn format_match(&self, job_match: &JobMatch) -> Result<String> {
        let mut out = String::new();
        let job = &job_match.job;
        write_line(
            &mut out,
            self.format_header(&format!("{} at {}", job.title, job.company), 1),
        )?;
        write_line(
            &mut out,
            format!(
                "Fit {}% | Confidence {}% | Tier {}",
                percent(job_match.match_score),
                percent(job_match.confidence),
                self.format_tier_badge(RecommendationTier::classify(
                    job_match.match_score,
                    job_match.confidence
                ))
            ),
        )?;

        write_line(&mut out, self.format_header("Score Breakdown", 2))?;
        let scores = &job_match.scores;
        for (label, score) in [
            ("Skills", scores.skills),
            ("Experience", scores.experience),
            ("Location", scores.location),
            ("Salary", scores.salary),
            ("Education", scores.education),
            ("Industry", scores.industry),
        ] {
            write_line(&mut out, format!("  {:<11} {:>3}%", label, percent(score)))?;
        }

        if !job_match.matched_skills.is_empty() {
            write_line(
                &mut out,
                format!(
                    "Matched skills: {}",
                    self.colorize(&job_match.matched_skills.join(", "), Color::Green)
                ),
            )?;
        }
        if !job_match.missing_skills.is_empty() {
            write_line(
                &mut out,
                format!(
                    "Missing skills: {}",
                    self.colorize(&job_match.missing_skills.join(", "), Color::Red)
                ),
            )?;
        }

        write_line(&mut out, self.format_header("Why it fits", 2))?;
        for reason in &job_match.reasons {
            write_line(&mut out, format!("  • {}", reason))?;
        }
        if !job_match.improvements.is_empty() {
            write_line(&mut out, self.format_header("To improve", 2))?;
            for improvement in &job_match.improvements {
                write_line(&mut out, format!("  • {}", improvement))?;
            }
        }
        Ok(out)
    }
}

#[derive(Serialize)]
struct InsightsView<'a> {
    insights: &'a RecommendationInsights,
    scenarios: &'a ScenarioViews,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        self.render(report)
    }

    fn format_insights(&self, report: &RecommendationReport) -> Result<String> {
        self.render(&InsightsView {
            insights: &report.insights,
            scenarios: &report.scenarios,
        })
    }

    fn format_match(&self, job_match: &JobMatch) -> Result<String> {
        self.render(job_match)
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn insights_markdown(out: &mut String, insights: &RecommendationInsights) -> Result<()> {
        write_line(out, "## Insights\n")?;
        write_line(out, "| Metric | Value |")?;
        write_line(out, "|--------|-------|")?;
        write_line(out, format!("| Recommendations | {} |", insights.total))?;
        write_line(
            out,
            format!("| Average fit | {}% |", percent(insights.average_match_score)),
        )?;
        write_line(out, format!("| Remote | {:.0}% |", insights.remote_percentage))?;
        let tiers = &insights.tier_counts;
        write_line(
            out,
            format!(
                "| Tiers | {} perfect / {} good / {} explore / {} stretch |",
                tiers.perfect_match, tiers.good_match, tiers.explore, tiers.stretch
            ),
        )?;
        if insights.salary.jobs_with_salary > 0 {
            write_line(
                out,
                format!(
                    "| Salary | avg ${:.0} (${:.0} - ${:.0}) |",
                    insights.salary.average, insights.salary.min, insights.salary.max
                ),
            )?;
        }
        write_line(out, "")?;

        for (label, items) in [
            ("Top skills", &insights.top_skills),
            ("Top industries", &insights.top_industries),
            ("Top locations", &insights.top_locations),
        ] {
            if items.is_empty() {
                continue;
            }
            let joined: Vec<String> = items
                .iter()
                .map(|item| format!("{} ({})", item.name, item.count))
                .collect();
            write_line(out, format!("**{}:** {}\n", label, joined.join(", ")))?;
        }
        Ok(())
    }

    fn scenarios_markdown(out: &mut String, views: &ScenarioViews) -> Result<()> {
        write_line(out, "## Scenarios\n")?;
        for (label, recs) in [
            ("Quick wins", &views.quick_wins),
            ("Career growth", &views.career_growth),
            ("Salary boost", &views.salary_boost),
            ("Remote work", &views.remote_work),
        ] {
            write_line(out, format!("### {}\n", label))?;
            if recs.is_empty() {
                write_line(out, "_None_\n")?;
                continue;
            }
            for rec in recs {
                write_line(
                    out,
                    format!(
                        "- **{}** at {} ({}%)",
                        rec.job().title,
                        rec.job().company,
                        percent(rec.match_score())
                    ),
                )?;
            }
            write_line(out, "")?;
        }
        Ok(())
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = String::new();
        write_line(&mut out, format!("# Job Recommendations for {}\n", report.profile_name))?;

        if self.include_metadata {
            write_line(
                &mut out,
                format!(
                    "**Generated:** {} | **Jobs considered:** {} | **Processing Time:** {}ms\n",
                    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    report.metadata.jobs_considered,
                    report.metadata.processing_time_ms
                ),
            )?;
        }

        write_line(&mut out, "## Recommendations\n")?;
        if report.is_empty() {
            write_line(&mut out, "_No jobs cleared the current thresholds._\n")?;
        } else {
            write_line(&mut out, "| # | Role | Company | Tier | Fit | Confidence | Apply |")?;
            write_line(&mut out, "|---|------|---------|------|-----|------------|-------|")?;
            for (idx, rec) in report.recommendations.iter().enumerate() {
                write_line(
                    &mut out,
                    format!(
                        "| {} | {} | {} | {} | {}% | {}% | {} |",
                        idx + 1,
                        rec.job().title,
                        rec.job().company,
                        rec.tier,
                        percent(rec.match_score()),
                        percent(rec.confidence()),
                        rec.apply_window
                    ),
                )?;
            }
            write_line(&mut out, "")?;

            for (idx, rec) in report.recommendations.iter().enumerate() {
                write_line(
                    &mut out,
                    format!("### {}. {} at {}\n", idx + 1, rec.job().title, rec.job().company),
                )?;
                let mut facts = vec![location_text(rec)];
                if let Some(salary) = salary_text(rec) {
                    facts.push(salary);
                }
                if !rec.tags.is_empty() {
                    facts.push(format!("Tags: {}", rec.tags.join(", ")));
                }
                write_line(&mut out, format!("{}\n", facts.join(" · ")))?;
                for reason in &rec.job_match.reasons {
                    write_line(&mut out, format!("- ✅ {}", reason))?;
                }
                for improvement in &rec.job_match.improvements {
                    write_line(&mut out, format!("- 💡 {}", improvement))?;
                }
                write_line(&mut out, "")?;
            }
        }

        Self::insights_markdown(&mut out, &report.insights)?;
        Self::scenarios_markdown(&mut out, &report.scenarios)?;
        Ok(out)
    }

    fn format_insights(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = String::new();
        Self::insights_markdown(&mut out, &report.insights)?;
        Self::scenarios_markdown(&mut out, &report.scenarios)?;
        Ok(out)
    }

    fn format_match(&self, job_match: &JobMatch) -> Result<String> {
        let mut out = String::new();
        let job = &job_match.job;
        write_line(&mut out, format!("# {} at {}\n", job.title, job.company))?;
        write_line(
            &mut out,
            format!(
                "**Fit:** {}% | **Confidence:** {}%\n",
                percent(job_match.match_score),
                percent(job_match.confidence)
            ),
        )?;
        write_line(&mut out, "| Dimension | Score |")?;
        write_line(&mut out, "|-----------|-------|")?;
        let scores = &job_match.scores;
        for (label, score) in [
            ("Skills", scores.skills),
            ("Experience", scores.experience),
            ("Location", scores.location),
            ("Salary", scores.salary),
            ("Education", scores.education),
            ("Industry", scores.industry),
        ] {
            write_line(&mut out, format!("| {} | {}% |", label, percent(score)))?;
        }
        write_line(&mut out, "")?;
        for reason in &job_match.reasons {
            write_line(&mut out, format!("- ✅ {}", reason))?;
        }
        for improvement in &job_match.improvements {
            write_line(&mut out, format!("- 💡 {}", improvement))?;
        }
        Ok(out)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: &OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(
        &self,
        report: &RecommendationReport,
        format: &OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_insights(
        &self,
        report: &RecommendationReport,
        format: &OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_insights(report)
    }

    pub fn generate_match(&self, job_match: &JobMatch, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_match(job_match)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Where `--save` output lands: a directory gets a generated file name,
/// anything else is used as given.
pub fn resolve_save_path(target: &Path, format: &OutputFormat, profile_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, profile_name, true))
    } else {
        target.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, profile_name: &str, timestamp: bool) -> String {
    let base_name: String = profile_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let base_name = if base_name.is_empty() { "profile".to_string() } else { base_name };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_recommendations{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_recommendations{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_recommendations{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, MatchingCriteria, SalaryRange};
    use crate::recommendation::Recommender;
    use chrono::{TimeZone, Utc};

    fn sample_report() -> RecommendationReport {
        let mut job = Job::new("go-1", "Backend Engineer", "Initech");
        job.remote = true;
        job.required_skills = vec!["Go".into(), "SQL".into()];
        job.experience_required = Some(3.0);
        job.salary_min = Some(100_000.0);
        job.salary_max = Some(130_000.0);

        let criteria = MatchingCriteria {
            skills: vec!["go".into(), "sql".into(), "python".into()],
            years_experience: Some(3.0),
            salary_range: Some(SalaryRange::new(110_000.0, 140_000.0)),
            remote_ok: true,
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let recs = Recommender::default()
            .recommend_at(&[job], &criteria, now)
            .unwrap();
        RecommendationReport::new_at("Ada Lovelace", recs, &criteria, 1, 5, now)
    }

    #[test]
    fn test_console_without_colors() {
        let report = sample_report();
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();
        assert!(output.contains("JOB RECOMMENDATIONS FOR Ada Lovelace"));
        assert!(output.contains("Backend Engineer at Initech"));
        assert!(output.contains("$100000 - $130000"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_report_parses_back() {
        let report = sample_report();
        let output = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["profile_name"], "Ada Lovelace");
        assert_eq!(value["recommendations"][0]["job_match"]["job"]["id"], "go-1");
    }

    #[test]
    fn test_markdown_sections() {
        let report = sample_report();
        let output = MarkdownFormatter::new(true).format_report(&report).unwrap();
        assert!(output.starts_with("# Job Recommendations for Ada Lovelace"));
        assert!(output.contains("## Insights"));
        assert!(output.contains("### Remote work"));
        assert!(output.contains("**Generated:** 2024-05-01 12:00:00 UTC"));
    }

    #[test]
    fn test_match_breakdown() {
        let report = sample_report();
        let job_match = &report.recommendations[0].job_match;
        let output = ConsoleFormatter::new(false, false).format_match(job_match).unwrap();
        assert!(output.contains("Skills"));
        assert!(output.contains("Fit 9"));
    }

    #[test]
    fn test_empty_report_mentions_thresholds() {
        let report =
            RecommendationReport::new("Ada", Vec::new(), &MatchingCriteria::default(), 3, 0);
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains("No jobs cleared the current thresholds"));
    }

    #[test]
    fn test_generator_dispatch() {
        let report = sample_report();
        let generator = ReportGenerator::with_options(false, false, true, false);
        let json = generator.generate_insights(&report, &OutputFormat::Json).unwrap();
        assert!(json.contains("\"quick_wins\""));
        let markdown = generator
            .generate_report(&report, &OutputFormat::Markdown)
            .unwrap();
        assert!(markdown.starts_with("# "));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "Ada Lovelace", false),
            "ada_lovelace_recommendations.md"
        );
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "  ", false),
            "profile_recommendations.json"
        );
    }

    #[test]
    fn test_save_path_for_directory_gets_generated_name() {
        let dir = tempfile::tempdir().unwrap();

        let path = resolve_save_path(dir.path(), &OutputFormat::Json, "Ada Lovelace");
        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("ada_lovelace_recommendations_"));
        assert!(name.ends_with(".json"));

        let explicit = dir.path().join("mine.md");
        assert_eq!(
            resolve_save_path(&explicit, &OutputFormat::Json, "Ada Lovelace"),
            explicit
        );
    }
}
