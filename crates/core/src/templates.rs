// crates/core/src/templates.rs
//! Narrative section templates.
//!
//! Each section of the profile analysis is a static template with
//! `{variable}` placeholders substituted at render time. Templates
//! support `{key:.0}` / `{key:.1}` / `{key:.2}` precision specifiers for
//! numeric values.

use std::collections::HashMap;

/// A template for one section of the narrative.
pub struct SectionTemplate {
    pub id: &'static str,
    pub body: &'static str,
}

/// All narrative sections, in render order. Sections are joined with a
/// blank line; conditional lines (name/bio/distribution) arrive as
/// pre-rendered variables so the section shape itself never changes.
pub static SECTIONS: &[SectionTemplate] = &[
    SectionTemplate {
        id: "header",
        body: "## \u{1f916} AI Profile Analysis: **{username}**",
    },
    SectionTemplate {
        id: "profile",
        body: "### \u{1f464} **Developer Profile**\n{name_line}\n{bio_line}\n**Account Age:** {account_age} year{age_plural} ({age_band})",
    },
    SectionTemplate {
        id: "expertise",
        body: "### \u{1f4ca} **Technical Expertise**\n**Primary Languages:** {tech_stack}\n{distribution_line}",
    },
    SectionTemplate {
        id: "portfolio",
        body: "### \u{1f680} **Project Portfolio**\n**Total Repositories:** {total_repos}\n**Total Stars:** {total_stars}\n**Average Stars/Repo:** {avg_stars:.1}\n**Most Popular Project:** \"{top_repo}\" ({top_repo_stars} \u{2b50})\n**Project Quality:** {quality_tier}",
    },
    SectionTemplate {
        id: "activity",
        body: "### \u{1f4c8} **Activity & Engagement**\n**Recent Activity:** {activity_tier} ({recent_count} repos updated in last 3 months)\n**Community Status:** {community_tier}\n**Followers:** {followers} | **Following:** {following}\n**Follower Ratio:** {follower_ratio:.1}:1",
    },
    SectionTemplate {
        id: "assessment",
        body: "### \u{1f3af} **AI Assessment**\nThis developer appears to be a **{influence_tier}** contributor with a **{activity_tier}** development pattern. Their {focus_phrase} suggests {skill_phrase}. The {star_level} star count indicates {impact_phrase}.",
    },
];

/// Look up a section template by ID.
pub fn get_section(id: &str) -> Option<&'static SectionTemplate> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Render a template string by substituting `{key}` placeholders with values.
///
/// Handles format specifiers like `{key:.0}`, `{key:.1}`, `{key:.2}`.
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        // Try plain replacement first
        let plain = format!("{{{}}}", key);
        if result.contains(&plain) {
            result = result.replace(&plain, value);
        }
        // Try format specifiers
        for precision in 0..=2 {
            let pattern = format!("{{{key}:.{precision}}}");
            if result.contains(&pattern) {
                let formatted = if let Ok(f) = value.parse::<f64>() {
                    match precision {
                        0 => format!("{:.0}", f),
                        1 => format!("{:.1}", f),
                        _ => format!("{:.2}", f),
                    }
                } else {
                    value.clone()
                };
                result = result.replace(&pattern, &formatted);
            }
        }
    }
    result
}

/// Format an integer with comma thousands separators ("1234567" → "1,234,567").
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_template_simple() {
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "world".to_string());
        assert_eq!(render_template("Hello, {name}!", &vars), "Hello, world!");
    }

    #[test]
    fn test_render_template_repeated_var() {
        let mut vars = HashMap::new();
        vars.insert("tier".to_string(), "very active".to_string());
        assert_eq!(
            render_template("{tier} profile with a {tier} pattern", &vars),
            "very active profile with a very active pattern"
        );
    }

    #[test]
    fn test_render_template_format_specifier() {
        let mut vars = HashMap::new();
        vars.insert("value".to_string(), "3.14159".to_string());
        assert_eq!(render_template("{value:.0}", &vars), "3");
        assert_eq!(render_template("{value:.1}", &vars), "3.1");
        assert_eq!(render_template("{value:.2}", &vars), "3.14");
    }

    #[test]
    fn test_render_template_integer_gains_precision() {
        // "16" rendered at .1 precision becomes "16.0".
        let mut vars = HashMap::new();
        vars.insert("avg".to_string(), "16".to_string());
        assert_eq!(render_template("{avg:.1}", &vars), "16.0");
    }

    #[test]
    fn test_render_template_missing_var() {
        let vars = HashMap::new();
        assert_eq!(render_template("Hello, {name}!", &vars), "Hello, {name}!");
    }

    #[test]
    fn test_get_section_exists() {
        assert!(get_section("header").is_some());
        assert!(get_section("assessment").is_some());
        assert!(get_section("nonexistent").is_none());
    }

    #[test]
    fn test_all_sections_have_bodies() {
        for s in SECTIONS {
            assert!(!s.body.is_empty(), "Section {} has empty body", s.id);
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(48_512), "48,512");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
