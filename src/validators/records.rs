//! Card-copy lint over the venue record file.
//!
//! Scans the hand-authored card fields (hook, value line, tags) of every
//! record for banned words, excessive word repetition, empty fields, and a
//! venue name buried mid-sentence. Runs on the record file alone, before
//! any page is rendered.

use crate::config::AuditConfig;
use crate::model::{Finding, FindingKind, VenueRecord};
use crate::token;
use crate::validators::banned::scan_banned;
use std::collections::HashMap;

fn lint_field(
    record: &VenueRecord,
    field: &str,
    text: &str,
    check_repeats: bool,
    config: &AuditConfig,
    findings: &mut Vec<Finding>,
) {
    if text.is_empty() {
        findings.push(Finding::on_page(
            FindingKind::EmptyField,
            &record.slug,
            format!("{}.{field} is empty", record.name),
        ));
        return;
    }

    for (term, count) in scan_banned(text, &config.banned_words) {
        findings.push(Finding::on_page(
            FindingKind::BannedWord,
            &record.slug,
            format!("{}.{field} contains \"{term}\" x{count}", record.name),
        ));
    }

    if !check_repeats {
        return;
    }
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for word in token::tokenize(text) {
        if word.chars().count() < 2 {
            continue;
        }
        *freq.entry(word).or_insert(0) += 1;
    }
    let mut repeats: Vec<(&str, usize)> = freq
        .into_iter()
        .filter(|(_, count)| *count > config.record_repeat_max)
        .collect();
    repeats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (word, count) in repeats {
        findings.push(Finding::on_page(
            FindingKind::RepeatedWord,
            &record.slug,
            format!("{}.{field} repeats \"{word}\" x{count}", record.name),
        ));
    }
}

/// Lints every record's card copy and returns the findings.
pub fn lint_records(records: &[VenueRecord], config: &AuditConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    for record in records {
        let tags = record.card_tags.join(" ");
        lint_field(record, "card_hook", &record.card_hook, true, config, &mut findings);
        lint_field(record, "card_value", &record.card_value, true, config, &mut findings);
        lint_field(record, "card_tags", &tags, false, config, &mut findings);

        // Name present mid-copy reads like keyword stuffing; it must lead.
        for (field, text) in [
            ("card_hook", &record.card_hook),
            ("card_value", &record.card_value),
        ] {
            if !record.name.is_empty()
                && text.contains(&record.name)
                && !text.starts_with(&record.name)
            {
                findings.push(Finding::on_page(
                    FindingKind::NamePosition,
                    &record.slug,
                    format!("{}.{field}: store name not at sentence start", record.name),
                ));
            }
        }
    }

    findings
}
